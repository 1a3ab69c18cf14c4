//! The multi-pass extraction pipeline.
//!
//! Each extractor is a full scan of the same source text, written as an
//! explicit loop over `source.lines()` with a small phase state. The input
//! is read into a `String` once; iterating `lines()` afresh per pass is the
//! rewind-and-rescan contract. Passes run strictly in the order
//! determinants, singular values, weights, energies.

pub mod dets;
pub mod energy;
pub mod matrix;
pub mod singular;
pub mod weights;

use crate::domain::{NociError, ScanResult, ScanSettings};
use crate::state::NociStateSet;
use std::fs;
use std::path::Path;

pub fn read_report_source(path: &Path) -> ScanResult<String> {
    fs::read_to_string(path).map_err(|source| {
        NociError::io_system(
            "IO.REPORT_READ",
            format!("failed to read NOCI output '{}': {}", path.display(), source),
        )
    })
}

/// Runs the whole pipeline over one source. Later passes assume earlier
/// passes have fully completed; a failed pass aborts the run with no
/// partial result.
pub fn scan_report(source: &str, settings: ScanSettings) -> ScanResult<NociStateSet> {
    let det_names = dets::parse_det_names(source)?;
    let mut set = NociStateSet::with_determinants(det_names, settings);

    singular::parse_singular_values(source, set.singular_values_mut())?;

    let matrix = weights::parse_weight_matrix(source, set.determinant_count())?;
    set.assign_weight_columns(matrix);

    energy::parse_energy_table(source, set.states_mut())?;
    Ok(set)
}

/// Every whitespace-separated token on the line that parses as f64, in
/// reading order.
pub(crate) fn float_tokens(line: &str) -> Vec<f64> {
    line.split_whitespace()
        .filter_map(|token| token.parse::<f64>().ok())
        .collect()
}

/// A section-boundary rule: the trimmed line is a run of ten or more of
/// one character (`=` closes the determinant list, `-` closes a matrix).
pub(crate) fn is_rule_line(line: &str, rule: char) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 10 && trimmed.chars().all(|character| character == rule)
}

#[cfg(test)]
mod tests {
    use super::{float_tokens, is_rule_line, read_report_source, scan_report};
    use crate::domain::{NociErrorCategory, ScanSettings};
    use std::fs;
    use tempfile::TempDir;

    const WELL_FORMED_REPORT: &str = "\
 Preamble chatter from the host program
 dets:
D1.det
D2.det
==========
Element: 1 1
 Orbital Singular Values:
    0.50000 0.50000
 Determinant of U = 1.000
Element: 2 1
 Orbital Singular Values:
    0.90000
    0.10000
 Determinant of U = 0.998
 Chirgwin-Coulson Weights:
 ----------
      1      2
  1   8.0e-01  3.0e-01
  2   2.0e-01  7.0e-01
 ----------
 NOCI Energies (Eh), Frequencies, Oscillator Strengths
   -1.0   0.5   0.05
   -0.9   0.6   0.2
";

    #[test]
    fn pipeline_populates_every_field_group() {
        let set = scan_report(WELL_FORMED_REPORT, ScanSettings::default())
            .expect("well-formed report should scan");

        assert_eq!(set.det_names(), ["D1.det", "D2.det"]);
        assert!(set.singular_values()[0].is_empty());
        assert_eq!(set.singular_values()[1], vec![0.9, 0.1]);
        assert_eq!(set.states()[0].weights, vec![0.8, 0.2]);
        assert_eq!(set.states()[1].weights, vec![0.3, 0.7]);
        assert_eq!(set.states()[0].energy, -1.0);
        assert_eq!(set.states()[1].frequency, 0.6);
        assert_eq!(set.states()[1].oscillator_strength, 0.2);
    }

    #[test]
    fn pipeline_fails_fast_when_the_determinant_list_is_missing() {
        let source = WELL_FORMED_REPORT.replace("dets:", "determinants");
        let error = scan_report(&source, ScanSettings::default())
            .expect_err("missing determinant list should abort the scan");
        assert_eq!(error.category(), NociErrorCategory::MissingSectionError);
        assert_eq!(error.placeholder(), "SCAN.DETS_MARKER");
    }

    #[test]
    fn float_tokens_keep_reading_order_and_skip_labels() {
        assert_eq!(float_tokens("  0.9  0.1 "), vec![0.9, 0.1]);
        assert_eq!(float_tokens("eigenvalue 1.5e-01"), vec![0.15]);
        assert!(float_tokens("no numbers here").is_empty());
    }

    #[test]
    fn rule_lines_require_ten_characters_of_the_same_kind() {
        assert!(is_rule_line("==========", '='));
        assert!(is_rule_line("   ------------   ", '-'));
        assert!(!is_rule_line("=========", '='));
        assert!(!is_rule_line("=====-----", '='));
    }

    #[test]
    fn report_source_read_failure_is_an_io_error() {
        let temp = TempDir::new().expect("tempdir should be created");
        let missing = temp.path().join("absent.out");
        let error = read_report_source(&missing).expect_err("missing file should fail");
        assert_eq!(error.category(), NociErrorCategory::IoSystemError);
        assert_eq!(error.placeholder(), "IO.REPORT_READ");
    }

    #[test]
    fn report_source_round_trips_through_the_filesystem() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("noci.out");
        fs::write(&path, WELL_FORMED_REPORT).expect("fixture should be staged");

        let source = read_report_source(&path).expect("staged file should read");
        let set = scan_report(&source, ScanSettings::default()).expect("scan should succeed");
        assert_eq!(set.determinant_count(), 2);
    }
}
