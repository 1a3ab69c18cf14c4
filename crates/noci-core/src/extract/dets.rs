use super::is_rule_line;
use crate::domain::{NociError, ScanResult};
use tracing::debug;

enum ScanPhase {
    Seeking,
    InBlock,
}

/// Collects the ordered determinant list: every line after the `dets:`
/// marker, verbatim, until a run of `=` closes the block. The returned
/// order defines canonical determinant indexing for every other pass.
pub fn parse_det_names(source: &str) -> ScanResult<Vec<String>> {
    debug!("scanning for determinant list");

    let mut phase = ScanPhase::Seeking;
    let mut names = Vec::new();
    for line in source.lines() {
        match phase {
            ScanPhase::Seeking => {
                if line.to_ascii_lowercase().contains("dets:") {
                    phase = ScanPhase::InBlock;
                }
            }
            ScanPhase::InBlock => {
                if is_rule_line(line, '=') {
                    debug!(count = names.len(), "found determinant list");
                    return Ok(names);
                }
                names.push(line.to_string());
            }
        }
    }

    match phase {
        ScanPhase::InBlock => {
            debug!(count = names.len(), "determinant list ran to end of input");
            Ok(names)
        }
        ScanPhase::Seeking => Err(NociError::missing_section(
            "SCAN.DETS_MARKER",
            "determinant list ('dets:') was never found",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_det_names;
    use crate::domain::NociErrorCategory;

    #[test]
    fn names_are_collected_in_order_and_kept_verbatim() {
        let source = "header\nDets:\n  spaced.det\nplain.det\n==========\ntrailing\n";
        let names = parse_det_names(source).expect("list should be found");
        assert_eq!(names, ["  spaced.det", "plain.det"]);
    }

    #[test]
    fn marker_match_is_case_insensitive_and_mid_line() {
        let source = "run label DETS: follows\nonly.det\n============\n";
        let names = parse_det_names(source).expect("list should be found");
        assert_eq!(names, ["only.det"]);
    }

    #[test]
    fn short_equals_runs_do_not_close_the_block() {
        let source = "dets:\na.det\n=========\nb.det\n==========\n";
        let names = parse_det_names(source).expect("list should be found");
        assert_eq!(names, ["a.det", "=========", "b.det"]);
    }

    #[test]
    fn end_of_input_closes_an_open_block() {
        let names = parse_det_names("dets:\nlast.det\n").expect("list should be found");
        assert_eq!(names, ["last.det"]);
    }

    #[test]
    fn absent_marker_is_a_missing_section() {
        let error = parse_det_names("no marker here\n").expect_err("scan should fail");
        assert_eq!(error.category(), NociErrorCategory::MissingSectionError);
        assert_eq!(error.placeholder(), "SCAN.DETS_MARKER");
    }
}
