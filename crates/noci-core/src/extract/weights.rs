use super::matrix::read_square_matrix;
use crate::domain::{NociError, ScanResult};
use tracing::debug;

/// Locates the Chirgwin-Coulson weights section and reads the matrix that
/// follows it. The line after the heading is a separator and is discarded.
/// The first section found wins; anything after it is left unread.
pub fn parse_weight_matrix(source: &str, dimension: usize) -> ScanResult<Vec<Vec<f64>>> {
    debug!("scanning for Chirgwin-Coulson weights");

    let mut lines = source.lines();
    while let Some(line) = lines.next() {
        if line.trim().eq_ignore_ascii_case("chirgwin-coulson weights:") {
            debug!("found Chirgwin-Coulson weights");
            lines.next();
            return read_square_matrix(&mut lines, dimension);
        }
    }

    Err(NociError::missing_section(
        "SCAN.WEIGHTS_HEADER",
        "'Chirgwin-Coulson Weights:' section was never found",
    ))
}
