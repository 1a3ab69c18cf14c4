pub mod errors;

pub use errors::{NociError, NociErrorCategory, ScanResult};

/// Immutable scan-wide configuration, shared read-only by every extractor
/// and the report formatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanSettings {
    /// States with an oscillator strength strictly below this value are
    /// omitted from the report.
    pub oscillator_threshold: f64,
    /// Weights must strictly exceed this value to be printed; also drives
    /// the weight column precision.
    pub weight_threshold: f64,
    /// How many trailing singular values to print per determinant row.
    pub singular_value_count: usize,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            oscillator_threshold: 0.0,
            weight_threshold: 0.01,
            singular_value_count: 3,
        }
    }
}
