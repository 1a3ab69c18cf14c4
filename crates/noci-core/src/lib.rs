//! Extraction pipeline and report formatting for NOCI calculation output.
//!
//! The input is the loosely formatted text log written by an external
//! quantum-chemistry program. Four sequential passes over the same source
//! collect the determinant list, the orbital singular values, the
//! Chirgwin-Coulson weight matrix, and the per-state energy table; the
//! report module renders the populated state set as a filtered summary.

pub mod domain;
pub mod extract;
pub mod report;
pub mod state;

pub use domain::{NociError, NociErrorCategory, ScanResult, ScanSettings};
pub use extract::{read_report_source, scan_report};
pub use report::render_report;
pub use state::{NociState, NociStateSet};
