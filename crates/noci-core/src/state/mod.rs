//! Per-state records and the aggregator that owns the shared scan context.

use crate::domain::ScanSettings;

/// One electronic state, in declaration order matching the determinant
/// list. Fields default to zero until the corresponding extractor runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NociState {
    pub energy: f64,
    pub frequency: f64,
    pub oscillator_strength: f64,
    /// Index-aligned with the determinant list: `weights[i]` is this
    /// state's Chirgwin-Coulson weight on determinant i.
    pub weights: Vec<f64>,
}

/// Owns the state records together with the context shared by all of them:
/// determinant names, the singular-value store, and the scan settings.
/// Records carry plain data and refer to the shared tables by index, so
/// nothing is duplicated per state.
#[derive(Debug, Clone)]
pub struct NociStateSet {
    det_names: Vec<String>,
    singular_values: Vec<Vec<f64>>,
    states: Vec<NociState>,
    settings: ScanSettings,
}

impl NociStateSet {
    /// Allocates one state record and one (empty) singular-value row per
    /// determinant. All records are created together once the determinant
    /// count is known; the extractors fill them in afterwards.
    pub fn with_determinants(det_names: Vec<String>, settings: ScanSettings) -> Self {
        let count = det_names.len();
        Self {
            det_names,
            singular_values: vec![Vec::new(); count],
            states: vec![NociState::default(); count],
            settings,
        }
    }

    pub fn determinant_count(&self) -> usize {
        self.det_names.len()
    }

    pub fn det_names(&self) -> &[String] {
        &self.det_names
    }

    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    pub fn singular_values(&self) -> &[Vec<f64>] {
        &self.singular_values
    }

    pub fn singular_values_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.singular_values
    }

    pub fn states(&self) -> &[NociState] {
        &self.states
    }

    pub fn states_mut(&mut self) -> &mut [NociState] {
        &mut self.states
    }

    /// Hands matrix column i to state i. The matrix reader already stores
    /// the text's transposed layout column-major, so `matrix[i]` is the
    /// weight vector of state i.
    pub fn assign_weight_columns(&mut self, matrix: Vec<Vec<f64>>) {
        for (state, column) in self.states.iter_mut().zip(matrix) {
            state.weights = column;
        }
    }
}
