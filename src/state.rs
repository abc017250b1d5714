/// Persistent buffers reused across triggers to avoid per-step allocations.
///
/// Layout invariants, fixed at construction:
/// - `features.len() == nx * m`, feature-major (entry `(j, i)` at `j*m + i`)
/// - `targets.len() == m`
/// - `weights.len() == nx`
/// - `predictions.len() == m`, `grads.len() == nx` (scratch)
#[derive(Debug)]
pub(crate) struct RegressorState {
    pub features: Vec<f64>,
    pub targets: Vec<f64>,
    pub weights: Vec<f64>,
    pub bias: f64,

    /// Forward-pass scratch, overwritten on every trigger.
    pub predictions: Vec<f64>,

    /// Weight-gradient scratch, overwritten on every trigger.
    pub grads: Vec<f64>,
}

impl RegressorState {
    pub fn new(nx: usize, m: usize) -> Self {
        Self {
            features: vec![0.0; nx * m],
            targets: vec![0.0; m],
            weights: vec![0.0; nx],
            bias: 0.0,
            predictions: vec![0.0; m],
            grads: vec![0.0; nx],
        }
    }

    /// Returns weights and bias to their zero-initialized state. The
    /// dataset buffers are untouched.
    #[inline]
    pub fn reset_params(&mut self) {
        self.weights.fill(0.0);
        self.bias = 0.0;
    }
}
