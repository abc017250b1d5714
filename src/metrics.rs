/// Counters describing the training progress of a single node.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrainMetrics {
    /// Triggers handled since construction.
    pub steps: u64,

    /// Batch MSE of the predictions reported by the most recent trigger,
    /// computed against the pre-update parameters.
    pub last_loss: f64,
}

impl TrainMetrics {
    #[inline]
    pub fn bump_step(&mut self) {
        self.steps += 1;
    }

    #[inline]
    pub fn record_loss(&mut self, loss: f64) {
        self.last_loss = loss;
    }
}
