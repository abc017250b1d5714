use log::{debug, warn};

use crate::{
    command::Command,
    error::{RegressorErr, Result},
    metrics::TrainMetrics,
    ops,
    sink::OutputSink,
    spec::{RegressorSpec, ReportMode},
    state::RegressorState,
};

/// A stateful linear-regression node.
///
/// Holds a fixed-size feature matrix and target vector, a trainable weight
/// vector and bias, and a learning rate. Commands mutate the stored data
/// between triggers; each trigger runs one forward pass, reports the
/// predictions, then applies one full-batch gradient-descent update.
///
/// The node owns every buffer exclusively; all mutation goes through
/// `&mut self`, so overlapping invocations cannot happen on one instance.
/// Dropping the node releases everything.
#[derive(Debug)]
pub struct Regressor {
    nx: usize,
    m: usize,
    alpha: f64,
    reporting: ReportMode,
    state: RegressorState,
    metrics: TrainMetrics,
}

impl Regressor {
    /// Builds a node from a validated spec, with all parameters at zero.
    ///
    /// # Errors
    /// Returns `NonPositiveLearningRate` when the spec's learning rate is
    /// not strictly positive.
    pub fn new(spec: RegressorSpec) -> Result<Self> {
        spec.validate()?;

        let nx = spec.features.get();
        let m = spec.batch.get();

        Ok(Self {
            nx,
            m,
            alpha: spec.learning_rate,
            reporting: spec.reporting,
            state: RegressorState::new(nx, m),
            metrics: TrainMetrics::default(),
        })
    }

    /// Number of features (`nx`).
    pub fn features(&self) -> usize {
        self.nx
    }

    /// Batch size (`m`).
    pub fn batch(&self) -> usize {
        self.m
    }

    /// Current learning rate.
    pub fn learning_rate(&self) -> f64 {
        self.alpha
    }

    /// Current weight vector.
    pub fn weights(&self) -> &[f64] {
        &self.state.weights
    }

    /// Current bias.
    pub fn bias(&self) -> f64 {
        self.state.bias
    }

    /// Trigger reporting variant this node was built with.
    pub fn reporting(&self) -> ReportMode {
        self.reporting
    }

    /// Training counters.
    pub fn metrics(&self) -> &TrainMetrics {
        &self.metrics
    }

    /// Overwrites the feature matrix with `nx * m` values in feature-major,
    /// sample-minor order.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` on a wrong count; the matrix is left
    /// unchanged.
    pub fn set_features(&mut self, values: &[f64]) -> Result<()> {
        let expected = self.nx * self.m;
        if values.len() != expected {
            return Err(RegressorErr::ShapeMismatch {
                what: "features",
                got: values.len(),
                expected,
            });
        }

        self.state.features.copy_from_slice(values);
        Ok(())
    }

    /// Overwrites the target vector with `m` values.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` on a wrong count; the targets are left
    /// unchanged.
    pub fn set_targets(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.m {
            return Err(RegressorErr::ShapeMismatch {
                what: "targets",
                got: values.len(),
                expected: self.m,
            });
        }

        self.state.targets.copy_from_slice(values);
        Ok(())
    }

    /// Overwrites the weight vector with `nx` values.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` on a wrong count; the weights are left
    /// unchanged.
    pub fn set_weights(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.nx {
            return Err(RegressorErr::ShapeMismatch {
                what: "weights",
                got: values.len(),
                expected: self.nx,
            });
        }

        self.state.weights.copy_from_slice(values);
        Ok(())
    }

    /// Overwrites the bias.
    pub fn set_bias(&mut self, bias: f64) {
        self.state.bias = bias;
    }

    /// Overwrites the learning rate.
    ///
    /// # Errors
    /// Returns `NonPositiveLearningRate` when `learning_rate <= 0` (or is
    /// NaN); the previous rate is retained.
    pub fn set_learning_rate(&mut self, learning_rate: f64) -> Result<()> {
        if learning_rate > 0.0 {
            self.alpha = learning_rate;
            Ok(())
        } else {
            Err(RegressorErr::NonPositiveLearningRate { got: learning_rate })
        }
    }

    /// Zeroes the weights and the bias. The dataset buffers and the
    /// learning rate are untouched.
    pub fn reset(&mut self) {
        self.state.reset_params();
    }

    /// Applies a host command.
    ///
    /// Rejected input is surfaced as a diagnostic on the log channel and
    /// leaves the node unchanged; the call itself always returns, and the
    /// node stays ready for the next command or trigger.
    pub fn apply<S: OutputSink>(&mut self, cmd: Command, sink: &mut S) {
        let outcome = match cmd {
            Command::Features(values) => self.set_features(&values),
            Command::Targets(values) => self.set_targets(&values),
            Command::Weights(values) => self.set_weights(&values),
            Command::Bias(bias) => {
                self.set_bias(bias);
                Ok(())
            }
            Command::LearningRate(rate) => self.set_learning_rate(rate),
            Command::Reset => {
                self.reset();
                Ok(())
            }
            Command::GetWeights => {
                sink.weights(&self.state.weights);
                Ok(())
            }
            Command::GetBias => {
                sink.bias(self.state.bias);
                Ok(())
            }
        };

        if let Err(e) = outcome {
            warn!("rejected command: {e}");
        }
    }

    /// Runs one training cycle.
    ///
    /// In order: forward pass; predictions report; full-batch gradient step
    /// on weights and bias; then, in `Full` mode, the updated bias and
    /// weights reports. Predictions are computed from the pre-update
    /// parameters. Firing before the dataset was ever set is allowed and
    /// trains against the zero-initialized buffers.
    pub fn trigger<S: OutputSink>(&mut self, sink: &mut S) {
        let state = &mut self.state;

        ops::forward_batch(
            &state.weights,
            state.bias,
            &state.features,
            &mut state.predictions,
        );
        sink.predictions(&state.predictions);

        let db = ops::backward_batch(
            &state.features,
            &state.targets,
            &state.predictions,
            &mut state.grads,
        );
        ops::descend(&mut state.weights, &state.grads, self.alpha);
        state.bias -= self.alpha * db;

        self.metrics
            .record_loss(ops::mse(&state.predictions, &state.targets));
        self.metrics.bump_step();
        debug!(step = self.metrics.steps, loss = self.metrics.last_loss; "trigger complete");

        if self.reporting == ReportMode::Full {
            sink.bias(state.bias);
            sink.weights(&state.weights);
        }
    }
}
