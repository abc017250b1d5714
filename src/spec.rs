use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{RegressorErr, Result};

/// Which reports a trigger produces besides the predictions.
///
/// `Full` re-reports bias and weights after every parameter update;
/// `PredictionsOnly` performs the update silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    #[default]
    Full,
    PredictionsOnly,
}

/// Construction-time shape and hyperparameter selection for a regressor
/// node.
///
/// Dimensions are fixed for the lifetime of the node; only the learning
/// rate can change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressorSpec {
    /// Number of features (`nx`).
    #[serde(default = "default_dim")]
    pub features: NonZeroUsize,

    /// Number of samples held per batch (`m`).
    #[serde(default = "default_dim")]
    pub batch: NonZeroUsize,

    /// Gradient step size (`alpha`). Must be strictly positive.
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    /// Trigger reporting variant.
    #[serde(default)]
    pub reporting: ReportMode,
}

fn default_dim() -> NonZeroUsize {
    NonZeroUsize::MIN
}

fn default_learning_rate() -> f64 {
    0.01
}

impl Default for RegressorSpec {
    fn default() -> Self {
        Self {
            features: default_dim(),
            batch: default_dim(),
            learning_rate: default_learning_rate(),
            reporting: ReportMode::default(),
        }
    }
}

impl RegressorSpec {
    /// Creates a spec with the given dimensions and learning rate and the
    /// default reporting mode.
    pub fn new(features: NonZeroUsize, batch: NonZeroUsize, learning_rate: f64) -> Self {
        Self {
            features,
            batch,
            learning_rate,
            reporting: ReportMode::default(),
        }
    }

    /// Checks the invariants the types cannot express on their own.
    ///
    /// # Errors
    /// Returns `NonPositiveLearningRate` when the learning rate is zero,
    /// negative, or NaN.
    pub fn validate(&self) -> Result<()> {
        if self.learning_rate > 0.0 {
            Ok(())
        } else {
            Err(RegressorErr::NonPositiveLearningRate {
                got: self.learning_rate,
            })
        }
    }
}
