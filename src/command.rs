use serde::{Deserialize, Serialize};

/// The named commands a host can send to a regressor node.
///
/// Wire names match the command names the node answers to in a patch
/// (`x`, `y`, `weights`, `bias`, `alpha`, `reset`, `get_weights`,
/// `get_bias`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Overwrite the feature matrix (`nx * m` values, feature-major).
    #[serde(rename = "x")]
    Features(Vec<f64>),

    /// Overwrite the target vector (`m` values).
    #[serde(rename = "y")]
    Targets(Vec<f64>),

    /// Overwrite the weight vector (`nx` values).
    Weights(Vec<f64>),

    /// Overwrite the bias.
    Bias(f64),

    /// Overwrite the learning rate; must be strictly positive.
    #[serde(rename = "alpha")]
    LearningRate(f64),

    /// Zero the weights and the bias.
    Reset,

    /// Report the current weights on the weights port.
    GetWeights,

    /// Report the current bias on the bias port.
    GetBias,
}

/// The full inbound surface of the node: the trigger, or a named command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// Fire one forward + backward cycle.
    Bang,

    #[serde(untagged)]
    Command(Command),
}

/// A value emitted through one of the node's typed output ports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    /// One prediction per sample in the batch.
    Predictions(Vec<f64>),

    /// The current weight vector.
    Weights(Vec<f64>),

    /// The current bias.
    Bias(f64),
}
