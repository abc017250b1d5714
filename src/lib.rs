pub mod command;
pub mod error;
pub mod metrics;
pub mod ops;
pub mod regressor;
pub mod sink;
pub mod spec;

mod state;

pub use command::{Command, Event, Output};
pub use error::{RegressorErr, Result};
pub use metrics::TrainMetrics;
pub use regressor::Regressor;
pub use sink::{OutputSink, RecordingSink};
pub use spec::{RegressorSpec, ReportMode};
