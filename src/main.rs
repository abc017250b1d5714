use std::{
    env,
    io::{self, BufRead, Write},
};

use log::{info, warn};

use linreg_node::{Event, Output, OutputSink, Regressor, RegressorSpec};

const SPEC_VAR: &str = "LINREG_SPEC";

/// Writes each report as one JSON line.
struct LineSink<W> {
    out: W,
}

impl<W: Write> LineSink<W> {
    fn emit(&mut self, output: Output) {
        match serde_json::to_string(&output) {
            Ok(line) => {
                if let Err(e) = writeln!(self.out, "{line}") {
                    warn!("failed to write report: {e}");
                }
            }
            Err(e) => warn!("failed to encode report: {e}"),
        }
    }
}

impl<W: Write> OutputSink for LineSink<W> {
    fn predictions(&mut self, predictions: &[f64]) {
        self.emit(Output::Predictions(predictions.to_vec()));
    }

    fn weights(&mut self, weights: &[f64]) {
        self.emit(Output::Weights(weights.to_vec()));
    }

    fn bias(&mut self, bias: f64) {
        self.emit(Output::Bias(bias));
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let spec = match env::var(SPEC_VAR) {
        Ok(raw) => serde_json::from_str(&raw)?,
        Err(_) => RegressorSpec::default(),
    };

    let mut node = Regressor::new(spec).map_err(io::Error::other)?;
    info!(
        "node ready: features={} batch={} alpha={}",
        node.features(),
        node.batch(),
        node.learning_rate()
    );

    let stdin = io::stdin();
    let mut sink = LineSink {
        out: io::stdout().lock(),
    };

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Event>(&line) {
            Ok(Event::Bang) => node.trigger(&mut sink),
            Ok(Event::Command(cmd)) => node.apply(cmd, &mut sink),
            Err(e) => warn!("skipping malformed line: {e}"),
        }
    }

    info!("input closed, shutting down");
    Ok(())
}
