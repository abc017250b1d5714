use std::num::NonZeroUsize;

use linreg_node::{Command, Event, Output, Regressor, RegressorSpec, RecordingSink};

fn node(nx: usize, m: usize, alpha: f64) -> Regressor {
    let spec = RegressorSpec::new(
        NonZeroUsize::new(nx).unwrap(),
        NonZeroUsize::new(m).unwrap(),
        alpha,
    );
    Regressor::new(spec).unwrap()
}

#[test]
fn fresh_nodes_report_zeroed_parameters() {
    for nx in [1, 2, 7] {
        let mut node = node(nx, 3, 0.01);
        let mut sink = RecordingSink::new();

        node.apply(Command::GetBias, &mut sink);
        node.apply(Command::GetWeights, &mut sink);

        assert_eq!(
            sink.outputs,
            vec![Output::Bias(0.0), Output::Weights(vec![0.0; nx])]
        );
    }
}

#[test]
fn shape_mismatches_name_expected_and_actual_counts() {
    let mut node = node(2, 3, 0.01);

    let err = node.set_features(&[1.0; 7]).unwrap_err();
    assert_eq!(err.to_string(), "features length mismatch: got 7, expected 6");

    let err = node.set_targets(&[1.0; 2]).unwrap_err();
    assert_eq!(err.to_string(), "targets length mismatch: got 2, expected 3");

    let err = node.set_weights(&[1.0; 3]).unwrap_err();
    assert_eq!(err.to_string(), "weights length mismatch: got 3, expected 2");
}

#[test]
fn learning_rate_must_be_positive() {
    let mut node = node(1, 1, 0.25);

    for bad in [0.0, -1.0] {
        let err = node.set_learning_rate(bad).unwrap_err();
        assert_eq!(err.to_string(), format!("learning rate must be positive, got {bad}"));
        assert_eq!(node.learning_rate(), 0.25);
    }

    node.set_learning_rate(0.5).unwrap();
    assert_eq!(node.learning_rate(), 0.5);
}

#[test]
fn construction_rejects_a_non_positive_learning_rate() {
    let spec = RegressorSpec::new(NonZeroUsize::MIN, NonZeroUsize::MIN, 0.0);
    assert!(Regressor::new(spec).is_err());
}

#[test]
fn rejected_commands_do_not_disturb_the_next_trigger() {
    let mut node = node(1, 1, 0.1);
    let mut sink = RecordingSink::new();

    node.apply(Command::Weights(vec![2.0]), &mut sink);
    node.apply(Command::Bias(1.0), &mut sink);
    node.apply(Command::Features(vec![3.0]), &mut sink);
    node.apply(Command::Targets(vec![7.0]), &mut sink);

    // Wrong counts and a bad rate: all rejected, nothing changes.
    node.apply(Command::Features(vec![1.0, 2.0]), &mut sink);
    node.apply(Command::Weights(vec![]), &mut sink);
    node.apply(Command::LearningRate(-0.5), &mut sink);
    assert!(sink.outputs.is_empty());

    node.trigger(&mut sink);
    // Prediction still comes from w=2, b=1, X=3.
    assert_eq!(sink.outputs[0], Output::Predictions(vec![7.0]));
}

#[test]
fn the_node_is_drivable_over_the_json_wire() {
    let mut node = node(1, 1, 0.1);
    let mut sink = RecordingSink::new();

    let lines = [
        r#"{"x": [1.0]}"#,
        r#"{"y": [2.0]}"#,
        r#""bang""#,
        r#""get_bias""#,
    ];

    for line in lines {
        match serde_json::from_str::<Event>(line).unwrap() {
            Event::Bang => node.trigger(&mut sink),
            Event::Command(cmd) => node.apply(cmd, &mut sink),
        }
    }

    // One trigger in Full mode: predictions, bias, weights; then the
    // explicit bias query.
    assert_eq!(
        sink.outputs,
        vec![
            Output::Predictions(vec![0.0]),
            Output::Bias(0.2),
            Output::Weights(vec![0.2]),
            Output::Bias(0.2),
        ]
    );
}
