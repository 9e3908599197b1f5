//! The serialized form of a step.

use cycler_step::{current, rest, StepBuilder, StepKind};
use ndarray::array;
use serde_json::json;

#[test]
fn scalar_step() {
    let step = current(1.0)
        .duration("0.5 hours")
        .termination("2.5 V")
        .timestamp("2024-01-05 12:30")
        .build()
        .expect("should build");

    let dict = serde_json::to_value(step.to_dict()).expect("should serialize");
    assert_eq!(
        dict,
        json!({
            "type": "current",
            "value": 1.0,
            "duration": 1800.0,
            "termination": [{"type": "voltage", "value": 2.5}],
            "period": null,
            "temperature": null,
            "tags": [],
            "timestamp": "2024-01-05T12:30:00",
            "description": null,
        })
    );
}

#[test]
fn rest_step() {
    let step = rest("10 minutes").tag("pause").build().expect("should build");

    let dict = step.to_dict();
    assert_eq!(dict.kind, StepKind::Rest);
    assert_eq!(dict.tags, vec!["pause".to_string()]);

    let value = serde_json::to_value(dict).expect("should serialize");
    assert_eq!(value["type"], "rest");
    assert_eq!(value["duration"], 600.0);
}

#[test]
fn drive_cycle_step() {
    let table = array![[0.0, 1.0], [1.0, 0.5], [2.0, 0.0], [5.0, -1.0]];
    let step = StepBuilder::new(StepKind::Power, table)
        .build()
        .expect("should build drive cycle");

    let dict = serde_json::to_value(step.to_dict()).expect("should serialize");
    assert_eq!(
        dict["value"],
        json!({
            "input": "start time",
            "time": [0.0, 1.0, 2.0, 5.0],
            "values": [1.0, 0.5, 0.0, -1.0],
        })
    );
    assert_eq!(dict["duration"], 5.0);
    assert_eq!(dict["period"], 1.0);
}

#[test]
fn cccv_step() {
    let step = cycler_step::cccv(1.0, 4.2)
        .termination("C/20")
        .build()
        .expect("should build");

    let dict = serde_json::to_value(step.to_dict()).expect("should serialize");
    assert_eq!(dict["type"], "cccv");
    assert_eq!(dict["value"], json!([1.0, 4.2]));
    assert_eq!(dict["termination"], json!([{"type": "C-rate", "value": 0.05}]));
}
