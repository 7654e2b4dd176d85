use approx::assert_relative_eq;
use serde_json::json;
use unispline::configuration::{spline_from_value, spline_set_from_value};
use unispline::spline::family::SplineType;
use unispline::spline::splineerror::SplineError;

#[test]
fn spline_from_json_object() {
    let value = json!({
        "name": "rate",
        "type": "linear",
        "x": [0.0, 1.0, 2.0],
        "y": [0.0, 2.0, 4.0]
    });
    let spline = spline_from_value(&value).unwrap();
    assert_eq!(spline.name(), "rate");
    assert_eq!(spline.spline_type(), SplineType::Linear);
    assert_relative_eq!(spline.evaluate(0.5).unwrap(), 1.0);
}

#[test]
fn missing_fields_fault_by_name() {
    let value = json!({
        "name": "rate",
        "type": "linear",
        "y": [0.0, 2.0]
    });
    let err = spline_from_value(&value).unwrap_err();
    assert!(matches!(err, SplineError::MissingField { field: "x" }));

    let value = json!({
        "name": "rate",
        "type": "linear",
        "x": [0.0, 2.0]
    });
    let err = spline_from_value(&value).unwrap_err();
    assert!(matches!(err, SplineError::MissingField { field: "y" }));
}

#[test]
fn unknown_type_faults() {
    let value = json!({
        "name": "rate",
        "type": "septic",
        "x": [0.0, 1.0],
        "y": [0.0, 1.0]
    });
    let err = spline_from_value(&value).unwrap_err();
    match err {
        SplineError::UnknownSplineType { value } => assert_eq!(value, "septic"),
        other => panic!("expected UnknownSplineType, got {other}"),
    }
}

#[test]
fn build_faults_propagate_through_ingestion() {
    let value = json!({
        "name": "rate",
        "type": "cubic",
        "x": [0.0, 2.0, 1.0],
        "y": [0.0, 1.0, 2.0]
    });
    let err = spline_from_value(&value).unwrap_err();
    assert!(matches!(err, SplineError::NonMonotoneInput { .. }));
}

#[test]
fn spline_set_from_json_object() {
    let value = json!({
        "x": [0.0, 1.0, 2.0],
        "splines": [
            { "name": "a", "type": "linear", "y": [0.0, 1.0, 2.0] },
            { "name": "b", "type": "pchip", "y": [0.0, 2.0, 4.0] }
        ]
    });
    let set = spline_set_from_value(&value).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.index_of("b").unwrap(), 1);
    assert_relative_eq!(set.evaluate(1.0, 0).unwrap(), 1.0);
}

#[test]
fn spline_set_requires_member_array() {
    let value = json!({ "x": [0.0, 1.0] });
    let err = spline_set_from_value(&value).unwrap_err();
    assert!(matches!(err, SplineError::MissingField { field: "splines" }));
}
