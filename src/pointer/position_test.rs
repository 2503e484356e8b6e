use crate::pointer::{ParsePositionError, PointerPosition};

#[test]
fn test_default_is_origin() {
    assert_eq!(PointerPosition::default(), PointerPosition::ORIGIN);
    assert_eq!(PointerPosition::ORIGIN, PointerPosition::new(0, 0));
}

#[test]
fn test_display() {
    assert_eq!(PointerPosition::new(120, 80).to_string(), "(120, 80)");
}

#[test]
fn test_parse_pair() {
    let position: PointerPosition = "120,80".parse().unwrap();
    assert_eq!(position, PointerPosition::new(120, 80));
}

#[test]
fn test_parse_trims_whitespace_and_accepts_negatives() {
    let position: PointerPosition = " -5 , 12 ".parse().unwrap();
    assert_eq!(position, PointerPosition::new(-5, 12));
}

#[test]
fn test_parse_missing_separator() {
    let err = "120".parse::<PointerPosition>().unwrap_err();
    assert_eq!(
        err,
        ParsePositionError::MissingSeparator {
            input: "120".to_string()
        }
    );
}

#[test]
fn test_parse_invalid_coordinate_names_axis() {
    let err = "12,abc".parse::<PointerPosition>().unwrap_err();
    match err {
        ParsePositionError::InvalidCoordinate { axis, value, .. } => {
            assert_eq!(axis, "y");
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_serializes_as_object() {
    let json = serde_json::to_string(&PointerPosition::new(3, 4)).unwrap();
    assert_eq!(json, r#"{"x":3,"y":4}"#);
}
