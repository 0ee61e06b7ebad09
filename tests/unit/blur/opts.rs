use super::*;

#[test]
fn narrowing_modes_differ_only_above_255() {
    assert_eq!(Narrowing::Truncate.narrow(200), 200);
    assert_eq!(Narrowing::Clamp.narrow(200), 200);
    assert_eq!(Narrowing::Truncate.narrow(256), 0);
    assert_eq!(Narrowing::Truncate.narrow(300), 44);
    assert_eq!(Narrowing::Clamp.narrow(300), 255);
}

#[test]
fn narrowing_parses_case_insensitively() {
    assert_eq!("Clamp".parse::<Narrowing>().unwrap(), Narrowing::Clamp);
    assert_eq!(" truncate ".parse::<Narrowing>().unwrap(), Narrowing::Truncate);
    assert!("round".parse::<Narrowing>().is_err());
}

#[test]
fn defaults_are_identity_with_truncation() {
    let opts = BlurOpts::default();
    assert_eq!(opts.radius, 0);
    assert_eq!(opts.narrowing, Narrowing::Truncate);
    assert_eq!(BlurOpts::new(3).with_narrowing(Narrowing::Clamp).narrowing, Narrowing::Clamp);
}

#[test]
fn validate_rejects_huge_radius() {
    assert!(BlurOpts::new(MAX_RADIUS).validate().is_ok());
    assert!(BlurOpts::new(MAX_RADIUS + 1).validate().is_err());
}

#[test]
fn from_json_str_uses_serde_defaults() {
    let opts = BlurOpts::from_json_str(r#"{ "radius": 6 }"#).unwrap();
    assert_eq!(opts, BlurOpts::new(6));

    let opts = BlurOpts::from_json_str(r#"{ "narrowing": "clamp" }"#).unwrap();
    assert_eq!(opts, BlurOpts::new(0).with_narrowing(Narrowing::Clamp));
}

#[test]
fn from_json_str_reports_decode_and_validation_errors() {
    let err = BlurOpts::from_json_str(r#"{ "radius": 1, "extra": true }"#).unwrap_err();
    assert!(matches!(err, StackBlurError::Serde(_)));

    let err = BlurOpts::from_json_str(r#"{ "radius": -2 }"#).unwrap_err();
    assert!(matches!(err, StackBlurError::Serde(_)));

    let err = BlurOpts::from_json_str(r#"{ "radius": 70000 }"#).unwrap_err();
    assert!(matches!(err, StackBlurError::Validation(_)));
}
