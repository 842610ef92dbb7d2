use dotfield::{ClockMode, FieldConfig, Rgba8};

#[test]
fn full_config_roundtrips_through_json() {
    let mut cfg = FieldConfig::default();
    cfg.grid_size = 80;
    cfg.dot_opacity = 0.05;
    cfg.clock = ClockMode::DeltaTime;
    let json = serde_json::to_string(&cfg).unwrap();
    let de = FieldConfig::from_json(&json).unwrap();
    assert_eq!(de, cfg);
}

#[test]
fn sparse_config_gets_defaults_for_the_rest() {
    let cfg = FieldConfig::from_json(
        r##"{
            "bg_color": "#000000",
            "mouse_radius": 150.0,
            "clock": "DeltaTime"
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.bg_color, Rgba8::rgb(0, 0, 0));
    assert_eq!(cfg.mouse_radius, 150.0);
    assert_eq!(cfg.clock, ClockMode::DeltaTime);
    assert_eq!(cfg.dot_color, dotfield::DEFAULT_DOT_COLOR);
    assert_eq!(cfg.grid_size, FieldConfig::default().grid_size);
}

#[test]
fn fixed_step_clock_json_form() {
    let cfg = FieldConfig::from_json(r##"{"clock": {"FixedStep": {"step": 0.02}}}"##).unwrap();
    assert_eq!(cfg.clock, ClockMode::FixedStep { step: 0.02 });
}

#[test]
fn invalid_values_are_rejected_not_clamped() {
    assert!(FieldConfig::from_json(r##"{"grid_size": 0}"##).is_err());
    assert!(FieldConfig::from_json(r##"{"smoothing": 2.0}"##).is_err());
    assert!(FieldConfig::from_json(r##"{"max_opacity": 0.0}"##).is_err());
    assert!(FieldConfig::from_json(r##"{"clock": {"FixedStep": {"step": 0.0}}}"##).is_err());
}

#[test]
fn malformed_hex_in_json_is_a_parse_error() {
    let err = FieldConfig::from_json(r##"{"dot_color": "#xyz"}"##).unwrap_err();
    assert!(err.to_string().contains("serialization error"));
}

#[test]
fn hex_fallback_path_never_errors() {
    // The lenient path used by CLI overrides: bad input keeps the previous
    // color instead of failing the whole scene.
    let cfg = FieldConfig::default();
    let color = Rgba8::parse_hex_or("definitely-not-hex", cfg.dot_color);
    assert_eq!(color, cfg.dot_color);
}
