use amax_core::{CodeParams, RunProvenance, SchemaVersion};

#[test]
fn params_deserialize_with_default_alphabet() {
    let params: CodeParams = serde_json::from_str(r#"{"n": 8, "d": 4}"#).expect("params");
    assert_eq!(params.length(), 8);
    assert_eq!(params.alphabet(), 2);
    assert_eq!(params.min_distance(), 4);
    assert_eq!(params.space_size(), Some(256));
}

#[test]
fn params_deserialize_rejects_invalid_values() {
    let result: Result<CodeParams, _> = serde_json::from_str(r#"{"n": 3, "q": 2, "d": 4}"#);
    let err = result.expect_err("d > n must be rejected");
    assert!(err.to_string().contains("minimum distance"));
}

#[test]
fn params_serialize_with_short_names() {
    let params = CodeParams::new(5, 3, 3).unwrap();
    let value = serde_json::to_value(params).unwrap();
    assert_eq!(value, serde_json::json!({"n": 5, "q": 3, "d": 3}));
}

#[test]
fn provenance_round_trip_json() {
    let provenance = RunProvenance {
        config_hash: "config".into(),
        code_hash: "code".into(),
        created_at: "2024-01-01T00:00:00Z".into(),
        tool_versions: Default::default(),
    }
    .with_tool("amax-core", "0.1.0");

    let json = serde_json::to_string_pretty(&provenance).expect("serialize");
    let decoded: RunProvenance = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, provenance);
    assert_eq!(SchemaVersion::default(), SchemaVersion::new(1, 0, 0));
}
