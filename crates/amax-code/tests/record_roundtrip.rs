use amax_code::{from_bytes, from_json, to_bytes, to_json, CodeRecord, VectorSpace};
use amax_core::{AmaxError, CodeParams, RunProvenance};

fn provenance() -> RunProvenance {
    RunProvenance {
        config_hash: "config".into(),
        code_hash: String::new(),
        created_at: "2024-01-01T00:00:00Z".into(),
        tool_versions: Default::default(),
    }
}

fn record() -> CodeRecord {
    let params = CodeParams::binary(5, 3).unwrap();
    let space = VectorSpace::generate(&params, 32).unwrap();
    let words: [[u32; 5]; 4] = [[0, 0, 0, 0, 0], [0, 0, 1, 1, 1], [1, 1, 0, 0, 1], [1, 1, 1, 1, 0]];
    let indices: Vec<usize> = words
        .iter()
        .map(|word| space.index_of(word).unwrap())
        .collect();
    CodeRecord::from_indices(&space, &indices, provenance())
}

#[test]
fn json_round_trip_preserves_record() {
    let original = record();
    assert_eq!(original.provenance.code_hash.len(), 64);
    let json = to_json(&original).unwrap();
    let restored = from_json(&json).unwrap();
    assert_eq!(restored, original);
    let report = restored.verify().unwrap();
    assert_eq!(report.size, 4);
    assert_eq!(report.min_distance, Some(3));
}

#[test]
fn binary_round_trip_preserves_hash() {
    let original = record();
    let bytes = to_bytes(&original).unwrap();
    let restored = from_bytes(&bytes).unwrap();
    assert_eq!(restored.provenance.code_hash, original.provenance.code_hash);
}

#[test]
fn tampered_hash_fails_verification() {
    let mut tampered = record();
    tampered.provenance.code_hash = "0".repeat(64);
    match tampered.verify() {
        Err(AmaxError::Code(info)) => assert_eq!(info.code, "hash-mismatch"),
        other => panic!("unexpected verification result: {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = from_json("{\"words\": 3}").unwrap_err();
    assert!(matches!(err, AmaxError::Serde(_)));
}
