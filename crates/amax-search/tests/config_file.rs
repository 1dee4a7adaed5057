use std::fs;

use amax_core::AmaxError;
use amax_search::SearchConfig;
use tempfile::tempdir;

#[test]
fn yaml_round_trip_through_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("search.yaml");
    let config = SearchConfig {
        coloring_bound: false,
        max_nodes: Some(1_000),
        ..SearchConfig::default()
    };
    fs::write(&path, config.to_yaml().unwrap()).unwrap();
    let loaded = SearchConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("tempdir");
    let err = SearchConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, AmaxError::Io(_)));
    assert!(err.info().context.contains_key("path"));
}

#[test]
fn config_serializes_to_json_for_reports() {
    let value = serde_json::to_value(SearchConfig::default()).unwrap();
    assert_eq!(value["symmetry_cut"], false);
    assert_eq!(value["coloring_bound"], true);
}
