use cmdtree_cli::{commands, load};
use cmdtree_test_utils::SAMPLE_RESPONSE_JSON;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_sample(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("workspace.json");
    std::fs::write(&path, SAMPLE_RESPONSE_JSON).unwrap();
    path
}

#[test]
fn test_tree_outline_from_file() {
    let dir = TempDir::new().unwrap();
    let response = load::load_response(&write_sample(&dir)).unwrap();
    let config = load::load_config(None, dir.path()).unwrap();

    let out = commands::tree(&response, &config, Some("command:network/vnet/list"), false).unwrap();
    let lines: Vec<&str> = out.text.lines().collect();

    assert_eq!(lines[0], "  group:monitor");
    assert_eq!(lines[1], "  group:network");
    assert!(lines.contains(&"*     command:network/vnet/list"));
    assert!(out.passed);
}

#[test]
fn test_tree_json_from_file() {
    let dir = TempDir::new().unwrap();
    let response = load::load_response(&write_sample(&dir)).unwrap();
    let config = load::load_config(None, dir.path()).unwrap();

    let out = commands::tree(&response, &config, None, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out.text).unwrap();

    assert_eq!(value["selected"], "group:monitor");
    assert_eq!(value["resolution"], "default");
    assert_eq!(value["forest"].as_array().unwrap().len(), 2);
}

#[test]
fn test_config_file_limits_depth() {
    let dir = TempDir::new().unwrap();
    let response = load::load_response(&write_sample(&dir)).unwrap();
    let config_path = dir.path().join("strict.toml");
    std::fs::write(&config_path, "max_depth = 2\n").unwrap();

    let config = load::load_config(Some(&config_path), dir.path()).unwrap();
    let err = commands::check(&response, &config).unwrap_err();
    assert!(err.to_string().contains("depth"));
}

#[test]
fn test_check_passes_on_sample() {
    let dir = TempDir::new().unwrap();
    let response = load::load_response(&write_sample(&dir)).unwrap();

    let out = commands::check(&response, &Default::default()).unwrap();
    assert!(out.passed);
    assert_eq!(out.text.lines().next(), Some("5 groups, 4 commands, 2 roots"));
}
