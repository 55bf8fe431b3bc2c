//! Configuration loading, merging and schema tests.

use sbom_diff::{
    config::{
        generate_json_schema, load_config_file, AppConfig, ConfigPreset, Validatable,
    },
    diff::MatchKey,
    reports::ReportFormat,
};
use tempfile::TempDir;

#[test]
fn test_file_values_survive_default_cli_overrides() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(".sbom-diff.yaml");
    std::fs::write(
        &path,
        "matching:\n  key: name-and-purl-type\noutput:\n  format: json\n  pretty: false\n",
    )
    .unwrap();

    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(Some(&path), &AppConfig::default());

    assert_eq!(loaded_from, Some(path));
    assert_eq!(config.matching.key, MatchKey::NameAndPurlType);
    assert_eq!(config.output.format, ReportFormat::Json);
    assert!(!config.output.pretty);
}

#[test]
fn test_cli_overrides_win() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.yaml");
    std::fs::write(&path, "output:\n  format: json\nfiltering:\n  min_severity: low\n").unwrap();

    let overrides = AppConfig::builder()
        .output_format(ReportFormat::Summary)
        .min_severity(Some("critical".to_string()))
        .fail_on_change(true)
        .build();
    let (config, _) = AppConfig::from_file_with_overrides(Some(&path), &overrides);

    assert_eq!(config.output.format, ReportFormat::Summary);
    assert_eq!(config.filtering.min_severity.as_deref(), Some("critical"));
    assert!(config.behavior.fail_on_change);
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.yaml");
    std::fs::write(&path, "matching: [not, a, map]\n").unwrap();

    assert!(load_config_file(&path).is_err());
    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(Some(&path), &AppConfig::default());
    assert_eq!(loaded_from, None);
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_presets_are_valid() {
    for preset in ConfigPreset::all() {
        let config = AppConfig::from_preset(*preset);
        assert!(config.is_valid(), "preset {preset} should validate");
    }
}

#[test]
fn test_json_schema_lists_sections() {
    let schema = generate_json_schema().unwrap();
    let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
    let properties = value["properties"].as_object().unwrap();

    for section in ["matching", "output", "filtering", "behavior"] {
        assert!(properties.contains_key(section), "missing {section}");
    }
}
