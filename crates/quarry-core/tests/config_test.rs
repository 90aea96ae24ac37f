use std::collections::HashMap;
use std::path::PathBuf;

use quarry_core::config::*;
use quarry_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = QuarryConfig::from_toml("").unwrap();

    // Active defaults
    assert_eq!(config.active.ndata_to_label, 1);
    assert_eq!(config.active.max_sample, -1);
    assert_eq!(config.active.max_sample_limit(), None);
    assert!(config.active.uncertainty_folder.is_none());
    assert!(config.active.seed.is_none());

    // Inference defaults
    assert_eq!(config.inference.batch_size, 32);
    assert_eq!(config.inference.iterations, 20);
    assert!(!config.inference.use_cuda);
    assert!(config.inference.extra.is_empty());

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[active]
ndata_to_label = 10
max_sample = 500
uncertainty_folder = "/tmp/uncertainty"

[inference]
iterations = 50

[inference.extra]
temperature = 0.5
"#;
    let config = QuarryConfig::from_toml(toml).unwrap();
    assert_eq!(config.active.ndata_to_label, 10);
    assert_eq!(config.active.max_sample_limit(), Some(500));
    assert_eq!(
        config.active.uncertainty_folder,
        Some(PathBuf::from("/tmp/uncertainty"))
    );
    assert_eq!(config.inference.iterations, 50);
    assert_eq!(config.inference.batch_size, 32); // default
    assert_eq!(config.inference.extra_as::<f64>("temperature"), Some(0.5));
    assert_eq!(config.inference.extra_as::<f64>("missing"), None);
}

#[test]
fn empty_uncertainty_folder_in_toml_means_unset() {
    let config = QuarryConfig::from_toml("[active]\nuncertainty_folder = \"\"\n").unwrap();
    assert_eq!(config.active.uncertainty_folder, None);
}

#[test]
fn empty_uncertainty_folder_agrees_across_file_and_env() {
    let from_file = QuarryConfig::from_toml("[active]\nuncertainty_folder = \"\"\n").unwrap();
    let mut from_env = QuarryConfig::from_toml("[active]\nuncertainty_folder = \"/data/unc\"\n").unwrap();
    QuarryConfig::apply_env_overrides(&mut from_env, |k| {
        (k == "QUARRY_UNCERTAINTY_FOLDER").then(String::new)
    });
    assert_eq!(from_file.active.uncertainty_folder, from_env.active.uncertainty_folder);
}

#[test]
fn config_rejects_malformed_toml() {
    let err = QuarryConfig::from_toml("[active\nndata_to_label = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let mut config = QuarryConfig::default();
    config.active.max_sample = 64;
    config.active.seed = Some(7);
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = QuarryConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn validate_rejects_zero_ndata_to_label() {
    let mut config = QuarryConfig::default();
    config.active.ndata_to_label = 0;
    let err = QuarryConfig::validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "active.ndata_to_label"));
}

#[test]
fn validate_rejects_max_sample_below_sentinel() {
    let mut config = QuarryConfig::default();
    config.active.max_sample = -2;
    assert!(QuarryConfig::validate(&config).is_err());

    config.active.max_sample = 0;
    assert!(QuarryConfig::validate(&config).is_ok());
}

#[test]
fn validate_rejects_zero_iterations_and_batch_size() {
    let mut config = QuarryConfig::default();
    config.inference.iterations = 0;
    assert!(QuarryConfig::validate(&config).is_err());

    let mut config = QuarryConfig::default();
    config.inference.batch_size = 0;
    assert!(QuarryConfig::validate(&config).is_err());
}

#[test]
fn env_overrides_take_precedence_over_file_values() {
    let mut config = QuarryConfig::from_toml("[active]\nndata_to_label = 3\nmax_sample = 10\n").unwrap();
    let env: HashMap<&str, &str> = [
        ("QUARRY_NDATA_TO_LABEL", "25"),
        ("QUARRY_MAX_SAMPLE", "-1"),
        ("QUARRY_SEED", "1234"),
        ("QUARRY_UNCERTAINTY_FOLDER", "/data/unc"),
        ("QUARRY_LOG_LEVEL", "debug"),
    ]
    .into_iter()
    .collect();

    QuarryConfig::apply_env_overrides(&mut config, |k| env.get(k).map(|v| v.to_string()));

    assert_eq!(config.active.ndata_to_label, 25);
    assert_eq!(config.active.max_sample_limit(), None);
    assert_eq!(config.active.seed, Some(1234));
    assert_eq!(config.active.uncertainty_folder, Some(PathBuf::from("/data/unc")));
    assert_eq!(config.observability.log_level, "debug");
}

#[test]
fn unparseable_env_values_are_ignored() {
    let mut config = QuarryConfig::default();
    QuarryConfig::apply_env_overrides(&mut config, |k| match k {
        "QUARRY_NDATA_TO_LABEL" => Some("many".to_string()),
        "QUARRY_SEED" => Some("-3".to_string()),
        _ => None,
    });
    assert_eq!(config.active.ndata_to_label, 1);
    assert_eq!(config.active.seed, None);
}

#[test]
fn load_reads_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("quarry.toml"),
        "[active]\nndata_to_label = 4\n\n[inference]\nuse_cuda = true\n",
    )
    .unwrap();
    let config = QuarryConfig::load(dir.path()).unwrap();
    assert_eq!(config.active.ndata_to_label, 4);
    assert!(config.inference.use_cuda);
}

#[test]
fn load_without_project_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = QuarryConfig::load(dir.path()).unwrap();
    assert_eq!(config.inference, InferenceParams::default());
}

#[test]
fn load_rejects_invalid_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("quarry.toml"), "[active]\nmax_sample = -9\n").unwrap();
    let err = QuarryConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn from_file_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = QuarryConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}
