use reelsearch::config::{AppConfig, ConfigManager};
use reelsearch::engines::generation::DistanceMetric;
use reelsearch::error::ReelsearchError;
use reelsearch::types::SearchMode;
use std::io::Write;
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_save_and_load_round_trip() {
    let mut manager = ConfigManager::new();
    manager
        .update(|config| {
            config.mode = SearchMode::Hierarchical;
            config.seed = Some(1234);
            config.distance_metric = DistanceMetric::Euclidean;
            config.evolution.population_size = 40;
            config.hierarchical.recursion_depth = 3;
        })
        .unwrap();

    let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    manager.save_to_file(file.path()).unwrap();

    let mut reloaded = ConfigManager::new();
    reloaded.load_from_file(file.path()).unwrap();
    assert_eq!(reloaded.get(), manager.get());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = toml_file(
        r#"
mode = "hierarchical"

[sampling]
chunk_size = 4
"#,
    );

    let mut manager = ConfigManager::new();
    manager.load_from_file(file.path()).unwrap();
    let config = manager.get();

    assert_eq!(config.mode, SearchMode::Hierarchical);
    assert_eq!(config.sampling.chunk_size, 4);
    assert_eq!(config.sampling.histogram_threshold, 100);
    assert_eq!(config.evolution, AppConfig::default().evolution);
}

#[test]
fn test_invalid_file_is_rejected() {
    let file = toml_file(
        r#"
[evolution]
mutation_rate = 1.5
"#,
    );

    let mut manager = ConfigManager::new();
    assert!(matches!(
        manager.load_from_file(file.path()),
        Err(ReelsearchError::Configuration(_))
    ));
    assert_eq!(manager.get(), AppConfig::default());
}

#[test]
fn test_layered_file_and_environment() {
    let file = toml_file(
        r#"
seed = 9

[evolution]
population_size = 50
epochs = 3
"#,
    );

    std::env::set_var("REELSEARCH__EVOLUTION__EPOCHS", "42");
    std::env::set_var("REELSEARCH__MODE", "hierarchical");

    let mut manager = ConfigManager::new();
    let result = manager.load_layered(Some(file.path()));

    std::env::remove_var("REELSEARCH__EVOLUTION__EPOCHS");
    std::env::remove_var("REELSEARCH__MODE");
    result.unwrap();

    let config = manager.get();
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.evolution.population_size, 50);
    assert_eq!(config.evolution.epochs, 42);
    assert_eq!(config.mode, SearchMode::Hierarchical);
    assert_eq!(config.sampling, AppConfig::default().sampling);
}
