use std::fs;

use tempfile::TempDir;

use super::*;
use crate::config::{Config, LOCAL_CONFIG_NAME};

fn args(output: std::path::PathBuf, force: bool) -> InitArgs {
    InitArgs { output, force }
}

#[test]
fn run_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(LOCAL_CONFIG_NAME);

    run_init_impl(&args(config_path.clone(), false)).unwrap();

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[extract]"));
    assert!(content.contains("[render]"));
}

#[test]
fn created_file_loads_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(LOCAL_CONFIG_NAME);

    run_init_impl(&args(config_path.clone(), false)).unwrap();

    let config: Config = toml::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn run_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(LOCAL_CONFIG_NAME);
    fs::write(&config_path, "# mine").unwrap();

    let result = run_init_impl(&args(config_path.clone(), false));

    assert!(matches!(result, Err(ArtifactHtmlError::Config(_))));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "# mine");
    assert_eq!(run_init(&args(config_path, false)), EXIT_CONFIG_ERROR);
}

#[test]
fn run_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(LOCAL_CONFIG_NAME);
    fs::write(&config_path, "# mine").unwrap();

    assert_eq!(run_init(&args(config_path.clone(), true)), EXIT_SUCCESS);
    assert!(
        fs::read_to_string(&config_path)
            .unwrap()
            .contains("[extract]")
    );
}

#[test]
fn unwritable_location_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("missing-dir").join(LOCAL_CONFIG_NAME);

    let result = run_init_impl(&args(config_path, false));
    assert!(matches!(result, Err(ArtifactHtmlError::FileWrite { .. })));
}
