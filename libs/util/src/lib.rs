use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use serde::de::DeserializeOwned;
use toml::{map::Map, Value};

pub fn workspace_dir() -> anyhow::Result<PathBuf> {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .context("failed to run cargo locate-project")?
        .stdout;
    let cargo_path = Path::new(std::str::from_utf8(&output)?.trim());
    cargo_path
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("no workspace root above {:?}", cargo_path))
}

/// Reads `config_name` from the workspace root into `T`.
pub fn load_config<T: DeserializeOwned>(
    config_name: &str,
) -> anyhow::Result<T> {
    read_toml(&workspace_dir()?.join(config_name))
}

pub fn load_env(secrets_name: &str) -> anyhow::Result<Map<String, Value>> {
    read_toml(&workspace_dir()?.join(secrets_name))
}

pub fn read_toml<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<T>(&text)
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Looks up a string secret, failing with the secret's name when absent.
pub fn secret<'a>(
    secrets: &'a Map<String, Value>,
    key: &str,
) -> anyhow::Result<&'a str> {
    secrets
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("{} was not found", key))
}
