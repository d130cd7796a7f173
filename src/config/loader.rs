// Configuration loader
// Reads ~/.billy/config.toml, falling back to the OPENROUTER_API_KEY
// environment variable for the key

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Settings;

/// Load settings from `path` (or the default location), then the
/// environment.
///
/// A missing file is not an error: the REPL starts without a key and shows
/// the setup instructions on the first query.
pub fn load_config(path: Option<&Path>) -> Result<Settings> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => default_config_path(),
    };

    let mut settings = match config_path {
        Some(ref p) if p.exists() => parse_config_file(p)?,
        _ => Settings::default(),
    };

    if !settings.has_api_key() {
        if let Ok(key) = std::env::var("OPENROUTER_API_KEY") {
            if !key.is_empty() {
                settings.api_key = Some(key);
            }
        }
    }

    settings.validate().context("invalid configuration")?;
    Ok(settings)
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".billy/config.toml"))
}

fn parse_config_file(path: &Path) -> Result<Settings> {
    #[derive(serde::Deserialize)]
    struct TomlConfig {
        #[serde(default)]
        api_key: Option<String>,
        #[serde(default)]
        model: Option<String>,
        #[serde(default)]
        temperature: Option<f32>,
        #[serde(default)]
        max_retries: Option<u32>,
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let toml_config: TomlConfig = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;

    let mut settings = Settings::default();
    settings.api_key = toml_config.api_key.filter(|k| !k.is_empty());
    if let Some(model) = toml_config.model {
        settings.model = model;
    }
    if let Some(temperature) = toml_config.temperature {
        settings.temperature = temperature;
    }
    if let Some(max_retries) = toml_config.max_retries {
        settings.max_retries = max_retries;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_full_config_file() {
        let file = write_config(
            r#"
            api_key = "sk-or-test"
            model = "test/model"
            temperature = 0.8
            max_retries = 4
            "#,
        );

        let settings = load_config(Some(file.path())).unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("sk-or-test"));
        assert_eq!(settings.model, "test/model");
        assert!((settings.temperature - 0.8).abs() < f32::EPSILON);
        assert_eq!(settings.max_retries, 4);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let file = write_config(r#"api_key = "sk-or-test""#);

        let settings = load_config(Some(file.path())).unwrap();
        assert_eq!(settings.model, super::super::DEFAULT_MODEL);
        assert!((settings.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(settings.max_retries, 2);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let file = write_config("temperature = 1.5");
        assert!(load_config(Some(file.path())).is_err());

        let file = write_config("max_retries = 9");
        assert!(load_config(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("no-such.toml");
        let settings = load_config(Some(missing.as_path())).unwrap();
        assert_eq!(settings.model, super::super::DEFAULT_MODEL);
        assert_eq!(settings.max_retries, 2);
    }
}
