// Session settings

use anyhow::{ensure, Result};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "google/palm-2-chat-bison";

const DEFAULT_TEMPERATURE: f32 = 0.3;
const DEFAULT_MAX_RETRIES: u32 = 2;

/// Per-session request configuration. Adjustable at runtime via slash
/// commands; never persisted back to disk.
#[derive(Debug, Clone)]
pub struct Settings {
    /// OpenRouter API key. Queries are refused until one is supplied.
    pub api_key: Option<String>,

    /// Model identifier sent with each request.
    pub model: String,

    /// Sampling temperature, 0.0 (precise) to 1.0 (creative).
    pub temperature: f32,

    /// Total attempts per request when the response cannot be parsed.
    pub max_retries: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl Settings {
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    pub fn set_temperature(&mut self, temperature: f32) -> Result<()> {
        ensure!(
            (0.0..=1.0).contains(&temperature),
            "temperature must be between 0.0 and 1.0"
        );
        self.temperature = temperature;
        Ok(())
    }

    pub fn set_max_retries(&mut self, max_retries: u32) -> Result<()> {
        ensure!(
            (1..=5).contains(&max_retries),
            "max retries must be between 1 and 5"
        );
        self.max_retries = max_retries;
        Ok(())
    }

    /// Range checks for values that arrived from a config file.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (0.0..=1.0).contains(&self.temperature),
            "temperature must be between 0.0 and 1.0"
        );
        ensure!(
            (1..=5).contains(&self.max_retries),
            "max retries must be between 1 and 5"
        );
        ensure!(!self.model.is_empty(), "model must not be empty");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert!((settings.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(settings.max_retries, 2);
        assert!(!settings.has_api_key());
    }

    #[test]
    fn test_temperature_range_is_enforced() {
        let mut settings = Settings::default();
        assert!(settings.set_temperature(1.0).is_ok());
        assert!(settings.set_temperature(1.1).is_err());
        assert!(settings.set_temperature(-0.1).is_err());
        assert!((settings.temperature - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_retry_range_is_enforced() {
        let mut settings = Settings::default();
        assert!(settings.set_max_retries(5).is_ok());
        assert!(settings.set_max_retries(0).is_err());
        assert!(settings.set_max_retries(6).is_err());
        assert_eq!(settings.max_retries, 5);
    }

    #[test]
    fn test_empty_api_key_counts_as_missing() {
        let mut settings = Settings::default();
        settings.api_key = Some(String::new());
        assert!(!settings.has_api_key());

        settings.api_key = Some("sk-or-abc".to_string());
        assert!(settings.has_api_key());
    }
}
