use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AppConfig {
    pub prompt: String,
    pub exit_command: String,
    pub skip_blank_lines: bool,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_sources("parking", "PARKING")
    }

    /// Defaults, then the optional `config_name` file, then environment
    /// variables carrying `env_prefix`.
    pub fn from_sources(config_name: &str, env_prefix: &str) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Config::builder()
            .set_default("prompt", defaults.prompt)?
            .set_default("exit_command", defaults.exit_command)?
            .set_default("skip_blank_lines", defaults.skip_blank_lines)?
            .add_source(File::with_name(config_name).required(false))
            .add_source(Environment::with_prefix(env_prefix))
            .build()?
            .try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompt: "$ ".to_string(),
            exit_command: "exit".to_string(),
            skip_blank_lines: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_sources() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent");
        let config = AppConfig::from_sources(missing.to_str().unwrap(), "PARKING_TEST_NONE").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("parking.toml");
        std::fs::write(&path, "prompt = \"> \"\nskip_blank_lines = false\n").unwrap();

        let name = temp_dir.path().join("parking");
        let config = AppConfig::from_sources(name.to_str().unwrap(), "PARKING_TEST_FILE").unwrap();
        assert_eq!(config.prompt, "> ");
        assert!(!config.skip_blank_lines);
        assert_eq!(config.exit_command, "exit");
    }

    #[test]
    fn test_environment_overrides_defaults() {
        env::set_var("PARKING_TEST_ENV_EXIT_COMMAND", "quit");
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent");

        let config = AppConfig::from_sources(missing.to_str().unwrap(), "PARKING_TEST_ENV").unwrap();
        assert_eq!(config.exit_command, "quit");
        env::remove_var("PARKING_TEST_ENV_EXIT_COMMAND");
    }
}
