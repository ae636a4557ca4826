use crate::error::{AgriTechError, Result};
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub weather: WeatherConfig,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct WeatherConfig {
    pub api_key: String,
    #[serde(default = "default_city")]
    pub default_city: String,
}

fn default_city() -> String {
    "Delhi".to_string()
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &"[REDACTED]")
            .field("default_city", &self.default_city)
            .finish()
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(AgriTechError::Config(format!(
                "Config file not found at {:?}. Run `agritech init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AgriTechError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| AgriTechError::Config(format!("Failed to parse config: {}", e)))?;

        if config.weather.api_key.trim().is_empty() {
            return Err(AgriTechError::Config(
                "OpenWeatherMap API key is empty. Run `agritech init` to set up.".into(),
            ));
        }

        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("agritech").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        // Return XDG path as the default (will trigger "not found" in load)
        let default_path = dirs::config_dir()
            .ok_or_else(|| AgriTechError::Config("Cannot determine config directory".into()))?
            .join("agritech")
            .join("config.yaml");
        Ok(default_path)
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/agritech/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgriTechError::Config("Cannot determine config directory".into()))?
            .join("agritech");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("No configuration found. Let's set up AgriTech!");
        println!();

        println!("OpenWeatherMap");
        let api_key: String = Input::new()
            .with_prompt("  API key")
            .interact_text()
            .map_err(|e| AgriTechError::Config(format!("Input error: {}", e)))?;

        let city: String = Input::new()
            .with_prompt("  Default city")
            .default("Delhi".into())
            .interact_text()
            .map_err(|e| AgriTechError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            weather: WeatherConfig {
                api_key,
                default_city: city,
            },
        };

        // Write to default config path
        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AgriTechError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# AgriTech Configuration\n# Generated by `agritech init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weather: WeatherConfig {
                api_key: String::new(),
                default_city: default_city(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_var_substitution() {
        std::env::set_var("AGRITECH_TEST_KEY", "abc123");
        let yaml = "weather:\n  api_key: ${AGRITECH_TEST_KEY}\n  default_city: Pune\n";
        let substituted = Config::substitute_env_vars(yaml);
        assert!(substituted.contains("abc123"));
        assert!(!substituted.contains("${AGRITECH_TEST_KEY}"));
    }

    #[test]
    fn unknown_env_var_left_in_place() {
        let yaml = "api_key: ${AGRITECH_DEFINITELY_UNSET_VAR}\n";
        let substituted = Config::substitute_env_vars(yaml);
        assert!(substituted.contains("${AGRITECH_DEFINITELY_UNSET_VAR}"));
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = Config {
            weather: WeatherConfig {
                api_key: "secret".into(),
                default_city: "Delhi".into(),
            },
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
