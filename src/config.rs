use crate::error::{config::ConfigError, AppError};

/// Timezone applied when the TIMEZONE environment variable is unset.
const DEFAULT_TIMEZONE: &str = "Europe/Helsinki";

/// Environment-sourced application configuration.
pub struct Config {
    /// Discord bot token. Required; startup fails without it.
    pub discord_token: String,

    /// IANA timezone name attached to every scheduled event window.
    pub timezone: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - DISCORD_TOKEN is not set
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_token: std::env::var("DISCORD_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            timezone: std::env::var("TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests token requirement and the timezone default in one place, since
    /// the process environment is shared across test threads.
    ///
    /// Expected: Err without DISCORD_TOKEN; with it, TIMEZONE falls back to
    /// Europe/Helsinki when unset and is honored when set
    #[test]
    fn loads_config_from_environment() {
        std::env::remove_var("DISCORD_TOKEN");
        std::env::remove_var("TIMEZONE");
        assert!(Config::from_env().is_err());

        std::env::set_var("DISCORD_TOKEN", "test-token");
        let config = Config::from_env().unwrap();
        assert_eq!(config.discord_token, "test-token");
        assert_eq!(config.timezone, DEFAULT_TIMEZONE);

        std::env::set_var("TIMEZONE", "Europe/Stockholm");
        let config = Config::from_env().unwrap();
        assert_eq!(config.timezone, "Europe/Stockholm");

        std::env::remove_var("DISCORD_TOKEN");
        std::env::remove_var("TIMEZONE");
    }
}
