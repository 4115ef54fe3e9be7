//! Console host configuration, read from the environment once at startup.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;
use crate::links::{DEFAULT_FEEDBACK_EMAIL, MobileOs};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Settings for the console host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding `<language>.json` quote banks and `main.json`.
    pub assets_dir: PathBuf,
    /// Preference file.
    pub preferences_path: PathBuf,
    /// Duration of the card's entrance and exit transitions.
    pub transition: Duration,
    /// OS whose store "rate us" opens.
    pub os: MobileOs,
    /// Address used by "write to us".
    pub feedback_email: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// Fixed RNG seed, for reproducible sessions.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            preferences_path: PathBuf::from("talktoswami-preferences.json"),
            transition: Duration::from_millis(300),
            os: MobileOs::default(),
            feedback_email: DEFAULT_FEEDBACK_EMAIL.to_owned(),
            log_format: LogFormat::default(),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, starting from the defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(v) = lookup("TALKTOSWAMI_ASSETS_DIR") {
            config.assets_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("TALKTOSWAMI_PREFERENCES_PATH") {
            config.preferences_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("TALKTOSWAMI_TRANSITION_MS") {
            let millis: u64 = v.trim().parse().map_err(|e| {
                AppError::Config(format!("TALKTOSWAMI_TRANSITION_MS must be a number: {e}"))
            })?;
            config.transition = Duration::from_millis(millis);
        }
        if let Some(v) = lookup("TALKTOSWAMI_PLATFORM") {
            config.os = v
                .parse()
                .map_err(|e| AppError::Config(format!("TALKTOSWAMI_PLATFORM: {e}")))?;
        }
        if let Some(v) = lookup("TALKTOSWAMI_FEEDBACK_EMAIL") {
            config.feedback_email = v;
        }
        if let Some(v) = lookup("TALKTOSWAMI_LOG_FORMAT") {
            config.log_format = match v.to_ascii_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                other => {
                    return Err(AppError::Config(format!(
                        "TALKTOSWAMI_LOG_FORMAT must be text or json, got '{other}'"
                    )));
                }
            };
        }
        if let Some(v) = lookup("TALKTOSWAMI_SEED") {
            let seed = v.trim().parse().map_err(|e| {
                AppError::Config(format!("TALKTOSWAMI_SEED must be a number: {e}"))
            })?;
            config.seed = Some(seed);
        }

        Ok(config)
    }
}
