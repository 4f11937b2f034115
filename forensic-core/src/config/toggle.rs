//! Environment-driven initial toggle.

use crate::error::ForensicError;

/// Environment variable holding the initial value of the toggle.
pub const TOGGLE_ENV_VAR: &str = "FORENSIC_ON";

/// Logger configuration resolved at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForensicConfig {
    pub enabled: bool,
}

impl Default for ForensicConfig {
    /// Logging starts switched on unless told otherwise.
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl ForensicConfig {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    ///
    /// An unparsable value keeps the default and is reported through the
    /// host logger.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(TOGGLE_ENV_VAR) {
            match parse_toggle(&raw) {
                Ok(enabled) => config.enabled = enabled,
                Err(e) => {
                    log::warn!(
                        "FORENSIC_CONFIG_IGNORED {} default_enabled={}",
                        e,
                        config.enabled
                    );
                }
            }
        }

        config
    }
}

/// Parse a toggle value (`1/true/on/yes`, `0/false/off/no`, any case).
pub fn parse_toggle(raw: &str) -> Result<bool, ForensicError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ForensicError::InvalidToggle {
            var: TOGGLE_ENV_VAR.to_string(),
            value: raw.to_string(),
        }),
    }
}
