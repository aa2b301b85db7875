//! Configuration management.
//!
//! # Data Flow
//! ```text
//! process environment (+ optional .env file)
//!     → Settings::from_env (parse & validate)
//!     → Settings (typed, immutable)
//!     → consumed once by main at startup
//! ```
//!
//! # Design Decisions
//! - Settings are read once; there is no reload path
//! - Only `MONGO_URI` is required, everything else has a default
//! - Parse failures are typed errors, not silent fallbacks

use thiserror::Error;

/// Listening port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

/// Error type for environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is absent from the environment.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is present but cannot be parsed.
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Immutable application settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Listening port (`PORT`, default 5000).
    pub port: u16,

    /// MongoDB connection string (`MONGO_URI`, required).
    pub mongo_uri: String,

    /// Whether error responses include a diagnostic backtrace
    /// (`DEBUG_ERRORS`, default off).
    pub debug_errors: bool,
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    var: "PORT",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };

        let mongo_uri = get("MONGO_URI").ok_or(ConfigError::Missing("MONGO_URI"))?;

        let debug_errors = get("DEBUG_ERRORS")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Ok(Self {
            port,
            mongo_uri,
            debug_errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |var| {
            vars.iter()
                .find(|(k, _)| *k == var)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn port_defaults_when_unset() {
        let settings =
            Settings::from_lookup(lookup(&[("MONGO_URI", "mongodb://localhost:27017/app")]))
                .unwrap();
        assert_eq!(settings.port, DEFAULT_PORT);
        assert!(!settings.debug_errors);
    }

    #[test]
    fn explicit_port_is_used() {
        let settings = Settings::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("MONGO_URI", "mongodb://localhost:27017/app"),
        ]))
        .unwrap();
        assert_eq!(settings.port, 8080);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = Settings::from_lookup(lookup(&[
            ("PORT", "not-a-port"),
            ("MONGO_URI", "mongodb://localhost:27017/app"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { var: "PORT", .. })
        ));
    }

    #[test]
    fn missing_mongo_uri_is_rejected() {
        let result = Settings::from_lookup(lookup(&[("PORT", "8080")]));
        assert!(matches!(result, Err(ConfigError::Missing("MONGO_URI"))));
    }

    #[test]
    fn debug_errors_accepts_truthy_forms() {
        for truthy in ["1", "true", "YES", " on "] {
            let settings = Settings::from_lookup(move |var| match var {
                "MONGO_URI" => Some("mongodb://localhost:27017/app".to_string()),
                "DEBUG_ERRORS" => Some(truthy.to_string()),
                _ => None,
            })
            .unwrap();
            assert!(settings.debug_errors, "expected {truthy:?} to enable");
        }

        let settings = Settings::from_lookup(|var| match var {
            "MONGO_URI" => Some("mongodb://localhost:27017/app".to_string()),
            "DEBUG_ERRORS" => Some("off".to_string()),
            _ => None,
        })
        .unwrap();
        assert!(!settings.debug_errors);
    }
}
