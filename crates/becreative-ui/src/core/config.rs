//! Startup configuration read from the host page.
//!
//! # Design
//! - Every field has a default so an absent or partial document still loads.
//! - Parsing never aborts startup: callers get defaults plus the error to log.

use becreative_catalog::SectionId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Element id of the optional JSON config script in `index.html`.
pub const CONFIG_ELEMENT_ID: &str = "becreative-config";

/// Default delay before the copied indicator clears.
pub const DEFAULT_COPIED_RESET_MS: u32 = 2_000;
/// Default lifetime of a toast.
pub const DEFAULT_TOAST_LIFETIME_MS: u32 = 4_000;
/// Default number of visible toasts.
pub const DEFAULT_TOAST_LIMIT: usize = 4;

/// Errors raised while reading [`UiConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The script body is not valid JSON for the config shape.
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but holds an unusable value.
    #[error("config field `{field}` is invalid: {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Runtime knobs for the docs site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Delay before the copied indicator clears, in milliseconds.
    pub copied_reset_ms: u32,
    /// Toast lifetime, in milliseconds.
    pub toast_lifetime_ms: u32,
    /// Maximum visible toasts.
    pub toast_limit: usize,
    /// Section shown on first render.
    pub initial_section: SectionId,
    /// Whether the sidebar starts narrowed to icons.
    pub sidebar_collapsed: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            copied_reset_ms: DEFAULT_COPIED_RESET_MS,
            toast_lifetime_ms: DEFAULT_TOAST_LIFETIME_MS,
            toast_limit: DEFAULT_TOAST_LIMIT,
            initial_section: SectionId::default(),
            sidebar_collapsed: false,
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for zero delays or limits.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.copied_reset_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "copied_reset_ms",
                reason: "must be greater than zero",
            });
        }
        if self.toast_lifetime_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "toast_lifetime_ms",
                reason: "must be greater than zero",
            });
        }
        if self.toast_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "toast_limit",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }

    /// Load from an optional script body, falling back to defaults.
    ///
    /// A missing or blank body is not an error.
    #[must_use]
    pub fn load_or_default(raw: Option<&str>) -> (Self, Option<ConfigError>) {
        match raw.map(str::trim).filter(|body| !body.is_empty()) {
            None => (Self::default(), None),
            Some(body) => match Self::from_json(body) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(err)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = UiConfig::default();
        assert_eq!(config.copied_reset_ms, 2_000);
        assert_eq!(config.toast_lifetime_ms, 4_000);
        assert_eq!(config.toast_limit, 4);
        assert_eq!(config.initial_section, SectionId::Colors);
        assert!(!config.sidebar_collapsed);
    }

    #[test]
    fn partial_documents_keep_remaining_defaults() -> Result<(), ConfigError> {
        let config = UiConfig::from_json(r#"{"initial_section":"grid","copied_reset_ms":500}"#)?;
        assert_eq!(config.initial_section, SectionId::Grid);
        assert_eq!(config.copied_reset_ms, 500);
        assert_eq!(config.toast_limit, DEFAULT_TOAST_LIMIT);
        Ok(())
    }

    #[test]
    fn missing_or_blank_script_is_silent() {
        assert_eq!(UiConfig::load_or_default(None).0, UiConfig::default());
        let (config, err) = UiConfig::load_or_default(Some("   \n"));
        assert_eq!(config, UiConfig::default());
        assert!(err.is_none());
    }

    #[test]
    fn malformed_json_falls_back_with_error() {
        let (config, err) = UiConfig::load_or_default(Some("{not json"));
        assert_eq!(config, UiConfig::default());
        assert!(matches!(err, Some(ConfigError::Parse(_))));
    }

    #[test]
    fn zero_limits_are_rejected() {
        let (config, err) = UiConfig::load_or_default(Some(r#"{"toast_limit":0}"#));
        assert_eq!(config.toast_limit, DEFAULT_TOAST_LIMIT);
        assert!(matches!(
            err,
            Some(ConfigError::Invalid {
                field: "toast_limit",
                ..
            })
        ));
    }

    #[test]
    fn unknown_fields_are_reported() {
        let (_, err) = UiConfig::load_or_default(Some(r#"{"theme":"dark"}"#));
        assert!(matches!(err, Some(ConfigError::Parse(_))));
    }
}
