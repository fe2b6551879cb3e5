use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Component configuration, supplied as TOML at registration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavSearchConfig {
    #[serde(default)]
    pub element: ElementConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub search: SearchSettings,
}

impl NavSearchConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.element.tag_name.is_empty() {
            errors.push("tag_name must not be empty".to_string());
        } else if !self.element.tag_name.contains('-') {
            errors.push(format!(
                "tag_name must contain a hyphen: {}",
                self.element.tag_name
            ));
        }

        if self.element.results_tag.is_empty() {
            errors.push("results_tag must not be empty".to_string());
        }

        if self.input.debounce_ms == 0 {
            errors.push("debounce_ms must be at least 1".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        let tag_valid = self.element.tag_name.contains('-');
        Self {
            element: ElementConfig {
                tag_name: if tag_valid {
                    self.element.tag_name.clone()
                } else {
                    defaults.element.tag_name
                },
                results_tag: if self.element.results_tag.is_empty() {
                    defaults.element.results_tag
                } else {
                    self.element.results_tag.clone()
                },
                old_list_attribute: self.element.old_list_attribute.clone(),
            },
            input: InputConfig {
                debounce_ms: if self.input.debounce_ms == 0 {
                    defaults.input.debounce_ms
                } else {
                    self.input.debounce_ms
                },
            },
            search: self.search.clone(),
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.input.debounce_ms)
    }
}

/// Custom element registration and DOM naming.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementConfig {
    #[serde(default = "default_tag_name")]
    pub tag_name: String,
    /// Element created to hold rendered results.
    #[serde(default = "default_results_tag")]
    pub results_tag: String,
    /// Attribute the input's original `list` value is moved to.
    #[serde(default = "default_old_list_attribute")]
    pub old_list_attribute: String,
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self {
            tag_name: default_tag_name(),
            results_tag: default_results_tag(),
            old_list_attribute: default_old_list_attribute(),
        }
    }
}

fn default_tag_name() -> String {
    "nav-search".to_string()
}

fn default_results_tag() -> String {
    "nav".to_string()
}

fn default_old_list_attribute() -> String {
    "data-old-list".to_string()
}

/// Input event handling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Quiet period after the last keystroke before filtering runs.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    300
}

/// Matching behavior.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Joins value and label in the search key.
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Collapse the results when a non-empty query matches nothing.
    #[serde(default = "default_true")]
    pub collapse_on_no_match: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            collapse_on_no_match: true,
        }
    }
}

fn default_separator() -> String {
    "\n".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
