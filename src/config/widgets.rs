//! Widget configuration for the demo host
//!
//! Initial state for the selector and the text field.

use serde::Deserialize;

/// Selector setup
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorConfig {
    /// Labels in display order
    pub options: Vec<String>,
    /// Initially selected index (clamped by the widget)
    pub selected: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            options: ["Low", "Medium", "High"]
                .into_iter()
                .map(String::from)
                .collect(),
            selected: 0,
        }
    }
}

/// Selector settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileSelector {
    pub options: Option<Vec<String>>,
    pub selected: Option<usize>,
}

impl SelectorConfig {
    /// Create from file config with defaults
    ///
    /// `env_options` is a comma-separated list that replaces the file's options.
    pub fn from_file(file: Option<FileSelector>, env_options: Option<String>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        // A blank list means "not set", never an empty selector
        let options = env_options
            .map(|list| parse_option_list(&list))
            .filter(|options| !options.is_empty())
            .or(file.options.filter(|options| !options.is_empty()))
            .unwrap_or(defaults.options);

        Self {
            options,
            selected: file.selected.unwrap_or(defaults.selected),
        }
    }
}

/// Split "a, b,,c" into ["a", "b", "c"]
pub fn parse_option_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Text field setup
#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldConfig {
    /// Shown while the field is empty
    pub placeholder: String,
}

impl Default for TextFieldConfig {
    fn default() -> Self {
        Self {
            placeholder: "Type something, Enter to submit".to_string(),
        }
    }
}

/// Text field settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileTextField {
    pub placeholder: Option<String>,
}

impl TextFieldConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileTextField>, env_placeholder: Option<String>) -> Self {
        let file = file.unwrap_or_default();

        Self {
            placeholder: env_placeholder
                .or(file.placeholder)
                .unwrap_or_else(|| Self::default().placeholder),
        }
    }
}
