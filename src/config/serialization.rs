//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Render a string as a TOML literal (quoted and escaped)
fn quoted(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

impl Config {
    /// Generate TOML string from config
    pub fn to_toml(&self) -> String {
        let options = toml::Value::Array(
            self.selector
                .options
                .iter()
                .map(|o| toml::Value::String(o.clone()))
                .collect(),
        );

        format!(
            r#"# knobs configuration

# Selector: labels in display order, and the initially selected index
# KNOBS_OPTIONS="a,b,c" overrides the options
[selector]
options = {options}
selected = {selected}

# Text field (KNOBS_PLACEHOLDER overrides)
[text_field]
placeholder = {placeholder}

# Logging configuration (RUST_LOG env var overrides the level)
[logging]
level = {log_level}
# File logging (in addition to the TUI log pane); KNOBS_LOG_DIR overrides file_dir
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            options = options,
            selected = self.selector.selected,
            placeholder = quoted(&self.text_field.placeholder),
            log_level = quoted(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quoted(&self.logging.file_dir.to_string_lossy()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = quoted(&self.logging.file_prefix),
        )
    }
}
