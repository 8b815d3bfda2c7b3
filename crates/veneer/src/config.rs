//! Per-instance presentation configuration.
//!
//! Configuration is cosmetic: it names the classes a renderer applies to each
//! part of the widget and never changes how selection or expansion behave.
//! Every field has a default, so a partial TOML table overrides only what it
//! names.
//!
//! ```
//! use veneer::SelectConfig;
//!
//! let config = SelectConfig::from_toml_str(r#"
//! placeholder = "Pick a fruit"
//!
//! [classes]
//! selected = "is-selected"
//! "#).unwrap();
//!
//! assert_eq!(config.classes.selected, "is-selected");
//! assert_eq!(config.classes.trigger, "custom-select-trigger");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Class names applied to each part of the rendered widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    /// Wrapper around the whole widget.
    pub container: String,
    /// The always-visible trigger showing the current label.
    pub trigger: String,
    /// The option list.
    pub list: String,
    /// Each option in the list.
    pub option: String,
    /// Added to the selected option.
    pub selected: String,
    /// Added to the container while the list is expanded.
    pub open: String,
    /// Added to the container once the widget is disabled.
    pub disabled: String,
    /// Added to the container while it holds focus.
    pub focused: String,
    /// Applied to the visually hidden native control.
    pub hidden_native: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            container: "custom-select".into(),
            trigger: "custom-select-trigger".into(),
            list: "custom-options".into(),
            option: "custom-option".into(),
            selected: "selection".into(),
            open: "opened".into(),
            disabled: "disabled".into(),
            focused: "focus".into(),
            hidden_native: "custom-select-hidden".into(),
        }
    }
}

/// Configuration for one select widget instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Class name overrides.
    pub classes: ClassNames,
    /// Optional accessible hint a renderer may show alongside the trigger.
    pub placeholder: Option<String>,
}

impl SelectConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Set the class names using builder pattern.
    pub fn with_classes(mut self, classes: ClassNames) -> Self {
        self.classes = classes;
        self
    }

    /// Set the placeholder using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}
