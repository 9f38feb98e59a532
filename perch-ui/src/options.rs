use serde::{Deserialize, Serialize};

use crate::error::DropdownError;

/// Behaviour of a dropdown, captured when it opens
///
/// Field names deserialize in camelCase so options can be read straight
/// from a JSON data attribute:
///
/// ```ignore
/// let options = DropdownOptions::from_json(r#"{"centered": true, "closeOnScroll": false}"#)?;
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropdownOptions {
    /// Space-separated classes for the overlay element
    pub class_name: String,
    /// Center the overlay horizontally under the trigger
    pub centered: bool,
    /// Close when clicking inside the overlay
    pub close_on_click_inside: bool,
    /// Close when the document scrolls (scrolling inside the overlay never closes)
    pub close_on_scroll: bool,
}

impl Default for DropdownOptions {
    fn default() -> Self {
        Self {
            class_name: "dropdown".to_string(),
            centered: false,
            close_on_click_inside: true,
            close_on_scroll: true,
        }
    }
}

impl DropdownOptions {
    pub fn from_json(json: &str) -> Result<Self, DropdownError> {
        serde_json::from_str(json).map_err(|e| DropdownError::InvalidOptions(e.to_string()))
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    pub fn close_on_click_inside(mut self, close: bool) -> Self {
        self.close_on_click_inside = close;
        self
    }

    pub fn close_on_scroll(mut self, close: bool) -> Self {
        self.close_on_scroll = close;
        self
    }

    /// Individual class tokens of `class_name`
    pub fn class_tokens(&self) -> impl Iterator<Item = &str> {
        self.class_name.split_whitespace()
    }
}
