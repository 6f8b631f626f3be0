//! Select (dropdown) widget properties.

use serde::{Deserialize, Serialize};

/// One dropdown option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Displayed label.
    pub label: String,
    /// Whether the option is selectable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: None,
        }
    }
}

/// Properties of a select widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectProps {
    /// Label rendered above the control.
    pub label: String,
    /// Dropdown options in display order.
    pub options: Vec<SelectOption>,
    /// Value of the pre-selected option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Placeholder shown when nothing is selected.
    pub placeholder: String,
    /// Whether a selection is required.
    pub required: bool,
    /// Allow multiple selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    /// Whether the control is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl Default for SelectProps {
    fn default() -> Self {
        Self {
            label: "Select".to_string(),
            options: vec![
                SelectOption::new("option1", "Option 1"),
                SelectOption::new("option2", "Option 2"),
                SelectOption::new("option3", "Option 3"),
            ],
            default_value: None,
            placeholder: "Choose an option...".to_string(),
            required: false,
            multiple: None,
            disabled: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let props = SelectProps::default();
        assert_eq!(props.label, "Select");
        assert_eq!(props.options.len(), 3);
        assert_eq!(props.options[0].value, "option1");
        assert_eq!(props.placeholder, "Choose an option...");
    }

    #[test]
    fn test_serde_round_trip() {
        let props = SelectProps::default();
        let json = serde_json::to_string(&props).unwrap();
        let back: SelectProps = serde_json::from_str(&json).unwrap();
        assert_eq!(back, props);
    }
}
