//! Input widget properties.

use serde::{Deserialize, Serialize};

/// The `type` attribute of the rendered input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
    Date,
}

impl InputType {
    /// Get the HTML attribute value for this input type.
    pub fn attr_value(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
            InputType::Number => "number",
            InputType::Tel => "tel",
            InputType::Url => "url",
            InputType::Date => "date",
        }
    }
}

/// Properties of an input widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputProps {
    /// Label rendered above the field.
    pub label: String,
    /// Placeholder text.
    pub placeholder: String,
    /// The HTML input type.
    pub input_type: InputType,
    /// Whether the field is required.
    pub required: bool,
    /// Pre-filled value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Maximum character count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    /// Minimum character count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    /// Validation regex pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Whether the field is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl Default for InputProps {
    fn default() -> Self {
        Self {
            label: "Input".to_string(),
            placeholder: "Enter text...".to_string(),
            input_type: InputType::Text,
            required: false,
            default_value: None,
            max_length: None,
            min_length: None,
            pattern: None,
            disabled: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let props = InputProps::default();
        assert_eq!(props.label, "Input");
        assert_eq!(props.placeholder, "Enter text...");
        assert_eq!(props.input_type, InputType::Text);
        assert!(!props.required);
    }

    #[test]
    fn test_input_type_serde() {
        let json = serde_json::to_string(&InputType::Email).unwrap();
        assert_eq!(json, "\"email\"");
        let back: InputType = serde_json::from_str("\"password\"").unwrap();
        assert_eq!(back, InputType::Password);
    }

    #[test]
    fn test_deserialize_partial() {
        // Optionals absent on the wire deserialize fine
        let props: InputProps = serde_json::from_str(
            r#"{"label":"Email","placeholder":"you@example.com","inputType":"email","required":true}"#,
        )
        .unwrap();
        assert_eq!(props.input_type, InputType::Email);
        assert!(props.required);
        assert!(props.max_length.is_none());
    }
}
