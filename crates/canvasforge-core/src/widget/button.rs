//! Button widget properties.

use serde::{Deserialize, Serialize};

/// Valid border radius range in pixels.
pub const BORDER_RADIUS_MIN: f64 = 0.0;
pub const BORDER_RADIUS_MAX: f64 = 50.0;

/// Visual style variant of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
}

/// Button size preset, mapped to padding and font size at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Properties of a button widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonProps {
    /// Button label text.
    pub text: String,
    /// Visual variant.
    pub variant: ButtonVariant,
    /// Size preset.
    pub size: ButtonSize,
    /// Background color as a hex string.
    pub color: String,
    /// Text color as a hex string.
    pub text_color: String,
    /// Corner radius in pixels (valid range 0-50, enforced at export).
    pub border_radius: f64,
    /// Whether the button is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Stretch to the full widget width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_width: Option<bool>,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            text: "Button".to_string(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            color: "#3b82f6".to_string(),
            text_color: "#ffffff".to_string(),
            border_radius: 6.0,
            disabled: None,
            full_width: None,
        }
    }
}
