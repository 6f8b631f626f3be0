//! Image widget properties.

use serde::{Deserialize, Serialize};

/// Valid opacity range.
pub const OPACITY_MIN: f64 = 0.0;
pub const OPACITY_MAX: f64 = 1.0;

/// CSS `object-fit` behavior for the image content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    Contain,
    #[default]
    Cover,
    Fill,
    None,
    ScaleDown,
}

impl ObjectFit {
    /// Get the CSS value for this fit mode.
    pub fn css_value(&self) -> &'static str {
        match self {
            ObjectFit::Contain => "contain",
            ObjectFit::Cover => "cover",
            ObjectFit::Fill => "fill",
            ObjectFit::None => "none",
            ObjectFit::ScaleDown => "scale-down",
        }
    }
}

/// Properties of an image widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProps {
    /// Image source URL. Sanitized at render time against script-bearing
    /// schemes.
    pub src: String,
    /// Alternative text.
    pub alt: String,
    /// How the image fills its box.
    pub object_fit: ObjectFit,
    /// Corner radius in pixels (valid range 0-50, enforced at export).
    pub border_radius: f64,
    /// Opacity (valid range 0-1, enforced at export).
    pub opacity: f64,
    /// Grayscale filter percentage (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grayscale: Option<f64>,
}

impl Default for ImageProps {
    fn default() -> Self {
        Self {
            src: "https://via.placeholder.com/300x200".to_string(),
            alt: "Image".to_string(),
            object_fit: ObjectFit::Cover,
            border_radius: 0.0,
            opacity: 1.0,
            grayscale: None,
        }
    }
}
