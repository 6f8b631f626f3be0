//! Text widget properties.

use serde::{Deserialize, Serialize};

/// Valid font size range in pixels.
pub const FONT_SIZE_MIN: f64 = 8.0;
pub const FONT_SIZE_MAX: f64 = 72.0;

/// Font weight options, mirroring the CSS `font-weight` keywords and
/// numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "bold")]
    Bold,
    #[serde(rename = "100")]
    W100,
    #[serde(rename = "200")]
    W200,
    #[serde(rename = "300")]
    W300,
    #[serde(rename = "400")]
    W400,
    #[serde(rename = "500")]
    W500,
    #[serde(rename = "600")]
    W600,
    #[serde(rename = "700")]
    W700,
    #[serde(rename = "800")]
    W800,
    #[serde(rename = "900")]
    W900,
}

impl FontWeight {
    /// Get the CSS value for this weight.
    pub fn css_value(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
            FontWeight::W100 => "100",
            FontWeight::W200 => "200",
            FontWeight::W300 => "300",
            FontWeight::W400 => "400",
            FontWeight::W500 => "500",
            FontWeight::W600 => "600",
            FontWeight::W700 => "700",
            FontWeight::W800 => "800",
            FontWeight::W900 => "900",
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    /// Get the CSS value for this alignment.
    pub fn css_value(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

/// Properties of a text widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    /// The displayed text content.
    pub content: String,
    /// Font size in pixels (valid range 8-72, enforced at export).
    pub font_size: f64,
    /// Text color as a hex string, e.g. `#000000`.
    pub color: String,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Horizontal alignment.
    pub text_align: TextAlign,
    /// Font family override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Line height multiplier (1.0-3.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    /// Letter spacing in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            content: "Text".to_string(),
            font_size: 16.0,
            color: "#000000".to_string(),
            font_weight: FontWeight::Normal,
            text_align: TextAlign::Left,
            font_family: None,
            line_height: None,
            letter_spacing: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let props = TextProps::default();
        assert_eq!(props.content, "Text");
        assert!((props.font_size - 16.0).abs() < f64::EPSILON);
        assert_eq!(props.color, "#000000");
    }

    #[test]
    fn test_font_weight_serde() {
        let json = serde_json::to_string(&FontWeight::W600).unwrap();
        assert_eq!(json, "\"600\"");
        let back: FontWeight = serde_json::from_str("\"bold\"").unwrap();
        assert_eq!(back, FontWeight::Bold);
    }

    #[test]
    fn test_serde_camel_case() {
        let json = serde_json::to_value(TextProps::default()).unwrap();
        assert!(json.get("fontSize").is_some());
        assert!(json.get("textAlign").is_some());
        // Unset optionals stay off the wire
        assert!(json.get("lineHeight").is_none());
    }
}
