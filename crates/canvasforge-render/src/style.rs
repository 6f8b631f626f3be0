//! CSS rule generation shared by canvas, preview and export.
//!
//! All three surfaces style widgets through this module, so what the
//! builder shows is what the exported page renders.

use canvasforge_core::widget::{
    ButtonProps, ButtonSize, ButtonVariant, ImageProps, InputProps, SelectProps, TableProps,
    TextProps, Widget, WidgetProps,
};

use crate::sanitize::sanitize_css;

/// A CSS rule: selector plus an ordered declaration list. Order is
/// preserved so output is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct CssRule {
    selector: String,
    declarations: Vec<(String, String)>,
}

impl CssRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Append a declaration. User-sourced values must be sanitized by
    /// the caller before they get here.
    pub fn decl(mut self, property: &str, value: impl Into<String>) -> Self {
        self.declarations.push((property.to_string(), value.into()));
        self
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Format as a CSS block with the given left indent.
    pub fn to_css(&self, indent: &str) -> String {
        let mut out = format!("{}{} {{\n", indent, self.selector);
        for (property, value) in &self.declarations {
            out.push_str(&format!("{}  {}: {};\n", indent, property, value));
        }
        out.push_str(&format!("{}}}", indent));
        out
    }
}

/// DOM id for a widget element.
pub fn element_id(widget: &Widget) -> String {
    format!("w-{}", widget.id)
}

/// Convert a hex color (`#RGB` or `#RRGGBB`) to an `rgba()` string.
/// Invalid input falls back to black, warn-logged.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        None => {
            log::warn!("Invalid hex color: {}", hex);
            format!("rgba(0, 0, 0, {})", alpha)
        }
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    if !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
    let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
    let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;
    Some((r, g, b))
}

/// A user-supplied color value, cleaned for direct CSS interpolation.
fn color(value: &str) -> String {
    sanitize_css(value)
}

/// All CSS rules for one widget: the positioned box plus any child
/// element rules.
pub fn widget_rules(widget: &Widget) -> Vec<CssRule> {
    let id = element_id(widget);
    let base = CssRule::new(format!("#{}", id))
        .decl("left", format!("{}px", widget.position.x))
        .decl("top", format!("{}px", widget.position.y))
        .decl("width", format!("{}px", widget.size.width))
        .decl("height", format!("{}px", widget.size.height));

    match &widget.props {
        WidgetProps::Text(props) => text_rules(base, widget, props),
        WidgetProps::Input(props) => input_rules(base, &id, props),
        WidgetProps::Button(props) => button_rules(base, props),
        WidgetProps::Image(props) => image_rules(base, props),
        WidgetProps::Table(props) => table_rules(base, &id, props),
        WidgetProps::Select(props) => select_rules(base, &id, props),
    }
}

fn text_rules(base: CssRule, widget: &Widget, props: &TextProps) -> Vec<CssRule> {
    let mut rule = base
        .decl("font-size", format!("{}px", props.font_size))
        .decl("color", color(&props.color))
        .decl("font-weight", props.font_weight.css_value())
        .decl("text-align", props.text_align.css_value());
    rule = match props.line_height {
        Some(multiplier) => rule.decl("line-height", format!("{}", multiplier)),
        // The original centers single-line text by matching the box height
        None => rule.decl("line-height", format!("{}px", widget.size.height)),
    };
    if let Some(family) = &props.font_family {
        rule = rule.decl("font-family", sanitize_css(family));
    }
    if let Some(spacing) = props.letter_spacing {
        rule = rule.decl("letter-spacing", format!("{}px", spacing));
    }
    rule = rule.decl("overflow", "hidden");
    vec![rule]
}

fn input_rules(base: CssRule, id: &str, props: &InputProps) -> Vec<CssRule> {
    let container = base
        .decl("display", "flex")
        .decl("flex-direction", "column")
        .decl("gap", "8px");
    let label = CssRule::new(format!("#{} label", id))
        .decl("font-size", "14px")
        .decl("font-weight", "500")
        .decl("color", "#374151");
    let mut field = CssRule::new(format!("#{} input", id))
        .decl("padding", "8px 12px")
        .decl("border", "1px solid #d1d5db")
        .decl("border-radius", "6px")
        .decl("font-size", "16px")
        .decl("font-family", "inherit");
    if props.disabled.unwrap_or(false) {
        field = field.decl("opacity", "0.5").decl("cursor", "not-allowed");
    }
    vec![container, label, field]
}

fn button_rules(base: CssRule, props: &ButtonProps) -> Vec<CssRule> {
    let (padding, font_size) = match props.size {
        ButtonSize::Small => ("8px 16px", "14px"),
        ButtonSize::Medium => ("12px 24px", "16px"),
        ButtonSize::Large => ("16px 32px", "18px"),
    };
    let bg = color(&props.color);
    let fg = color(&props.text_color);
    let mut rule = base;
    rule = match props.variant {
        ButtonVariant::Primary => rule
            .decl("background-color", bg)
            .decl("color", fg)
            .decl("border", "none"),
        ButtonVariant::Secondary => rule
            .decl("background-color", hex_to_rgba(&props.color, 0.1))
            .decl("color", bg)
            .decl("border", "none"),
        ButtonVariant::Outline => rule
            .decl("background-color", "transparent")
            .decl("color", bg.clone())
            .decl("border", format!("2px solid {}", bg)),
        ButtonVariant::Ghost => rule
            .decl("background-color", "transparent")
            .decl("color", bg)
            .decl("border", "none"),
        ButtonVariant::Danger => rule
            .decl("background-color", "#ef4444")
            .decl("color", "#ffffff")
            .decl("border", "none"),
    };
    rule = rule
        .decl("border-radius", format!("{}px", props.border_radius))
        .decl("padding", padding)
        .decl("font-size", font_size)
        .decl("font-weight", "500")
        .decl("font-family", "inherit")
        .decl("display", "inline-flex")
        .decl("align-items", "center")
        .decl("justify-content", "center")
        .decl("white-space", "nowrap")
        .decl("overflow", "hidden")
        .decl("transition", "all 0.2s ease");
    rule = if props.disabled.unwrap_or(false) {
        rule.decl("cursor", "not-allowed").decl("opacity", "0.5")
    } else {
        rule.decl("cursor", "pointer")
    };
    vec![rule]
}

fn image_rules(base: CssRule, props: &ImageProps) -> Vec<CssRule> {
    let mut rule = base
        .decl("object-fit", props.object_fit.css_value())
        .decl("border-radius", format!("{}px", props.border_radius))
        .decl("opacity", format!("{}", props.opacity));
    if let Some(grayscale) = props.grayscale {
        rule = rule.decl("filter", format!("grayscale({}%)", grayscale));
    }
    vec![rule]
}

fn table_rules(base: CssRule, id: &str, props: &TableProps) -> Vec<CssRule> {
    let container = base
        .decl("overflow", "auto")
        .decl("padding", "8px");
    let cell_border = if props.bordered {
        "1px solid #e5e7eb"
    } else {
        "none"
    };
    let table = CssRule::new(format!("#{} table", id))
        .decl("width", "100%")
        .decl("border-collapse", "collapse")
        .decl(
            "font-size",
            format!("{}px", props.font_size.unwrap_or(14.0)),
        )
        .decl("font-family", "inherit");
    let th = CssRule::new(format!("#{} th", id))
        .decl("background-color", color(&props.header_bg_color))
        .decl("color", color(&props.header_text_color))
        .decl("padding", "12px")
        .decl("text-align", "left")
        .decl("font-weight", "600")
        .decl("border", cell_border)
        .decl("border-bottom", "2px solid #e5e7eb");
    let mut td = CssRule::new(format!("#{} td", id))
        .decl("padding", "12px")
        .decl("border", cell_border)
        .decl("border-bottom", "1px solid #e5e7eb");
    if let Some(row_bg) = &props.row_bg_color {
        td = td.decl("background-color", color(row_bg));
    }

    let mut rules = vec![container, table, th, td];
    if props.striped {
        rules.push(
            CssRule::new(format!("#{} tbody tr:nth-child(even)", id))
                .decl("background-color", "#f9fafb"),
        );
    }
    if props.hoverable {
        rules.push(
            CssRule::new(format!("#{} tbody tr:hover", id))
                .decl("background-color", "#f3f4f6"),
        );
    }
    rules
}

fn select_rules(base: CssRule, id: &str, props: &SelectProps) -> Vec<CssRule> {
    let container = base
        .decl("display", "flex")
        .decl("flex-direction", "column")
        .decl("gap", "8px");
    let label = CssRule::new(format!("#{} label", id))
        .decl("font-size", "14px")
        .decl("font-weight", "500")
        .decl("color", "#374151");
    let mut field = CssRule::new(format!("#{} select", id))
        .decl("padding", "8px 12px")
        .decl("border", "1px solid #d1d5db")
        .decl("border-radius", "6px")
        .decl("font-size", "16px")
        .decl("font-family", "inherit")
        .decl("background-color", "#ffffff");
    if props.disabled.unwrap_or(false) {
        field = field.decl("opacity", "0.5").decl("cursor", "not-allowed");
    }
    vec![container, label, field]
}
