//! Pre-export validation.
//!
//! Every widget is checked before any markup is emitted, so a failed
//! export never produces a partial document.

use canvasforge_core::Scene;
use canvasforge_core::widget::{
    BORDER_RADIUS_MAX, BORDER_RADIUS_MIN, FONT_SIZE_MAX, FONT_SIZE_MIN, OPACITY_MAX, OPACITY_MIN,
    Widget, WidgetProps,
};

use crate::ExportError;

fn invalid(widget: &Widget, reason: impl Into<String>) -> ExportError {
    ExportError::InvalidWidget {
        id: widget.id,
        widget_type: widget.widget_type(),
        reason: reason.into(),
    }
}

/// Validate every widget in the scene. The first failure aborts.
pub fn validate_scene(scene: &Scene) -> Result<(), ExportError> {
    for widget in scene.widgets() {
        validate_widget(widget)?;
    }
    Ok(())
}

/// Validate a single widget: finite non-negative geometry at or above
/// the type minimum, plus per-type props ranges.
pub fn validate_widget(widget: &Widget) -> Result<(), ExportError> {
    validate_geometry(widget)?;
    match &widget.props {
        WidgetProps::Text(props) => {
            if !(FONT_SIZE_MIN..=FONT_SIZE_MAX).contains(&props.font_size) {
                return Err(invalid(
                    widget,
                    format!(
                        "font size {} outside {}-{}",
                        props.font_size, FONT_SIZE_MIN, FONT_SIZE_MAX
                    ),
                ));
            }
            if let Some(line_height) = props.line_height {
                if !(1.0..=3.0).contains(&line_height) {
                    return Err(invalid(
                        widget,
                        format!("line height {} outside 1-3", line_height),
                    ));
                }
            }
        }
        WidgetProps::Input(props) => {
            if props.label.is_empty() {
                return Err(invalid(widget, "input label must not be empty"));
            }
            if let (Some(min), Some(max)) = (props.min_length, props.max_length) {
                if min > max {
                    return Err(invalid(
                        widget,
                        format!("minLength {} exceeds maxLength {}", min, max),
                    ));
                }
            }
        }
        WidgetProps::Button(props) => {
            if props.text.is_empty() {
                return Err(invalid(widget, "button text must not be empty"));
            }
            validate_border_radius(widget, props.border_radius)?;
        }
        WidgetProps::Image(props) => {
            if props.src.trim().is_empty() {
                return Err(invalid(widget, "image src must not be empty"));
            }
            validate_border_radius(widget, props.border_radius)?;
            if !(OPACITY_MIN..=OPACITY_MAX).contains(&props.opacity) {
                return Err(invalid(
                    widget,
                    format!(
                        "opacity {} outside {}-{}",
                        props.opacity, OPACITY_MIN, OPACITY_MAX
                    ),
                ));
            }
            if let Some(grayscale) = props.grayscale {
                if !(0.0..=100.0).contains(&grayscale) {
                    return Err(invalid(
                        widget,
                        format!("grayscale {} outside 0-100", grayscale),
                    ));
                }
            }
        }
        WidgetProps::Table(props) => {
            if props.columns.is_empty() {
                return Err(invalid(widget, "table must have at least one column"));
            }
            for column in &props.columns {
                if column.key.is_empty() {
                    return Err(invalid(widget, "table column key must not be empty"));
                }
            }
        }
        WidgetProps::Select(props) => {
            if props.label.is_empty() {
                return Err(invalid(widget, "select label must not be empty"));
            }
            if props.options.is_empty() {
                return Err(invalid(widget, "select must have at least one option"));
            }
            if let Some(default) = &props.default_value {
                if !props.options.iter().any(|o| &o.value == default) {
                    return Err(invalid(
                        widget,
                        format!("default value {:?} matches no option", default),
                    ));
                }
            }
        }
    }
    Ok(())
}

fn validate_geometry(widget: &Widget) -> Result<(), ExportError> {
    let (pos, size) = (widget.position, widget.size);
    if !pos.x.is_finite() || !pos.y.is_finite() || !size.width.is_finite() || !size.height.is_finite()
    {
        return Err(invalid(widget, "geometry must be finite"));
    }
    if pos.x < 0.0 || pos.y < 0.0 {
        return Err(invalid(
            widget,
            format!("position ({}, {}) is negative", pos.x, pos.y),
        ));
    }
    let min = widget.widget_type().min_size();
    if size.width < min.width || size.height < min.height {
        return Err(invalid(
            widget,
            format!(
                "size {}x{} below {} minimum {}x{}",
                size.width,
                size.height,
                widget.widget_type(),
                min.width,
                min.height
            ),
        ));
    }
    Ok(())
}

fn validate_border_radius(widget: &Widget, radius: f64) -> Result<(), ExportError> {
    if !(BORDER_RADIUS_MIN..=BORDER_RADIUS_MAX).contains(&radius) {
        return Err(invalid(
            widget,
            format!(
                "border radius {} outside {}-{}",
                radius, BORDER_RADIUS_MIN, BORDER_RADIUS_MAX
            ),
        ));
    }
    Ok(())
}
