//! Widget-to-markup rendering.

use canvasforge_core::widget::{
    ButtonProps, ImageProps, InputProps, SelectProps, TableProps, TextProps, Widget, WidgetProps,
};

use crate::escape::{escape_attr, escape_html};
use crate::sanitize::sanitize_url;
use crate::style::{self, CssRule};

/// Where the markup is headed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// The builder canvas: native controls are made inert so they don't
    /// compete with selection and drag gestures.
    Canvas,
    /// Preview and export: native interactivity stays enabled.
    Preview,
}

/// One rendered widget: an HTML fragment and the CSS rules styling it.
#[derive(Debug, Clone)]
pub struct RenderedWidget {
    pub html: String,
    pub rules: Vec<CssRule>,
}

/// Render a widget to markup. Every user string is escaped; the image
/// source additionally passes URL sanitization.
pub fn render_widget(widget: &Widget, mode: RenderMode) -> RenderedWidget {
    let id = style::element_id(widget);
    let html = match &widget.props {
        WidgetProps::Text(props) => render_text(&id, props),
        WidgetProps::Input(props) => render_input(&id, props, mode),
        WidgetProps::Button(props) => render_button(&id, props, mode),
        WidgetProps::Image(props) => render_image(&id, props),
        WidgetProps::Table(props) => render_table(&id, props),
        WidgetProps::Select(props) => render_select(&id, props, mode),
    };
    RenderedWidget {
        html,
        rules: style::widget_rules(widget),
    }
}

/// Attributes that neutralize a native control on the builder canvas.
fn inert_attrs(mode: RenderMode) -> &'static str {
    match mode {
        RenderMode::Canvas => " disabled tabindex=\"-1\"",
        RenderMode::Preview => "",
    }
}

fn render_text(id: &str, props: &TextProps) -> String {
    format!(
        "<div id=\"{}\" class=\"widget widget-text\">{}</div>",
        id,
        escape_html(&props.content)
    )
}

fn render_input(id: &str, props: &InputProps, mode: RenderMode) -> String {
    let mut attrs = format!(
        "type=\"{}\" placeholder=\"{}\"",
        props.input_type.attr_value(),
        escape_attr(&props.placeholder)
    );
    if let Some(value) = &props.default_value {
        attrs.push_str(&format!(" value=\"{}\"", escape_attr(value)));
    }
    if let Some(max) = props.max_length {
        attrs.push_str(&format!(" maxlength=\"{}\"", max));
    }
    if let Some(min) = props.min_length {
        attrs.push_str(&format!(" minlength=\"{}\"", min));
    }
    if let Some(pattern) = &props.pattern {
        attrs.push_str(&format!(" pattern=\"{}\"", escape_attr(pattern)));
    }
    if props.required {
        attrs.push_str(" required");
    }
    if props.disabled.unwrap_or(false) && mode == RenderMode::Preview {
        attrs.push_str(" disabled");
    }
    format!(
        "<div id=\"{}\" class=\"widget widget-input\">\n  <label>{}</label>\n  <input {}{}>\n</div>",
        id,
        escape_html(&props.label),
        attrs,
        inert_attrs(mode)
    )
}

fn render_button(id: &str, props: &ButtonProps, mode: RenderMode) -> String {
    let disabled = if props.disabled.unwrap_or(false) && mode == RenderMode::Preview {
        " disabled"
    } else {
        ""
    };
    format!(
        "<button id=\"{}\" class=\"widget widget-button\"{}{}>{}</button>",
        id,
        disabled,
        inert_attrs(mode),
        escape_html(&props.text)
    )
}

fn render_image(id: &str, props: &ImageProps) -> String {
    let src = sanitize_url(&props.src);
    if src.is_empty() {
        // Neutralized or missing source: render a placeholder box in
        // the widget's own bounds so the failure stays local.
        return format!(
            "<div id=\"{}\" class=\"widget widget-image widget-image-placeholder\">{}</div>",
            id,
            escape_html(&props.alt)
        );
    }
    format!(
        "<img id=\"{}\" class=\"widget widget-image\" src=\"{}\" alt=\"{}\">",
        id,
        escape_attr(&src),
        escape_attr(&props.alt)
    )
}

fn render_table(id: &str, props: &TableProps) -> String {
    let header: String = props
        .columns
        .iter()
        .map(|col| format!("<th>{}</th>", escape_html(&col.label)))
        .collect();

    let rows: Vec<String> = props
        .data
        .iter()
        .map(|row| {
            let cells: String = props
                .columns
                .iter()
                .map(|col| {
                    let text = row
                        .get(&col.key)
                        .map(|cell| cell.to_display_string())
                        .unwrap_or_default();
                    format!("<td>{}</td>", escape_html(&text))
                })
                .collect();
            format!("      <tr>{}</tr>", cells)
        })
        .collect();

    format!(
        "<div id=\"{}\" class=\"widget widget-table\">\n  <table>\n    <thead>\n      <tr>{}</tr>\n    </thead>\n    <tbody>\n{}\n    </tbody>\n  </table>\n</div>",
        id,
        header,
        rows.join("\n")
    )
}

fn render_select(id: &str, props: &SelectProps, mode: RenderMode) -> String {
    let mut options = Vec::with_capacity(props.options.len() + 1);
    if props.default_value.is_none() {
        options.push(format!(
            "    <option value=\"\" disabled selected>{}</option>",
            escape_html(&props.placeholder)
        ));
    }
    for option in &props.options {
        let mut attrs = format!(" value=\"{}\"", escape_attr(&option.value));
        if option.disabled.unwrap_or(false) {
            attrs.push_str(" disabled");
        }
        if props.default_value.as_deref() == Some(option.value.as_str()) {
            attrs.push_str(" selected");
        }
        options.push(format!(
            "    <option{}>{}</option>",
            attrs,
            escape_html(&option.label)
        ));
    }

    let mut select_attrs = String::new();
    if props.required {
        select_attrs.push_str(" required");
    }
    if props.multiple.unwrap_or(false) {
        select_attrs.push_str(" multiple");
    }
    if props.disabled.unwrap_or(false) && mode == RenderMode::Preview {
        select_attrs.push_str(" disabled");
    }

    format!(
        "<div id=\"{}\" class=\"widget widget-select\">\n  <label>{}</label>\n  <select{}{}>\n{}\n  </select>\n</div>",
        id,
        escape_html(&props.label),
        select_attrs,
        inert_attrs(mode),
        options.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvasforge_core::widget::{WidgetPatch, WidgetType};
    use kurbo::Point;

    fn widget(widget_type: WidgetType) -> Widget {
        Widget::new(widget_type, Point::ZERO)
    }

    fn patched(widget_type: WidgetType, props_json: &str) -> Widget {
        let mut w = widget(widget_type);
        let fields = serde_json::from_str(props_json).unwrap();
        w.apply_patch(&WidgetPatch::props(fields)).unwrap();
        w
    }

    #[test]
    fn test_text_content_is_escaped() {
        let w = patched(WidgetType::Text, r#"{"content": "<script>alert(1)</script>"}"#);
        let rendered = render_widget(&w, RenderMode::Preview);
        assert!(rendered.html.contains("&lt;script&gt;"));
        assert!(!rendered.html.contains("<script>"));
    }

    #[test]
    fn test_canvas_controls_are_inert() {
        let w = widget(WidgetType::Input);
        let canvas = render_widget(&w, RenderMode::Canvas);
        assert!(canvas.html.contains("disabled tabindex=\"-1\""));
        let preview = render_widget(&w, RenderMode::Preview);
        assert!(!preview.html.contains("tabindex"));
        assert!(!preview.html.contains("disabled"));
    }

    #[test]
    fn test_button_markup() {
        let w = patched(WidgetType::Button, r#"{"text": "Save & Close"}"#);
        let rendered = render_widget(&w, RenderMode::Preview);
        assert!(rendered.html.starts_with("<button id=\"w-"));
        assert!(rendered.html.contains("Save &amp; Close"));
    }

    #[test]
    fn test_javascript_src_renders_placeholder() {
        let w = patched(WidgetType::Image, r#"{"src": "javascript:alert(1)"}"#);
        let rendered = render_widget(&w, RenderMode::Preview);
        assert!(!rendered.html.contains("javascript:"));
        assert!(rendered.html.contains("widget-image-placeholder"));
        assert!(!rendered.html.contains("<img"));
    }

    #[test]
    fn test_clean_src_renders_img() {
        let w = patched(WidgetType::Image, r#"{"src": "https://example.com/x.png"}"#);
        let rendered = render_widget(&w, RenderMode::Preview);
        assert!(
            rendered
                .html
                .contains("src=\"https://example.com/x.png\"")
        );
    }

    #[test]
    fn test_table_renders_columns_and_rows() {
        let w = widget(WidgetType::Table);
        let rendered = render_widget(&w, RenderMode::Preview);
        assert!(rendered.html.contains("<th>ID</th><th>Name</th><th>Email</th>"));
        assert!(rendered.html.contains("<td>John Doe</td>"));
        // Numeric cell renders without a fraction
        assert!(rendered.html.contains("<td>1</td>"));
    }

    #[test]
    fn test_table_missing_key_renders_empty_cell() {
        let w = patched(
            WidgetType::Table,
            r#"{"columns": [{"key": "missing", "label": "M"}], "data": [{"id": 1}]}"#,
        );
        let rendered = render_widget(&w, RenderMode::Preview);
        assert!(rendered.html.contains("<td></td>"));
    }

    #[test]
    fn test_select_placeholder_and_options() {
        let w = widget(WidgetType::Select);
        let rendered = render_widget(&w, RenderMode::Preview);
        assert!(rendered.html.contains("Choose an option..."));
        assert!(rendered.html.contains("value=\"option1\""));
        assert!(rendered.html.contains(">Option 1</option>"));
    }

    #[test]
    fn test_select_default_value_selected() {
        let w = patched(WidgetType::Select, r#"{"defaultValue": "option2"}"#);
        let rendered = render_widget(&w, RenderMode::Preview);
        assert!(rendered.html.contains("value=\"option2\" selected"));
        // No placeholder option once a default exists
        assert!(!rendered.html.contains("Choose an option..."));
    }

    #[test]
    fn test_rules_accompany_markup() {
        let w = widget(WidgetType::Text);
        let rendered = render_widget(&w, RenderMode::Preview);
        assert!(!rendered.rules.is_empty());
        assert!(rendered.rules[0].to_css("").contains("width: 200px;"));
    }

    #[test]
    fn test_modes_share_styles() {
        let w = widget(WidgetType::Button);
        let canvas = render_widget(&w, RenderMode::Canvas);
        let preview = render_widget(&w, RenderMode::Preview);
        assert_eq!(canvas.rules, preview.rules);
    }
}
