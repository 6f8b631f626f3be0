//! Static HTML document generation.

use canvasforge_core::Scene;
use canvasforge_render::{RenderMode, escape_html, render_widget, widget_rules};

use crate::validator::validate_scene;
use crate::{ExportError, ExportOptions};

/// Generate a self-contained HTML document for the scene.
///
/// Validation runs first over every widget; on failure nothing is
/// emitted. Output is deterministic: the same scene always produces the
/// same bytes.
pub fn generate(scene: &Scene, options: &ExportOptions) -> Result<String, ExportError> {
    validate_scene(scene)?;

    let widgets = scene.widgets_paint_order();

    let mut styles = String::from(BASE_CSS);
    for widget in &widgets {
        for rule in widget_rules(widget) {
            styles.push('\n');
            styles.push_str(&rule.to_css("    "));
            styles.push('\n');
        }
    }

    let body: Vec<String> = widgets
        .iter()
        .map(|widget| {
            let rendered = render_widget(widget, RenderMode::Preview);
            indent(&rendered.html, "    ")
        })
        .collect();

    log::info!(
        "exported {} widgets from project {:?}",
        widgets.len(),
        scene.project_name
    );

    Ok(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20 <meta charset=\"UTF-8\">\n\
         \x20 <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         \x20 <meta name=\"description\" content=\"{description}\">\n\
         \x20 <title>{title}</title>\n\
         \x20 <style>\n{styles}\x20 </style>\n\
         </head>\n\
         <body>\n\
         \x20 <div class=\"canvas-container\">\n{body}\n\x20 </div>\n\
         </body>\n\
         </html>",
        description = escape_html(&options.description),
        title = escape_html(&options.title),
        styles = styles,
        body = body.join("\n")
    ))
}

/// Suggested download filename for a project: non-filename characters
/// become `-`, the extension is forced to `.html`, length is capped.
pub fn suggested_filename(project_name: &str) -> String {
    let mut sanitized: String = project_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '-'
            }
        })
        .collect();
    sanitized = sanitized
        .trim_start_matches('.')
        .trim_end_matches('.')
        .chars()
        .take(255)
        .collect();

    if sanitized.is_empty() {
        return "project.html".to_string();
    }
    if !sanitized.ends_with(".html") {
        sanitized.push_str(".html");
    }
    sanitized
}

fn indent(fragment: &str, prefix: &str) -> String {
    fragment
        .lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}

const BASE_CSS: &str = "    * {
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }

    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
      background-color: #f3f4f6;
    }

    .canvas-container {
      position: relative;
      width: 1200px;
      height: 800px;
      margin: 0 auto;
      background-color: #ffffff;
      box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    }

    .widget {
      position: absolute;
    }

    .widget-image-placeholder {
      display: flex;
      align-items: center;
      justify-content: center;
      background-color: #f3f4f6;
      color: #6b7280;
      font-size: 14px;
    }
";
