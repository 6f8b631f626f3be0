//! CanvasForge Renderer
//!
//! Turns widgets into HTML fragments and CSS rules. The builder canvas,
//! the preview and the static export all render through here, which is
//! what keeps them visually identical.

pub mod escape;
pub mod renderer;
pub mod sanitize;
pub mod style;

pub use escape::{escape_attr, escape_html};
pub use renderer::{RenderMode, RenderedWidget, render_widget};
pub use sanitize::{sanitize_css, sanitize_url};
pub use style::{CssRule, element_id, hex_to_rgba, widget_rules};
