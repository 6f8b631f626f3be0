//! CanvasForge Export
//!
//! Generates a single self-contained static HTML document from a scene.
//! Validation is all-or-nothing: an invalid widget aborts the export
//! before any markup exists.

pub mod generator;
pub mod validator;

pub use generator::{generate, suggested_filename};
pub use validator::{validate_scene, validate_widget};

use canvasforge_core::{WidgetId, WidgetType};
use thiserror::Error;

/// Export failures.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A widget failed pre-export validation.
    #[error("invalid {widget_type} widget {id}: {reason}")]
    InvalidWidget {
        id: WidgetId,
        widget_type: WidgetType,
        reason: String,
    },
}

/// Document-level options for an export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Document title, escaped into `<title>`.
    pub title: String,
    /// Meta description.
    pub description: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: "CanvasForge - Exported Page".to_string(),
            description: String::new(),
        }
    }
}
