//! Widget definitions for the canvas.

mod button;
mod image;
mod input;
mod select_box;
mod table;
mod text;

pub use button::{
    BORDER_RADIUS_MAX, BORDER_RADIUS_MIN, ButtonProps, ButtonSize, ButtonVariant,
};
pub use image::{ImageProps, OPACITY_MAX, OPACITY_MIN, ObjectFit};
pub use input::{InputProps, InputType};
pub use select_box::{SelectOption, SelectProps};
pub use table::{CellValue, ColumnAlign, TableColumn, TableProps, TableRow};
pub use text::{FONT_SIZE_MAX, FONT_SIZE_MIN, FontWeight, TextAlign, TextProps};

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::geometry;

/// Unique identifier for widgets.
pub type WidgetId = Uuid;

/// Errors from widget operations.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// A props patch tried to change the widget's type. The type is fixed
    /// at creation; delete and recreate to change it.
    #[error("cannot change widget type from {current} to {requested}")]
    TypeChange {
        current: WidgetType,
        requested: String,
    },
    /// A props patch produced a value the widget's props cannot represent.
    #[error("invalid props patch for {widget_type} widget: {source}")]
    InvalidPatch {
        widget_type: WidgetType,
        #[source]
        source: serde_json::Error,
    },
}

/// The closed set of widget kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetType {
    Text,
    Input,
    Button,
    Image,
    Table,
    Select,
}

impl WidgetType {
    /// All widget types, in palette order.
    pub const ALL: [WidgetType; 6] = [
        WidgetType::Text,
        WidgetType::Input,
        WidgetType::Button,
        WidgetType::Image,
        WidgetType::Table,
        WidgetType::Select,
    ];

    /// Size a freshly placed widget of this type gets.
    pub fn default_size(&self) -> Size {
        match self {
            WidgetType::Text => Size::new(200.0, 40.0),
            WidgetType::Input => Size::new(250.0, 70.0),
            WidgetType::Button => Size::new(120.0, 40.0),
            WidgetType::Image => Size::new(300.0, 200.0),
            WidgetType::Table => Size::new(400.0, 250.0),
            WidgetType::Select => Size::new(250.0, 70.0),
        }
    }

    /// Smallest size a widget of this type may be resized to.
    pub fn min_size(&self) -> Size {
        match self {
            WidgetType::Text => Size::new(50.0, 25.0),
            WidgetType::Input => Size::new(120.0, 60.0),
            WidgetType::Button => Size::new(80.0, 40.0),
            WidgetType::Image => Size::new(50.0, 50.0),
            WidgetType::Table => Size::new(200.0, 120.0),
            WidgetType::Select => Size::new(120.0, 60.0),
        }
    }

    /// Default props for a freshly placed widget of this type.
    pub fn default_props(&self) -> WidgetProps {
        match self {
            WidgetType::Text => WidgetProps::Text(TextProps::default()),
            WidgetType::Input => WidgetProps::Input(InputProps::default()),
            WidgetType::Button => WidgetProps::Button(ButtonProps::default()),
            WidgetType::Image => WidgetProps::Image(ImageProps::default()),
            WidgetType::Table => WidgetProps::Table(TableProps::default()),
            WidgetType::Select => WidgetProps::Select(SelectProps::default()),
        }
    }

    /// Human-readable name for palettes and error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            WidgetType::Text => "Text",
            WidgetType::Input => "Input",
            WidgetType::Button => "Button",
            WidgetType::Image => "Image",
            WidgetType::Table => "Table",
            WidgetType::Select => "Select",
        }
    }
}

impl std::fmt::Display for WidgetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Type-specific properties, tagged so the wire format carries
/// `"type": "Button", "props": {...}` adjacently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "props")]
pub enum WidgetProps {
    Text(TextProps),
    Input(InputProps),
    Button(ButtonProps),
    Image(ImageProps),
    Table(TableProps),
    Select(SelectProps),
}

impl WidgetProps {
    /// Get the widget type this props variant belongs to.
    pub fn widget_type(&self) -> WidgetType {
        match self {
            WidgetProps::Text(_) => WidgetType::Text,
            WidgetProps::Input(_) => WidgetType::Input,
            WidgetProps::Button(_) => WidgetType::Button,
            WidgetProps::Image(_) => WidgetType::Image,
            WidgetProps::Table(_) => WidgetType::Table,
            WidgetProps::Select(_) => WidgetType::Select,
        }
    }
}

/// A partial update to a widget. Absent fields keep their value; `position`
/// and `size` are clamped on apply, never rejected. Props fields use the
/// wire-format names (camelCase) and merge over the current props.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<u32>,
    /// Requested widget type. Only valid when it matches the current type.
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub widget_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<serde_json::Map<String, serde_json::Value>>,
}

impl WidgetPatch {
    /// A patch that only moves the widget.
    pub fn move_to(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// A patch that sets position and size together (resize commits).
    pub fn place(position: Point, size: Size) -> Self {
        Self {
            position: Some(position),
            size: Some(size),
            ..Self::default()
        }
    }

    /// A patch that merges fields into the widget's props.
    pub fn props(fields: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            props: Some(fields),
            ..Self::default()
        }
    }
}

/// A single widget on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: WidgetId,
    #[serde(flatten)]
    pub props: WidgetProps,
    pub position: Point,
    pub size: Size,
    #[serde(rename = "zIndex", default = "default_z_index")]
    pub z_index: u32,
}

fn default_z_index() -> u32 {
    1
}

impl Widget {
    /// Create a widget of the given type at a position, with the type's
    /// default size and props.
    pub fn new(widget_type: WidgetType, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            props: widget_type.default_props(),
            position,
            size: widget_type.default_size(),
            z_index: default_z_index(),
        }
    }

    /// Get the widget's type.
    pub fn widget_type(&self) -> WidgetType {
        self.props.widget_type()
    }

    /// Get the bounding box in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Check if a point (in canvas coordinates) hits this widget.
    pub fn hit_test(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Regenerate the widget's ID with a new unique identifier.
    /// Used when duplicating widgets so copies stay distinct.
    pub fn regenerate_id(&mut self) {
        self.id = Uuid::new_v4();
    }

    /// Apply a partial update. Position and size are clamped (to the canvas
    /// and the type's minimum); props fields merge over the current props
    /// and must re-deserialize into the same props variant. A patch may not
    /// change the widget's type; a rejected patch leaves the widget
    /// untouched.
    pub fn apply_patch(&mut self, patch: &WidgetPatch) -> Result<(), WidgetError> {
        let widget_type = self.widget_type();
        if let Some(requested) = &patch.widget_type {
            if requested != widget_type.display_name() {
                return Err(WidgetError::TypeChange {
                    current: widget_type,
                    requested: requested.clone(),
                });
            }
        }

        // Validate props before mutating anything.
        let new_props = match &patch.props {
            Some(fields) => Some(self.merged_props(fields)?),
            None => None,
        };

        if let Some(position) = patch.position {
            self.position = geometry::clamp_position(position);
        }
        if let Some(size) = patch.size {
            self.size = geometry::clamp_size(size, widget_type.min_size());
        }
        if let Some(z_index) = patch.z_index {
            self.z_index = z_index;
        }
        if let Some(props) = new_props {
            self.props = props;
        }
        Ok(())
    }

    /// Merge props fields over the current props and re-deserialize.
    /// `null` clears an optional field.
    fn merged_props(
        &self,
        fields: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<WidgetProps, WidgetError> {
        let widget_type = self.widget_type();
        let mut tagged = match serde_json::to_value(&self.props) {
            Ok(serde_json::Value::Object(map)) => map,
            // Adjacently tagged enums always serialize to an object.
            _ => serde_json::Map::new(),
        };
        let props_obj = tagged
            .entry("props")
            .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
        if let serde_json::Value::Object(current) = props_obj {
            for (key, value) in fields {
                if value.is_null() {
                    current.remove(key);
                } else {
                    current.insert(key.clone(), value.clone());
                }
            }
        }
        serde_json::from_value(serde_json::Value::Object(tagged)).map_err(|source| {
            WidgetError::InvalidPatch {
                widget_type,
                source,
            }
        })
    }
}
