//! Table widget properties.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Column text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl ColumnAlign {
    pub fn css_value(&self) -> &'static str {
        match self {
            ColumnAlign::Left => "left",
            ColumnAlign::Center => "center",
            ColumnAlign::Right => "right",
        }
    }
}

/// A column definition: which row key it reads and how the header shows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    /// Key looked up in each row's cell map.
    pub key: String,
    /// Header label.
    pub label: String,
    /// Fixed column width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Cell text alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<ColumnAlign>,
}

impl TableColumn {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            width: None,
            align: None,
        }
    }
}

/// A scalar cell value. Rows are maps of column key to cell value; a column
/// key missing from a row renders as an empty cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Render the cell as display text.
    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            CellValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// A single data row. BTreeMap keeps iteration order deterministic for
/// serialization and export.
pub type TableRow = BTreeMap<String, CellValue>;

/// Properties of a table widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableProps {
    /// Ordered column definitions.
    pub columns: Vec<TableColumn>,
    /// Data rows, keyed by column key.
    pub data: Vec<TableRow>,
    /// Shade even rows.
    pub striped: bool,
    /// Draw cell borders.
    pub bordered: bool,
    /// Highlight rows on hover (preview/export only).
    pub hoverable: bool,
    /// Header background color as a hex string.
    pub header_bg_color: String,
    /// Header text color as a hex string.
    pub header_text_color: String,
    /// Body row background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_bg_color: Option<String>,
    /// Cell font size in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

impl Default for TableProps {
    fn default() -> Self {
        let row = |id: f64, name: &str, email: &str| -> TableRow {
            let mut cells = TableRow::new();
            cells.insert("id".to_string(), CellValue::Number(id));
            cells.insert("name".to_string(), CellValue::Text(name.to_string()));
            cells.insert("email".to_string(), CellValue::Text(email.to_string()));
            cells
        };
        Self {
            columns: vec![
                TableColumn {
                    key: "id".to_string(),
                    label: "ID".to_string(),
                    width: Some(50.0),
                    align: Some(ColumnAlign::Center),
                },
                TableColumn {
                    key: "name".to_string(),
                    label: "Name".to_string(),
                    width: Some(150.0),
                    align: Some(ColumnAlign::Left),
                },
                TableColumn {
                    key: "email".to_string(),
                    label: "Email".to_string(),
                    width: Some(200.0),
                    align: Some(ColumnAlign::Left),
                },
            ],
            data: vec![
                row(1.0, "John Doe", "john@example.com"),
                row(2.0, "Jane Smith", "jane@example.com"),
                row(3.0, "Bob Johnson", "bob@example.com"),
            ],
            striped: true,
            bordered: true,
            hoverable: true,
            header_bg_color: "#f3f4f6".to_string(),
            header_text_color: "#111827".to_string(),
            row_bg_color: None,
            font_size: None,
        }
    }
}
