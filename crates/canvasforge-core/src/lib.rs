//! CanvasForge Core Library
//!
//! Platform-agnostic widget model, geometry and interaction logic for the
//! CanvasForge visual UI builder.

pub mod geometry;
pub mod interaction;
pub mod scene;
pub mod storage;
pub mod widget;

pub use geometry::{
    GRID_SIZE, ResizeHandle, apply_resize, clamp_position, clamp_size, snap_point, snap_to_grid,
};
pub use interaction::{DRAG_THRESHOLD, DragSource, InteractionController, InteractionState};
pub use scene::{ProjectSnapshot, Scene, SceneError};
pub use storage::{
    AutoSaveManager, FileStorage, MemoryStorage, Storage, StorageError, StorageResult,
};
pub use widget::{Widget, WidgetError, WidgetId, WidgetPatch, WidgetProps, WidgetType};
