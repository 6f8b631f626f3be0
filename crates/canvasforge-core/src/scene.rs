//! Scene store and project snapshots.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::widget::{Widget, WidgetError, WidgetId, WidgetPatch, WidgetType};

/// Maximum number of undo states to keep.
const MAX_UNDO_HISTORY: usize = 50;

/// Errors from scene operations.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("no widget with id {0}")]
    UnknownWidget(WidgetId),
    #[error("duplicate widget id {0}")]
    DuplicateId(WidgetId),
    #[error(transparent)]
    Widget(#[from] WidgetError),
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The persisted project shape: widget list plus project metadata.
/// `last_saved` is stamped by the storage layer at save time, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    pub components: Vec<Widget>,
    pub project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_saved: Option<String>,
}

impl ProjectSnapshot {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A snapshot of scene state for undo/redo. Selection is transient and
/// stays out of history.
#[derive(Debug, Clone)]
struct SceneSnapshot {
    widgets: Vec<Widget>,
}

/// The in-memory scene: all widgets, selection and edit history.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Project name shown in the header and used for export filenames.
    pub project_name: String,
    /// Widgets in insertion order. Paint order is a stable sort by z-index.
    widgets: Vec<Widget>,
    /// The selected widget, if any. At most one.
    selected: Option<WidgetId>,
    undo_stack: Vec<SceneSnapshot>,
    redo_stack: Vec<SceneSnapshot>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            project_name: "Untitled Project".to_string(),
            widgets: Vec::new(),
            selected: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    fn history_snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            widgets: self.widgets.clone(),
        }
    }

    /// Push current state to the undo stack (call before making changes).
    pub fn push_undo(&mut self) {
        self.undo_stack.push(self.history_snapshot());
        self.redo_stack.clear();
        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the last change. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(snapshot) => {
                self.redo_stack.push(self.history_snapshot());
                self.widgets = snapshot.widgets;
                self.prune_selection();
                true
            }
            None => false,
        }
    }

    /// Redo the last undone change. Returns false if there was nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(snapshot) => {
                self.undo_stack.push(self.history_snapshot());
                self.widgets = snapshot.widgets;
                self.prune_selection();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drop the selection if its widget no longer exists.
    fn prune_selection(&mut self) {
        if let Some(id) = self.selected {
            if !self.widgets.iter().any(|w| w.id == id) {
                self.selected = None;
            }
        }
    }

    /// Add a widget of the given type at a position (clamped). The new
    /// widget becomes the selection. Returns its id.
    pub fn add_widget(&mut self, widget_type: WidgetType, position: Point) -> WidgetId {
        self.push_undo();
        let widget = Widget::new(widget_type, crate::geometry::clamp_position(position));
        let id = widget.id;
        log::debug!("add {} widget {}", widget_type, id);
        self.widgets.push(widget);
        self.selected = Some(id);
        id
    }

    /// Insert an existing widget (e.g. a duplicate). Fails on id collision.
    pub fn insert_widget(&mut self, widget: Widget) -> Result<(), SceneError> {
        if self.widgets.iter().any(|w| w.id == widget.id) {
            return Err(SceneError::DuplicateId(widget.id));
        }
        self.push_undo();
        self.widgets.push(widget);
        Ok(())
    }

    /// Apply a partial update to a widget. Geometry is re-clamped by the
    /// widget itself, so no caller can produce an invalid model.
    pub fn update_widget(&mut self, id: WidgetId, patch: &WidgetPatch) -> Result<(), SceneError> {
        let widget = self
            .widgets
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(SceneError::UnknownWidget(id))?;
        widget.apply_patch(patch)?;
        Ok(())
    }

    /// Remove a widget. Clears the selection if it pointed at the removed
    /// widget. Returns false if the id was unknown.
    pub fn delete_widget(&mut self, id: WidgetId) -> bool {
        let Some(index) = self.widgets.iter().position(|w| w.id == id) else {
            return false;
        };
        self.push_undo();
        self.widgets.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        log::debug!("deleted widget {}", id);
        true
    }

    /// Remove all widgets and clear the selection.
    pub fn clear(&mut self) {
        if self.widgets.is_empty() {
            return;
        }
        self.push_undo();
        self.widgets.clear();
        self.selected = None;
    }

    /// Set or clear the selection. Selecting an id not present in the
    /// scene is a no-op.
    pub fn select_widget(&mut self, id: Option<WidgetId>) {
        match id {
            None => self.selected = None,
            Some(id) => {
                if self.widgets.iter().any(|w| w.id == id) {
                    self.selected = Some(id);
                }
            }
        }
    }

    pub fn selected(&self) -> Option<WidgetId> {
        self.selected
    }

    pub fn is_selected(&self, id: WidgetId) -> bool {
        self.selected == Some(id)
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Widgets in insertion order.
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Widgets back-to-front: ascending z-index, insertion order breaking
    /// ties (stable sort).
    pub fn widgets_paint_order(&self) -> Vec<&Widget> {
        let mut ordered: Vec<&Widget> = self.widgets.iter().collect();
        ordered.sort_by_key(|w| w.z_index);
        ordered
    }

    /// The topmost widget under a point, if any.
    pub fn widget_at_point(&self, point: Point) -> Option<&Widget> {
        self.widgets_paint_order()
            .into_iter()
            .rev()
            .find(|w| w.hit_test(point))
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Capture the persistable project state. Never stamps a save time;
    /// the storage layer does that.
    pub fn snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot {
            components: self.widgets.clone(),
            project_name: self.project_name.clone(),
            last_saved: None,
        }
    }

    /// Replace scene contents from a snapshot. Rejects snapshots with
    /// duplicate widget ids; on error the scene is untouched. Geometry
    /// from older or hand-edited files is silently re-clamped. Selection
    /// and history are reset.
    pub fn load_snapshot(&mut self, snapshot: ProjectSnapshot) -> Result<(), SceneError> {
        for (i, widget) in snapshot.components.iter().enumerate() {
            if snapshot.components[..i].iter().any(|w| w.id == widget.id) {
                return Err(SceneError::DuplicateId(widget.id));
            }
        }
        let mut widgets = snapshot.components;
        for widget in &mut widgets {
            widget.position = crate::geometry::clamp_position(widget.position);
            widget.size =
                crate::geometry::clamp_size(widget.size, widget.widget_type().min_size());
        }
        self.project_name = snapshot.project_name;
        self.widgets = widgets;
        self.selected = None;
        self.undo_stack.clear();
        self.redo_stack.clear();
        Ok(())
    }

    /// Serialize the scene's persistable state to JSON.
    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(self.snapshot().to_json()?)
    }

    /// Build a scene from persisted JSON.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let snapshot = ProjectSnapshot::from_json(json)?;
        let mut scene = Scene::new();
        scene.load_snapshot(snapshot)?;
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::WidgetProps;
    use kurbo::Size;

    #[test]
    fn test_add_selects_new_widget() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Button, Point::new(10.0, 20.0));
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.selected(), Some(id));
        assert!(scene.is_selected(id));
    }

    #[test]
    fn test_add_clamps_position() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Text, Point::new(-50.0, -10.0));
        let widget = scene.widget(id).unwrap();
        assert_eq!(widget.position, Point::ZERO);
    }

    #[test]
    fn test_update_unknown_widget_fails() {
        let mut scene = Scene::new();
        let err = scene
            .update_widget(uuid::Uuid::new_v4(), &WidgetPatch::default())
            .unwrap_err();
        assert!(matches!(err, SceneError::UnknownWidget(_)));
    }

    #[test]
    fn test_update_reclamps_size() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Table, Point::ZERO);
        scene
            .update_widget(id, &WidgetPatch::place(Point::new(5.0, 5.0), Size::new(1.0, 1.0)))
            .unwrap();
        let widget = scene.widget(id).unwrap();
        assert_eq!(widget.size, Size::new(200.0, 120.0));
    }

    #[test]
    fn test_delete_clears_selection() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Image, Point::ZERO);
        assert!(scene.delete_widget(id));
        assert!(scene.is_empty());
        assert_eq!(scene.selected(), None);
        assert!(!scene.delete_widget(id));
    }

    #[test]
    fn test_delete_other_keeps_selection() {
        let mut scene = Scene::new();
        let first = scene.add_widget(WidgetType::Text, Point::ZERO);
        let second = scene.add_widget(WidgetType::Text, Point::new(300.0, 0.0));
        scene.select_widget(Some(first));
        scene.delete_widget(second);
        assert_eq!(scene.selected(), Some(first));
    }

    #[test]
    fn test_select_unknown_id_is_noop() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Text, Point::ZERO);
        scene.select_widget(Some(uuid::Uuid::new_v4()));
        assert_eq!(scene.selected(), Some(id));
    }

    #[test]
    fn test_paint_order_stable_by_z_index() {
        let mut scene = Scene::new();
        let a = scene.add_widget(WidgetType::Text, Point::ZERO);
        let b = scene.add_widget(WidgetType::Text, Point::ZERO);
        let c = scene.add_widget(WidgetType::Text, Point::ZERO);
        scene
            .update_widget(a, &WidgetPatch {
                z_index: Some(5),
                ..WidgetPatch::default()
            })
            .unwrap();
        let order: Vec<WidgetId> = scene
            .widgets_paint_order()
            .iter()
            .map(|w| w.id)
            .collect();
        // b and c share z=1 and keep insertion order; a paints last
        assert_eq!(order, vec![b, c, a]);
    }

    #[test]
    fn test_widget_at_point_topmost() {
        let mut scene = Scene::new();
        let below = scene.add_widget(WidgetType::Image, Point::ZERO);
        let above = scene.add_widget(WidgetType::Image, Point::new(50.0, 50.0));
        scene
            .update_widget(above, &WidgetPatch {
                z_index: Some(2),
                ..WidgetPatch::default()
            })
            .unwrap();
        // Overlap region hits the higher z-index widget
        let hit = scene.widget_at_point(Point::new(100.0, 100.0)).unwrap();
        assert_eq!(hit.id, above);
        let hit = scene.widget_at_point(Point::new(10.0, 10.0)).unwrap();
        assert_eq!(hit.id, below);
        assert!(scene.widget_at_point(Point::new(5000.0, 5000.0)).is_none());
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Button, Point::ZERO);
        assert!(scene.can_undo());
        assert!(scene.undo());
        assert!(scene.is_empty());
        // Selection pointing at a vanished widget is pruned
        assert_eq!(scene.selected(), None);
        assert!(scene.redo());
        assert_eq!(scene.len(), 1);
        assert!(scene.widget(id).is_some());
    }

    #[test]
    fn test_undo_history_is_bounded() {
        let mut scene = Scene::new();
        for i in 0..60 {
            scene.add_widget(WidgetType::Text, Point::new(i as f64, 0.0));
        }
        let mut undos = 0;
        while scene.undo() {
            undos += 1;
        }
        assert_eq!(undos, MAX_UNDO_HISTORY);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut scene = Scene::new();
        scene.project_name = "Landing Page".to_string();
        scene.add_widget(WidgetType::Text, Point::new(10.0, 10.0));
        scene.add_widget(WidgetType::Button, Point::new(10.0, 80.0));

        let json = scene.to_json().unwrap();
        let restored = Scene::from_json(&json).unwrap();
        assert_eq!(restored.project_name, "Landing Page");
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.widgets(), scene.widgets());
        // Selection and history do not survive persistence
        assert_eq!(restored.selected(), None);
        assert!(!restored.can_undo());
    }

    #[test]
    fn test_snapshot_wire_format() {
        let mut scene = Scene::new();
        scene.add_widget(WidgetType::Text, Point::ZERO);
        let value: serde_json::Value =
            serde_json::from_str(&scene.to_json().unwrap()).unwrap();
        assert!(value.get("components").is_some());
        assert_eq!(value["projectName"], "Untitled Project");
        // lastSaved is the storage layer's business
        assert!(value.get("lastSaved").is_none());
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let mut scene = Scene::new();
        let widget = Widget::new(WidgetType::Text, Point::ZERO);
        let snapshot = ProjectSnapshot {
            components: vec![widget.clone(), widget],
            project_name: "dup".to_string(),
            last_saved: None,
        };
        let err = scene.load_snapshot(snapshot).unwrap_err();
        assert!(matches!(err, SceneError::DuplicateId(_)));
        // Scene untouched on failure
        assert_eq!(scene.project_name, "Untitled Project");
    }

    #[test]
    fn test_load_reclamps_geometry() {
        let mut widget = Widget::new(WidgetType::Button, Point::ZERO);
        widget.position = Point::new(-30.0, 10.0);
        widget.size = Size::new(5.0, 5.0);
        let snapshot = ProjectSnapshot {
            components: vec![widget],
            project_name: "clamped".to_string(),
            last_saved: None,
        };
        let mut scene = Scene::new();
        scene.load_snapshot(snapshot).unwrap();
        let loaded = &scene.widgets()[0];
        assert_eq!(loaded.position, Point::new(0.0, 10.0));
        assert_eq!(loaded.size, Size::new(80.0, 40.0));
    }

    #[test]
    fn test_insert_duplicate_id_fails() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Text, Point::ZERO);
        let mut copy = scene.widget(id).unwrap().clone();
        let err = scene.insert_widget(copy.clone()).unwrap_err();
        assert!(matches!(err, SceneError::DuplicateId(_)));
        copy.regenerate_id();
        scene.insert_widget(copy).unwrap();
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_update_props_through_scene() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Button, Point::ZERO);
        let fields = serde_json::from_str(r#"{"text": "Submit"}"#).unwrap();
        scene.update_widget(id, &WidgetPatch::props(fields)).unwrap();
        match &scene.widget(id).unwrap().props {
            WidgetProps::Button(props) => assert_eq!(props.text, "Submit"),
            other => panic!("unexpected props: {other:?}"),
        }
    }
}
