//! Pointer and keyboard interaction state machine.
//!
//! Mediates pointer events into [`Scene`] mutations. All gesture state
//! lives in [`InteractionState`]; returning to `Idle` is the only
//! teardown there is.

use kurbo::{Point, Size, Vec2};

use crate::geometry::{self, GRID_SIZE, ResizeHandle};
use crate::scene::{Scene, SceneError};
use crate::widget::{WidgetId, WidgetPatch, WidgetType};

/// Pointer travel (px) required before a press becomes a drag. Presses
/// that stay inside this radius are clicks.
pub const DRAG_THRESHOLD: f64 = 8.0;

/// What a drag is carrying: a new widget from the palette, or an
/// existing widget on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    Palette(WidgetType),
    Widget(WidgetId),
}

/// The current gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    /// No gesture in progress.
    Idle,
    /// Pointer is down but has not traveled far enough to be a drag.
    Pending {
        source: DragSource,
        origin: Point,
        grab_offset: Vec2,
    },
    /// An active drag. The scene is only mutated on release.
    Dragging {
        source: DragSource,
        origin: Point,
        /// Pointer-down offset from the dragged box's origin, so the
        /// widget doesn't jump to the cursor.
        grab_offset: Vec2,
        current: Point,
    },
    /// An active resize. Geometry is applied to the scene on every move.
    Resizing {
        widget_id: WidgetId,
        handle: ResizeHandle,
        start_position: Point,
        start_size: Size,
        origin: Point,
        current: Point,
        /// Set once the first move lands, so a plain click on a handle
        /// leaves no history entry.
        history_pushed: bool,
    },
}

/// Drives the interaction state machine over a [`Scene`].
#[derive(Debug)]
pub struct InteractionController {
    state: InteractionState,
    hovered: Option<WidgetId>,
    /// Snap drop positions to the canvas grid.
    pub snap_enabled: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            state: InteractionState::Idle,
            hovered: None,
            snap_enabled: false,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, InteractionState::Idle)
    }

    /// The widget the pointer is over. Purely advisory; never affects
    /// selection or gestures.
    pub fn hovered(&self) -> Option<WidgetId> {
        self.hovered
    }

    pub fn set_hovered(&mut self, id: Option<WidgetId>) {
        self.hovered = id;
    }

    /// Pointer went down on a palette entry.
    pub fn pointer_down_palette(&mut self, widget_type: WidgetType, point: Point) {
        let size = widget_type.default_size();
        self.state = InteractionState::Pending {
            source: DragSource::Palette(widget_type),
            origin: point,
            // Drops center the new widget under the cursor.
            grab_offset: Vec2::new(size.width / 2.0, size.height / 2.0),
        };
    }

    /// Pointer went down on a widget's body. Selects it immediately;
    /// drag starts only after the threshold.
    pub fn pointer_down_widget(&mut self, scene: &mut Scene, id: WidgetId, point: Point) {
        let Some(widget) = scene.widget(id) else {
            return;
        };
        let grab_offset = point - widget.position;
        scene.select_widget(Some(id));
        self.state = InteractionState::Pending {
            source: DragSource::Widget(id),
            origin: point,
            grab_offset,
        };
    }

    /// Pointer went down on a resize handle. Only the selected widget
    /// shows handles, so a resize on an unselected widget is ignored.
    /// The whole resize gesture is one undo step, recorded when the
    /// first move lands.
    pub fn pointer_down_handle(
        &mut self,
        scene: &Scene,
        id: WidgetId,
        handle: ResizeHandle,
        point: Point,
    ) {
        if !scene.is_selected(id) {
            return;
        }
        let Some(widget) = scene.widget(id) else {
            return;
        };
        self.state = InteractionState::Resizing {
            widget_id: id,
            handle,
            start_position: widget.position,
            start_size: widget.size,
            origin: point,
            current: point,
            history_pushed: false,
        };
    }

    /// Pointer went down on empty canvas.
    pub fn pointer_down_canvas(&mut self, scene: &mut Scene) {
        scene.select_widget(None);
        self.state = InteractionState::Idle;
    }

    /// Pointer moved. Promotes `Pending` to `Dragging` past the
    /// threshold; applies resize geometry incrementally.
    pub fn pointer_move(&mut self, scene: &mut Scene, point: Point) -> Result<(), SceneError> {
        match self.state {
            InteractionState::Idle => {}
            InteractionState::Pending {
                source,
                origin,
                grab_offset,
            } => {
                if (point - origin).hypot() >= DRAG_THRESHOLD {
                    self.state = InteractionState::Dragging {
                        source,
                        origin,
                        grab_offset,
                        current: point,
                    };
                }
            }
            InteractionState::Dragging { ref mut current, .. } => {
                *current = point;
            }
            InteractionState::Resizing {
                widget_id,
                handle,
                start_position,
                start_size,
                origin,
                ref mut current,
                ref mut history_pushed,
            } => {
                *current = point;
                let min = match scene.widget(widget_id) {
                    Some(w) => w.widget_type().min_size(),
                    None => return Err(SceneError::UnknownWidget(widget_id)),
                };
                if !*history_pushed {
                    scene.push_undo();
                    *history_pushed = true;
                }
                let (position, size) =
                    geometry::apply_resize(handle, start_position, start_size, point - origin, min);
                scene.update_widget(widget_id, &WidgetPatch::place(position, size))?;
            }
        }
        Ok(())
    }

    /// Pointer released. Commits the gesture and returns to `Idle`
    /// unconditionally. `over_canvas` is false when the pointer ended
    /// outside the canvas area; drags released there are discarded,
    /// whether they carry a palette entry or an existing widget.
    ///
    /// Returns the id of a widget created by a palette drop, if any.
    pub fn pointer_up(
        &mut self,
        scene: &mut Scene,
        point: Point,
        over_canvas: bool,
    ) -> Result<Option<WidgetId>, SceneError> {
        let state = std::mem::replace(&mut self.state, InteractionState::Idle);
        match state {
            InteractionState::Idle | InteractionState::Pending { .. } => Ok(None),
            InteractionState::Dragging {
                source,
                grab_offset,
                ..
            } => {
                if !over_canvas {
                    return Ok(None);
                }
                match source {
                    DragSource::Palette(widget_type) => {
                        let position = self.drop_position(point - grab_offset);
                        let id = scene.add_widget(widget_type, position);
                        Ok(Some(id))
                    }
                    DragSource::Widget(id) => {
                        if scene.widget(id).is_none() {
                            return Err(SceneError::UnknownWidget(id));
                        }
                        let position = self.drop_position(point - grab_offset);
                        scene.push_undo();
                        scene.update_widget(id, &WidgetPatch::move_to(position))?;
                        Ok(None)
                    }
                }
            }
            // Geometry was applied move-by-move; nothing left to commit.
            InteractionState::Resizing { .. } => Ok(None),
        }
    }

    /// Delete/Backspace pressed: remove the selected widget, if any.
    pub fn delete_selected(&mut self, scene: &mut Scene) -> bool {
        match scene.selected() {
            Some(id) => {
                if self.hovered == Some(id) {
                    self.hovered = None;
                }
                scene.delete_widget(id)
            }
            None => false,
        }
    }

    fn drop_position(&self, raw: Point) -> Point {
        let clamped = geometry::clamp_position(raw);
        if self.snap_enabled {
            geometry::snap_point(clamped, GRID_SIZE)
        } else {
            clamped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::WidgetType;

    fn controller() -> InteractionController {
        InteractionController::new()
    }

    #[test]
    fn test_click_on_widget_selects_without_drag() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Button, Point::new(100.0, 100.0));
        scene.select_widget(None);

        let mut ctl = controller();
        ctl.pointer_down_widget(&mut scene, id, Point::new(110.0, 110.0));
        assert_eq!(scene.selected(), Some(id));
        // 5 px of travel: still a click
        ctl.pointer_move(&mut scene, Point::new(113.0, 114.0)).unwrap();
        assert!(matches!(ctl.state(), InteractionState::Pending { .. }));
        ctl.pointer_up(&mut scene, Point::new(113.0, 114.0), true)
            .unwrap();
        assert!(ctl.is_idle());
        // Position unchanged by a click
        assert_eq!(
            scene.widget(id).unwrap().position,
            Point::new(100.0, 100.0)
        );
    }

    #[test]
    fn test_drag_activates_at_threshold() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Button, Point::new(100.0, 100.0));

        let mut ctl = controller();
        ctl.pointer_down_widget(&mut scene, id, Point::new(110.0, 110.0));
        ctl.pointer_move(&mut scene, Point::new(118.0, 110.0)).unwrap();
        assert!(matches!(ctl.state(), InteractionState::Dragging { .. }));
    }

    #[test]
    fn test_widget_drag_commits_on_release() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Button, Point::new(100.0, 100.0));

        let mut ctl = controller();
        // Grab 10 px inside the widget
        ctl.pointer_down_widget(&mut scene, id, Point::new(110.0, 110.0));
        ctl.pointer_move(&mut scene, Point::new(160.0, 140.0)).unwrap();
        // Scene untouched mid-drag
        assert_eq!(
            scene.widget(id).unwrap().position,
            Point::new(100.0, 100.0)
        );
        ctl.pointer_up(&mut scene, Point::new(160.0, 140.0), true)
            .unwrap();
        assert_eq!(
            scene.widget(id).unwrap().position,
            Point::new(150.0, 130.0)
        );
    }

    #[test]
    fn test_widget_drag_is_undoable_as_one_step() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Button, Point::new(100.0, 100.0));

        let mut ctl = controller();
        ctl.pointer_down_widget(&mut scene, id, Point::new(110.0, 110.0));
        ctl.pointer_move(&mut scene, Point::new(200.0, 200.0)).unwrap();
        ctl.pointer_up(&mut scene, Point::new(200.0, 200.0), true)
            .unwrap();
        assert!(scene.undo());
        assert_eq!(
            scene.widget(id).unwrap().position,
            Point::new(100.0, 100.0)
        );
    }

    #[test]
    fn test_palette_drop_centers_widget() {
        let mut scene = Scene::new();
        let mut ctl = controller();
        ctl.pointer_down_palette(WidgetType::Button, Point::new(10.0, 10.0));
        ctl.pointer_move(&mut scene, Point::new(400.0, 300.0)).unwrap();
        let id = ctl
            .pointer_up(&mut scene, Point::new(400.0, 300.0), true)
            .unwrap()
            .unwrap();
        let widget = scene.widget(id).unwrap();
        // Button is 120x40: centered under the cursor
        assert_eq!(widget.position, Point::new(340.0, 280.0));
        assert_eq!(scene.selected(), Some(id));
    }

    #[test]
    fn test_palette_drop_snaps_when_enabled() {
        let mut scene = Scene::new();
        let mut ctl = controller();
        ctl.snap_enabled = true;
        ctl.pointer_down_palette(WidgetType::Button, Point::new(10.0, 10.0));
        ctl.pointer_move(&mut scene, Point::new(411.0, 305.0)).unwrap();
        let id = ctl
            .pointer_up(&mut scene, Point::new(411.0, 305.0), true)
            .unwrap()
            .unwrap();
        let widget = scene.widget(id).unwrap();
        assert_eq!(widget.position, Point::new(360.0, 280.0));
    }

    #[test]
    fn test_widget_drag_outside_canvas_is_discarded() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Button, Point::new(100.0, 100.0));

        let mut ctl = controller();
        ctl.pointer_down_widget(&mut scene, id, Point::new(110.0, 110.0));
        ctl.pointer_move(&mut scene, Point::new(400.0, 400.0)).unwrap();
        ctl.pointer_up(&mut scene, Point::new(400.0, 400.0), false)
            .unwrap();
        assert_eq!(
            scene.widget(id).unwrap().position,
            Point::new(100.0, 100.0)
        );
        assert!(ctl.is_idle());
        // The aborted drag left no history entry: one undo reverts the add
        assert!(scene.undo());
        assert!(scene.is_empty());
    }

    #[test]
    fn test_palette_release_outside_canvas_is_noop() {
        let mut scene = Scene::new();
        let mut ctl = controller();
        ctl.pointer_down_palette(WidgetType::Table, Point::new(10.0, 10.0));
        ctl.pointer_move(&mut scene, Point::new(400.0, 300.0)).unwrap();
        let created = ctl
            .pointer_up(&mut scene, Point::new(400.0, 300.0), false)
            .unwrap();
        assert!(created.is_none());
        assert!(scene.is_empty());
        assert!(ctl.is_idle());
    }

    #[test]
    fn test_resize_applies_incrementally() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Text, Point::new(100.0, 100.0));

        let mut ctl = controller();
        ctl.pointer_down_handle(
            &scene,
            id,
            ResizeHandle::SouthEast,
            Point::new(300.0, 140.0),
        );
        ctl.pointer_move(&mut scene, Point::new(330.0, 150.0)).unwrap();
        // Geometry visible mid-gesture
        assert_eq!(scene.widget(id).unwrap().size, Size::new(230.0, 50.0));
        ctl.pointer_move(&mut scene, Point::new(350.0, 160.0)).unwrap();
        ctl.pointer_up(&mut scene, Point::new(350.0, 160.0), true)
            .unwrap();
        assert_eq!(scene.widget(id).unwrap().size, Size::new(250.0, 60.0));
        assert_eq!(
            scene.widget(id).unwrap().position,
            Point::new(100.0, 100.0)
        );
    }

    #[test]
    fn test_resize_below_minimum_clamps() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Input, Point::new(100.0, 100.0));

        let mut ctl = controller();
        // Input is 250x70; drag the east handle 240 px left
        ctl.pointer_down_handle(&scene, id, ResizeHandle::East, Point::new(350.0, 130.0));
        ctl.pointer_move(&mut scene, Point::new(110.0, 130.0)).unwrap();
        ctl.pointer_up(&mut scene, Point::new(110.0, 130.0), true)
            .unwrap();
        assert_eq!(scene.widget(id).unwrap().size, Size::new(120.0, 70.0));
    }

    #[test]
    fn test_resize_handle_click_leaves_no_history() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Text, Point::new(100.0, 100.0));

        let mut ctl = controller();
        ctl.pointer_down_handle(&scene, id, ResizeHandle::East, Point::new(300.0, 120.0));
        ctl.pointer_up(&mut scene, Point::new(300.0, 120.0), true)
            .unwrap();
        // Only the add is in history
        assert!(scene.undo());
        assert!(scene.is_empty());
        assert!(!scene.undo());
    }

    #[test]
    fn test_resize_requires_selection() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Text, Point::new(100.0, 100.0));
        scene.select_widget(None);

        let mut ctl = controller();
        ctl.pointer_down_handle(&scene, id, ResizeHandle::East, Point::new(300.0, 120.0));
        assert!(ctl.is_idle());
    }

    #[test]
    fn test_canvas_click_clears_selection() {
        let mut scene = Scene::new();
        scene.add_widget(WidgetType::Select, Point::ZERO);
        let mut ctl = controller();
        ctl.pointer_down_canvas(&mut scene);
        assert_eq!(scene.selected(), None);
    }

    #[test]
    fn test_delete_removes_selected() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Input, Point::ZERO);
        let mut ctl = controller();
        ctl.set_hovered(Some(id));
        assert!(ctl.delete_selected(&mut scene));
        assert!(scene.is_empty());
        assert_eq!(ctl.hovered(), None);
        assert!(!ctl.delete_selected(&mut scene));
    }

    #[test]
    fn test_hover_is_advisory() {
        let mut scene = Scene::new();
        let id = scene.add_widget(WidgetType::Text, Point::ZERO);
        scene.select_widget(None);
        let mut ctl = controller();
        ctl.set_hovered(Some(id));
        assert_eq!(scene.selected(), None);
    }
}
