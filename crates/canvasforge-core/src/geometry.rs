//! Pure geometry for placing, moving and resizing widgets.

use kurbo::{Point, Rect, Size, Vec2};

/// Grid size for snapping (matches the visual canvas grid).
pub const GRID_SIZE: f64 = 20.0;

/// Clamp a size to a per-type minimum, componentwise.
pub fn clamp_size(size: Size, min: Size) -> Size {
    Size::new(size.width.max(min.width), size.height.max(min.height))
}

/// Clamp a position to the canvas (no negative coordinates).
pub fn clamp_position(position: Point) -> Point {
    Point::new(position.x.max(0.0), position.y.max(0.0))
}

/// Snap a value to the nearest grid multiple.
pub fn snap_to_grid(value: f64, grid: f64) -> f64 {
    if grid <= 0.0 {
        return value;
    }
    (value / grid).round() * grid
}

/// Snap both coordinates of a point to the grid.
pub fn snap_point(point: Point, grid: f64) -> Point {
    Point::new(snap_to_grid(point.x, grid), snap_to_grid(point.y, grid))
}

/// Check if `rect` lies entirely inside `bounds`. Advisory; placement is
/// never blocked on it.
pub fn is_within_bounds(rect: Rect, bounds: Rect) -> bool {
    rect.x0 >= bounds.x0 && rect.y0 >= bounds.y0 && rect.x1 <= bounds.x1 && rect.y1 <= bounds.y1
}

/// Check if two rects overlap (shared edges don't count).
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && a.x1 > b.x0 && a.y0 < b.y1 && a.y1 > b.y0
}

/// The eight resize anchors around a selected widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeHandle {
    /// All handles, corners first.
    pub fn all() -> [ResizeHandle; 8] {
        [
            ResizeHandle::NorthWest,
            ResizeHandle::NorthEast,
            ResizeHandle::SouthWest,
            ResizeHandle::SouthEast,
            ResizeHandle::North,
            ResizeHandle::South,
            ResizeHandle::East,
            ResizeHandle::West,
        ]
    }

    /// CSS cursor name for this handle.
    pub fn cursor(&self) -> &'static str {
        match self {
            ResizeHandle::North | ResizeHandle::South => "ns-resize",
            ResizeHandle::East | ResizeHandle::West => "ew-resize",
            ResizeHandle::NorthEast | ResizeHandle::SouthWest => "nesw-resize",
            ResizeHandle::NorthWest | ResizeHandle::SouthEast => "nwse-resize",
        }
    }

    /// Whether this handle moves the left edge.
    fn affects_west(&self) -> bool {
        matches!(
            self,
            ResizeHandle::West | ResizeHandle::NorthWest | ResizeHandle::SouthWest
        )
    }

    /// Whether this handle moves the right edge.
    fn affects_east(&self) -> bool {
        matches!(
            self,
            ResizeHandle::East | ResizeHandle::NorthEast | ResizeHandle::SouthEast
        )
    }

    /// Whether this handle moves the top edge.
    fn affects_north(&self) -> bool {
        matches!(
            self,
            ResizeHandle::North | ResizeHandle::NorthWest | ResizeHandle::NorthEast
        )
    }

    /// Whether this handle moves the bottom edge.
    fn affects_south(&self) -> bool {
        matches!(
            self,
            ResizeHandle::South | ResizeHandle::SouthWest | ResizeHandle::SouthEast
        )
    }
}

/// Resize a box by dragging one handle. `delta` is cursor travel since the
/// pointer went down; `start_position`/`start_size` are the geometry at that
/// moment, so the computation is stateless across moves.
///
/// Width and height clamp to `min`. When a west/north drag pins a dimension
/// at its minimum, the position coordinate freezes at its pre-drag value
/// instead of following the cursor. The result position is clamped to the
/// canvas.
pub fn apply_resize(
    handle: ResizeHandle,
    start_position: Point,
    start_size: Size,
    delta: Vec2,
    min: Size,
) -> (Point, Size) {
    let mut width = start_size.width;
    let mut height = start_size.height;
    let mut x = start_position.x;
    let mut y = start_position.y;

    if handle.affects_east() {
        width = (start_size.width + delta.x).max(min.width);
    } else if handle.affects_west() {
        let proposed = start_size.width - delta.x;
        width = proposed.max(min.width);
        if proposed > min.width {
            x = start_position.x + delta.x;
        }
    }

    if handle.affects_south() {
        height = (start_size.height + delta.y).max(min.height);
    } else if handle.affects_north() {
        let proposed = start_size.height - delta.y;
        height = proposed.max(min.height);
        if proposed > min.height {
            y = start_position.y + delta.y;
        }
    }

    (
        clamp_position(Point::new(x, y)),
        Size::new(width, height),
    )
}
