//! Panel geometry and the drag-to-resize session.
//!
//! All math is pure: a [`DragSession`] records where a drag started, and
//! [`DragSession::resized`] turns the current pointer position into a new,
//! clamped panel rectangle. Width and height stay within the bounds derived
//! from the viewport; the origin never goes negative. When the viewport is
//! smaller than the minimum size, the minimum wins.

use crate::core::constants::{
    MIN_PANEL_HEIGHT, MIN_PANEL_WIDTH, PANEL_HEIGHT_MARGIN, PANEL_WIDTH_MARGIN,
};

/// The five grab zones on the panel border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    BottomRight,
    Right,
    Bottom,
    Left,
    Top,
}

/// Panel position and size in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl PanelRect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Width/height limits for a given viewport.
#[derive(Debug, Clone, Copy)]
pub struct SizeBounds {
    pub min_width: u16,
    pub max_width: u16,
    pub min_height: u16,
    pub max_height: u16,
}

impl SizeBounds {
    pub fn for_viewport(width: u16, height: u16) -> Self {
        Self {
            min_width: MIN_PANEL_WIDTH,
            max_width: width.saturating_sub(PANEL_WIDTH_MARGIN),
            min_height: MIN_PANEL_HEIGHT,
            max_height: height.saturating_sub(PANEL_HEIGHT_MARGIN),
        }
    }

    fn clamp_width(&self, value: i32) -> u16 {
        clamp_dimension(value, self.min_width, self.max_width)
    }

    fn clamp_height(&self, value: i32) -> u16 {
        clamp_dimension(value, self.min_height, self.max_height)
    }
}

// Same operator order as `max(min, min(value, max))`: the minimum wins when
// the viewport-derived maximum falls below it.
fn clamp_dimension(value: i32, min: u16, max: u16) -> u16 {
    value.min(i32::from(max)).max(i32::from(min)) as u16
}

/// Transient record of an in-progress resize: which edge grabbed, where the
/// pointer started, and the panel geometry at that moment. Lives only
/// between mouse-down on a handle and mouse-up.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    edge: ResizeEdge,
    start_col: u16,
    start_row: u16,
    origin: PanelRect,
}

impl DragSession {
    pub fn new(edge: ResizeEdge, pointer: (u16, u16), origin: PanelRect) -> Self {
        Self {
            edge,
            start_col: pointer.0,
            start_row: pointer.1,
            origin,
        }
    }

    pub fn edge(&self) -> ResizeEdge {
        self.edge
    }

    /// Panel geometry for the current pointer position. Only the axis an
    /// edge moves is repositioned: left-edge drags shift x so the panel
    /// grows leftward, top-edge drags shift y so it grows upward.
    pub fn resized(&self, pointer: (u16, u16), bounds: &SizeBounds) -> PanelRect {
        let dx = i32::from(pointer.0) - i32::from(self.start_col);
        let dy = i32::from(pointer.1) - i32::from(self.start_row);

        let mut width = i32::from(self.origin.width);
        let mut height = i32::from(self.origin.height);
        let mut x = i32::from(self.origin.x);
        let mut y = i32::from(self.origin.y);

        match self.edge {
            ResizeEdge::BottomRight => {
                width += dx;
                height += dy;
            }
            ResizeEdge::Right => width += dx,
            ResizeEdge::Bottom => height += dy,
            ResizeEdge::Left => {
                width -= dx;
                x += dx;
            }
            ResizeEdge::Top => {
                height -= dy;
                y += dy;
            }
        }

        PanelRect {
            x: x.max(0) as u16,
            y: y.max(0) as u16,
            width: bounds.clamp_width(width),
            height: bounds.clamp_height(height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> SizeBounds {
        // 100x40 viewport: width in [30, 96], height in [10, 34].
        SizeBounds::for_viewport(100, 40)
    }

    fn panel() -> PanelRect {
        PanelRect::new(20, 10, 42, 15)
    }

    #[test]
    fn right_drag_changes_width_only() {
        let drag = DragSession::new(ResizeEdge::Right, (62, 17), panel());
        let resized = drag.resized((67, 29), &bounds());
        assert_eq!(resized, PanelRect::new(20, 10, 47, 15));
    }

    #[test]
    fn bottom_drag_changes_height_only() {
        let drag = DragSession::new(ResizeEdge::Bottom, (30, 25), panel());
        let resized = drag.resized((55, 29), &bounds());
        assert_eq!(resized, PanelRect::new(20, 10, 42, 19));
    }

    #[test]
    fn bottom_right_drag_changes_both_without_moving_origin() {
        let drag = DragSession::new(ResizeEdge::BottomRight, (62, 25), panel());
        let resized = drag.resized((65, 27), &bounds());
        assert_eq!(resized, PanelRect::new(20, 10, 45, 17));
    }

    #[test]
    fn left_drag_grows_leftward() {
        let drag = DragSession::new(ResizeEdge::Left, (20, 17), panel());
        let resized = drag.resized((15, 17), &bounds());
        assert_eq!(resized, PanelRect::new(15, 10, 47, 15));
    }

    #[test]
    fn top_drag_grows_upward() {
        let drag = DragSession::new(ResizeEdge::Top, (30, 10), panel());
        let resized = drag.resized((30, 7), &bounds());
        assert_eq!(resized, PanelRect::new(20, 7, 42, 18));
    }

    #[test]
    fn width_never_exceeds_viewport_bound() {
        let drag = DragSession::new(ResizeEdge::Right, (62, 17), panel());
        let resized = drag.resized((62 + 500, 17), &bounds());
        assert_eq!(resized.width, 96);
    }

    #[test]
    fn width_never_falls_below_minimum() {
        let drag = DragSession::new(ResizeEdge::Right, (62, 17), panel());
        let resized = drag.resized((0, 17), &bounds());
        assert_eq!(resized.width, MIN_PANEL_WIDTH);
    }

    #[test]
    fn height_respects_both_bounds() {
        let drag = DragSession::new(ResizeEdge::Bottom, (30, 25), panel());
        assert_eq!(drag.resized((30, 500), &bounds()).height, 34);
        assert_eq!(drag.resized((30, 0), &bounds()).height, MIN_PANEL_HEIGHT);
    }

    #[test]
    fn origin_never_goes_negative() {
        let drag = DragSession::new(ResizeEdge::Left, (20, 17), panel());
        // A drag far past the screen edge clamps x to 0.
        let resized = drag.resized((0, 17), &drag_wide_bounds());
        assert_eq!(resized.x, 0);

        let drag = DragSession::new(ResizeEdge::Top, (30, 10), panel());
        let resized = drag.resized((30, 0), &drag_wide_bounds());
        assert_eq!(resized.y, 0);
    }

    fn drag_wide_bounds() -> SizeBounds {
        SizeBounds::for_viewport(200, 80)
    }

    #[test]
    fn minimum_wins_on_tiny_viewports() {
        let tiny = SizeBounds::for_viewport(20, 8);
        let drag = DragSession::new(ResizeEdge::BottomRight, (10, 5), panel());
        let resized = drag.resized((11, 6), &tiny);
        assert_eq!(resized.width, MIN_PANEL_WIDTH);
        assert_eq!(resized.height, MIN_PANEL_HEIGHT);
    }
}
