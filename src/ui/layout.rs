//! Maps the current frame and widget state to rectangles.
//!
//! The renderer and the event loop both consume one [`WidgetLayout`] per
//! pass, so what gets drawn and what gets hit-tested can never disagree.
//! Resize handles are the panel's border cells: the bottom-right corner
//! grabs both axes, each border run grabs its own edge.

use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};

use crate::core::app::App;
use crate::core::panel::ResizeEdge;

const TOGGLE_LABEL: &str = "[ Chat ]";
const SEND_LABEL: &str = "[Send]";
const CLOSE_LABEL: &str = "[x]";

#[derive(Debug, Clone)]
pub struct WidgetLayout {
    /// Toggle badge in the bottom-right corner, always present.
    pub toggle: Rect,
    /// The open panel, absent while the widget is collapsed.
    pub panel: Option<PanelFrame>,
}

#[derive(Debug, Clone)]
pub struct PanelFrame {
    pub area: Rect,
    pub close: Rect,
    pub transcript: Rect,
    pub indicator: Rect,
    pub input: Rect,
    pub send: Rect,
}

impl WidgetLayout {
    pub fn compute(viewport: Rect, app: &App) -> Self {
        let toggle_width = TOGGLE_LABEL.len() as u16;
        let toggle = Rect::new(
            viewport.right().saturating_sub(toggle_width + 1),
            viewport.bottom().saturating_sub(1),
            toggle_width.min(viewport.width),
            1,
        );

        let panel = app.panel_open.then(|| {
            let area = Rect::new(app.panel.x, app.panel.y, app.panel.width, app.panel.height)
                .intersection(viewport);
            let close_width = CLOSE_LABEL.len() as u16;
            let close = Rect::new(
                area.right().saturating_sub(close_width + 1),
                area.y,
                close_width,
                1,
            );

            let inner = area.inner(Margin::new(1, 1));
            let [transcript, indicator, entry] = Layout::vertical([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .areas(inner);
            let send_width = SEND_LABEL.len() as u16 + 2;
            let [input, send] =
                Layout::horizontal([Constraint::Min(1), Constraint::Length(send_width)])
                    .areas(entry);

            PanelFrame {
                area,
                close,
                transcript,
                indicator,
                input,
                send,
            }
        });

        Self { toggle, panel }
    }

    pub fn toggle_hit(&self, col: u16, row: u16) -> bool {
        self.toggle.contains(Position::new(col, row))
    }
}

impl PanelFrame {
    pub fn close_hit(&self, col: u16, row: u16) -> bool {
        self.close.contains(Position::new(col, row))
    }

    pub fn send_hit(&self, col: u16, row: u16) -> bool {
        self.send.contains(Position::new(col, row))
    }

    /// Which resize handle, if any, sits under the pointer. The corner takes
    /// precedence over the edges it touches.
    pub fn handle_at(&self, col: u16, row: u16) -> Option<ResizeEdge> {
        let area = self.area;
        if area.width == 0 || area.height == 0 || !area.contains(Position::new(col, row)) {
            return None;
        }
        let left = col == area.x;
        let right = col == area.right() - 1;
        let top = row == area.y;
        let bottom = row == area.bottom() - 1;

        if bottom && right {
            Some(ResizeEdge::BottomRight)
        } else if right {
            Some(ResizeEdge::Right)
        } else if bottom {
            Some(ResizeEdge::Bottom)
        } else if left {
            Some(ResizeEdge::Left)
        } else if top && !self.close_hit(col, row) {
            Some(ResizeEdge::Top)
        } else {
            None
        }
    }
}

pub(crate) fn toggle_label() -> &'static str {
    TOGGLE_LABEL
}

pub(crate) fn send_label() -> &'static str {
    SEND_LABEL
}

pub(crate) fn close_label() -> &'static str {
    CLOSE_LABEL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::app::App;

    fn open_app() -> App {
        let mut app = App::new("http://127.0.0.1:8000".to_string(), false);
        app.toggle_panel((100, 40));
        app
    }

    fn viewport() -> Rect {
        Rect::new(0, 0, 100, 40)
    }

    #[test]
    fn toggle_badge_sits_bottom_right() {
        let app = App::new("http://127.0.0.1:8000".to_string(), false);
        let layout = WidgetLayout::compute(viewport(), &app);
        assert!(layout.panel.is_none());
        assert!(layout.toggle_hit(layout.toggle.x, 39));
        assert!(!layout.toggle_hit(0, 0));
    }

    #[test]
    fn corner_cell_grabs_both_axes() {
        let app = open_app();
        let layout = WidgetLayout::compute(viewport(), &app);
        let frame = layout.panel.unwrap();
        let area = frame.area;
        assert_eq!(
            frame.handle_at(area.right() - 1, area.bottom() - 1),
            Some(ResizeEdge::BottomRight)
        );
    }

    #[test]
    fn border_runs_map_to_their_edges() {
        let app = open_app();
        let layout = WidgetLayout::compute(viewport(), &app);
        let frame = layout.panel.unwrap();
        let area = frame.area;
        let mid_y = area.y + area.height / 2;
        let mid_x = area.x + area.width / 2;
        assert_eq!(frame.handle_at(area.right() - 1, mid_y), Some(ResizeEdge::Right));
        assert_eq!(frame.handle_at(area.x, mid_y), Some(ResizeEdge::Left));
        assert_eq!(frame.handle_at(mid_x, area.bottom() - 1), Some(ResizeEdge::Bottom));
        assert_eq!(frame.handle_at(mid_x, area.y), Some(ResizeEdge::Top));
        assert_eq!(frame.handle_at(mid_x, mid_y), None);
    }

    #[test]
    fn close_control_is_not_a_resize_handle() {
        let app = open_app();
        let layout = WidgetLayout::compute(viewport(), &app);
        let frame = layout.panel.unwrap();
        assert!(frame.close_hit(frame.close.x, frame.close.y));
        assert_eq!(frame.handle_at(frame.close.x, frame.close.y), None);
    }

    #[test]
    fn interior_regions_are_disjoint() {
        let app = open_app();
        let layout = WidgetLayout::compute(viewport(), &app);
        let frame = layout.panel.unwrap();
        assert_eq!(frame.transcript.intersection(frame.input).height, 0);
        assert_eq!(frame.input.intersection(frame.send).width, 0);
        assert!(frame.send_hit(frame.send.x + 1, frame.send.y + 1));
    }
}
