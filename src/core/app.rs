//! Runtime state for the widget: the single controller object that owns the
//! transcript, the input buffer, the panel geometry, and the active drag
//! session. Every widget operation (toggle, close, resize begin/update/end,
//! send, apply-reply) is a method here; the event loop only dispatches.

use std::collections::VecDeque;
use std::time::Instant;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use reqwest::Client;
use unicode_width::UnicodeWidthChar;

use crate::api::ReplyOutcome;
use crate::core::constants::{DEFAULT_PANEL_HEIGHT, DEFAULT_PANEL_WIDTH};
use crate::core::message::Message;
use crate::core::panel::{DragSession, PanelRect, ResizeEdge, SizeBounds};
use crate::core::text_wrapping::wrap_text;
use crate::utils::input::is_blank;

pub struct App {
    pub messages: VecDeque<Message>,
    pub input: String,
    pub panel_open: bool,
    pub panel: PanelRect,
    pub drag: Option<DragSession>,
    /// Sends whose outcome has not arrived yet. The typing indicator stays
    /// visible while this is non-zero.
    pub pending_replies: usize,
    pub scroll_offset: u16,
    pub auto_scroll: bool,
    pub input_focused: bool,
    pub exit_requested: bool,
    pub pulse_start: Instant,
    pub client: Client,
    pub endpoint: String,
    placed: bool,
}

impl App {
    pub fn new(endpoint: String, open_on_start: bool) -> Self {
        Self {
            messages: VecDeque::new(),
            input: String::new(),
            panel_open: open_on_start,
            panel: PanelRect::new(0, 0, DEFAULT_PANEL_WIDTH, DEFAULT_PANEL_HEIGHT),
            drag: None,
            pending_replies: 0,
            scroll_offset: 0,
            auto_scroll: true,
            input_focused: open_on_start,
            exit_requested: false,
            pulse_start: Instant::now(),
            client: Client::new(),
            endpoint,
            placed: false,
        }
    }

    // ---- Panel controller ----

    /// Flip panel visibility; when now open, the input takes focus.
    pub fn toggle_panel(&mut self, viewport: (u16, u16)) {
        self.panel_open = !self.panel_open;
        if self.panel_open {
            self.place_within(viewport);
            self.input_focused = true;
        }
    }

    /// Hide the panel unconditionally.
    pub fn close_panel(&mut self) {
        self.panel_open = false;
        self.input_focused = false;
    }

    /// Anchor the panel bottom-right on first open, then keep whatever
    /// geometry the user dragged it to, nudged back inside the viewport.
    pub fn place_within(&mut self, viewport: (u16, u16)) {
        let (vw, vh) = viewport;
        let bounds = SizeBounds::for_viewport(vw, vh);
        self.panel.width = self.panel.width.clamp(bounds.min_width, bounds.max_width.max(bounds.min_width));
        self.panel.height = self
            .panel
            .height
            .clamp(bounds.min_height, bounds.max_height.max(bounds.min_height));
        if !self.placed {
            self.panel.x = vw.saturating_sub(self.panel.width + 2);
            self.panel.y = vh.saturating_sub(self.panel.height + 2);
            self.placed = true;
        } else {
            if self.panel.x + self.panel.width > vw {
                self.panel.x = vw.saturating_sub(self.panel.width);
            }
            if self.panel.y + self.panel.height > vh {
                self.panel.y = vh.saturating_sub(self.panel.height);
            }
        }
    }

    // ---- Resize controller ----

    pub fn begin_resize(&mut self, edge: ResizeEdge, pointer: (u16, u16)) {
        self.drag = Some(DragSession::new(edge, pointer, self.panel));
    }

    /// No-op unless a drag session is active.
    pub fn update_resize(&mut self, pointer: (u16, u16), viewport: (u16, u16)) {
        if let Some(drag) = &self.drag {
            let bounds = SizeBounds::for_viewport(viewport.0, viewport.1);
            self.panel = drag.resized(pointer, &bounds);
        }
    }

    pub fn end_resize(&mut self) {
        self.drag = None;
    }

    pub fn is_resizing(&self) -> bool {
        self.drag.is_some()
    }

    // ---- Messaging controller ----

    /// Take the current input as a message to send. Blank input is rejected
    /// pre-flight: nothing changes and `None` comes back. Otherwise the user
    /// bubble is appended immediately, the state machine enters
    /// Awaiting-Reply, and the trimmed text is handed to the caller for the
    /// network exchange.
    pub fn submit_input(&mut self) -> Option<String> {
        if is_blank(&self.input) {
            return None;
        }
        let text = self.input.trim().to_string();
        self.input.clear();
        self.messages.push_back(Message::user(&text));
        if self.pending_replies == 0 {
            self.pulse_start = Instant::now();
        }
        self.pending_replies += 1;
        self.auto_scroll = true;
        Some(text)
    }

    /// Fold one send outcome into the transcript and leave Awaiting-Reply.
    pub fn apply_reply(&mut self, outcome: ReplyOutcome) {
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.messages.push_back(Message::bot(outcome.bubble_text()));
        self.auto_scroll = true;
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.pending_replies > 0
    }

    // ---- Transcript rendering state ----

    /// Transcript lines pre-wrapped to `width` columns. The renderer draws
    /// these without further wrapping, so `wrapped_line_count` and the drawn
    /// text always agree.
    pub fn build_display_lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for msg in &self.messages {
            let (prefix, prefix_style, body_style) = if msg.is_user() {
                (
                    "You: ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(Color::Cyan),
                )
            } else {
                (
                    "Bot: ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                    Style::default(),
                )
            };
            let composed = format!("{prefix}{}", msg.content);
            for (row, wrapped) in wrap_text(&composed, width).into_iter().enumerate() {
                let body = if row == 0 {
                    wrapped.strip_prefix(prefix).map(str::to_string)
                } else {
                    None
                };
                match body {
                    Some(body) => lines.push(Line::from(vec![
                        Span::styled(prefix, prefix_style),
                        Span::styled(body, body_style),
                    ])),
                    None => lines.push(Line::from(Span::styled(wrapped, body_style))),
                }
            }
            lines.push(Line::from(""));
        }
        lines
    }

    /// Transcript height once wrapped to `width` columns, used to bound the
    /// scroll offset.
    pub fn wrapped_line_count(&self, width: u16) -> u16 {
        self.build_display_lines(width)
            .len()
            .min(usize::from(u16::MAX)) as u16
    }

    pub fn max_scroll_offset(&self, transcript_width: u16, transcript_height: u16) -> u16 {
        self.wrapped_line_count(transcript_width)
            .saturating_sub(transcript_height)
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
        self.auto_scroll = false;
    }

    pub fn scroll_down(&mut self, lines: u16, transcript_width: u16, transcript_height: u16) {
        let max = self.max_scroll_offset(transcript_width, transcript_height);
        self.scroll_offset = self.scroll_offset.saturating_add(lines).min(max);
        if self.scroll_offset >= max {
            self.auto_scroll = true;
        }
    }

    /// Visible input tail and cursor column for a field of `field_width`
    /// columns: the cursor sits after the last character, and long input
    /// scrolls horizontally rather than wrapping.
    pub fn input_display(&self, field_width: u16) -> (&str, u16) {
        let budget = usize::from(field_width.saturating_sub(1));
        let mut start = self.input.len();
        let mut used = 0usize;
        for (idx, ch) in self.input.char_indices().rev() {
            let w = ch.width().unwrap_or(0);
            if used + w > budget {
                break;
            }
            used += w;
            start = idx;
        }
        (&self.input[start..], used as u16)
    }
}
