//! The interactive event loop.
//!
//! Draws the widget, polls crossterm events on a 50 ms tick, dispatches
//! keyboard and mouse input into [`App`] methods, and drains send outcomes
//! from the mpsc channel. Each send runs in its own spawned task; nothing in
//! the loop blocks on the network.

use std::{error::Error, io::Stdout, sync::Arc, time::Duration};

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::{mpsc, Mutex};

use crate::api::{classify_reply, ChatRequest, ReplyOutcome};
use crate::core::app::App;
use crate::core::constants::REQUESTED_WITH_HEADER;
use crate::ui::layout::WidgetLayout;
use crate::ui::renderer::ui;
use crate::utils::url::chat_url;

pub struct SendParams {
    pub client: reqwest::Client,
    pub endpoint: String,
    pub text: String,
    pub tx: mpsc::UnboundedSender<ReplyOutcome>,
}

/// Fire one POST to the chat endpoint; the outcome comes back on the
/// channel. There is no retry and no cancellation: a failed request is
/// surfaced once and the user resends by hand.
pub fn spawn_send(params: SendParams) {
    let SendParams {
        client,
        endpoint,
        text,
        tx,
    } = params;
    tokio::spawn(async move {
        let outcome = send_chat(&client, &endpoint, text).await;
        let _ = tx.send(outcome);
    });
}

async fn send_chat(client: &reqwest::Client, endpoint: &str, text: String) -> ReplyOutcome {
    let url = chat_url(endpoint);
    tracing::debug!(%url, "sending chat message");
    let request = ChatRequest { message: text };
    match client
        .post(&url)
        .header(REQUESTED_WITH_HEADER.0, REQUESTED_WITH_HEADER.1)
        .json(&request)
        .send()
        .await
    {
        Ok(response) => {
            let status_ok = response.status().is_success();
            match response.text().await {
                Ok(body) => classify_reply(status_ok, &body),
                Err(err) => {
                    tracing::warn!(%err, "failed to read chat response body");
                    ReplyOutcome::Failed
                }
            }
        }
        Err(err) => {
            tracing::warn!(%err, "chat request failed");
            ReplyOutcome::Failed
        }
    }
}

pub async fn run_widget(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: Arc<Mutex<App>>,
) -> Result<(), Box<dyn Error>> {
    let (tx, mut rx) = mpsc::unbounded_channel::<ReplyOutcome>();

    {
        let mut app_guard = app.lock().await;
        if app_guard.panel_open {
            let size = terminal.size()?;
            app_guard.place_within((size.width, size.height));
        }
    }

    loop {
        {
            let app_guard = app.lock().await;
            if app_guard.exit_requested {
                break Ok(());
            }
            terminal.draw(|f| ui(f, &app_guard))?;
        }

        if event::poll(Duration::from_millis(50))? {
            let viewport = {
                let size = terminal.size()?;
                (size.width, size.height)
            };
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let mut app_guard = app.lock().await;
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app_guard.exit_requested = true;
                        }
                        KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app_guard.toggle_panel(viewport);
                        }
                        KeyCode::Esc => {
                            app_guard.close_panel();
                        }
                        KeyCode::Enter if app_guard.panel_open => {
                            // Enter sends; Shift+Enter is reserved for the
                            // multi-line affordance the single-line field
                            // does not have.
                            if !key.modifiers.contains(KeyModifiers::SHIFT) {
                                submit(&mut app_guard, &tx);
                            }
                        }
                        KeyCode::Char(c)
                            if app_guard.panel_open
                                && !key.modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            app_guard.input.push(c);
                        }
                        KeyCode::Backspace if app_guard.panel_open => {
                            app_guard.input.pop();
                        }
                        KeyCode::Up if app_guard.panel_open => {
                            app_guard.scroll_up(1);
                        }
                        KeyCode::Down if app_guard.panel_open => {
                            let (w, h) = transcript_extent(viewport, &app_guard);
                            app_guard.scroll_down(1, w, h);
                        }
                        _ => {}
                    }
                }
                Event::Mouse(mouse) => {
                    let mut app_guard = app.lock().await;
                    handle_mouse(&mut app_guard, mouse, viewport, &tx);
                }
                Event::Resize(w, h) => {
                    let mut app_guard = app.lock().await;
                    if app_guard.panel_open {
                        app_guard.place_within((w, h));
                    }
                }
                _ => {}
            }
        }

        while let Ok(outcome) = rx.try_recv() {
            let mut app_guard = app.lock().await;
            app_guard.apply_reply(outcome);
        }
    }
}

fn submit(app: &mut App, tx: &mpsc::UnboundedSender<ReplyOutcome>) {
    if let Some(text) = app.submit_input() {
        spawn_send(SendParams {
            client: app.client.clone(),
            endpoint: app.endpoint.clone(),
            text,
            tx: tx.clone(),
        });
    }
}

fn handle_mouse(
    app: &mut App,
    mouse: MouseEvent,
    viewport: (u16, u16),
    tx: &mpsc::UnboundedSender<ReplyOutcome>,
) {
    let area = Rect::new(0, 0, viewport.0, viewport.1);
    let layout = WidgetLayout::compute(area, app);
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if layout.toggle_hit(col, row) {
                app.toggle_panel(viewport);
                return;
            }
            let Some(frame) = layout.panel else {
                return;
            };
            if frame.close_hit(col, row) {
                app.close_panel();
            } else if frame.send_hit(col, row) {
                submit(app, tx);
            } else if let Some(edge) = frame.handle_at(col, row) {
                app.begin_resize(edge, (col, row));
            }
        }
        // While a drag session is live, every move updates it no matter
        // where the pointer sits, so the drag tracks past the handle.
        MouseEventKind::Drag(MouseButton::Left) => {
            app.update_resize((col, row), viewport);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.end_resize();
        }
        MouseEventKind::ScrollUp if app.panel_open => {
            app.scroll_up(3);
        }
        MouseEventKind::ScrollDown if app.panel_open => {
            let (w, h) = transcript_extent(viewport, app);
            app.scroll_down(3, w, h);
        }
        _ => {}
    }
}

fn transcript_extent(viewport: (u16, u16), app: &App) -> (u16, u16) {
    let area = Rect::new(0, 0, viewport.0, viewport.1);
    WidgetLayout::compute(area, app)
        .panel
        .map(|frame| (frame.transcript.width, frame.transcript.height))
        .unwrap_or((viewport.0, viewport.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new("http://127.0.0.1:8000".to_string(), false);
        app.toggle_panel((100, 40));
        app
    }

    fn mouse(kind: MouseEventKind, col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[tokio::test]
    async fn clicking_the_close_control_hides_the_panel() {
        let mut app = test_app();
        let (tx, _rx) = mpsc::unbounded_channel();
        let layout = WidgetLayout::compute(Rect::new(0, 0, 100, 40), &app);
        let close = layout.panel.unwrap().close;
        handle_mouse(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), close.x, close.y),
            (100, 40),
            &tx,
        );
        assert!(!app.panel_open);
    }

    #[tokio::test]
    async fn clicking_the_badge_toggles() {
        let mut app = test_app();
        let (tx, _rx) = mpsc::unbounded_channel();
        let layout = WidgetLayout::compute(Rect::new(0, 0, 100, 40), &app);
        let toggle = layout.toggle;
        handle_mouse(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), toggle.x, toggle.y),
            (100, 40),
            &tx,
        );
        assert!(!app.panel_open);
        handle_mouse(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), toggle.x, toggle.y),
            (100, 40),
            &tx,
        );
        assert!(app.panel_open);
        assert!(app.input_focused);
    }

    #[tokio::test]
    async fn dragging_the_right_border_widens_the_panel() {
        let mut app = test_app();
        let (tx, _rx) = mpsc::unbounded_channel();
        let start = app.panel;
        let grab_col = start.x + start.width - 1;
        let grab_row = start.y + start.height / 2;
        handle_mouse(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), grab_col, grab_row),
            (100, 40),
            &tx,
        );
        assert!(app.is_resizing());
        handle_mouse(
            &mut app,
            mouse(MouseEventKind::Drag(MouseButton::Left), grab_col + 4, grab_row + 7),
            (100, 40),
            &tx,
        );
        assert_eq!(app.panel.width, start.width + 4);
        assert_eq!(app.panel.height, start.height);
        handle_mouse(
            &mut app,
            mouse(MouseEventKind::Up(MouseButton::Left), grab_col + 4, grab_row),
            (100, 40),
            &tx,
        );
        assert!(!app.is_resizing());
    }

    #[tokio::test]
    async fn drag_without_a_session_changes_nothing() {
        let mut app = test_app();
        let (tx, _rx) = mpsc::unbounded_channel();
        let before = app.panel;
        handle_mouse(
            &mut app,
            mouse(MouseEventKind::Drag(MouseButton::Left), 2, 2),
            (100, 40),
            &tx,
        );
        assert_eq!(app.panel, before);
    }

    #[tokio::test]
    async fn send_click_with_blank_input_issues_no_request() {
        let mut app = test_app();
        let (tx, mut rx) = mpsc::unbounded_channel();
        app.input = "   ".to_string();
        let layout = WidgetLayout::compute(Rect::new(0, 0, 100, 40), &app);
        let send = layout.panel.unwrap().send;
        handle_mouse(
            &mut app,
            mouse(
                MouseEventKind::Down(MouseButton::Left),
                send.x + 1,
                send.y + 1,
            ),
            (100, 40),
            &tx,
        );
        assert!(app.messages.is_empty());
        assert!(!app.is_awaiting_reply());
        assert!(rx.try_recv().is_err());
    }
}
