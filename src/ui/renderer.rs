//! Draws the widget: the collapsed toggle badge, or the floating panel with
//! transcript, typing indicator, input field, and send button.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::core::app::App;
use crate::ui::layout::{close_label, send_label, toggle_label, WidgetLayout};

pub fn ui(f: &mut Frame, app: &App) {
    let layout = WidgetLayout::compute(f.area(), app);

    let badge_style = if app.panel_open {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    f.render_widget(
        Paragraph::new(toggle_label()).style(badge_style),
        layout.toggle,
    );

    let Some(frame) = layout.panel else {
        return;
    };

    f.render_widget(Clear, frame.area);
    let panel_block = Block::default()
        .borders(Borders::ALL)
        .title(" bulle ")
        .title(
            Line::from(Span::styled(
                close_label(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        );
    f.render_widget(panel_block, frame.area);

    render_transcript(f, app, frame.transcript);
    render_indicator(f, app, frame.indicator);
    render_input(f, app, frame.input);

    let send_button = Paragraph::new(send_label())
        .centered()
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(send_button, frame.send);
}

fn render_transcript(f: &mut Frame, app: &App, area: Rect) {
    // Lines come pre-wrapped to the transcript width; wrapping again here
    // would desynchronize the scroll bound from what is drawn.
    let lines = app.build_display_lines(area.width);
    let total = lines.len().min(usize::from(u16::MAX)) as u16;
    let max_offset = total.saturating_sub(area.height);
    let offset = if app.auto_scroll {
        max_offset
    } else {
        app.scroll_offset.min(max_offset)
    };
    let transcript = Paragraph::new(lines).scroll((offset, 0));
    f.render_widget(transcript, area);
}

fn render_indicator(f: &mut Frame, app: &App, area: Rect) {
    if !app.is_awaiting_reply() {
        return;
    }
    // Pulse at two cycles per second, same cadence as a blinking cursor.
    let elapsed = app.pulse_start.elapsed().as_millis() as f32 / 1000.0;
    let phase = (elapsed * 2.0) % 2.0;
    let intensity = if phase < 1.0 { phase } else { 2.0 - phase };
    let symbol = if intensity < 0.33 {
        "○"
    } else if intensity < 0.66 {
        "◐"
    } else {
        "●"
    };
    let indicator = Paragraph::new(Line::from(vec![
        Span::styled(symbol, Style::default().fg(Color::Yellow)),
        Span::styled(" Bot is typing…", Style::default().fg(Color::DarkGray)),
    ]));
    f.render_widget(indicator, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let field_width = area.width.saturating_sub(2);
    let (visible, cursor_col) = app.input_display(field_width);
    let input_style = if app.input_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let input = Paragraph::new(visible).style(input_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Message (Enter to send)"),
    );
    f.render_widget(input, area);

    if app.input_focused {
        f.set_cursor_position((area.x + 1 + cursor_col, area.y + 1));
    }
}
