//! Top-level frame composition

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::InputMode;
use crate::theme::{BG_PRIMARY, TEAL_BRIGHT, TEAL_PRIMARY, TEXT_MUTED, TEXT_PRIMARY};

use super::chat::{render_breakout, render_chat_dock};
use super::focus::render_focus;
use super::panel::render_panel;
use super::timeline::render_timeline;

/// Draw the whole portal frame
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header band
            Constraint::Length(4), // Timeline tab strip
            Constraint::Min(5),    // Body
            Constraint::Length(1), // Key-hint bar
        ])
        .split(area);

    render_header(main_layout[0], app, frame);
    render_timeline(main_layout[1], app, frame);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(main_layout[2]);

    render_focus(body[0], app, frame);
    render_panel(body[1], app, frame);
    render_hints(main_layout[3], app, frame);

    // Overlays draw last
    render_chat_dock(app, frame);
    render_breakout(app, frame);
}

fn render_header(area: Rect, app: &App, frame: &mut Frame) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "Applicant workspace",
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  Abu Dhabi business licensing",
                Style::default().fg(TEXT_MUTED),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "Active: {}  |  Business AI: {}",
                app.journey
                    .selected_stage()
                    .map(|stage| stage.title)
                    .unwrap_or("-"),
                app.chat.status_pill()
            ),
            Style::default().fg(TEXT_MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_hints(area: Rect, app: &App, frame: &mut Frame) {
    let hints = match app.input_mode {
        InputMode::TradeName => " typing trade name | Enter: run checks | Esc: done ",
        InputMode::Chat => " typing message | Enter: send | Esc: done ",
        InputMode::Normal => {
            " q: quit | \u{2190}/\u{2192}: stages | j/k: to-dos | space: toggle | r: resume \
             automation | n: trade name | c: chat "
        }
    };
    let bar = Paragraph::new(hints).style(Style::default().fg(TEXT_PRIMARY).bg(
        if app.journey.manual_hold {
            TEAL_BRIGHT
        } else {
            TEAL_PRIMARY
        },
    ));
    frame.render_widget(bar, area);
}
