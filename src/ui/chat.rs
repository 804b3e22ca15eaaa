//! Business AI chat dock and breakout overlay rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::models::{breakout_cards, ChatRole, InputMode};
use crate::theme::{
    BG_SECONDARY, BG_TERTIARY, ROUNDED_BORDERS, TEAL_BRIGHT, TEAL_PRIMARY, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};

use super::helpers::wrap_text;

/// Centered overlay rect taking the given percentage of the frame
fn overlay_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// Render the chat dock overlay when open
pub fn render_chat_dock(app: &App, frame: &mut Frame) {
    if !app.chat.open {
        return;
    }

    let area = overlay_rect(frame.area(), 70, 80);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Business AI - {} ", app.chat.status_pill()))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(TEAL_PRIMARY))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Transcript
            Constraint::Length(2), // Composer + hints
        ])
        .split(inner);

    render_transcript(sections[0], app, frame);
    render_composer(sections[1], app, frame);
}

fn render_transcript(area: Rect, app: &App, frame: &mut Frame) {
    let width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();

    for message in &app.chat.messages {
        let (name, color) = match message.role {
            ChatRole::Assistant => ("Business AI", TEAL_BRIGHT),
            ChatRole::Applicant => ("You", TEXT_PRIMARY),
        };
        lines.push(Line::from(Span::styled(
            name,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        for wrapped in wrap_text(&message.body, width) {
            lines.push(Line::from(Span::styled(
                wrapped,
                Style::default().fg(TEXT_SECONDARY),
            )));
        }
        lines.push(Line::default());
    }

    // Keep the tail of the conversation in view
    let visible = area.height as usize;
    let skip = lines.len().saturating_sub(visible);
    let visible_lines: Vec<Line> = lines.into_iter().skip(skip).collect();
    frame.render_widget(Paragraph::new(visible_lines), area);
}

fn render_composer(area: Rect, app: &App, frame: &mut Frame) {
    let composing = app.input_mode == InputMode::Chat;
    let cursor = if composing { "_" } else { "" };
    let field_color = if composing { TEAL_BRIGHT } else { TEXT_MUTED };

    let lines = vec![
        Line::from(vec![
            Span::styled("> ", Style::default().fg(TEAL_BRIGHT)),
            Span::styled(
                format!("{}{}", app.chat.input, cursor),
                Style::default().fg(field_color),
            ),
        ]),
        Line::from(Span::styled(
            if composing {
                "Enter: send | Esc: stop typing"
            } else {
                "i: type | b: breakout cards | Esc: close chat"
            },
            Style::default().fg(TEXT_MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Render the full-screen breakout research card, if one is active
pub fn render_breakout(app: &App, frame: &mut Frame) {
    let Some(index) = app.chat.breakout else {
        return;
    };
    let cards = breakout_cards();
    let Some(card) = cards.get(index) else {
        return;
    };

    let area = overlay_rect(frame.area(), 80, 70);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ({}/{}) ", card.title, index + 1, cards.len()))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(TEAL_BRIGHT))
        .style(Style::default().bg(BG_TERTIARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for wrapped in wrap_text(card.subtitle, width) {
        lines.push(Line::from(Span::styled(
            wrapped,
            Style::default().fg(TEXT_SECONDARY),
        )));
    }
    lines.push(Line::default());

    for (label, detail) in card.rows {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(TEAL_BRIGHT)),
            Span::styled(
                *label,
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            ),
        ]));
        for wrapped in wrap_text(detail, width.saturating_sub(2)) {
            lines.push(Line::from(Span::styled(
                format!("  {}", wrapped),
                Style::default().fg(TEXT_SECONDARY),
            )));
        }
    }

    lines.push(Line::default());
    for wrapped in wrap_text(card.footnote, width) {
        lines.push(Line::from(Span::styled(
            wrapped,
            Style::default().fg(TEXT_MUTED),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "b: next card | Esc: close",
        Style::default().fg(TEXT_MUTED),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
