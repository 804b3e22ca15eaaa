//! Journey orchestration sidebar rendering
//!
//! Automation status with its progress gauge, the "your next step"
//! derivation, and the to-do bank with its completion checkboxes.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::app::App;
use crate::models::NextActionStatus;
use crate::theme::{
    get_pulse_color, AMBER_WARNING, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, GREEN_SUCCESS,
    ROUNDED_BORDERS, TEAL_BRIGHT, TEAL_DIM, TEAL_PRIMARY, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY,
};

use super::helpers::{truncate_end, wrap_text};

pub fn render_panel(area: Rect, app: &App, frame: &mut Frame) {
    let block = Block::default()
        .title(" Journey orchestration ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Automation status + gauge
            Constraint::Length(3), // Your next step
            Constraint::Min(3),    // To-do bank
        ])
        .split(inner);

    render_automation(sections[0], app, frame);
    render_next_step(sections[1], app, frame);
    render_todo_bank(sections[2], app, frame);
}

fn render_automation(area: Rect, app: &App, frame: &mut Frame) {
    let phase = app.journey.current_phase();
    let width = area.width.saturating_sub(1) as usize;

    let mut lines = vec![Line::from(vec![
        Span::styled(
            "● ",
            Style::default().fg(get_pulse_color(app.animation_tick, TEAL_BRIGHT, TEAL_DIM)),
        ),
        Span::styled(
            truncate_end(phase.message, width.saturating_sub(2)),
            Style::default().fg(TEXT_PRIMARY),
        ),
    ])];

    if let Some(consideration) = phase.key_considerations.first() {
        lines.push(Line::from(Span::styled(
            truncate_end(&format!("Key consideration: {}", consideration), width),
            Style::default().fg(TEXT_MUTED),
        )));
    }
    if !phase.data_tags.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate_end(&format!("Data: {}", phase.data_tags.join(", ")), width),
            Style::default().fg(TEXT_MUTED),
        )));
    }
    if app.journey.manual_hold {
        lines.push(Line::from(Span::styled(
            "Automation paused - press r to resume",
            Style::default().fg(AMBER_WARNING),
        )));
    }

    let text_area = Rect { height: area.height.saturating_sub(1), ..area };
    frame.render_widget(Paragraph::new(lines), text_area);

    if area.height >= 2 {
        let gauge_area = Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(TEAL_PRIMARY).bg(BG_TERTIARY))
            .percent(u16::from(app.journey.progress))
            .label(format!("{}% complete", app.journey.progress));
        frame.render_widget(gauge, gauge_area);
    }
}

fn render_next_step(area: Rect, app: &App, frame: &mut Frame) {
    let width = area.width.saturating_sub(1) as usize;
    let lines = vec![
        Line::from(Span::styled("YOUR NEXT STEP", Style::default().fg(TEXT_MUTED))),
        Line::from(Span::styled(
            truncate_end(&app.journey.next_step(), width),
            Style::default().fg(TEAL_BRIGHT).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_todo_bank(area: Rect, app: &App, frame: &mut Frame) {
    let remaining = app.journey.remaining_count();
    let width = area.width.saturating_sub(1) as usize;

    let mut lines = vec![Line::from(vec![
        Span::styled("TO-DO BANK ", Style::default().fg(TEXT_MUTED)),
        Span::styled(
            format!("({} remaining)", remaining),
            Style::default().fg(TEXT_SECONDARY),
        ),
    ])];

    // Keep the cursor visible within the available rows
    let visible_rows = area.height.saturating_sub(1) as usize;
    let offset = app.todo_cursor.saturating_sub(visible_rows.saturating_sub(1));

    for (index, action) in app.journey.actions.iter().enumerate().skip(offset) {
        if lines.len() > visible_rows {
            break;
        }
        let complete = app.journey.is_action_complete(action.id);
        let selected = index == app.todo_cursor;
        let actionable = matches!(action.status, NextActionStatus::Task(_));
        let checkbox = match (actionable, complete) {
            (true, true) => "[x]",
            (true, false) => "[ ]",
            // Informational entries (workflow, guidance) have no checkbox
            (false, _) => " \u{00b7} ",
        };
        let label_color = if complete {
            TEXT_MUTED
        } else if selected {
            TEXT_PRIMARY
        } else {
            TEXT_SECONDARY
        };
        let marker_color = if complete { GREEN_SUCCESS } else { AMBER_WARNING };
        let prefix = if selected { "> " } else { "  " };

        let text = if actionable {
            format!("{} - {}", action.stage_title, action.label)
        } else {
            format!("{} - {} ({})", action.stage_title, action.label, action.status.label())
        };
        let label = truncate_end(&text, width.saturating_sub(6));
        let mut style = Style::default().fg(label_color);
        if selected {
            style = style.add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(vec![
            Span::styled(prefix, Style::default().fg(TEAL_BRIGHT)),
            Span::styled(format!("{} ", checkbox), Style::default().fg(marker_color)),
            Span::styled(label, style),
        ]));

        if selected {
            if let Some(description) = action.description {
                for wrapped in wrap_text(description, width.saturating_sub(6)).into_iter().take(2) {
                    lines.push(Line::from(Span::styled(
                        format!("      {}", wrapped),
                        Style::default().fg(TEXT_MUTED),
                    )));
                }
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}
