//! Stage focus panel rendering
//!
//! The focus panel swaps content per stage: the registration stage shows
//! the trade-name check, the licensing stage shows the compatibility
//! insight cards, every other stage lists its tasks.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::app::{App, LICENSING_STAGE_ID, REGISTRATION_STAGE_ID};
use crate::compat::{CompatibilityBadge, EvaluationOutcome, LicenseInsight};
use crate::models::{InputMode, TaskStatus};
use crate::theme::{
    AMBER_WARNING, BG_SECONDARY, BORDER_SUBTLE, GREEN_SUCCESS, RED_ERROR, ROUNDED_BORDERS,
    TEAL_BRIGHT, TEAL_PRIMARY, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::utils::format_date;

use super::helpers::wrap_text;

pub fn render_focus(area: Rect, app: &App, frame: &mut Frame) {
    let Some(stage) = app.journey.selected_stage() else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", stage.title))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    let width = inner.width.saturating_sub(2) as usize;

    // Stage header: badge + status detail + description
    let mut header = vec![Span::styled(
        format!(" {} ", stage.state.label()),
        Style::default().fg(TEAL_BRIGHT).add_modifier(Modifier::BOLD),
    )];
    if let Some(detail) = stage.status_detail {
        header.push(Span::styled(
            format!("  {}", detail),
            Style::default().fg(TEXT_MUTED),
        ));
    }
    lines.push(Line::from(header));
    for wrapped in wrap_text(stage.description, width) {
        lines.push(Line::from(Span::styled(
            wrapped,
            Style::default().fg(TEXT_SECONDARY),
        )));
    }
    lines.push(Line::default());

    match stage.id {
        REGISTRATION_STAGE_ID => render_registration(&mut lines, app, width),
        LICENSING_STAGE_ID => render_licensing(&mut lines, app, width),
        _ => render_tasks(&mut lines, app, width),
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);

    // The licensing loading state gets a gauge under the text while the
    // registration check animates its own
    if stage.id == REGISTRATION_STAGE_ID && app.registration.checking && inner.height > 2 {
        let gauge_area = Rect {
            x: inner.x,
            y: inner.y + inner.height - 1,
            width: inner.width,
            height: 1,
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(TEAL_PRIMARY).bg(BG_SECONDARY))
            .percent(u16::from(app.registration.progress))
            .label(format!("Running automated checks {}%", app.registration.progress));
        frame.render_widget(gauge, gauge_area);
    }
}

fn render_tasks(lines: &mut Vec<Line>, app: &App, width: usize) {
    let Some(stage) = app.journey.selected_stage() else {
        return;
    };
    lines.push(Line::from(Span::styled(
        format!("STAGE TASKS ({})", stage.tasks.len()),
        Style::default().fg(TEXT_MUTED),
    )));

    for task in &stage.tasks {
        let (dot, color) = match task.status {
            TaskStatus::Completed => ("●", GREEN_SUCCESS),
            TaskStatus::InProgress => ("●", TEAL_BRIGHT),
            TaskStatus::Pending => ("○", AMBER_WARNING),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", dot), Style::default().fg(color)),
            Span::styled(
                task.label,
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", task.status.label()),
                Style::default().fg(color),
            ),
        ]));

        let timestamp = match (task.completed_on, task.due_date) {
            (Some(done), _) => Some(format!("Completed {}", format_date(done))),
            (None, Some(due)) => Some(format!("Due {}", format_date(due))),
            (None, None) => None,
        };
        let mut meta = format!("  Owner: {}", task.owner);
        if let Some(stamp) = timestamp {
            meta.push_str(&format!("  {}", stamp));
        }
        lines.push(Line::from(Span::styled(meta, Style::default().fg(TEXT_MUTED))));

        if let Some(description) = task.description {
            for wrapped in wrap_text(description, width.saturating_sub(2)) {
                lines.push(Line::from(Span::styled(
                    format!("  {}", wrapped),
                    Style::default().fg(TEXT_SECONDARY),
                )));
            }
        }
    }
}

fn render_registration(lines: &mut Vec<Line>, app: &App, width: usize) {
    let check = &app.registration;
    lines.push(Line::from(Span::styled(
        "TRADE NAME RESERVATION",
        Style::default().fg(TEXT_MUTED),
    )));

    let editing = app.input_mode == InputMode::TradeName;
    let cursor = if editing { "_" } else { "" };
    let field_color = if editing { TEAL_BRIGHT } else { TEXT_PRIMARY };
    lines.push(Line::from(vec![
        Span::styled("Name: ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled(
            format!("{}{}", check.input, cursor),
            Style::default().fg(field_color).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        if editing {
            "Enter runs the automated checks, Esc leaves the field"
        } else {
            "Press n to edit the trade name, Enter to submit"
        },
        Style::default().fg(TEXT_MUTED),
    )));
    lines.push(Line::default());

    if check.checking {
        lines.push(Line::from(Span::styled(
            "Checking availability with DED...",
            Style::default().fg(TEAL_BRIGHT),
        )));
    } else if check.performed {
        if check.available {
            lines.push(Line::from(vec![
                Span::styled("● ", Style::default().fg(GREEN_SUCCESS)),
                Span::styled(
                    format!(
                        "{} is available and reserved.",
                        check.active_name().unwrap_or_default()
                    ),
                    Style::default().fg(GREEN_SUCCESS),
                ),
            ]));
        } else if let Some(reason) = &check.failure_reason {
            for wrapped in wrap_text(reason, width) {
                lines.push(Line::from(Span::styled(
                    wrapped,
                    Style::default().fg(RED_ERROR),
                )));
            }
        }
    }
}

fn render_licensing(lines: &mut Vec<Line>, app: &App, width: usize) {
    lines.push(Line::from(Span::styled(
        "LICENSE COMPATIBILITY",
        Style::default().fg(TEXT_MUTED),
    )));

    match &app.evaluation.outcome {
        EvaluationOutcome::Idle => {
            lines.push(Line::from(Span::styled(
                "Select this stage to evaluate license compatibility.",
                Style::default().fg(TEXT_MUTED),
            )));
        }
        EvaluationOutcome::Loading => {
            lines.push(Line::from(Span::styled(
                format!(
                    "Evaluating {} against license activities...",
                    app.registration.evaluation_name()
                ),
                Style::default().fg(TEAL_BRIGHT),
            )));
        }
        EvaluationOutcome::Failed(message) => {
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(RED_ERROR),
            )));
        }
        EvaluationOutcome::Ready(insights) => {
            for insight in insights {
                render_insight(lines, insight, width);
            }
        }
    }
}

fn render_insight(lines: &mut Vec<Line>, insight: &LicenseInsight, width: usize) {
    let badge_color = match insight.badge {
        CompatibilityBadge::Consistent => GREEN_SUCCESS,
        CompatibilityBadge::ReviewRequired => AMBER_WARNING,
        CompatibilityBadge::Pending => TEXT_MUTED,
    };
    let score_text = insight
        .score
        .map(|score| format!("{}%", score))
        .unwrap_or_else(|| "--".to_string());

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(
            insight.profile.name,
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", score_text),
            Style::default().fg(TEAL_BRIGHT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", insight.badge.label()),
            Style::default().fg(badge_color).add_modifier(Modifier::BOLD),
        ),
    ]));
    for wrapped in wrap_text(insight.profile.summary, width) {
        lines.push(Line::from(Span::styled(
            wrapped,
            Style::default().fg(TEXT_SECONDARY),
        )));
    }
    if let Some(reason) = &insight.reason {
        for wrapped in wrap_text(reason, width.saturating_sub(2)) {
            lines.push(Line::from(Span::styled(
                format!("  {}", wrapped),
                Style::default().fg(TEXT_MUTED),
            )));
        }
    }
}
