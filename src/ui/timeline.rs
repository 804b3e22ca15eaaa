//! Journey timeline tab strip rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::HighlightState;
use crate::theme::{
    get_pulse_color, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, GREEN_SUCCESS, ROUNDED_BORDERS,
    TEAL_BRIGHT, TEAL_DIM, TEAL_PRIMARY, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

use super::helpers::truncate_end;

/// Render one stage card per timeline entry across the given area
pub fn render_timeline(area: Rect, app: &App, frame: &mut Frame) {
    let items = &app.journey.timeline;
    if items.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = items
        .iter()
        .map(|_| Constraint::Ratio(1, items.len() as u32))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, item) in items.iter().enumerate() {
        let selected = item.id == app.journey.selected_stage_id;

        let (indicator, indicator_color, text_color, bg_color) = match item.state {
            HighlightState::Done => ("●", GREEN_SUCCESS, TEXT_PRIMARY, BG_SECONDARY),
            HighlightState::Current => {
                let pulse = get_pulse_color(app.animation_tick, TEAL_BRIGHT, TEAL_DIM);
                ("●", pulse, TEXT_PRIMARY, BG_TERTIARY)
            }
            HighlightState::Upcoming => ("○", TEXT_MUTED, TEXT_SECONDARY, BG_SECONDARY),
        };

        let border_color = if selected { TEAL_PRIMARY } else { BORDER_SUBTLE };
        let card_block = Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(bg_color));

        let inner_width = slots[index].width.saturating_sub(4) as usize;
        let title = truncate_end(item.title, inner_width.saturating_sub(2));

        let title_line = Line::from(vec![
            Span::styled(format!("{} ", indicator), Style::default().fg(indicator_color)),
            Span::styled(
                title,
                Style::default().fg(text_color).add_modifier(Modifier::BOLD),
            ),
        ]);
        let status_line = Line::from(Span::styled(
            truncate_end(item.state.label(), inner_width),
            Style::default().fg(TEXT_MUTED),
        ));

        let paragraph = Paragraph::new(vec![title_line, status_line]).block(card_block);
        frame.render_widget(paragraph, slots[index]);
    }
}
