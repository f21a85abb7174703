pub(crate) mod dashboard;
pub(crate) mod goals;
pub(crate) mod transactions;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, InputMode};
use crate::ui::draft::Draft;
use crate::ui::theme::Palette;

pub(crate) fn titled_block<'a>(title: &str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.overlay))
        .title(Span::styled(format!(" {title} "), palette.title_style()))
}

/// Draws a draft as a row of labelled input boxes plus a submit hint.
pub(crate) fn render_form(f: &mut Frame, area: Rect, app: &App, title: &str, draft: &dyn Draft) {
    let palette = app.palette();
    let editing = app.input_mode == InputMode::Form;

    let outer = titled_block(title, palette);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let labels = draft.labels();
    let mut constraints: Vec<Constraint> = labels
        .iter()
        .map(|_| Constraint::Ratio(1, labels.len() as u32 + 1))
        .collect();
    constraints.push(Constraint::Ratio(1, labels.len() as u32 + 1));

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (i, (label, value)) in labels.iter().zip(draft.values()).enumerate() {
        let focused = editing && i == draft.focus();
        let border = if focused {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.overlay)
        };
        let text = if value.is_empty() && !focused {
            Span::styled(*label, palette.dim_style())
        } else {
            Span::styled(value, palette.normal_style())
        };
        let input = Paragraph::new(Line::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(Span::styled(*label, palette.dim_style())),
        );
        f.render_widget(input, cells[i]);

        if focused {
            f.set_cursor_position((cursor_x(cells[i], value), cells[i].y + 1));
        }
    }

    let hint = if editing {
        "Enter add · Tab next · Esc close"
    } else {
        "Press a to fill in"
    };
    let button = Paragraph::new(vec![
        Line::from(Span::styled(
            "+ Add",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(hint, palette.dim_style())),
    ])
    .centered();
    if let Some(cell) = cells.last() {
        f.render_widget(button, cell.inner(ratatui::layout::Margin::new(0, 1)));
    }
}

/// Column just past the typed text inside a bordered input box, held inside
/// the box however long the text gets.
fn cursor_x(cell: Rect, value: &str) -> u16 {
    let typed = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
    let max_x = cell.right().saturating_sub(2);
    cell.x.saturating_add(1).saturating_add(typed).min(max_x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_follows_text() {
        let cell = Rect::new(10, 0, 20, 3);
        assert_eq!(cursor_x(cell, ""), 11);
        assert_eq!(cursor_x(cell, "Coffee"), 17);
    }

    #[test]
    fn test_cursor_clamped_for_long_text() {
        let cell = Rect::new(10, 0, 20, 3);
        assert_eq!(cursor_x(cell, &"x".repeat(100)), 28);
        assert_eq!(cursor_x(cell, &"x".repeat(70_000)), 28);
    }
}
