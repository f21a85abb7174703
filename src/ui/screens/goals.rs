use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use super::{render_form, titled_block};
use crate::models::Goal;
use crate::ui::app::App;
use crate::ui::util::{format_amount, format_percent};

const CARD_HEIGHT: u16 = 5;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(CARD_HEIGHT), // Goal cards
            Constraint::Length(5),        // Add goal form
        ])
        .split(area);

    render_goal_cards(f, chunks[0], app);
    render_form(f, chunks[1], app, "Add New Goal", &app.goal_draft);
}

fn render_goal_cards(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let goals = app.ledger.goals();
    let block = titled_block(&format!("Savings Goals ({})", goals.len()), palette);

    if goals.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No savings goals yet", palette.dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press a to add one, or :goal <target> <deadline> <name>",
                palette.dim_style(),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let fits = (inner.height / CARD_HEIGHT).max(1) as usize;
    let visible: Vec<&Goal> = goals.iter().skip(app.goal_scroll).take(fits).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            visible
                .iter()
                .map(|_| Constraint::Length(CARD_HEIGHT))
                .chain(std::iter::once(Constraint::Min(0)))
                .collect::<Vec<_>>(),
        )
        .split(inner);

    for (goal, row) in visible.into_iter().zip(rows.iter()) {
        render_goal_card(f, *row, app, goal);
    }
}

fn render_goal_card(f: &mut Frame, area: Rect, app: &App, goal: &Goal) {
    let palette = app.palette();
    let progress = goal.progress();
    let color = palette.tier_color(goal.tier());

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Deadline
            Constraint::Length(1), // Progress bar
            Constraint::Length(1), // Saved of target
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("◎ {}", goal.name),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ))),
        parts[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("  Deadline: {}", goal.deadline),
            palette.dim_style(),
        ))),
        parts[1],
    );

    let ratio = (progress / rust_decimal::Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0)
        .clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(palette.surface))
        .ratio(ratio)
        .label(Span::styled(goal.tier().as_str(), palette.normal_style()));
    f.render_widget(gauge, parts[2]);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(
                "  Saved {} of {} ({})",
                format_amount(goal.saved),
                format_amount(goal.target),
                format_percent(progress)
            ),
            palette.dim_style(),
        ))),
        parts[3],
    );
}
