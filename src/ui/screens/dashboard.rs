use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use super::titled_block;
use crate::ui::app::App;
use crate::ui::chart::ChartSlice;
use crate::ui::util::{format_amount, progress_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Min(10),   // Charts
            Constraint::Length(7), // Per-category budget bars
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_spending_chart(f, charts[0], app);
    render_budget_chart(f, charts[1], app);
    render_budget_bars(f, chunks[2], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let summary = app.ledger.summary();
    let remaining_color = if summary.remaining_budget >= Decimal::ZERO {
        palette.green
    } else {
        palette.red
    };

    render_card(f, cards[0], app, "Total Budget", summary.total_budget, palette.accent);
    render_card(f, cards[1], app, "Total Spent", summary.total_spent, palette.red);
    render_card(f, cards[2], app, "Remaining", summary.remaining_budget, remaining_color);
}

fn render_card(f: &mut Frame, area: Rect, app: &App, title: &str, amount: Decimal, color: Color) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(titled_block(title, app.palette()));

    f.render_widget(text, area);
}

fn render_spending_chart(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let block = titled_block("Spending by Category", palette);
    let slices = ChartSlice::from_shares(&app.ledger.spending_by_category());

    if slices.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No spending data to display",
                palette.dim_style(),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    app.chart_style
        .chart()
        .render(f, area, block, &slices, palette);
}

fn render_budget_chart(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let slices = ChartSlice::from_allocations(&app.ledger.budget_overview());
    app.chart_style.chart().render(
        f,
        area,
        titled_block("Budget Overview", palette),
        &slices,
        palette,
    );
}

fn render_budget_bars(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let items: Vec<ListItem> = app
        .ledger
        .budget_overview()
        .iter()
        .map(|status| {
            let ratio = status.used_ratio();
            let color = if ratio > 0.9 {
                palette.red
            } else if ratio > 0.7 {
                palette.yellow
            } else {
                palette.green
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<16}", truncate(status.category.as_str(), 15)),
                    palette.normal_style(),
                ),
                Span::styled(
                    format!(
                        "{:>10} / {:<10} ",
                        format_amount(status.spent),
                        format_amount(status.total)
                    ),
                    Style::default().fg(color),
                ),
                Span::styled(progress_bar(ratio, 20), Style::default().fg(color)),
                Span::styled(
                    format!(" {} left", format_amount(status.remaining)),
                    palette.dim_style(),
                ),
            ]))
        })
        .collect();

    f.render_widget(
        List::new(items).block(titled_block("Budgets", palette)),
        area,
    );
}
