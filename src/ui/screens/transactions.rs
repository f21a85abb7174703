use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use super::{render_form, titled_block};
use crate::ui::app::App;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Add transaction form
            Constraint::Min(5),    // Recent transactions
        ])
        .split(area);

    render_form(f, chunks[0], app, "Add New Transaction", &app.transaction_draft);
    render_list(f, chunks[1], app);
}

fn render_list(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let count = app.ledger.transactions().len();

    if count == 0 {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No transactions yet. Add your first transaction above!",
                palette.dim_style(),
            )),
        ])
        .centered()
        .block(titled_block("Recent Transactions (0)", palette));
        f.render_widget(msg, area);
        return;
    }

    let header = Row::new(
        ["Description", "Category", "Date", "Amount"]
            .iter()
            .map(|h| Cell::from(*h).style(palette.header_style())),
    )
    .height(1);

    let rows: Vec<Row> = app
        .ledger
        .recent_transactions()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let style = if i == app.transaction_index {
                palette.selected_style()
            } else if i % 2 == 1 {
                palette.alt_row_style()
            } else {
                palette.normal_style()
            };

            Row::new(vec![
                Cell::from(truncate(&txn.description, 40)),
                Cell::from(txn.category.as_str()),
                Cell::from(txn.date_label()),
                Cell::from(Span::styled(
                    format!("-{}", format_amount(txn.amount)),
                    palette.expense_style(),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(20),
        Constraint::Length(16),
        Constraint::Length(12),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(titled_block(&format!("Recent Transactions ({count})"), palette));

    f.render_widget(table, area);
}
