#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::app::*;
use super::chart::ChartStyle;
use super::draft::Draft;
use super::theme::DisplayMode;
use crate::config::Settings;

fn app() -> App {
    App::new(&Settings::default())
}

// ── Construction ──────────────────────────────────────────────

#[test]
fn test_new_takes_settings() {
    let settings = Settings {
        display_mode: DisplayMode::Dark,
        chart_style: ChartStyle::Shares,
        log_file: None,
    };
    let app = App::new(&settings);
    assert_eq!(app.display_mode, DisplayMode::Dark);
    assert_eq!(app.chart_style, ChartStyle::Shares);
    assert_eq!(app.screen, Screen::Dashboard);
    assert!(app.running);
    assert!(app.ledger.transactions().is_empty());
}

#[test]
fn test_toggle_display_mode_reports_status() {
    let mut app = app();
    app.toggle_display_mode();
    assert_eq!(app.display_mode, DisplayMode::Dark);
    assert_eq!(app.status_message, "Display mode: dark");
    app.toggle_display_mode();
    assert_eq!(app.display_mode, DisplayMode::Light);
}

// ── Forms ─────────────────────────────────────────────────────

#[test]
fn test_open_form_only_on_form_screens() {
    let mut app = app();
    app.open_form();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.active_draft().is_none());

    app.switch_screen(Screen::Goals);
    app.open_form();
    assert_eq!(app.input_mode, InputMode::Form);
    assert_eq!(app.active_draft().unwrap().labels().len(), 3);
}

#[test]
fn test_switch_to_dashboard_leaves_form_mode() {
    let mut app = app();
    app.switch_screen(Screen::Transactions);
    app.open_form();
    app.switch_screen(Screen::Goals);
    assert_eq!(app.input_mode, InputMode::Form);
    app.switch_screen(Screen::Dashboard);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_submit_form_success() {
    let mut app = app();
    app.switch_screen(Screen::Transactions);
    app.open_form();
    app.transaction_draft.description = "Coffee".into();
    app.transaction_draft.amount = "4.5".into();
    app.submit_form();

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.ledger.transactions().len(), 1);
    assert_eq!(app.ledger.total_spent(), dec!(4.50));
    assert_eq!(app.status_message, "Added: Coffee → Food & Drink ($4.50)");
}

#[test]
fn test_submit_form_rejection_keeps_draft_open() {
    let mut app = app();
    app.switch_screen(Screen::Goals);
    app.open_form();
    app.goal_draft.name = "Car".into();
    app.goal_draft.target = "-5".into();
    app.goal_draft.deadline = "2026-01-01".into();
    app.submit_form();

    assert_eq!(app.input_mode, InputMode::Form);
    assert!(app.ledger.goals().is_empty());
    assert_eq!(app.goal_draft.name, "Car");
    assert!(app.status_message.starts_with("Not added: Target must be greater than zero"));
}

#[test]
fn test_close_form_keeps_draft() {
    let mut app = app();
    app.switch_screen(Screen::Transactions);
    app.open_form();
    app.active_draft_mut().unwrap().push('x');
    app.close_form();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.transaction_draft.description, "x");
}

// ── Direct entry ──────────────────────────────────────────────

#[test]
fn test_add_goal_status() {
    let mut app = app();
    app.add_goal("Vacation", "1000", "2025-12-31");
    assert_eq!(app.status_message, "Added goal: Vacation ($1,000.00)");
}

#[test]
fn test_add_transaction_resets_list_cursor() {
    let mut app = app();
    app.transaction_index = 3;
    app.transaction_scroll = 2;
    app.add_transaction("Rent", "900");
    assert_eq!(app.transaction_index, 0);
    assert_eq!(app.transaction_scroll, 0);
}
