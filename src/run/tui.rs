use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

use crate::config::Settings;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(settings: &Settings) -> Result<()> {
    let mut app = App::new(settings);
    info!(mode = %settings.display_mode, chart = settings.chart_style.as_str(), "starting tui");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    info!(
        transactions = app.ledger.transactions().len(),
        goals = app.ledger.goals().len(),
        "session ended"
    );
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // Transaction list: area minus header/status/command bars, form and table chrome
            let content_height = f.area().height.saturating_sub(11) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_key(key, app);
        }
    }
    Ok(())
}

pub(crate) fn handle_key(key: KeyEvent, app: &mut App) {
    if app.show_help {
        app.show_help = false;
        return;
    }
    match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app),
        InputMode::Command => handle_command_input(key, app),
        InputMode::Form => handle_form_input(key, app),
    }
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('1') => app.switch_screen(Screen::Dashboard),
        KeyCode::Char('2') => app.switch_screen(Screen::Goals),
        KeyCode::Char('3') => app.switch_screen(Screen::Transactions),
        KeyCode::Tab => cycle_screen(app, 1),
        KeyCode::BackTab => cycle_screen(app, -1),
        KeyCode::Char('a') | KeyCode::Enter => app.open_form(),
        KeyCode::Char('m') => app.toggle_display_mode(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
}

fn handle_command_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_input);
            app.input_mode = InputMode::Normal;
            commands::handle_command(&input, app);
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => app.command_input.push(c),
        _ => {}
    }
}

fn handle_form_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => app.close_form(),
        KeyCode::Tab | KeyCode::Down => {
            if let Some(draft) = app.active_draft_mut() {
                draft.next_field();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(draft) = app.active_draft_mut() {
                draft.prev_field();
            }
        }
        KeyCode::Backspace => {
            if let Some(draft) = app.active_draft_mut() {
                draft.pop();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(draft) = app.active_draft_mut() {
                draft.push(c);
            }
        }
        _ => {}
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn cycle_screen(app: &mut App, step: isize) {
    let screens = Screen::all();
    let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
    let next = (idx as isize + step).rem_euclid(screens.len() as isize) as usize;
    app.switch_screen(screens[next]);
}

fn handle_move_down(app: &mut App) {
    match app.screen {
        Screen::Transactions => scroll_down(
            &mut app.transaction_index,
            &mut app.transaction_scroll,
            app.ledger.transactions().len(),
            app.visible_rows,
        ),
        Screen::Goals => {
            if app.goal_scroll + 1 < app.ledger.goals().len() {
                app.goal_scroll += 1;
            }
        }
        Screen::Dashboard => {}
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::Transactions => scroll_up(&mut app.transaction_index, &mut app.transaction_scroll),
        Screen::Goals => app.goal_scroll = app.goal_scroll.saturating_sub(1),
        Screen::Dashboard => {}
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::Transactions => {
            scroll_to_top(&mut app.transaction_index, &mut app.transaction_scroll)
        }
        Screen::Goals => app.goal_scroll = 0,
        Screen::Dashboard => {}
    }
}

fn handle_goto_bottom(app: &mut App) {
    match app.screen {
        Screen::Transactions => scroll_to_bottom(
            &mut app.transaction_index,
            &mut app.transaction_scroll,
            app.ledger.transactions().len(),
            app.visible_rows,
        ),
        Screen::Goals => app.goal_scroll = app.ledger.goals().len().saturating_sub(1),
        Screen::Dashboard => {}
    }
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
