use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands;
use super::theme::Palette;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let palette = app.palette();
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header + tab bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    render_screen(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_command_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area(), palette);
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let mut titles: Vec<Line> = vec![Line::from(Span::styled(
        "◆ FinSmart",
        palette.header_style(),
    ))];
    titles.extend(Screen::all().iter().enumerate().map(|(i, s)| {
        let num = i + 1;
        if *s == app.screen {
            Line::from(vec![
                Span::styled(format!("{num}:"), Style::default().fg(palette.header_fg)),
                Span::styled(
                    format!("{s}"),
                    Style::default()
                        .fg(palette.header_fg)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ),
            ])
        } else {
            Line::from(Span::styled(
                format!("{num}:{s}"),
                Style::default().fg(palette.header_fg),
            ))
        }
    }));

    let selected = Screen::all()
        .iter()
        .position(|s| *s == app.screen)
        .map_or(0, |i| i + 1);

    let tabs = Tabs::new(titles)
        .select(selected)
        .divider(Span::styled(" | ", Style::default().fg(palette.header_fg)))
        .highlight_style(Style::default())
        .style(Style::default().bg(palette.header_bg));

    f.render_widget(tabs, area);
}

fn render_screen(f: &mut Frame, area: Rect, app: &App) {
    match app.screen {
        Screen::Dashboard => super::screens::dashboard::render(f, area, app),
        Screen::Goals => super::screens::goals::render(f, area, app),
        Screen::Transactions => super::screens::transactions::render(f, area, app),
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let mode_label = format!(" {} ", app.input_mode);
    let mode_color = match app.input_mode {
        InputMode::Normal => palette.accent,
        InputMode::Command => palette.green,
        InputMode::Form => palette.yellow,
    };
    let mode_style = Style::default()
        .fg(palette.header_fg)
        .bg(mode_color)
        .add_modifier(Modifier::BOLD);

    let info = format!(
        " {} | {} txns | {} goals | {} ",
        app.screen,
        app.ledger.transactions().len(),
        app.ledger.goals().len(),
        app.display_mode,
    );

    let right = match (app.input_mode, app.screen) {
        (InputMode::Form, _) => " Enter add | Tab next field | Esc close ",
        (_, Screen::Dashboard) => " m theme | :chart | ? help ",
        (_, Screen::Goals) => " a add goal | m theme | ? help ",
        (_, Screen::Transactions) => " a add | j/k scroll | ? help ",
    };

    let available = area.width as usize;
    let used = mode_label.chars().count() + info.chars().count() + right.chars().count();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(mode_label, mode_style),
        Span::styled(info, palette.status_bar_style()),
        Span::styled(" ".repeat(pad), palette.status_bar_style()),
        Span::styled(right, palette.status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(palette.accent)),
                Span::styled(app.command_input.as_str(), palette.command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Normal | InputMode::Form => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, a to add, ? for help",
                    palette.dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    app.status_message.as_str(),
                    palette.command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(palette.command_bg));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect, palette: &Palette) {
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(palette.yellow)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let row = |text: &'static str| Line::from(Span::styled(text, palette.normal_style()));

    let mut help_text = vec![
        Line::from(Span::styled(
            " FinSmart Help ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Navigation"),
        row("  1-3              Switch tabs           Tab/Shift-Tab  Cycle tabs"),
        row("  j/k or Up/Down   Scroll transactions   g/G            Top/Bottom"),
        row("  m                Light/dark mode       Ctrl-q         Quit"),
        Line::from(""),
        section(" Forms"),
        row("  a                Open form (Goals, Transactions)"),
        row("  Tab/Shift-Tab    Next/previous field   Enter          Add"),
        row("  Esc              Close form, keep input"),
        Line::from(""),
        section(" Commands"),
    ];

    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 1 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<14} {desc}"),
            palette.normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        palette.dim_style(),
    )));

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.command_bg)),
    );
    f.render_widget(help, popup_area);
}
