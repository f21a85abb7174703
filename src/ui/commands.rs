use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Screen};
use super::chart::ChartStyle;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App),
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit FinSmart", cmd_quit, r);
    register_command!("quit", "Quit FinSmart", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("g", "Go to Goals", cmd_goals, r);
    register_command!("goals", "Go to Goals", cmd_goals, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add transaction (e.g. :add 4.50 Coffee run)",
        cmd_add,
        r
    );
    register_command!("a", "Add transaction (e.g. :a 4.50 Coffee run)", cmd_add, r);
    register_command!(
        "goal",
        "Add goal (e.g. :goal 1000 2025-12-31 Vacation)",
        cmd_goal,
        r
    );
    register_command!("theme", "Toggle light/dark mode", cmd_theme, r);
    register_command!(
        "chart",
        "Switch chart style (e.g. :chart shares)",
        cmd_chart,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) {
    let trimmed = input.trim();
    let (cmd_name, args) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
    let args = args.trim();

    if cmd_name.is_empty() {
        return;
    }

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app);
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) {
    app.running = false;
}

fn cmd_dashboard(_args: &str, app: &mut App) {
    app.switch_screen(Screen::Dashboard);
}

fn cmd_goals(_args: &str, app: &mut App) {
    app.switch_screen(Screen::Goals);
}

fn cmd_transactions(_args: &str, app: &mut App) {
    app.switch_screen(Screen::Transactions);
}

fn cmd_help(_args: &str, app: &mut App) {
    app.show_help = true;
}

fn cmd_add(args: &str, app: &mut App) {
    let Some((amount, description)) = args.split_once(' ') else {
        app.set_status("Usage: :add <amount> <description>");
        return;
    };
    app.add_transaction(description, amount);
}

fn cmd_goal(args: &str, app: &mut App) {
    let mut parts = args.splitn(3, ' ');
    let (Some(target), Some(deadline), Some(name)) = (parts.next(), parts.next(), parts.next())
    else {
        app.set_status("Usage: :goal <target> <deadline> <name>");
        return;
    };
    app.add_goal(name, target, deadline);
}

fn cmd_theme(_args: &str, app: &mut App) {
    app.toggle_display_mode();
}

fn cmd_chart(args: &str, app: &mut App) {
    let style = if args.is_empty() {
        Some(app.chart_style.toggled())
    } else {
        ChartStyle::parse(args)
    };
    match style {
        Some(style) => {
            app.chart_style = style;
            app.set_status(format!("Chart style: {}", style.as_str()));
        }
        None => app.set_status(format!("Unknown chart style: {args} (use bars or shares)")),
    }
}
