use crate::config::Settings;
use crate::ledger::{Ledger, Rejection};
use crate::ui::chart::ChartStyle;
use crate::ui::draft::{Draft, GoalDraft, TransactionDraft};
use crate::ui::theme::{DisplayMode, Palette};
use crate::ui::util::format_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Goals,
    Transactions,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Goals, Self::Transactions]
    }

    /// Screens that carry an input form.
    pub(crate) fn has_form(&self) -> bool {
        matches!(self, Self::Goals | Self::Transactions)
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Goals => write!(f, "Goals"),
            Self::Transactions => write!(f, "Transactions"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Form,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Form => write!(f, "FORM"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) display_mode: DisplayMode,
    pub(crate) chart_style: ChartStyle,

    pub(crate) ledger: Ledger,

    // Drafts
    pub(crate) transaction_draft: TransactionDraft,
    pub(crate) goal_draft: GoalDraft,

    // Lists
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,
    pub(crate) goal_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(settings: &Settings) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            display_mode: settings.display_mode,
            chart_style: settings.chart_style,

            ledger: Ledger::new(),

            transaction_draft: TransactionDraft::default(),
            goal_draft: GoalDraft::default(),

            transaction_index: 0,
            transaction_scroll: 0,
            goal_scroll: 0,

            visible_rows: 20,
        }
    }

    pub(crate) fn palette(&self) -> &'static Palette {
        self.display_mode.palette()
    }

    pub(crate) fn toggle_display_mode(&mut self) {
        self.display_mode = self.display_mode.toggled();
        let mode = self.display_mode;
        self.set_status(format!("Display mode: {mode}"));
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        if self.input_mode == InputMode::Form && !screen.has_form() {
            self.input_mode = InputMode::Normal;
        }
    }

    // ── Forms ────────────────────────────────────────────────

    /// The draft behind the current screen's form, if it has one.
    pub(crate) fn active_draft(&self) -> Option<&dyn Draft> {
        match self.screen {
            Screen::Transactions => Some(&self.transaction_draft),
            Screen::Goals => Some(&self.goal_draft),
            Screen::Dashboard => None,
        }
    }

    pub(crate) fn active_draft_mut(&mut self) -> Option<&mut dyn Draft> {
        match self.screen {
            Screen::Transactions => Some(&mut self.transaction_draft),
            Screen::Goals => Some(&mut self.goal_draft),
            Screen::Dashboard => None,
        }
    }

    pub(crate) fn open_form(&mut self) {
        if self.screen.has_form() {
            self.input_mode = InputMode::Form;
            self.status_message.clear();
        }
    }

    /// Leave the form; the draft is kept for later.
    pub(crate) fn close_form(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Submit the active draft. On rejection the form stays open with the
    /// input intact and the reason in the status bar.
    pub(crate) fn submit_form(&mut self) {
        let result = match self.screen {
            Screen::Transactions => self
                .transaction_draft
                .submit(&mut self.ledger)
                .map(|txn| describe_transaction(&txn.description, txn.category, txn.amount)),
            Screen::Goals => self
                .goal_draft
                .submit(&mut self.ledger)
                .map(|goal| format!("Added goal: {} ({})", goal.name, format_amount(goal.target))),
            Screen::Dashboard => return,
        };
        self.finish_submit(result);
    }

    // ── Direct entry (command bar) ───────────────────────────

    pub(crate) fn add_transaction(&mut self, description: &str, amount: &str) {
        let result = self
            .ledger
            .add_transaction(description, amount)
            .map(|txn| describe_transaction(&txn.description, txn.category, txn.amount));
        self.finish_submit(result);
    }

    pub(crate) fn add_goal(&mut self, name: &str, target: &str, deadline: &str) {
        let result = self
            .ledger
            .add_goal(name, target, deadline)
            .map(|goal| format!("Added goal: {} ({})", goal.name, format_amount(goal.target)));
        self.finish_submit(result);
    }

    fn finish_submit(&mut self, result: Result<String, Rejection>) {
        match result {
            Ok(msg) => {
                if self.input_mode == InputMode::Form {
                    self.input_mode = InputMode::Normal;
                }
                self.transaction_index = 0;
                self.transaction_scroll = 0;
                self.set_status(msg);
            }
            Err(rejection) => self.set_status(format!("Not added: {rejection}")),
        }
    }
}

fn describe_transaction(
    description: &str,
    category: crate::models::Category,
    amount: rust_decimal::Decimal,
) -> String {
    format!(
        "Added: {description} → {category} ({})",
        format_amount(amount)
    )
}
