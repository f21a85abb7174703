use crate::ledger::{Ledger, Rejection};
use crate::models::{Goal, Transaction};

/// Unsubmitted form input. Drafts never validate; the ledger does that on
/// submit.
pub(crate) trait Draft {
    fn labels(&self) -> &'static [&'static str];
    fn values(&self) -> Vec<&str>;
    fn field_mut(&mut self, index: usize) -> Option<&mut String>;
    fn focus(&self) -> usize;
    fn set_focus(&mut self, index: usize);
    fn clear(&mut self);

    fn push(&mut self, c: char) {
        let focus = self.focus();
        if let Some(field) = self.field_mut(focus) {
            field.push(c);
        }
    }

    fn pop(&mut self) {
        let focus = self.focus();
        if let Some(field) = self.field_mut(focus) {
            field.pop();
        }
    }

    fn next_field(&mut self) {
        let len = self.labels().len();
        self.set_focus((self.focus() + 1) % len);
    }

    fn prev_field(&mut self) {
        let len = self.labels().len();
        self.set_focus((self.focus() + len - 1) % len);
    }
}

// ── Transaction draft ────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct TransactionDraft {
    pub(crate) description: String,
    pub(crate) amount: String,
    focus: usize,
}

impl TransactionDraft {
    /// Hand the draft to the ledger. Cleared on success, kept on rejection.
    pub(crate) fn submit(&mut self, ledger: &mut Ledger) -> Result<Transaction, Rejection> {
        let txn = ledger.add_transaction(&self.description, &self.amount)?;
        self.clear();
        Ok(txn)
    }
}

impl Draft for TransactionDraft {
    fn labels(&self) -> &'static [&'static str] {
        &["Description", "Amount"]
    }

    fn values(&self) -> Vec<&str> {
        vec![self.description.as_str(), self.amount.as_str()]
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.description),
            1 => Some(&mut self.amount),
            _ => None,
        }
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, index: usize) {
        self.focus = index;
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ── Goal draft ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct GoalDraft {
    pub(crate) name: String,
    pub(crate) target: String,
    pub(crate) deadline: String,
    focus: usize,
}

impl GoalDraft {
    pub(crate) fn submit(&mut self, ledger: &mut Ledger) -> Result<Goal, Rejection> {
        let goal = ledger.add_goal(&self.name, &self.target, &self.deadline)?;
        self.clear();
        Ok(goal)
    }
}

impl Draft for GoalDraft {
    fn labels(&self) -> &'static [&'static str] {
        &["Goal Name", "Target Amount", "Deadline (YYYY-MM-DD)"]
    }

    fn values(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.target.as_str(),
            self.deadline.as_str(),
        ]
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.target),
            2 => Some(&mut self.deadline),
            _ => None,
        }
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, index: usize) {
        self.focus = index;
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use rust_decimal_macros::dec;

    use super::*;

    fn type_str(draft: &mut impl Draft, s: &str) {
        for c in s.chars() {
            draft.push(c);
        }
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut draft = TransactionDraft::default();
        type_str(&mut draft, "Coffee");
        draft.next_field();
        type_str(&mut draft, "4.5x");
        draft.pop();
        assert_eq!(draft.description, "Coffee");
        assert_eq!(draft.amount, "4.5");
        assert_eq!(draft.values(), ["Coffee", "4.5"]);
    }

    #[test]
    fn test_field_cycling_wraps() {
        let mut draft = GoalDraft::default();
        draft.prev_field();
        assert_eq!(draft.focus(), 2);
        draft.next_field();
        assert_eq!(draft.focus(), 0);
    }

    #[test]
    fn test_submit_clears_on_success() {
        let mut ledger = Ledger::new();
        let mut draft = TransactionDraft::default();
        type_str(&mut draft, "Train");
        draft.next_field();
        type_str(&mut draft, "12");

        let txn = draft.submit(&mut ledger).unwrap();
        assert_eq!(txn.amount, dec!(12));
        assert_eq!(draft, TransactionDraft::default());
        assert_eq!(ledger.transactions().len(), 1);
    }

    #[test]
    fn test_submit_keeps_draft_on_rejection() {
        let mut ledger = Ledger::new();
        let mut draft = TransactionDraft::default();
        type_str(&mut draft, "Train");
        draft.next_field();
        type_str(&mut draft, "twelve");

        let err = draft.submit(&mut ledger).unwrap_err();
        assert_eq!(err, Rejection::InvalidAmount("twelve".into()));
        assert_eq!(draft.description, "Train");
        assert_eq!(draft.amount, "twelve");
        assert_eq!(draft.focus(), 1);
        assert!(ledger.transactions().is_empty());
    }

    #[test]
    fn test_goal_draft_submit() {
        let mut ledger = Ledger::new();
        let mut draft = GoalDraft {
            name: "Vacation".into(),
            target: "1000".into(),
            deadline: "2025-12-31".into(),
            ..GoalDraft::default()
        };
        let goal = draft.submit(&mut ledger).unwrap();
        assert_eq!(goal.name, "Vacation");
        assert!(draft.name.is_empty());

        let mut missing = GoalDraft {
            name: "Car".into(),
            target: "5000".into(),
            ..GoalDraft::default()
        };
        assert_eq!(
            missing.submit(&mut ledger),
            Err(Rejection::MissingDeadline)
        );
        assert_eq!(missing.name, "Car");
    }
}
