mod error;
mod summary;

use std::str::FromStr;

use chrono::{Local, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{info, warn};

use crate::categorize::Categorizer;
use crate::models::{BudgetCategory, Category, Goal, Transaction};

pub(crate) use error::Rejection;
pub(crate) use summary::{BudgetStatus, CategoryShare, Summary};

/// In-memory owner of transactions, budget categories and savings goals.
///
/// Mutation only happens through [`Ledger::add_transaction`] and
/// [`Ledger::add_goal`]; everything else is derived from the current lists.
#[derive(Debug)]
pub(crate) struct Ledger {
    transactions: Vec<Transaction>,
    budgets: Vec<BudgetCategory>,
    goals: Vec<Goal>,
    next_transaction_id: u32,
    next_goal_id: u32,
    categorizer: Categorizer,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self {
            transactions: Vec::new(),
            budgets: BudgetCategory::defaults(),
            goals: Vec::new(),
            next_transaction_id: 1,
            next_goal_id: 1,
            categorizer: Categorizer::standard(),
        }
    }

    // ── Mutations ────────────────────────────────────────────

    /// Record a spend dated today.
    pub(crate) fn add_transaction(
        &mut self,
        description: &str,
        amount_raw: &str,
    ) -> Result<Transaction, Rejection> {
        self.add_transaction_on(description, amount_raw, Local::now().date_naive())
    }

    pub(crate) fn add_transaction_on(
        &mut self,
        description: &str,
        amount_raw: &str,
        date: NaiveDate,
    ) -> Result<Transaction, Rejection> {
        let validated = validate_transaction(description, amount_raw);
        let (description, amount) = match validated {
            Ok(v) => v,
            Err(rejection) => {
                warn!(%rejection, "transaction rejected");
                return Err(rejection);
            }
        };

        let category = self.categorizer.categorize(&description);
        let budget_index = self.budgets.iter().position(|b| b.category == category);

        // Every running total must stay representable.
        let budget_fits = match budget_index {
            Some(i) => self.budgets[i].spent.checked_add(amount).is_some(),
            None => true,
        };
        if !budget_fits || self.total_spent().checked_add(amount).is_none() {
            let rejection = Rejection::AmountTooLarge(amount);
            warn!(%rejection, "transaction rejected");
            return Err(rejection);
        }

        let txn = Transaction {
            id: self.next_transaction_id,
            description,
            amount,
            date,
            category,
        };
        self.next_transaction_id += 1;

        if let Some(budget) = budget_index.and_then(|i| self.budgets.get_mut(i)) {
            budget.spent += amount;
        }
        self.transactions.push(txn.clone());

        info!(
            id = txn.id,
            category = %txn.category,
            amount = %txn.amount,
            "transaction added"
        );
        Ok(txn)
    }

    pub(crate) fn add_goal(
        &mut self,
        name: &str,
        target_raw: &str,
        deadline: &str,
    ) -> Result<Goal, Rejection> {
        let (name, target, deadline) = match validate_goal(name, target_raw, deadline) {
            Ok(v) => v,
            Err(rejection) => {
                warn!(%rejection, "goal rejected");
                return Err(rejection);
            }
        };

        let goal = Goal::new(self.next_goal_id, name, target, deadline);
        self.next_goal_id += 1;
        self.goals.push(goal.clone());

        info!(id = goal.id, target = %goal.target, "goal added");
        Ok(goal)
    }

    // ── Queries ──────────────────────────────────────────────

    /// Transactions in insertion order.
    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Transactions newest first.
    pub(crate) fn recent_transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().rev()
    }

    pub(crate) fn budgets(&self) -> &[BudgetCategory] {
        &self.budgets
    }

    pub(crate) fn goals(&self) -> &[Goal] {
        &self.goals
    }

    // ── Aggregates ───────────────────────────────────────────

    pub(crate) fn total_spent(&self) -> Decimal {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    pub(crate) fn total_budget(&self) -> Decimal {
        self.budgets.iter().map(|b| b.amount).sum()
    }

    /// May go negative once spending exceeds the allocations.
    pub(crate) fn remaining_budget(&self) -> Decimal {
        self.total_budget() - self.total_spent()
    }

    pub(crate) fn summary(&self) -> Summary {
        Summary {
            total_budget: self.total_budget(),
            total_spent: self.total_spent(),
            remaining_budget: self.remaining_budget(),
        }
    }

    /// Non-zero spend per category in budget order. Spend on `Other`, which
    /// has no budget entry, is appended last so the slices add up to
    /// [`Ledger::total_spent`].
    pub(crate) fn spending_by_category(&self) -> Vec<CategoryShare> {
        let unbudgeted: Decimal = self
            .transactions
            .iter()
            .filter(|t| !self.budgets().iter().any(|b| b.category == t.category))
            .map(|t| t.amount)
            .sum();

        self.budgets
            .iter()
            .map(|b| CategoryShare {
                category: b.category,
                value: b.spent,
            })
            .chain(std::iter::once(CategoryShare {
                category: Category::Other,
                value: unbudgeted,
            }))
            .filter(|share| share.value > Decimal::ZERO)
            .collect()
    }

    /// One entry per budget category, including untouched ones.
    pub(crate) fn budget_overview(&self) -> Vec<BudgetStatus> {
        self.budgets()
            .iter()
            .map(|b| BudgetStatus {
                category: b.category,
                remaining: b.remaining(),
                spent: b.spent,
                total: b.amount,
            })
            .collect()
    }
}

// ── Validation ───────────────────────────────────────────────

fn validate_transaction(
    description: &str,
    amount_raw: &str,
) -> Result<(String, Decimal), Rejection> {
    let description = description.trim();
    if description.is_empty() {
        return Err(Rejection::EmptyDescription);
    }

    let amount =
        parse_money(amount_raw).ok_or_else(|| Rejection::InvalidAmount(amount_raw.to_string()))?;
    if amount < Decimal::ZERO {
        return Err(Rejection::NegativeAmount(amount));
    }

    Ok((description.to_string(), round_cents(amount)))
}

fn validate_goal(
    name: &str,
    target_raw: &str,
    deadline: &str,
) -> Result<(String, Decimal, String), Rejection> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Rejection::EmptyGoalName);
    }

    let target =
        parse_money(target_raw).ok_or_else(|| Rejection::InvalidTarget(target_raw.to_string()))?;
    let target = round_cents(target);
    if target <= Decimal::ZERO {
        return Err(Rejection::NonPositiveTarget(target));
    }

    let deadline = deadline.trim();
    if deadline.is_empty() {
        return Err(Rejection::MissingDeadline);
    }

    Ok((name.to_string(), target, deadline.to_string()))
}

/// Strict decimal parse: surrounding whitespace is allowed, anything else
/// that is not part of the number is not. Digit separators and exponents
/// are refused.
pub(crate) fn parse_money(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
    {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

fn round_cents(value: Decimal) -> Decimal {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}
