use rust_decimal::Decimal;
use thiserror::Error;

/// Why the ledger refused an input. A rejection never changes ledger state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum Rejection {
    #[error("Description is required")]
    EmptyDescription,
    #[error("Amount '{0}' is not a number")]
    InvalidAmount(String),
    #[error("Amount cannot be negative ({0})")]
    NegativeAmount(Decimal),
    #[error("Amount {0} is too large to add to the running totals")]
    AmountTooLarge(Decimal),
    #[error("Goal name is required")]
    EmptyGoalName,
    #[error("Target '{0}' is not a number")]
    InvalidTarget(String),
    #[error("Target must be greater than zero ({0})")]
    NonPositiveTarget(Decimal),
    #[error("Deadline is required")]
    MissingDeadline,
}
