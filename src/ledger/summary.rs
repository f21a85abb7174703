use rust_decimal::Decimal;

use crate::models::Category;

/// Headline figures shown on the summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) total_budget: Decimal,
    pub(crate) total_spent: Decimal,
    pub(crate) remaining_budget: Decimal,
}

/// One slice of the "spending by category" breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryShare {
    pub(crate) category: Category,
    pub(crate) value: Decimal,
}

/// Budget-vs-spent figures for one budgeted category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BudgetStatus {
    pub(crate) category: Category,
    pub(crate) remaining: Decimal,
    pub(crate) spent: Decimal,
    pub(crate) total: Decimal,
}

impl BudgetStatus {
    /// Fraction of the allocation used, in `0.0..=1.0`. Zero allocations
    /// report full usage once anything has been spent.
    pub(crate) fn used_ratio(&self) -> f64 {
        use rust_decimal::prelude::ToPrimitive;

        if self.total > Decimal::ZERO {
            (self.spent / self.total).to_f64().unwrap_or(0.0).min(1.0)
        } else if self.spent > Decimal::ZERO {
            1.0
        } else {
            0.0
        }
    }
}
