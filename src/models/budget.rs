use rust_decimal::Decimal;

use super::Category;

/// Monthly allocation for one category, with spend accumulated so far.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BudgetCategory {
    pub(crate) category: Category,
    pub(crate) amount: Decimal,
    pub(crate) spent: Decimal,
}

impl BudgetCategory {
    pub(crate) fn new(category: Category, amount: Decimal) -> Self {
        Self {
            category,
            amount,
            spent: Decimal::ZERO,
        }
    }

    /// Unspent allocation, floored at zero.
    pub(crate) fn remaining(&self) -> Decimal {
        (self.amount - self.spent).max(Decimal::ZERO)
    }

    /// The five budgeted categories with their default allocations.
    pub(crate) fn defaults() -> Vec<BudgetCategory> {
        [
            (Category::FoodAndDrink, 200),
            (Category::Transportation, 100),
            (Category::Entertainment, 50),
            (Category::Education, 150),
            (Category::Utilities, 80),
        ]
        .into_iter()
        .map(|(category, amount)| Self::new(category, Decimal::from(amount)))
        .collect()
    }
}
