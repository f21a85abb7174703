use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::Category;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    pub(crate) id: u32,
    pub(crate) description: String,
    pub(crate) amount: Decimal,
    pub(crate) date: NaiveDate,
    pub(crate) category: Category,
}

impl Transaction {
    /// ISO 8601 date, e.g. `2025-03-14`.
    pub(crate) fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
