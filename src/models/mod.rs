mod budget;
mod category;
mod goal;
mod transaction;

pub(crate) use budget::BudgetCategory;
pub(crate) use category::Category;
pub(crate) use goal::{Goal, ProgressTier};
pub(crate) use transaction::Transaction;
