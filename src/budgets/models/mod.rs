pub mod budget;
pub mod budget_progress;
