use serde::Serialize;

use crate::app::util::month::Month;

/// Spending against the monthly goal, as shown on the expense card.
#[derive(Debug, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub month: Month,
    pub goal: f64,
    pub spent: f64,
    pub percentage: u32,
    pub bar_percentage: f64,
    pub over_budget: bool,
}

impl BudgetProgress {
    pub fn new(month: Month, goal: f64, spent: f64) -> Self {
        if goal <= 0.0 {
            return Self {
                month,
                goal,
                spent,
                percentage: 0,
                bar_percentage: 0.0,
                over_budget: false,
            };
        }

        let ratio = spent / goal * 100.0;

        Self {
            month,
            goal,
            spent,
            percentage: ratio.round() as u32,
            bar_percentage: ratio.min(100.0),
            over_budget: spent > goal,
        }
    }
}
