use serde::Serialize;

use crate::app::util::month::Month;

#[derive(Debug, Serialize)]
pub struct Balance {
    pub month: Month,
    pub monthly_credit: f64,
    pub monthly_debit: f64,
    pub balance: f64,
}

impl Balance {
    pub fn new(month: Month, monthly_credit: f64, monthly_debit: f64) -> Self {
        Self {
            month,
            monthly_credit,
            monthly_debit,
            balance: monthly_credit - monthly_debit,
        }
    }
}
