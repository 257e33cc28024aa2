use serde::Serialize;

use crate::app::util::month::Month;

#[derive(Debug, Serialize)]
pub struct MonthOption {
    pub value: Month,
    pub label: String,
}

impl MonthOption {
    pub fn from_month(month: Month) -> Self {
        Self {
            value: month,
            label: month.label(),
        }
    }
}
