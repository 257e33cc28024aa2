use serde::Serialize;

use crate::{analytics::breakdown::CategoryBreakdown, app::util::month::Month};

#[derive(Debug, Serialize)]
pub struct CategoryAnalytics {
    pub month: Month,
    #[serde(flatten)]
    pub breakdown: CategoryBreakdown,
}
