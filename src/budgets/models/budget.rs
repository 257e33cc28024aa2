use serde::Serialize;
use sqlx::FromRow;

use crate::app::util::month::Month;

#[derive(Debug, Serialize, FromRow)]
pub struct Budget {
    pub user_id: String,
    pub month: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl Budget {
    /// Stand-in for a month the user has not set a goal for.
    pub fn empty(user_id: &str, month: Month) -> Self {
        Self {
            user_id: user_id.to_string(),
            month: month.to_string(),
            amount: 0.0,
            updated_at: None,
            created_at: None,
        }
    }
}
