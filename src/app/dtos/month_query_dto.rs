use serde::Deserialize;

use crate::app::{models::api_error::ApiError, util::month::Month};

#[derive(Debug, Deserialize)]
pub struct MonthQueryDto {
    pub month: Option<String>,
}

impl MonthQueryDto {
    /// The requested month, defaulting to the current one.
    pub fn month(&self) -> Result<Month, ApiError> {
        Month::parse_or_current(self.month.as_deref())
    }
}
