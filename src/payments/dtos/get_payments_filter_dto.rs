use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{
    app::{models::api_error::ApiError, util::month::Month},
    payments::enums::payment_type::PaymentType,
};

pub static UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Deserialize, Validate)]
pub struct GetPaymentsFilterDto {
    pub month: Option<String>,
    #[serde(rename = "type")]
    pub payment_type: Option<PaymentType>,
    #[validate(
        length(max = 64, message = "category must be at most 64 characters."),
        custom = "validate_not_blank"
    )]
    pub category: Option<String>,
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100."))]
    pub limit: Option<u8>,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::from("category must not be blank."));
        return Err(error);
    }

    Ok(())
}

impl GetPaymentsFilterDto {
    pub fn month(&self) -> Result<Option<Month>, ApiError> {
        match &self.month {
            Some(month) => Ok(Some(Month::parse(month)?)),
            None => Ok(None),
        }
    }

    /// Placeholders are bound in order: user id, month start and end,
    /// type, category.
    pub fn to_sql(&self) -> String {
        let mut sql = "SELECT * FROM payments".to_string();
        let mut clauses = Vec::new();

        let page_limit: u32 = self.limit.unwrap_or(50) as u32;
        let page = self.page.unwrap_or(0);

        let mut index: u8 = 1;

        // WHERE CLAUSES
        clauses.push(["user_id = $", &index.to_string()].concat());

        if self.month.is_some() {
            index += 1;
            clauses.push(["date >= $", &index.to_string()].concat());
            index += 1;
            clauses.push(["date < $", &index.to_string()].concat());
        }
        if self.payment_type.is_some() {
            index += 1;
            clauses.push(["payment_type = $", &index.to_string()].concat());
        }
        if self.category.is_some() {
            index += 1;
            clauses.push(
                [
                    "COALESCE(NULLIF(TRIM(category), ''), '",
                    UNCATEGORIZED,
                    "') = $",
                    &index.to_string(),
                ]
                .concat(),
            );
        }

        // CLAUSES BUILDER
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));

        // ORDER BY
        sql.push_str(" ORDER BY date DESC, id DESC");

        // LIMIT
        sql.push_str(&[" LIMIT ", &page_limit.to_string()].concat());
        sql.push_str(&[" OFFSET ", &(page as u64 * page_limit as u64).to_string()].concat());

        tracing::debug!(%sql);

        sql
    }
}
