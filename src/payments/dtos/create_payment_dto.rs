use serde::Deserialize;
use validator::Validate;

use crate::payments::enums::payment_type::PaymentType;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePaymentDto {
    #[validate(length(
        min = 1,
        max = 512,
        message = "title must be between 1 and 512 characters."
    ))]
    pub title: String,
    #[validate(range(
        min = 0.01,
        max = 1000000000000.0,
        message = "amount must be between 0.01 and 1000000000000."
    ))]
    pub amount: f64,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    #[validate(length(
        min = 1,
        max = 64,
        message = "category must be between 1 and 64 characters."
    ))]
    pub category: Option<String>,
    #[validate(length(max = 1024, message = "description must be at most 1024 characters."))]
    pub description: Option<String>,
    pub date: Option<i64>,
}
