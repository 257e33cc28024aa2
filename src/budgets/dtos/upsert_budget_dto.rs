use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct UpsertBudgetDto {
    #[validate(range(
        min = 0.0,
        max = 1000000000000.0,
        message = "amount must be between 0 and 1000000000000."
    ))]
    pub amount: f64,
    pub month: String,
}
