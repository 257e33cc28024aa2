use sqlx::FromRow;

/// The non-sensitive columns of a payment used for aggregation.
#[derive(Debug, Clone, FromRow)]
pub struct PaymentSummary {
    pub payment_type: String,
    pub category: Option<String>,
    pub amount: f64,
}
