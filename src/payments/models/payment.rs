use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{
    app::{models::api_error::ApiError, util::cipher::PaymentCipher, util::time},
    auth::jwt::models::claims::Claims,
    payments::dtos::create_payment_dto::CreatePaymentDto,
};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub payment_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: i64,
    pub created_at: i64,
}

impl Payment {
    pub fn new(claims: &Claims, dto: &CreatePaymentDto) -> Self {
        let current_time = time::current_time_in_secs();

        return Self {
            id: Uuid::new_v4().to_string(),
            user_id: claims.id.to_string(),
            title: dto.title.trim().to_string(),
            amount: dto.amount,
            payment_type: dto.payment_type.value().to_string(),
            category: dto
                .category
                .as_ref()
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            description: dto
                .description
                .as_ref()
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            date: dto.date.unwrap_or(current_time),
            created_at: current_time,
        };
    }

    /// Copy with `title` and `description` encrypted for storage.
    pub fn sealed(&self, cipher: &PaymentCipher) -> Result<Self, ApiError> {
        let description = match &self.description {
            Some(description) => Some(cipher.encrypt(description)?),
            None => None,
        };

        Ok(Self {
            title: cipher.encrypt(&self.title)?,
            description,
            ..self.clone()
        })
    }

    pub fn opened(self, cipher: &PaymentCipher) -> Self {
        Self {
            title: cipher.open_or_keep(&self.title),
            description: self.description.as_deref().map(|d| cipher.open_or_keep(d)),
            ..self
        }
    }
}
