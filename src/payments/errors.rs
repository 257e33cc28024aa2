use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum PaymentsApiError {
    PaymentNotFound,
}

impl PaymentsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::PaymentNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Payment not found.".to_string(),
            },
        }
    }
}
