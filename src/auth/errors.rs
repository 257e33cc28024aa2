use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum AuthApiError {
    InvalidGoogleToken,
    MissingEmail,
    UnverifiedEmail,
    GoogleUnavailable,
}

impl AuthApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InvalidGoogleToken => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Invalid Google token.".to_string(),
            },
            Self::MissingEmail => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Google account has no email.".to_string(),
            },
            Self::UnverifiedEmail => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Google email is not verified.".to_string(),
            },
            Self::GoogleUnavailable => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to reach Google.".to_string(),
            },
        }
    }
}
