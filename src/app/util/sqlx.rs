use std::borrow::Cow;

use axum::http::StatusCode;
use sqlx::error::DatabaseError;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

#[non_exhaustive]
pub struct SqlStateCodes;

impl SqlStateCodes {
    pub const UNIQUE_VIOLATION: &str = "23505";
}

pub fn get_code_from_db_err(db_err: &dyn DatabaseError) -> Option<String> {
    match db_err.code() {
        Some(code) => match code {
            Cow::Borrowed(val) => Some(val.to_owned()),
            Cow::Owned(val) => Some(val),
        },
        None => None,
    }
}

/// Maps a unique violation to 409 with `conflict_message`, anything else to 500.
pub fn map_write_error(e: sqlx::Error, conflict_message: &str) -> ApiError {
    let Some(db_err) = e.as_database_error() else {
        tracing::error!(%e);
        return DefaultApiError::InternalServerError.value();
    };

    let Some(code) = get_code_from_db_err(db_err) else {
        tracing::error!(%e);
        return DefaultApiError::InternalServerError.value();
    };

    match code.as_str() {
        SqlStateCodes::UNIQUE_VIOLATION => ApiError {
            code: StatusCode::CONFLICT,
            message: conflict_message.to_string(),
        },
        _ => {
            tracing::error!(%e);
            DefaultApiError::InternalServerError.value()
        }
    }
}
