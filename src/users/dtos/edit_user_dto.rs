use axum::http::StatusCode;
use serde::Deserialize;
use validator::Validate;

use crate::app::{models::api_error::ApiError, util::time};

#[derive(Debug, Deserialize, Validate)]
pub struct EditUserDto {
    #[validate(regex(
        path = "super::USERNAME_REGEX",
        message = "username must be 3 to 24 letters, digits, '_', '.' or '-'."
    ))]
    pub username: Option<String>,
    #[validate(
        length(
            min = 4,
            max = 32,
            message = "phone_number must be between 4 and 32 characters."
        ),
        regex(
            path = "super::PHONE_NUMBER_REGEX",
            message = "phone_number may only contain digits, spaces, '(', ')', '-' and a leading '+'."
        )
    )]
    pub phone_number: Option<String>,
}

impl EditUserDto {
    /// Blank form fields mean "leave unchanged".
    pub fn without_blanks(self) -> Self {
        let keep = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            username: keep(self.username),
            phone_number: keep(self.phone_number),
        }
    }

    pub fn to_sql(&self) -> Result<String, ApiError> {
        let mut sql = "UPDATE users SET ".to_string();
        let mut clauses = Vec::new();

        let mut index: u8 = 1;

        // SET CLAUSES
        if self.username.is_some() {
            clauses.push(["username = $", &index.to_string()].concat());
            index += 1;
            clauses.push(["username_key = $", &index.to_string()].concat());
            index += 1;
        }
        if self.phone_number.is_some() {
            clauses.push(["phone_number = $", &index.to_string()].concat());
            index += 1;
        }

        // CLAUSES BUILDER
        if clauses.is_empty() {
            return Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Received nothing to edit.".to_string(),
            });
        }

        sql.push_str(&clauses.join(", "));

        let updated_at = time::current_time_in_secs();
        sql.push_str(&[", updated_at = ", &updated_at.to_string()].concat());
        sql.push_str(&[" WHERE id = $", &index.to_string()].concat());
        sql.push_str(" RETURNING *");

        tracing::debug!(%sql);

        Ok(sql)
    }
}
