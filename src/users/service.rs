use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    app::{
        errors::DefaultApiError,
        models::api_error::ApiError,
        util::{sqlx::map_write_error, time},
    },
    auth::jwt::models::claims::Claims,
};

use super::{dtos::edit_user_dto::EditUserDto, errors::UsersApiError, models::user::User};

/// Creates the user on first sign-in, otherwise refreshes the Google profile
/// fields and the login time. Rows are keyed by lowercased email.
pub async fn upsert_user_from_google_as_admin(
    email: &str,
    name: Option<&str>,
    picture_url: Option<&str>,
    pool: &PgPool,
) -> Result<User, ApiError> {
    let current_time = time::current_time_in_secs();

    let sqlx_result = sqlx::query_as::<_, User>(
        "
        INSERT INTO users (
            id, email, email_key, name, picture_url,
            last_login_at, updated_at, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $6, $6)
        ON CONFLICT (email_key) DO UPDATE
        SET name = COALESCE(EXCLUDED.name, users.name),
            picture_url = COALESCE(EXCLUDED.picture_url, users.picture_url),
            last_login_at = EXCLUDED.last_login_at,
            updated_at = EXCLUDED.updated_at
        RETURNING *
        ",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(email)
    .bind(email.to_lowercase())
    .bind(name)
    .bind(picture_url)
    .bind(current_time)
    .fetch_one(pool)
    .await;

    match sqlx_result {
        Ok(user) => Ok(user),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_user_by_id(id: &str, pool: &PgPool) -> Result<User, ApiError> {
    let sqlx_result = sqlx::query_as::<_, User>(
        "
        SELECT * FROM users WHERE id = $1
        ",
    )
    .bind(id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(user) => match user {
            Some(user) => Ok(user),
            None => Err(UsersApiError::UserNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn edit_user_by_id(
    id: &str,
    dto: &EditUserDto,
    claims: &Claims,
    pool: &PgPool,
) -> Result<User, ApiError> {
    if claims.id != id {
        return Err(UsersApiError::PermissionDenied.value());
    }

    let sql = dto.to_sql()?;
    let mut sqlx = sqlx::query_as::<_, User>(&sql);

    if let Some(username) = &dto.username {
        sqlx = sqlx.bind(username);
        sqlx = sqlx.bind(username.to_lowercase());
    }
    if let Some(phone_number) = &dto.phone_number {
        sqlx = sqlx.bind(phone_number);
    }
    sqlx = sqlx.bind(id);

    match sqlx.fetch_optional(pool).await {
        Ok(user) => match user {
            Some(user) => Ok(user),
            None => Err(UsersApiError::UserNotFound.value()),
        },
        Err(e) => Err(map_write_error(e, "Username already exists.")),
    }
}
