use std::sync::Arc;

use axum::{
    extract::{Path, State},
    headers::{authorization::Bearer, Authorization},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    app::{
        models::api_error::ApiError,
        structs::{header_from_request::HeaderFromRequest, json_from_request::JsonFromRequest},
    },
    auth::jwt::models::claims::Claims,
    AppState,
};

use super::{dtos::edit_user_dto::EditUserDto, models::user::User, service};

pub async fn get_user_from_request(
    State(state): State<Arc<AppState>>,
    HeaderFromRequest(authorization): HeaderFromRequest<Authorization<Bearer>>,
) -> Result<Json<User>, ApiError> {
    match Claims::from_header(authorization, &state.envy.jwt_secret) {
        Ok(claims) => match service::get_user_by_id(&claims.id, &state.pool).await {
            Ok(user) => Ok(Json(user)),
            Err(e) => Err(e),
        },
        Err(e) => Err(e),
    }
}

pub async fn edit_user_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    HeaderFromRequest(authorization): HeaderFromRequest<Authorization<Bearer>>,
    JsonFromRequest(dto): JsonFromRequest<EditUserDto>,
) -> Result<Json<User>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;
    let dto = dto.without_blanks();

    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    match service::edit_user_by_id(&id, &dto, &claims, &state.pool).await {
        Ok(user) => Ok(Json(user)),
        Err(e) => Err(e),
    }
}
