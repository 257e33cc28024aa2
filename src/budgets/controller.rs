use std::sync::Arc;

use axum::{
    extract::State,
    headers::{authorization::Bearer, Authorization},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    app::{
        dtos::month_query_dto::MonthQueryDto, models::api_error::ApiError,
        structs::{
            header_from_request::HeaderFromRequest, json_from_request::JsonFromRequest,
            query_from_request::QueryFromRequest,
        },
    },
    auth::jwt::models::claims::Claims,
    AppState,
};

use super::{
    dtos::upsert_budget_dto::UpsertBudgetDto,
    models::{budget::Budget, budget_progress::BudgetProgress},
    service,
};

pub async fn upsert_budget(
    State(state): State<Arc<AppState>>,
    HeaderFromRequest(authorization): HeaderFromRequest<Authorization<Bearer>>,
    JsonFromRequest(dto): JsonFromRequest<UpsertBudgetDto>,
) -> Result<Json<Budget>, ApiError> {
    match Claims::from_header(authorization, &state.envy.jwt_secret) {
        Ok(claims) => match dto.validate() {
            Ok(_) => match service::upsert_budget(&dto, &claims, &state.pool).await {
                Ok(budget) => Ok(Json(budget)),
                Err(e) => Err(e),
            },
            Err(e) => Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: e.to_string(),
            }),
        },
        Err(e) => Err(e),
    }
}

pub async fn get_budget(
    State(state): State<Arc<AppState>>,
    HeaderFromRequest(authorization): HeaderFromRequest<Authorization<Bearer>>,
    QueryFromRequest(dto): QueryFromRequest<MonthQueryDto>,
) -> Result<Json<Budget>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;
    let month = dto.month()?;

    match service::get_budget(month, &claims, &state.pool).await {
        Ok(budget) => Ok(Json(budget)),
        Err(e) => Err(e),
    }
}

pub async fn get_budget_progress(
    State(state): State<Arc<AppState>>,
    HeaderFromRequest(authorization): HeaderFromRequest<Authorization<Bearer>>,
    QueryFromRequest(dto): QueryFromRequest<MonthQueryDto>,
) -> Result<Json<BudgetProgress>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;
    let month = dto.month()?;

    match service::get_budget_progress(month, &claims, &state.pool).await {
        Ok(progress) => Ok(Json(progress)),
        Err(e) => Err(e),
    }
}
