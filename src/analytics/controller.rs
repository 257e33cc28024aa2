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
        dtos::month_query_dto::MonthQueryDto,
        models::api_error::ApiError,
        structs::{header_from_request::HeaderFromRequest, query_from_request::QueryFromRequest},
        util::month::Month,
    },
    auth::jwt::models::claims::Claims,
    AppState,
};

use super::{
    dtos::month_options_dto::MonthOptionsDto,
    models::{category_analytics::CategoryAnalytics, month_option::MonthOption},
    service,
};

pub async fn get_category_analytics(
    State(state): State<Arc<AppState>>,
    HeaderFromRequest(authorization): HeaderFromRequest<Authorization<Bearer>>,
    QueryFromRequest(dto): QueryFromRequest<MonthQueryDto>,
) -> Result<Json<CategoryAnalytics>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;
    let month = dto.month()?;

    match service::get_category_analytics(month, &claims, &state.pool).await {
        Ok(analytics) => Ok(Json(analytics)),
        Err(e) => Err(e),
    }
}

pub async fn get_month_options(
    State(state): State<Arc<AppState>>,
    HeaderFromRequest(authorization): HeaderFromRequest<Authorization<Bearer>>,
    QueryFromRequest(dto): QueryFromRequest<MonthOptionsDto>,
) -> Result<Json<Vec<MonthOption>>, ApiError> {
    Claims::from_header(authorization, &state.envy.jwt_secret)?;

    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    Ok(Json(service::get_month_options(Month::current(), dto.count)))
}
