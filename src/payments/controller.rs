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
    dtos::{create_payment_dto::CreatePaymentDto, get_payments_filter_dto::GetPaymentsFilterDto},
    models::{balance::Balance, payment::Payment},
    service,
};

pub async fn create_payment(
    State(state): State<Arc<AppState>>,
    HeaderFromRequest(authorization): HeaderFromRequest<Authorization<Bearer>>,
    JsonFromRequest(dto): JsonFromRequest<CreatePaymentDto>,
) -> Result<Json<Payment>, ApiError> {
    match Claims::from_header(authorization, &state.envy.jwt_secret) {
        Ok(claims) => {
            if let Err(e) = dto.validate() {
                return Err(ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: e.to_string(),
                });
            }

            match service::create_payment(&dto, &claims, &state.cipher, &state.pool).await {
                Ok(payment) => Ok(Json(payment)),
                Err(e) => Err(e),
            }
        }
        Err(e) => Err(e),
    }
}

pub async fn get_payments(
    State(state): State<Arc<AppState>>,
    HeaderFromRequest(authorization): HeaderFromRequest<Authorization<Bearer>>,
    QueryFromRequest(dto): QueryFromRequest<GetPaymentsFilterDto>,
) -> Result<Json<Vec<Payment>>, ApiError> {
    match Claims::from_header(authorization, &state.envy.jwt_secret) {
        Ok(claims) => {
            if let Err(e) = dto.validate() {
                return Err(ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: e.to_string(),
                });
            }

            match service::get_payments(&dto, &claims, &state.cipher, &state.pool).await {
                Ok(payments) => Ok(Json(payments)),
                Err(e) => Err(e),
            }
        }
        Err(e) => Err(e),
    }
}

pub async fn get_payment_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    HeaderFromRequest(authorization): HeaderFromRequest<Authorization<Bearer>>,
) -> Result<Json<Payment>, ApiError> {
    match Claims::from_header(authorization, &state.envy.jwt_secret) {
        Ok(claims) => {
            match service::get_payment_by_id(&id, &claims, &state.cipher, &state.pool).await {
                Ok(payment) => Ok(Json(payment)),
                Err(e) => Err(e),
            }
        }
        Err(e) => Err(e),
    }
}

pub async fn delete_payment_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    HeaderFromRequest(authorization): HeaderFromRequest<Authorization<Bearer>>,
) -> Result<Json<Payment>, ApiError> {
    match Claims::from_header(authorization, &state.envy.jwt_secret) {
        Ok(claims) => {
            match service::delete_payment_by_id(&id, &claims, &state.cipher, &state.pool).await {
                Ok(payment) => Ok(Json(payment)),
                Err(e) => Err(e),
            }
        }
        Err(e) => Err(e),
    }
}

pub async fn get_balance(
    State(state): State<Arc<AppState>>,
    HeaderFromRequest(authorization): HeaderFromRequest<Authorization<Bearer>>,
    QueryFromRequest(dto): QueryFromRequest<MonthQueryDto>,
) -> Result<Json<Balance>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;
    let month = dto.month()?;

    match service::get_balance(month, &claims, &state.pool).await {
        Ok(balance) => Ok(Json(balance)),
        Err(e) => Err(e),
    }
}
