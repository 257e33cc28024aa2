use crate::app::models::api_error::ApiError;
use axum::TypedHeader;
use axum_macros::FromRequestParts;

#[derive(FromRequestParts)]
#[from_request(via(TypedHeader), rejection(ApiError))]
pub struct HeaderFromRequest<T>(pub T);
