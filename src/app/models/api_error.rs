use axum::{
    extract::rejection::{
        JsonRejection, QueryRejection, TypedHeaderRejection, TypedHeaderRejectionReason,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "code": self.code.as_u16(),
            "message": self.message,
        }));

        (self.code, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            code: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            code: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Header rejections only come from the bearer extractor, so all of them are 401.
impl From<TypedHeaderRejection> for ApiError {
    fn from(rejection: TypedHeaderRejection) -> Self {
        let message = match rejection.reason() {
            TypedHeaderRejectionReason::Missing => "Missing token.",
            _ => "Invalid token.",
        };

        Self {
            code: StatusCode::UNAUTHORIZED,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_code_and_message_as_json() {
        let error = ApiError {
            code: StatusCode::NOT_FOUND,
            message: "Payment not found.".to_string(),
        };

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 404);
        assert_eq!(body["message"], "Payment not found.");
    }
}
