use reqwest::StatusCode;

use crate::{app::models::api_error::ApiError, users, AppState};

use super::{
    dtos::google_login_dto::GoogleLoginDto, errors::AuthApiError, jwt::util::sign_jwt,
    models::access_info::AccessInfo, models::google_user_info::GoogleUserInfo,
};

pub async fn login_with_google(
    dto: &GoogleLoginDto,
    state: &AppState,
) -> Result<AccessInfo, ApiError> {
    let info = fetch_google_user_info(
        &state.http,
        state.envy.google_userinfo_url(),
        &dto.access_token,
    )
    .await?;

    let Some(email) = info.email.as_deref().map(str::trim).filter(|e| !e.is_empty()) else {
        return Err(AuthApiError::MissingEmail.value());
    };

    if info.email_verified == Some(false) {
        return Err(AuthApiError::UnverifiedEmail.value());
    }

    let user = users::service::upsert_user_from_google_as_admin(
        email,
        info.name.as_deref(),
        info.picture.as_deref(),
        &state.pool,
    )
    .await?;

    tracing::info!(user_id = %user.id, "user signed in with google");

    Ok(AccessInfo {
        access_token: sign_jwt(&user.id, &state.envy.jwt_secret)?,
        user,
    })
}

pub async fn fetch_google_user_info(
    client: &reqwest::Client,
    url: &str,
    access_token: &str,
) -> Result<GoogleUserInfo, ApiError> {
    let response = match client.get(url).bearer_auth(access_token).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(%e);
            return Err(AuthApiError::GoogleUnavailable.value());
        }
    };

    match response.status() {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::BAD_REQUEST => {
            return Err(AuthApiError::InvalidGoogleToken.value())
        }
        status if !status.is_success() => {
            tracing::error!(%status, "google userinfo request failed");
            return Err(AuthApiError::GoogleUnavailable.value());
        }
        _ => {}
    }

    match response.json::<GoogleUserInfo>().await {
        Ok(info) => Ok(info),
        Err(e) => {
            tracing::error!(%e);
            Err(AuthApiError::GoogleUnavailable.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::{SocketAddr, TcpListener};

    use axum::{
        headers::{authorization::Bearer, Authorization},
        routing::get,
        Json, Router, TypedHeader,
    };
    use serde_json::{json, Value};

    use super::*;

    async fn userinfo(
        TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    ) -> Result<Json<Value>, StatusCode> {
        match authorization.0.token() {
            "good-token" => Ok(Json(json!({
                "sub": "1234",
                "email": "ada@example.com",
                "email_verified": true,
                "name": "Ada Lovelace",
                "picture": "https://example.com/ada.png",
            }))),
            "broken-token" => Err(StatusCode::INTERNAL_SERVER_ERROR),
            _ => Err(StatusCode::UNAUTHORIZED),
        }
    }

    fn spawn_fake_google() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        let app = Router::new().route("/userinfo", get(userinfo));

        tokio::spawn(async move {
            axum::Server::from_tcp(listener)
                .unwrap()
                .serve(app.into_make_service())
                .await
                .unwrap();
        });

        format!("http://{}/userinfo", addr)
    }

    #[tokio::test]
    async fn reads_profile_for_valid_token() {
        let url = spawn_fake_google();
        let client = reqwest::Client::new();

        let info = fetch_google_user_info(&client, &url, "good-token")
            .await
            .unwrap();

        assert_eq!(info.email.as_deref(), Some("ada@example.com"));
        assert_eq!(info.email_verified, Some(true));
        assert_eq!(info.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(info.picture.as_deref(), Some("https://example.com/ada.png"));
    }

    #[tokio::test]
    async fn rejected_token_is_unauthorized() {
        let url = spawn_fake_google();
        let client = reqwest::Client::new();

        let err = fetch_google_user_info(&client, &url, "expired")
            .await
            .unwrap_err();

        assert_eq!(err.code, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn google_failure_is_bad_gateway() {
        let url = spawn_fake_google();
        let client = reqwest::Client::new();

        let err = fetch_google_user_info(&client, &url, "broken-token")
            .await
            .unwrap_err();

        assert_eq!(err.code, StatusCode::BAD_GATEWAY);
    }
}
