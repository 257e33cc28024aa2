use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError, util::time},
    auth::jwt::models::claims::Claims,
};

use super::config::JWT_EXP;

pub fn sign_jwt(user_id: &str, secret: &str) -> Result<String, ApiError> {
    let iat = time::current_time_in_secs();
    let claims = Claims {
        id: user_id.to_string(),
        iat,
        exp: iat + JWT_EXP,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| {
        tracing::error!(%e);
        DefaultApiError::InternalServerError.value()
    })
}

pub fn decode_jwt(jwt: &str, secret: &str) -> Result<Claims, ErrorKind> {
    let result = decode::<Claims>(
        jwt,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::new(Algorithm::HS256),
    );

    match result {
        Ok(data) => Ok(data.claims),
        Err(e) => Err(e.kind().to_owned()),
    }
}
