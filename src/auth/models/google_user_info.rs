use serde::Deserialize;

/// Subset of the OpenID userinfo document returned by Google.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub name: Option<String>,
    pub picture: Option<String>,
}
