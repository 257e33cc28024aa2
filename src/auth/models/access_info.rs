use serde::Serialize;

use crate::users::models::user::User;

#[derive(Debug, Serialize)]
pub struct AccessInfo {
    pub access_token: String,
    pub user: User,
}
