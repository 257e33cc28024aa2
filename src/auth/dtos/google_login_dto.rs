use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct GoogleLoginDto {
    #[validate(length(
        min = 1,
        max = 4096,
        message = "access_token must be between 1 and 4096 characters."
    ))]
    pub access_token: String,
}
