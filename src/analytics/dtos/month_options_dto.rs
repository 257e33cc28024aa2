use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct MonthOptionsDto {
    #[validate(range(min = 1, max = 24, message = "count must be between 1 and 24."))]
    pub count: Option<u8>,
}
