pub mod cipher;
pub mod month;
pub mod sqlx;
pub mod time;
