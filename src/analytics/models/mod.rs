pub mod category_analytics;
pub mod month_option;
