use sqlx::PgPool;

use crate::{
    app::{models::api_error::ApiError, util::month::Month},
    auth::jwt::models::claims::Claims,
    payments,
};

use super::{
    breakdown::category_breakdown,
    models::{category_analytics::CategoryAnalytics, month_option::MonthOption},
};

pub static DEFAULT_MONTH_OPTIONS: u8 = 12;

pub async fn get_category_analytics(
    month: Month,
    claims: &Claims,
    pool: &PgPool,
) -> Result<CategoryAnalytics, ApiError> {
    let summaries = payments::service::get_payment_summaries_in_month(month, claims, pool).await?;

    Ok(CategoryAnalytics {
        month,
        breakdown: category_breakdown(&summaries),
    })
}

pub fn get_month_options(current: Month, count: Option<u8>) -> Vec<MonthOption> {
    let count = count.unwrap_or(DEFAULT_MONTH_OPTIONS) as usize;

    current
        .recent(count)
        .into_iter()
        .map(MonthOption::from_month)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_options_default_to_a_year() {
        let options = get_month_options(Month::parse("2026-10").unwrap(), None);

        assert_eq!(options.len(), 12);
        assert_eq!(options[0].value.to_string(), "2026-10");
        assert_eq!(options[0].label, "October 2026");
        assert_eq!(options[11].value.to_string(), "2025-11");
        assert_eq!(options[11].label, "November 2025");
    }

    #[test]
    fn month_options_honour_count() {
        let options = get_month_options(Month::parse("2026-01").unwrap(), Some(2));

        let values: Vec<String> = options.iter().map(|o| o.value.to_string()).collect();
        assert_eq!(values, vec!["2026-01", "2025-12"]);
    }
}
