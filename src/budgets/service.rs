use sqlx::PgPool;

use crate::{
    app::{
        errors::DefaultApiError,
        models::api_error::ApiError,
        util::{month::Month, time},
    },
    auth::jwt::models::claims::Claims,
    payments,
};

use super::{
    dtos::upsert_budget_dto::UpsertBudgetDto,
    models::{budget::Budget, budget_progress::BudgetProgress},
};

pub async fn upsert_budget(
    dto: &UpsertBudgetDto,
    claims: &Claims,
    pool: &PgPool,
) -> Result<Budget, ApiError> {
    let month = Month::parse(&dto.month)?;
    let current_time = time::current_time_in_secs();

    let sqlx_result = sqlx::query_as::<_, Budget>(
        "
        INSERT INTO budgets (user_id, month, amount, updated_at, created_at)
        VALUES ($1, $2, $3, $4, $4)
        ON CONFLICT (user_id, month) DO UPDATE
        SET amount = EXCLUDED.amount, updated_at = EXCLUDED.updated_at
        RETURNING *
        ",
    )
    .bind(&claims.id)
    .bind(month.to_string())
    .bind(dto.amount)
    .bind(current_time)
    .fetch_one(pool)
    .await;

    match sqlx_result {
        Ok(budget) => Ok(budget),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_budget(month: Month, claims: &Claims, pool: &PgPool) -> Result<Budget, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Budget>(
        "
        SELECT * FROM budgets
        WHERE user_id = $1 AND month = $2
        ",
    )
    .bind(&claims.id)
    .bind(month.to_string())
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(budget) => match budget {
            Some(budget) => Ok(budget),
            None => Ok(Budget::empty(&claims.id, month)),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_budget_progress(
    month: Month,
    claims: &Claims,
    pool: &PgPool,
) -> Result<BudgetProgress, ApiError> {
    let budget = get_budget(month, claims, pool).await?;
    let balance = payments::service::get_balance(month, claims, pool).await?;

    Ok(BudgetProgress::new(month, budget.amount, balance.monthly_debit))
}
