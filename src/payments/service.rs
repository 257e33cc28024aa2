use sqlx::PgPool;

use crate::{
    app::{
        errors::DefaultApiError,
        models::api_error::ApiError,
        util::{cipher::PaymentCipher, month::Month, sqlx::map_write_error},
    },
    auth::jwt::models::claims::Claims,
};

use super::{
    dtos::{create_payment_dto::CreatePaymentDto, get_payments_filter_dto::GetPaymentsFilterDto},
    enums::payment_type::PaymentType,
    errors::PaymentsApiError,
    models::{balance::Balance, payment::Payment, payment_summary::PaymentSummary},
};

pub async fn create_payment(
    dto: &CreatePaymentDto,
    claims: &Claims,
    cipher: &PaymentCipher,
    pool: &PgPool,
) -> Result<Payment, ApiError> {
    let payment = Payment::new(claims, dto);
    let sealed = payment.sealed(cipher)?;

    let sqlx_result = sqlx::query(
        "
        INSERT INTO payments (
            id, user_id, title, amount, payment_type,
            category, description, date, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ",
    )
    .bind(&sealed.id)
    .bind(&sealed.user_id)
    .bind(&sealed.title)
    .bind(sealed.amount)
    .bind(&sealed.payment_type)
    .bind(&sealed.category)
    .bind(&sealed.description)
    .bind(sealed.date)
    .bind(sealed.created_at)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(_) => Ok(payment),
        Err(e) => Err(map_write_error(e, "Payment already exists.")),
    }
}

pub async fn get_payments(
    dto: &GetPaymentsFilterDto,
    claims: &Claims,
    cipher: &PaymentCipher,
    pool: &PgPool,
) -> Result<Vec<Payment>, ApiError> {
    let month = dto.month()?;
    let sql = dto.to_sql();

    let mut sqlx = sqlx::query_as::<_, Payment>(&sql).bind(&claims.id);

    if let Some(month) = month {
        let (start, end) = month.range();
        sqlx = sqlx.bind(start).bind(end);
    }
    if let Some(payment_type) = &dto.payment_type {
        sqlx = sqlx.bind(payment_type.value());
    }
    if let Some(category) = &dto.category {
        sqlx = sqlx.bind(category.trim());
    }

    match sqlx.fetch_all(pool).await {
        Ok(payments) => Ok(payments
            .into_iter()
            .map(|payment| payment.opened(cipher))
            .collect()),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_payment_by_id(
    id: &str,
    claims: &Claims,
    cipher: &PaymentCipher,
    pool: &PgPool,
) -> Result<Payment, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Payment>(
        "
        SELECT * FROM payments
        WHERE id = $1 AND user_id = $2
        ",
    )
    .bind(id)
    .bind(&claims.id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(payment) => match payment {
            Some(payment) => Ok(payment.opened(cipher)),
            None => Err(PaymentsApiError::PaymentNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

/// Deletes one of the caller's payments and returns it as it was.
pub async fn delete_payment_by_id(
    id: &str,
    claims: &Claims,
    cipher: &PaymentCipher,
    pool: &PgPool,
) -> Result<Payment, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Payment>(
        "
        DELETE FROM payments
        WHERE id = $1 AND user_id = $2
        RETURNING *
        ",
    )
    .bind(id)
    .bind(&claims.id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(payment) => match payment {
            Some(payment) => Ok(payment.opened(cipher)),
            None => Err(PaymentsApiError::PaymentNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_balance(month: Month, claims: &Claims, pool: &PgPool) -> Result<Balance, ApiError> {
    let (start, end) = month.range();

    let sqlx_result = sqlx::query_as::<_, (f64, f64)>(
        "
        SELECT
            COALESCE(SUM(amount) FILTER (WHERE payment_type = $4), 0)::DOUBLE PRECISION,
            COALESCE(SUM(amount) FILTER (WHERE payment_type = $5), 0)::DOUBLE PRECISION
        FROM payments
        WHERE user_id = $1 AND date >= $2 AND date < $3
        ",
    )
    .bind(&claims.id)
    .bind(start)
    .bind(end)
    .bind(PaymentType::Credit.value())
    .bind(PaymentType::Debit.value())
    .fetch_one(pool)
    .await;

    match sqlx_result {
        Ok((monthly_credit, monthly_debit)) => Ok(Balance::new(month, monthly_credit, monthly_debit)),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

/// Type, category and amount of every payment the caller made in `month`.
pub async fn get_payment_summaries_in_month(
    month: Month,
    claims: &Claims,
    pool: &PgPool,
) -> Result<Vec<PaymentSummary>, ApiError> {
    let (start, end) = month.range();

    let sqlx_result = sqlx::query_as::<_, PaymentSummary>(
        "
        SELECT payment_type, category, amount FROM payments
        WHERE user_id = $1 AND date >= $2 AND date < $3
        ",
    )
    .bind(&claims.id)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await;

    match sqlx_result {
        Ok(summaries) => Ok(summaries),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
