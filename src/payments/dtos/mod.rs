pub mod create_payment_dto;
pub mod get_payments_filter_dto;
