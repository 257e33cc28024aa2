pub mod balance;
pub mod payment;
pub mod payment_summary;
