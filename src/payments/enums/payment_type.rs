use serde::{Deserialize, Serialize};

/// Direction of money for a payment: `CREDIT` is income, `DEBIT` is expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentType {
    Credit,
    Debit,
}

impl PaymentType {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Credit => "CREDIT",
            Self::Debit => "DEBIT",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "CREDIT" => Some(Self::Credit),
            "DEBIT" => Some(Self::Debit),
            _ => None,
        }
    }
}
