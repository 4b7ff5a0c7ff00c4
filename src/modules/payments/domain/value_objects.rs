use serde::{Deserialize, Serialize};

use crate::shared::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Bank,
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Bank => "bank",
            PaymentMethod::Cash => "cash",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "card" => Ok(PaymentMethod::Card),
            "bank" => Ok(PaymentMethod::Bank),
            "cash" => Ok(PaymentMethod::Cash),
            _ => Err(AppError::BadRequest(format!(
                "Invalid payment method '{}': must be one of card, bank, cash",
                s
            ))),
        }
    }
}

/// Payment method enum matching database type
#[derive(diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[ExistingTypePath = "crate::schema::sql_types::PaymentMethod"]
pub enum PaymentMethodDb {
    Card,
    Bank,
    Cash,
}

impl From<PaymentMethod> for PaymentMethodDb {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Card => PaymentMethodDb::Card,
            PaymentMethod::Bank => PaymentMethodDb::Bank,
            PaymentMethod::Cash => PaymentMethodDb::Cash,
        }
    }
}

impl From<PaymentMethodDb> for PaymentMethod {
    fn from(method: PaymentMethodDb) -> Self {
        match method {
            PaymentMethodDb::Card => PaymentMethod::Card,
            PaymentMethodDb::Bank => PaymentMethod::Bank,
            PaymentMethodDb::Cash => PaymentMethod::Cash,
        }
    }
}
