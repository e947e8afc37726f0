//! Recorded monetary contributions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kind of contribution a payment settles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    #[serde(rename = "Agua")]
    Water,
    #[serde(rename = "Luz")]
    Electricity,
    #[serde(rename = "Empadronamiento")]
    Registration,
    #[serde(rename = "Rupeo")]
    Rupeo,
    #[serde(rename = "Aporte")]
    Contribution,
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentType::Water => write!(f, "Agua"),
            PaymentType::Electricity => write!(f, "Luz"),
            PaymentType::Registration => write!(f, "Empadronamiento"),
            PaymentType::Rupeo => write!(f, "Rupeo"),
            PaymentType::Contribution => write!(f, "Aporte"),
        }
    }
}

/// A payment made by a partner. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Unique identifier assigned at recording time
    pub id: Uuid,

    /// When the payment was made
    pub date: DateTime<Utc>,

    /// Kind of contribution
    #[serde(rename = "type")]
    pub payment_type: PaymentType,

    /// Amount in the association's currency. Never negative.
    pub amount: f64,

    /// Number of the paper receipt handed to the partner
    pub receipt_number: String,
}

/// Input for recording a new payment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub amount: f64,
    pub receipt_number: String,
}
