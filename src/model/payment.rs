use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "PAYE")]
    Paid,
    #[serde(rename = "IMPAYE")]
    Unpaid,
    #[serde(rename = "PARTIEL")]
    Partial,
}

impl PaymentStatus {
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Paid => "PAYE",
            Self::Unpaid => "IMPAYE",
            Self::Partial => "PARTIEL",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PAYE" => Some(Self::Paid),
            "IMPAYE" => Some(Self::Unpaid),
            "PARTIEL" => Some(Self::Partial),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentType {
    #[serde(rename = "MOIS")]
    Monthly,
    #[serde(rename = "ANNEE")]
    Annual,
}

impl PaymentType {
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Monthly => "MOIS",
            Self::Annual => "ANNEE",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MOIS" => Some(Self::Monthly),
            "ANNEE" => Some(Self::Annual),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct PaymentDto {
    pub id: i32,
    pub reservation_id: i32,
    pub amount: Decimal,
    pub payment_type: PaymentType,
    pub payment_date: NaiveDate,
    pub status: PaymentStatus,
    /// Advisory date of the next instalment, derived from the payment type.
    pub next_payment_date: NaiveDate,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct CreatePaymentDto {
    pub reservation_id: i32,
    pub amount: Decimal,
    pub payment_type: PaymentType,
    /// Ignored on creation: the stored date is forced to the reservation's
    /// move-in date.
    pub payment_date: Option<NaiveDate>,
    /// Ignored on creation: the stored status is forced to `Paid`.
    pub status: Option<PaymentStatus>,
}
