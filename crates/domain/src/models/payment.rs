//! Payment domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Payment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Partial,
    Completed,
    Overdue,
    Cancelled,
    Refunded,
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(PaymentStatus::Pending),
            "partial" => Ok(PaymentStatus::Partial),
            "completed" => Ok(PaymentStatus::Completed),
            "overdue" => Ok(PaymentStatus::Overdue),
            "cancelled" => Ok(PaymentStatus::Cancelled),
            "refunded" => Ok(PaymentStatus::Refunded),
            _ => Err(format!("Unknown payment status: {}", s)),
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Partial => write!(f, "partial"),
            PaymentStatus::Completed => write!(f, "completed"),
            PaymentStatus::Overdue => write!(f, "overdue"),
            PaymentStatus::Cancelled => write!(f, "cancelled"),
            PaymentStatus::Refunded => write!(f, "refunded"),
        }
    }
}

/// Payment entity as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Payment {
    pub id: Uuid,
    pub payment_number: String,
    pub order_id: Uuid,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    /// Derived server-side from total and paid amounts; never sent back.
    pub remaining_amount: Decimal,
    pub payment_status: PaymentStatus,
    pub due_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

/// Request to create a payment.
///
/// The server assigns id, timestamps and the derived remaining amount.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
#[validate(schema(function = "validate_create_payment"))]
pub struct CreatePaymentRequest {
    #[validate(length(min = 1, max = 50, message = "Payment number must be 1-50 characters"))]
    pub payment_number: String,
    pub order_id: Uuid,
    pub total_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[validate(length(max = 1000, message = "Notes must be at most 1000 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CreatePaymentRequest {
    /// Applies client-side defaults before send: nothing paid yet, pending.
    pub fn with_defaults(mut self) -> Self {
        self.paid_amount.get_or_insert(Decimal::ZERO);
        self.payment_status.get_or_insert(PaymentStatus::Pending);
        self
    }
}

fn validate_create_payment(req: &CreatePaymentRequest) -> Result<(), ValidationError> {
    shared::validation::validate_positive_amount(req.total_amount)?;
    if let Some(paid) = req.paid_amount {
        shared::validation::validate_non_negative_amount(paid)?;
    }
    Ok(())
}

/// Partial update for a payment.
///
/// payment_number, order_id and total_amount are immutable once created and
/// are structurally absent here, so an edit can never send them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
#[validate(schema(function = "validate_update_payment"))]
pub struct UpdatePaymentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[validate(length(max = 1000, message = "Notes must be at most 1000 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn validate_update_payment(req: &UpdatePaymentRequest) -> Result<(), ValidationError> {
    if let Some(paid) = req.paid_amount {
        shared::validation::validate_non_negative_amount(paid)?;
    }
    Ok(())
}

impl From<&Payment> for UpdatePaymentRequest {
    /// Pre-populates an edit form from a fetched payment, restricted to
    /// mutable fields.
    fn from(payment: &Payment) -> Self {
        Self {
            paid_amount: Some(payment.paid_amount),
            payment_status: Some(payment.payment_status),
            due_date: payment.due_date,
            notes: payment.notes.clone(),
        }
    }
}
