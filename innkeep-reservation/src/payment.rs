use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};
use uuid::Uuid;

use crate::invoice::Invoice;

/// How the guest intends to pay
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    MobileWallet,
    /// Any label outside the accepted list, kept verbatim
    Unsupported(String),
}

impl PaymentMethod {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, PaymentMethod::Unsupported(_))
    }
}

impl From<&str> for PaymentMethod {
    fn from(label: &str) -> Self {
        match label {
            "Credit Card" | "CreditCard" => PaymentMethod::CreditCard,
            "Debit Card" | "DebitCard" => PaymentMethod::DebitCard,
            "Mobile Wallet" | "MobileWallet" => PaymentMethod::MobileWallet,
            other => PaymentMethod::Unsupported(other.to_string()),
        }
    }
}

impl From<String> for PaymentMethod {
    fn from(label: String) -> Self {
        PaymentMethod::from(label.as_str())
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::CreditCard => f.write_str("Credit Card"),
            PaymentMethod::DebitCard => f.write_str("Debit Card"),
            PaymentMethod::MobileWallet => f.write_str("Mobile Wallet"),
            PaymentMethod::Unsupported(label) => f.write_str(label),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

/// Result of [`Payment::process`]. A rejected method is an outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Settled(String),
    Rejected(String),
}

impl PaymentOutcome {
    pub fn is_settled(&self) -> bool {
        matches!(self, PaymentOutcome::Settled(_))
    }

    pub fn description(&self) -> &str {
        match self {
            PaymentOutcome::Settled(msg) | PaymentOutcome::Rejected(msg) => msg,
        }
    }
}

impl fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Attempted settlement of an invoice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    id: Uuid,
    invoice_id: Uuid,
    amount: i64,
    method: PaymentMethod,
    status: PaymentStatus,
}

impl Payment {
    pub fn new(invoice: &Invoice, method: impl Into<PaymentMethod>) -> Self {
        Self {
            id: Uuid::new_v4(),
            invoice_id: invoice.id(),
            amount: invoice.total(),
            method: method.into(),
            status: PaymentStatus::Pending,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn invoice_id(&self) -> Uuid {
        self.invoice_id
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn method(&self) -> &PaymentMethod {
        &self.method
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    /// Validate the method and settle. Safe to repeat; every call re-checks
    /// the method and produces the same outcome. No gateway is contacted.
    pub fn process(&mut self) -> PaymentOutcome {
        if !self.method.is_accepted() {
            warn!(payment_id = %self.id, method = %self.method, "Invalid payment method");
            return PaymentOutcome::Rejected("Invalid payment method.".to_string());
        }

        self.status = PaymentStatus::Paid;
        info!(payment_id = %self.id, amount = self.amount, method = %self.method, "Payment settled");
        PaymentOutcome::Settled(format!(
            "Payment of ${} via {} is successful.",
            self.amount, self.method
        ))
    }
}
