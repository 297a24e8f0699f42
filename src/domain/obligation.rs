//! Outstanding obligations (invoices owed to the account holder).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Obligation {
    pub id: Uuid,
    pub amount: Decimal,
    pub status: ObligationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
}

impl Obligation {
    pub fn new(amount: Decimal, status: ObligationStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            status,
            invoice_number: None,
            client_name: None,
        }
    }

    /// Only sent and overdue invoices count as money still owed.
    pub fn is_outstanding(&self) -> bool {
        matches!(
            self.status,
            ObligationStatus::Sent | ObligationStatus::Overdue
        )
    }
}

impl Amounted for Obligation {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ObligationStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}
