use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::Amounted;

/// One billed line on an invoice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceLine {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

impl InvoiceLine {
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }
}

impl Amounted for InvoiceLine {
    fn amount(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}
