use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::domain::{sum_amounts, InvoiceLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub tax_rate: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
}

pub struct InvoiceService;

impl InvoiceService {
    /// `tax_rate` is a percentage; tax is rounded to cents.
    pub fn totals(lines: &[InvoiceLine], tax_rate: Decimal) -> InvoiceTotals {
        let subtotal = sum_amounts(lines);
        let tax_amount = (subtotal * tax_rate / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        InvoiceTotals {
            subtotal,
            tax_rate,
            tax_amount,
            total: subtotal + tax_amount,
        }
    }
}
