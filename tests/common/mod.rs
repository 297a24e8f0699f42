#![allow(dead_code)]

use chrono::NaiveDate;
use dashboard_core::domain::{EntryStatus, LedgerEntry, Obligation, ObligationStatus};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn income(amount: Decimal, on: NaiveDate) -> LedgerEntry {
    LedgerEntry::income(amount, on)
}

pub fn expense(amount: Decimal, category: &str, on: NaiveDate) -> LedgerEntry {
    LedgerEntry::expense(amount, category, on)
}

/// Ledger spanning July-December 2024 plus one stale row, with a few
/// non-completed entries mixed in.
pub fn sample_ledger() -> Vec<LedgerEntry> {
    vec![
        income(dec!(15000), date(2024, 12, 20)).with_name("Acme Corp"),
        expense(dec!(450), "Operations", date(2024, 12, 19)).with_name("Office Supplies"),
        income(dec!(8500), date(2024, 12, 18)).with_name("Tech Solutions Inc"),
        expense(dec!(3200), "Marketing", date(2024, 12, 17)),
        income(dec!(12000), date(2024, 12, 16)),
        expense(dec!(890), "Technology", date(2024, 12, 15)),
        income(dec!(4000), date(2024, 12, 14)).with_status(EntryStatus::Pending),
        expense(dec!(250), "Travel", date(2024, 12, 2)).with_status(EntryStatus::Cancelled),
        income(dec!(30000), date(2024, 11, 28)),
        expense(dec!(12000), "Salaries", date(2024, 11, 27)),
        expense(dec!(2100.75), "Operations", date(2024, 11, 3)),
        income(dec!(22000), date(2024, 9, 10)),
        expense(dec!(5000), "Salaries", date(2024, 9, 11)),
        income(dec!(18000), date(2024, 7, 1)),
        expense(dec!(99.99), "Technology", date(2024, 7, 31)),
        income(dec!(77777), date(2023, 12, 31)),
    ]
}

pub fn sample_obligations() -> Vec<Obligation> {
    vec![
        Obligation::new(dec!(5000), ObligationStatus::Sent),
        Obligation::new(dec!(1250.50), ObligationStatus::Overdue),
        Obligation::new(dec!(9000), ObligationStatus::Paid),
        Obligation::new(dec!(300), ObligationStatus::Draft),
    ]
}
