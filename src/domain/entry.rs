//! Ledger entries: the income and expense events every dashboard view aggregates.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A single recorded income or expense event.
///
/// `amount` is a non-negative magnitude; direction is carried by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub amount: Decimal,
    pub kind: EntryKind,
    #[serde(default)]
    pub category: String,
    #[serde(alias = "date")]
    pub occurred_at: NaiveDate,
    pub status: EntryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl LedgerEntry {
    pub fn new(
        kind: EntryKind,
        amount: Decimal,
        category: impl Into<String>,
        occurred_at: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            kind,
            category: category.into(),
            occurred_at,
            status: EntryStatus::Completed,
            name: None,
        }
    }

    pub fn income(amount: Decimal, occurred_at: NaiveDate) -> Self {
        Self::new(EntryKind::Income, amount, "Revenue", occurred_at)
    }

    pub fn expense(amount: Decimal, category: impl Into<String>, occurred_at: NaiveDate) -> Self {
        Self::new(EntryKind::Expense, amount, category, occurred_at)
    }

    pub fn with_status(mut self, status: EntryStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }
}

impl Amounted for LedgerEntry {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Displayable for LedgerEntry {
    fn display_label(&self) -> String {
        let name = self.name.as_deref().unwrap_or(&self.category);
        format!("{} {} ({}, {})", self.occurred_at, name, self.kind, self.status)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    #[default]
    Completed,
    Pending,
    Cancelled,
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryStatus::Completed => "Completed",
            EntryStatus::Pending => "Pending",
            EntryStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn deserializes_store_rows_with_date_alias() {
        let json = r#"{
            "id": "6f1f9a52-5d4c-4a8e-9d55-2b0c1a7e9f10",
            "amount": "450.00",
            "kind": "expense",
            "category": "Operations",
            "date": "2024-12-19",
            "status": "completed"
        }"#;
        let entry: LedgerEntry = serde_json::from_str(json).expect("entry");
        assert_eq!(entry.amount, dec!(450.00));
        assert_eq!(entry.kind, EntryKind::Expense);
        assert_eq!(entry.occurred_at, NaiveDate::from_ymd_opt(2024, 12, 19).unwrap());
        assert_eq!(entry.status, EntryStatus::Completed);
        assert!(entry.name.is_none());
    }

    #[test]
    fn income_constructor_defaults_to_completed() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        let entry = LedgerEntry::income(dec!(15000), date).with_name("Acme Corp");
        assert!(entry.is_income());
        assert_eq!(entry.status, EntryStatus::Completed);
        assert_eq!(
            entry.display_label(),
            "2024-12-20 Acme Corp (Income, Completed)"
        );
    }
}
