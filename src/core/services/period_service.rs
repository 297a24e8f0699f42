//! Calendar-month bucketing over a trailing window.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::{config::StatusFilter, domain::LedgerEntry};

/// A calendar month, `month0` zero-based (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month0: u32,
}

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    fn index(&self) -> i64 {
        self.year as i64 * 12 + self.month0 as i64
    }

    fn from_index(index: i64) -> Self {
        Self {
            year: index.div_euclid(12) as i32,
            month0: index.rem_euclid(12) as u32,
        }
    }

    /// Moves by `months` calendar months; negative steps go back in time.
    pub fn shift(&self, months: i64) -> Self {
        Self::from_index(self.index() + months)
    }

    pub fn label(&self) -> &'static str {
        month_label(self.month0)
    }
}

/// One calendar month's totals. `net` is derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodBucket {
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub income: Decimal,
    pub expense: Decimal,
}

impl PeriodBucket {
    pub fn empty(key: MonthKey) -> Self {
        Self {
            label: key.label().to_string(),
            year: key.year,
            month: key.month0,
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
        }
    }

    pub fn key(&self) -> MonthKey {
        MonthKey {
            year: self.year,
            month0: self.month,
        }
    }

    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }
}

impl Serialize for PeriodBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PeriodBucket", 6)?;
        state.serialize_field("label", &self.label)?;
        state.serialize_field("year", &self.year)?;
        state.serialize_field("month", &self.month)?;
        state.serialize_field("income", &self.income)?;
        state.serialize_field("expense", &self.expense)?;
        state.serialize_field("net", &self.net())?;
        state.end()
    }
}

/// Entries matched to one month of the window.
#[derive(Debug, Clone)]
pub struct BucketMembers<'a> {
    pub key: MonthKey,
    pub entries: Vec<&'a LedgerEntry>,
}

pub struct PeriodService;

impl PeriodService {
    /// The `size` months ending at the month of `reference`, oldest first.
    pub fn window(reference: NaiveDate, size: u32) -> Vec<MonthKey> {
        let current = MonthKey::from_date(reference);
        let size = size as i64;
        (0..size)
            .map(|offset| current.shift(offset - (size - 1)))
            .collect()
    }

    /// Assigns admitted entries to the month they occurred in. Entries outside the
    /// window are skipped; every month of the window is present even when empty.
    pub fn assign<'a>(
        entries: &'a [LedgerEntry],
        window: &[MonthKey],
        filter: StatusFilter,
    ) -> Vec<BucketMembers<'a>> {
        let positions: HashMap<MonthKey, usize> = window
            .iter()
            .enumerate()
            .map(|(idx, key)| (*key, idx))
            .collect();
        let mut members: Vec<BucketMembers<'a>> = window
            .iter()
            .map(|key| BucketMembers {
                key: *key,
                entries: Vec::new(),
            })
            .collect();
        for entry in entries.iter().filter(|entry| filter.admits(entry)) {
            if let Some(&idx) = positions.get(&MonthKey::from_date(entry.occurred_at)) {
                members[idx].entries.push(entry);
            }
        }
        if let (Some(first), Some(last)) = (window.first(), window.last()) {
            tracing::debug!(
                from = %format!("{}-{:02}", first.year, first.month0 + 1),
                to = %format!("{}-{:02}", last.year, last.month0 + 1),
                matched = members.iter().map(|m| m.entries.len()).sum::<usize>(),
                "assigned entries to month buckets"
            );
        }
        members
    }

    /// True when `date` falls inside one of the window's months.
    pub fn in_window(window: &[MonthKey], date: NaiveDate) -> bool {
        match (window.first(), window.last()) {
            (Some(first), Some(last)) => {
                let key = MonthKey::from_date(date);
                key >= *first && key <= *last
            }
            _ => false,
        }
    }
}

fn month_label(month0: u32) -> &'static str {
    match month0 {
        0 => "Jan",
        1 => "Feb",
        2 => "Mar",
        3 => "Apr",
        4 => "May",
        5 => "Jun",
        6 => "Jul",
        7 => "Aug",
        8 => "Sep",
        9 => "Oct",
        10 => "Nov",
        11 => "Dec",
        _ => "",
    }
}
