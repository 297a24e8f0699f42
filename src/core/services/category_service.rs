use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{config::AggregationOptions, domain::LedgerEntry};

use super::period_service::PeriodService;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

pub struct CategoryService;

impl CategoryService {
    /// Sums expense entries per category (exact, case-sensitive labels), sorted by
    /// total descending. Ties keep first-seen order. At most `top_n` groups.
    pub fn rank<'a, I>(entries: I, top_n: usize) -> Vec<CategoryTotal>
    where
        I: IntoIterator<Item = &'a LedgerEntry>,
    {
        let mut positions: HashMap<&'a str, usize> = HashMap::new();
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for entry in entries.into_iter().filter(|entry| entry.is_expense()) {
            match positions.get(entry.category.as_str()) {
                Some(&idx) => totals[idx].total += entry.amount,
                None => {
                    positions.insert(entry.category.as_str(), totals.len());
                    totals.push(CategoryTotal {
                        category: entry.category.clone(),
                        total: entry.amount,
                    });
                }
            }
        }
        let distinct = totals.len();
        // sort_by is stable: equal totals stay in insertion order.
        totals.sort_by(|a, b| b.total.cmp(&a.total));
        totals.truncate(top_n);
        tracing::debug!(distinct, kept = totals.len(), "ranked expense categories");
        totals
    }

    /// Ranks the categories of entries admitted by the options' status filter and
    /// falling inside its trailing window.
    pub fn rank_in_window(entries: &[LedgerEntry], options: &AggregationOptions) -> Vec<CategoryTotal> {
        let window = PeriodService::window(options.reference_date, options.window_size);
        Self::rank(
            entries.iter().filter(|entry| {
                options.status_filter.admits(entry)
                    && PeriodService::in_window(&window, entry.occurred_at)
            }),
            options.top_n,
        )
    }
}
