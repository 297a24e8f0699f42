use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::{
    config::AggregationOptions,
    domain::{sum_amounts, EntryKind, LedgerEntry},
};

use super::{
    comparison_service::ComparisonService,
    period_service::{BucketMembers, PeriodBucket, PeriodService},
};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Income and expense sums for a set of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FlowTotals {
    pub income: Decimal,
    pub expense: Decimal,
}

impl FlowTotals {
    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }
}

/// Whole-window ratios shown on the analytics page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnalyticsRatios {
    pub revenue_growth: Decimal,
    pub profit_margin: Decimal,
    pub expense_ratio: Decimal,
}

pub struct FlowService;

impl FlowService {
    pub fn totals(entries: &[&LedgerEntry]) -> FlowTotals {
        let of_kind = |kind: EntryKind| {
            sum_amounts(entries.iter().copied().filter(move |entry| entry.kind == kind))
        };
        FlowTotals {
            income: of_kind(EntryKind::Income),
            expense: of_kind(EntryKind::Expense),
        }
    }

    pub fn bucket(members: &BucketMembers<'_>) -> PeriodBucket {
        let totals = Self::totals(&members.entries);
        PeriodBucket {
            income: totals.income,
            expense: totals.expense,
            ..PeriodBucket::empty(members.key)
        }
    }

    /// Monthly income/expense series over the trailing window, oldest first.
    pub fn monthly_series(entries: &[LedgerEntry], options: &AggregationOptions) -> Vec<PeriodBucket> {
        let window = PeriodService::window(options.reference_date, options.window_size);
        PeriodService::assign(entries, &window, options.status_filter)
            .iter()
            .map(Self::bucket)
            .collect()
    }

    pub fn window_totals(buckets: &[PeriodBucket]) -> FlowTotals {
        buckets.iter().fold(FlowTotals::default(), |acc, bucket| FlowTotals {
            income: acc.income + bucket.income,
            expense: acc.expense + bucket.expense,
        })
    }

    pub fn ratios(buckets: &[PeriodBucket]) -> AnalyticsRatios {
        let totals = Self::window_totals(buckets);
        AnalyticsRatios {
            revenue_growth: ComparisonService::compare(buckets).revenue.delta_percent,
            profit_margin: share_of(totals.net(), totals.income),
            expense_ratio: share_of(totals.expense, totals.income),
        }
    }
}

fn share_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .map(|pct| pct.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO)
}
