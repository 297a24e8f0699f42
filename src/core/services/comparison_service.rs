//! Period-over-period deltas between the last two buckets of a series.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::period_service::PeriodBucket;

const DELTA_PRECISION: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Also covers a flat (0%) change.
    #[default]
    Up,
    Down,
}

impl Trend {
    pub fn of(delta_percent: Decimal) -> Self {
        if delta_percent >= Decimal::ZERO {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Trend::Up => "up",
            Trend::Down => "down",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Revenue,
    CashFlow,
    Expenses,
}

impl Metric {
    pub fn read(&self, bucket: &PeriodBucket) -> Decimal {
        match self {
            Metric::Revenue => bucket.income,
            Metric::CashFlow => bucket.net(),
            Metric::Expenses => bucket.expense,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Revenue => "revenue",
            Metric::CashFlow => "cash flow",
            Metric::Expenses => "expenses",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricChange {
    pub metric: Metric,
    pub current: Decimal,
    pub previous: Decimal,
    pub delta_percent: Decimal,
    pub trend: Trend,
}

impl MetricChange {
    pub fn zero(metric: Metric) -> Self {
        Self {
            metric,
            current: Decimal::ZERO,
            previous: Decimal::ZERO,
            delta_percent: Decimal::ZERO,
            trend: Trend::Up,
        }
    }

    pub fn between(metric: Metric, current: &PeriodBucket, previous: &PeriodBucket) -> Self {
        let current = metric.read(current);
        let previous = metric.read(previous);
        let delta_percent = ComparisonService::percent_change(current, previous);
        Self {
            metric,
            current,
            previous,
            delta_percent,
            trend: Trend::of(delta_percent),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodComparison {
    pub revenue: MetricChange,
    pub cash_flow: MetricChange,
    pub expenses: MetricChange,
}

impl Default for PeriodComparison {
    fn default() -> Self {
        Self {
            revenue: MetricChange::zero(Metric::Revenue),
            cash_flow: MetricChange::zero(Metric::CashFlow),
            expenses: MetricChange::zero(Metric::Expenses),
        }
    }
}

pub struct ComparisonService;

impl ComparisonService {
    /// Compares the last bucket against the one before it. Shorter series yield
    /// an all-zero comparison.
    pub fn compare(buckets: &[PeriodBucket]) -> PeriodComparison {
        let [.., previous, current] = buckets else {
            return PeriodComparison::default();
        };
        PeriodComparison {
            revenue: MetricChange::between(Metric::Revenue, current, previous),
            cash_flow: MetricChange::between(Metric::CashFlow, current, previous),
            expenses: MetricChange::between(Metric::Expenses, current, previous),
        }
    }

    /// `(current - previous) / previous * 100`, rounded to 2 places; zero when
    /// `previous` is not positive.
    pub fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
        if previous <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (current - previous)
            .checked_div(previous)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(|pct| pct.round_dp_with_strategy(DELTA_PRECISION, RoundingStrategy::MidpointAwayFromZero))
            .unwrap_or(Decimal::ZERO)
    }
}
