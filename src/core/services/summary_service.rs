use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    config::AggregationOptions,
    core::{source::LedgerSource, time::Clock},
    currency::{format_percent_change, CurrencyCode},
    domain::{sum_amounts, LedgerEntry, Obligation},
    errors::EngineResult,
};

use super::{
    category_service::{CategoryService, CategoryTotal},
    comparison_service::{ComparisonService, PeriodComparison, Trend},
    flow_service::{AnalyticsRatios, FlowService},
    period_service::PeriodBucket,
};

/// Money still owed on sent and overdue invoices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutstandingSummary {
    pub amount: Decimal,
    pub count: usize,
}

/// Headline figures for the current month against the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_revenue: Decimal,
    pub cash_flow: Decimal,
    pub total_expenses: Decimal,
    pub outstanding: Decimal,
    pub outstanding_count: usize,
    pub revenue_change: Decimal,
    pub cash_flow_change: Decimal,
    pub expenses_change: Decimal,
}

impl DashboardStats {
    fn from_parts(comparison: &PeriodComparison, outstanding: OutstandingSummary) -> Self {
        Self {
            total_revenue: comparison.revenue.current,
            cash_flow: comparison.cash_flow.current,
            total_expenses: comparison.expenses.current,
            outstanding: outstanding.amount,
            outstanding_count: outstanding.count,
            revenue_change: comparison.revenue.delta_percent,
            cash_flow_change: comparison.cash_flow.delta_percent,
            expenses_change: comparison.expenses.delta_percent,
        }
    }

    /// Display-ready cards in dashboard order.
    pub fn cards(&self, currency: CurrencyCode) -> Vec<StatCard> {
        let card = |title: &str, value: Decimal, change: Decimal| StatCard {
            title: title.to_string(),
            value: currency.format(value),
            change: format!("{} from last month", format_percent_change(change)),
            trend: Trend::of(change),
        };
        vec![
            card("Total Revenue", self.total_revenue, self.revenue_change),
            card("Cash Flow", self.cash_flow, self.cash_flow_change),
            card("Total Expenses", self.total_expenses, self.expenses_change),
            StatCard {
                title: "Outstanding".to_string(),
                value: currency.format(self.outstanding),
                change: format!("{} pending invoices", self.outstanding_count),
                trend: Trend::Up,
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

/// The two option sets a dashboard refresh runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOptions {
    pub stats: AggregationOptions,
    pub analytics: AggregationOptions,
}

impl DashboardOptions {
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            stats: AggregationOptions::dashboard(clock),
            analytics: AggregationOptions::analytics(clock),
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        self.stats.validate()?;
        self.analytics.validate()
    }
}

/// Everything a dashboard render needs, recomputed from scratch on each refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub monthly: Vec<PeriodBucket>,
    pub top_categories: Vec<CategoryTotal>,
    pub ratios: AnalyticsRatios,
    pub currency: CurrencyCode,
}

pub struct SummaryService;

impl SummaryService {
    pub fn outstanding(obligations: &[Obligation]) -> OutstandingSummary {
        let owed: Vec<&Obligation> = obligations.iter().filter(|o| o.is_outstanding()).collect();
        OutstandingSummary {
            amount: sum_amounts(owed.iter().copied()),
            count: owed.len(),
        }
    }

    /// Current month versus the previous month, ending at the reference date.
    pub fn dashboard_stats(
        entries: &[LedgerEntry],
        obligations: &[Obligation],
        options: &AggregationOptions,
    ) -> DashboardStats {
        let buckets = FlowService::monthly_series(entries, &options.with_window_size(2));
        let comparison = ComparisonService::compare(&buckets);
        DashboardStats::from_parts(&comparison, Self::outstanding(obligations))
    }

    pub fn snapshot(
        entries: &[LedgerEntry],
        obligations: &[Obligation],
        options: &DashboardOptions,
    ) -> DashboardSnapshot {
        let monthly = FlowService::monthly_series(entries, &options.analytics);
        DashboardSnapshot {
            stats: Self::dashboard_stats(entries, obligations, &options.stats),
            top_categories: CategoryService::rank_in_window(entries, &options.analytics),
            ratios: FlowService::ratios(&monthly),
            monthly,
            currency: options.stats.currency,
        }
    }

    /// Reloads the account through `source` and recomputes the snapshot. Hosts call
    /// this whenever their change feed reports a write to entries or obligations.
    pub fn refresh(
        source: &dyn LedgerSource,
        account: &str,
        options: &DashboardOptions,
    ) -> EngineResult<DashboardSnapshot> {
        options.validate()?;
        let entries = source.entries(account)?;
        let obligations = source.obligations(account)?;
        tracing::debug!(
            account,
            entries = entries.len(),
            obligations = obligations.len(),
            "refreshing dashboard"
        );
        Ok(Self::snapshot(&entries, &obligations, options))
    }
}
