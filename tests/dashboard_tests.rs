mod common;

use common::{date, income, sample_ledger, sample_obligations};
use dashboard_core::{
    config::{AggregationOptions, StatusFilter},
    core::{
        services::{DashboardOptions, SummaryService, Trend},
        source::InMemoryLedgerSource,
        time::FixedClock,
    },
    currency::CurrencyCode,
    EngineError,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const ACCOUNT: &str = "user-1";

fn clock() -> FixedClock {
    FixedClock(date(2024, 12, 31))
}

fn seeded_source() -> InMemoryLedgerSource {
    let mut source = InMemoryLedgerSource::new();
    for entry in sample_ledger() {
        source.insert_entry(ACCOUNT, entry);
    }
    for obligation in sample_obligations() {
        source.insert_obligation(ACCOUNT, obligation);
    }
    source
}

#[test]
fn dashboard_stats_use_completed_entries_only() {
    let options = AggregationOptions::dashboard(&clock());
    let stats =
        SummaryService::dashboard_stats(&sample_ledger(), &sample_obligations(), &options);
    assert_eq!(stats.total_revenue, dec!(35500));
    assert_eq!(stats.total_expenses, dec!(4540));
    assert_eq!(stats.cash_flow, dec!(30960));
    assert_eq!(stats.revenue_change, dec!(18.33));
    assert_eq!(stats.cash_flow_change, dec!(94.73));
    assert_eq!(stats.expenses_change, dec!(-67.80));
    assert_eq!(stats.outstanding, dec!(6250.50));
    assert_eq!(stats.outstanding_count, 2);
}

#[test]
fn dashboard_stats_on_empty_inputs_are_zero() {
    let options = AggregationOptions::dashboard(&clock());
    let stats = SummaryService::dashboard_stats(&[], &[], &options);
    assert_eq!(stats.total_revenue, Decimal::ZERO);
    assert_eq!(stats.revenue_change, Decimal::ZERO);
    assert_eq!(stats.outstanding_count, 0);
    let cards = stats.cards(CurrencyCode::Usd);
    assert!(cards.iter().all(|card| card.trend == Trend::Up));
    assert_eq!(cards[0].value, "$0");
    assert_eq!(cards[0].change, "+0.0% from last month");
}

#[test]
fn refresh_combines_both_status_policies() {
    let source = seeded_source();
    let options = DashboardOptions::new(&clock());
    let snapshot = SummaryService::refresh(&source, ACCOUNT, &options).expect("refresh");

    assert_eq!(snapshot.stats.total_revenue, dec!(35500));
    assert_eq!(snapshot.monthly.len(), 8);
    assert_eq!(snapshot.monthly[7].income, dec!(39500));
    assert_eq!(snapshot.top_categories.len(), 5);
    assert_eq!(snapshot.top_categories[0].category, "Salaries");
    assert_eq!(snapshot.ratios.revenue_growth, dec!(31.67));
    assert_eq!(snapshot.ratios.profit_margin, dec!(78.09));
    assert_eq!(snapshot.ratios.expense_ratio, dec!(21.91));
    assert_eq!(snapshot.currency, CurrencyCode::Usd);
}

#[test]
fn refresh_reflects_new_rows_after_a_change() {
    let mut source = seeded_source();
    let options = DashboardOptions::new(&clock());
    let before = SummaryService::refresh(&source, ACCOUNT, &options).expect("first refresh");

    source.insert_entry(ACCOUNT, income(dec!(500), date(2024, 12, 30)));
    let after = SummaryService::refresh(&source, ACCOUNT, &options).expect("second refresh");

    assert_eq!(
        after.stats.total_revenue - before.stats.total_revenue,
        dec!(500)
    );
    let again = SummaryService::refresh(&source, ACCOUNT, &options).expect("third refresh");
    assert_eq!(again, after);
}

#[test]
fn refresh_for_unknown_account_renders_zeroes() {
    let source = seeded_source();
    let options = DashboardOptions::new(&clock());
    let snapshot = SummaryService::refresh(&source, "someone-else", &options).expect("refresh");
    assert!(snapshot.top_categories.is_empty());
    assert!(snapshot.monthly.iter().all(|b| b.income.is_zero()));
    assert_eq!(snapshot.stats.outstanding, Decimal::ZERO);
}

#[test]
fn refresh_rejects_invalid_options() {
    let source = seeded_source();
    let mut options = DashboardOptions::new(&clock());
    options.analytics = options.analytics.with_top_n(0);
    assert!(matches!(
        SummaryService::refresh(&source, ACCOUNT, &options),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn stats_can_opt_into_all_statuses() {
    let options = AggregationOptions::dashboard(&clock()).with_status_filter(StatusFilter::All);
    let stats = SummaryService::dashboard_stats(&sample_ledger(), &[], &options);
    assert_eq!(stats.total_revenue, dec!(39500));
    assert_eq!(stats.total_expenses, dec!(4790));
}
