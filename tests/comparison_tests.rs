mod common;

use common::{date, expense, income};
use dashboard_core::{
    config::AggregationOptions,
    core::services::{ComparisonService, FlowService, PeriodBucket, PeriodComparison, Trend},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn bucket(income: Decimal, expense: Decimal) -> PeriodBucket {
    PeriodBucket {
        label: String::new(),
        year: 2024,
        month: 0,
        income,
        expense,
    }
}

#[test]
fn revenue_scenario_from_52k_to_45k() {
    let buckets = vec![bucket(dec!(52000), dec!(0)), bucket(dec!(45000), dec!(0))];
    let comparison = ComparisonService::compare(&buckets);
    assert_eq!(comparison.revenue.previous, dec!(52000));
    assert_eq!(comparison.revenue.current, dec!(45000));
    assert_eq!(comparison.revenue.delta_percent, dec!(-13.46));
    assert_eq!(comparison.revenue.trend, Trend::Down);
}

#[test]
fn deltas_never_divide_by_non_positive_previous() {
    let samples = [
        (dec!(0), dec!(0)),
        (dec!(0), dec!(100)),
        (dec!(50), dec!(200)),
        (dec!(1000), dec!(0)),
    ];
    for (prev_income, prev_expense) in samples {
        for (cur_income, cur_expense) in samples {
            let buckets = vec![
                bucket(prev_income, prev_expense),
                bucket(cur_income, cur_expense),
            ];
            let comparison = ComparisonService::compare(&buckets);
            for change in [comparison.revenue, comparison.cash_flow, comparison.expenses] {
                if change.previous <= Decimal::ZERO {
                    assert_eq!(change.delta_percent, Decimal::ZERO);
                    assert_eq!(change.trend, Trend::Up);
                }
            }
        }
    }
}

#[test]
fn comparison_over_real_months() {
    let ledger = vec![
        income(dec!(1000), date(2024, 11, 10)),
        expense(dec!(400), "Ops", date(2024, 11, 11)),
        income(dec!(1500), date(2024, 12, 10)),
        expense(dec!(300), "Ops", date(2024, 12, 11)),
    ];
    let options = AggregationOptions::new(date(2024, 12, 20)).with_window_size(2);
    let buckets = FlowService::monthly_series(&ledger, &options);
    let comparison = ComparisonService::compare(&buckets);
    assert_eq!(comparison.revenue.delta_percent, dec!(50));
    assert_eq!(comparison.expenses.delta_percent, dec!(-25));
    assert_eq!(comparison.expenses.trend, Trend::Down);
    assert_eq!(comparison.cash_flow.delta_percent, dec!(100));
}

#[test]
fn single_bucket_window_yields_default_comparison() {
    let ledger = vec![income(dec!(1000), date(2024, 12, 10))];
    let options = AggregationOptions::new(date(2024, 12, 20)).with_window_size(1);
    let buckets = FlowService::monthly_series(&ledger, &options);
    assert_eq!(ComparisonService::compare(&buckets), PeriodComparison::default());
}
