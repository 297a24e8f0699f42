use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::{
    config::StatusFilter,
    domain::{sum_amounts, Budget, LedgerEntry},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetHealth {
    Good,
    Over,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetUsage {
    pub category: String,
    pub budget: Decimal,
    pub spent: Decimal,
    pub percentage: Decimal,
    pub status: BudgetHealth,
}

impl BudgetUsage {
    pub fn remaining(&self) -> Decimal {
        self.budget - self.spent
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetOverview {
    pub usages: Vec<BudgetUsage>,
    pub total_budget: Decimal,
    pub total_spent: Decimal,
    pub total_percentage: Decimal,
}

pub struct BudgetService;

impl BudgetService {
    /// Spending against one budget: expense entries with the exact category label
    /// dated inside the budget's inclusive range.
    pub fn usage(budget: &Budget, entries: &[LedgerEntry], filter: StatusFilter) -> BudgetUsage {
        let spent = sum_amounts(entries.iter().filter(|entry| {
            entry.is_expense()
                && entry.category == budget.category
                && budget.covers(entry.occurred_at)
                && filter.admits(entry)
        }));
        BudgetUsage {
            category: budget.category.clone(),
            budget: budget.amount,
            spent,
            percentage: whole_percent(spent, budget.amount),
            status: if spent > budget.amount {
                BudgetHealth::Over
            } else {
                BudgetHealth::Good
            },
        }
    }

    pub fn overview(budgets: &[Budget], entries: &[LedgerEntry], filter: StatusFilter) -> BudgetOverview {
        let usages: Vec<BudgetUsage> = budgets
            .iter()
            .map(|budget| Self::usage(budget, entries, filter))
            .collect();
        let total_budget = usages.iter().map(|u| u.budget).sum::<Decimal>();
        let total_spent = usages.iter().map(|u| u.spent).sum::<Decimal>();
        BudgetOverview {
            total_percentage: whole_percent(total_spent, total_budget),
            usages,
            total_budget,
            total_spent,
        }
    }
}

fn whole_percent(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|pct| pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO)
}
