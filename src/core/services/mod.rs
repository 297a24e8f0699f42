pub mod budget_service;
pub mod category_service;
pub mod comparison_service;
pub mod flow_service;
pub mod invoice_service;
pub mod period_service;
pub mod summary_service;

pub use budget_service::{BudgetHealth, BudgetOverview, BudgetService, BudgetUsage};
pub use category_service::{CategoryService, CategoryTotal};
pub use comparison_service::{ComparisonService, Metric, MetricChange, PeriodComparison, Trend};
pub use flow_service::{AnalyticsRatios, FlowService, FlowTotals};
pub use invoice_service::{InvoiceService, InvoiceTotals};
pub use period_service::{BucketMembers, MonthKey, PeriodBucket, PeriodService};
pub use summary_service::{
    DashboardOptions, DashboardSnapshot, DashboardStats, OutstandingSummary, StatCard,
    SummaryService,
};
