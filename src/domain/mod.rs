pub mod budget;
pub mod common;
pub mod entry;
pub mod invoice;
pub mod obligation;

pub use budget::{Budget, BudgetPeriod};
pub use common::{sum_amounts, Amounted, Displayable};
pub use entry::{EntryKind, EntryStatus, LedgerEntry};
pub use invoice::InvoiceLine;
pub use obligation::{Obligation, ObligationStatus};
