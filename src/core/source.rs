//! Data-access seam: the engine never reaches for a global client, callers hand
//! it a constructed [`LedgerSource`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{LedgerEntry, Obligation},
    errors::EngineResult,
};

/// Supplies the ledger rows and obligations for one account.
pub trait LedgerSource: Send + Sync {
    fn entries(&self, account: &str) -> EngineResult<Vec<LedgerEntry>>;
    fn obligations(&self, account: &str) -> EngineResult<Vec<Obligation>>;
}

/// Everything loaded for one account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AccountLedger {
    #[serde(default)]
    pub entries: Vec<LedgerEntry>,
    #[serde(default)]
    pub obligations: Vec<Obligation>,
}

/// Multi-account document, keyed by account id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub accounts: BTreeMap<String, AccountLedger>,
}

impl LedgerSnapshot {
    pub fn account(&self, account: &str) -> Option<&AccountLedger> {
        self.accounts.get(account)
    }

    pub fn account_mut(&mut self, account: impl Into<String>) -> &mut AccountLedger {
        self.accounts.entry(account.into()).or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryLedgerSource {
    snapshot: LedgerSnapshot,
}

impl InMemoryLedgerSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: LedgerSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn insert_entry(&mut self, account: impl Into<String>, entry: LedgerEntry) {
        self.snapshot.account_mut(account).entries.push(entry);
    }

    pub fn insert_obligation(&mut self, account: impl Into<String>, obligation: Obligation) {
        self.snapshot.account_mut(account).obligations.push(obligation);
    }
}

impl LedgerSource for InMemoryLedgerSource {
    fn entries(&self, account: &str) -> EngineResult<Vec<LedgerEntry>> {
        Ok(self
            .snapshot
            .account(account)
            .map(|ledger| ledger.entries.clone())
            .unwrap_or_default())
    }

    fn obligations(&self, account: &str) -> EngineResult<Vec<Obligation>> {
        Ok(self
            .snapshot
            .account(account)
            .map(|ledger| ledger.obligations.clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ObligationStatus;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn unknown_account_yields_empty_sequences() {
        let source = InMemoryLedgerSource::new();
        assert!(source.entries("nobody").unwrap().is_empty());
        assert!(source.obligations("nobody").unwrap().is_empty());
    }

    #[test]
    fn rows_are_scoped_per_account() {
        let mut source = InMemoryLedgerSource::new();
        let date = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        source.insert_entry("alice", LedgerEntry::income(dec!(100), date));
        source.insert_obligation("bob", Obligation::new(dec!(50), ObligationStatus::Sent));

        assert_eq!(source.entries("alice").unwrap().len(), 1);
        assert!(source.obligations("alice").unwrap().is_empty());
        assert!(source.entries("bob").unwrap().is_empty());
        assert_eq!(source.obligations("bob").unwrap().len(), 1);
    }
}
