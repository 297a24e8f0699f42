use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::{
        source::{LedgerSnapshot, LedgerSource},
        utils::write_atomic,
    },
    domain::{LedgerEntry, Obligation},
    errors::EngineResult,
};

/// Reads ledger rows from a JSON snapshot on every call, so a refresh after a
/// change notification always sees the latest file contents.
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    path: PathBuf,
}

impl JsonSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> EngineResult<LedgerSnapshot> {
        load_snapshot_from_path(&self.path)
    }
}

impl LedgerSource for JsonSnapshotSource {
    fn entries(&self, account: &str) -> EngineResult<Vec<LedgerEntry>> {
        let mut snapshot = self.read()?;
        Ok(snapshot
            .accounts
            .remove(account)
            .map(|ledger| ledger.entries)
            .unwrap_or_default())
    }

    fn obligations(&self, account: &str) -> EngineResult<Vec<Obligation>> {
        let mut snapshot = self.read()?;
        Ok(snapshot
            .accounts
            .remove(account)
            .map(|ledger| ledger.obligations)
            .unwrap_or_default())
    }
}

/// Loads a snapshot document, returning structured errors on failure.
pub fn load_snapshot_from_path(path: &Path) -> EngineResult<LedgerSnapshot> {
    let data = fs::read_to_string(path)?;
    let snapshot: LedgerSnapshot = serde_json::from_str(&data)?;
    tracing::debug!(
        path = %path.display(),
        accounts = snapshot.accounts.len(),
        "loaded ledger snapshot"
    );
    Ok(snapshot)
}

/// Writes the snapshot to disk atomically by staging to a temporary file.
pub fn save_snapshot_to_path(snapshot: &LedgerSnapshot, path: &Path) -> EngineResult<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    write_atomic(path, &json)
}
