use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        time::Clock,
        utils::{ensure_dir, write_atomic, PathResolver},
    },
    currency::CurrencyCode,
    domain::{EntryStatus, LedgerEntry},
    errors::{EngineError, EngineResult},
};

pub const DEFAULT_WINDOW_SIZE: u32 = 7;
pub const ANALYTICS_WINDOW_SIZE: u32 = 8;
pub const DEFAULT_TOP_N: usize = 5;

/// Which ledger entries take part in aggregation.
///
/// The dashboard stats only count completed entries while the transactions and
/// analytics views count everything; both policies are kept and chosen per call site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    #[serde(rename = "completed-only")]
    CompletedOnly,
    #[serde(rename = "all")]
    All,
}

impl StatusFilter {
    pub fn admits(&self, entry: &LedgerEntry) -> bool {
        match self {
            StatusFilter::CompletedOnly => entry.status == EntryStatus::Completed,
            StatusFilter::All => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::CompletedOnly => "completed-only",
            StatusFilter::All => "all",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "completed-only" => Ok(StatusFilter::CompletedOnly),
            "all" => Ok(StatusFilter::All),
            other => Err(EngineError::InvalidInput(format!(
                "unknown status filter `{}`",
                other
            ))),
        }
    }
}

/// Persisted engine preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    #[serde(default = "default_window_size")]
    pub window_size: u32,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default)]
    pub status_filter: StatusFilter,
}

fn default_window_size() -> u32 {
    DEFAULT_WINDOW_SIZE
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            top_n: DEFAULT_TOP_N,
            currency: CurrencyCode::default(),
            status_filter: StatusFilter::default(),
        }
    }
}

/// Resolved options for one aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationOptions {
    pub window_size: u32,
    pub top_n: usize,
    pub currency: CurrencyCode,
    pub status_filter: StatusFilter,
    pub reference_date: NaiveDate,
}

impl AggregationOptions {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            top_n: DEFAULT_TOP_N,
            currency: CurrencyCode::default(),
            status_filter: StatusFilter::CompletedOnly,
            reference_date,
        }
    }

    /// Defaults used by the dashboard overview: completed entries, 7 months.
    pub fn dashboard(clock: &dyn Clock) -> Self {
        Self::new(clock.today())
    }

    /// Defaults used by the analytics and transactions views: every status, 8 months.
    pub fn analytics(clock: &dyn Clock) -> Self {
        Self::new(clock.today())
            .with_window_size(ANALYTICS_WINDOW_SIZE)
            .with_status_filter(StatusFilter::All)
    }

    pub fn from_config(config: &EngineConfig, clock: &dyn Clock) -> EngineResult<Self> {
        let options = Self {
            window_size: config.window_size,
            top_n: config.top_n,
            currency: config.currency,
            status_filter: config.status_filter,
            reference_date: clock.today(),
        };
        options.validate()?;
        Ok(options)
    }

    pub fn with_window_size(mut self, window_size: u32) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_status_filter(mut self, status_filter: StatusFilter) -> Self {
        self.status_filter = status_filter;
        self
    }

    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = reference_date;
        self
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.window_size == 0 {
            return Err(EngineError::InvalidInput(
                "window size must be at least 1".into(),
            ));
        }
        if self.top_n == 0 {
            return Err(EngineError::InvalidInput("top N must be at least 1".into()));
        }
        Ok(())
    }
}

/// Loads and saves [`EngineConfig`] as JSON inside the application data directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> EngineResult<Self> {
        Self::from_base(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> EngineResult<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> EngineResult<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    pub fn load(&self) -> EngineResult<EngineConfig> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            tracing::debug!(path = %self.path.display(), "loaded engine config");
            Ok(config)
        } else {
            tracing::debug!(path = %self.path.display(), "no engine config; using defaults");
            Ok(EngineConfig::default())
        }
    }

    pub fn save(&self, config: &EngineConfig) -> EngineResult<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        tracing::info!(path = %self.path.display(), "saved engine config");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
