//! Bandwidth usage reports.

use serde::{Deserialize, Serialize};

use crate::query::QueryArgs;

/// Selects the usage records to show or trim.
///
/// `start` and `end` are passed through as given; the gateway accepts
/// `YYYY-MM-DD` with an optional `HH:MM:SS` time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageRequest {
    /// Restrict to one user.
    pub user_id: Option<String>,
    /// Start of the range.
    pub start: Option<String>,
    /// End of the range.
    pub end: Option<String>,
    /// Include per-bucket entries.
    pub show_entries: Option<bool>,
    /// Include per-user summaries.
    pub show_summary: Option<bool>,
    /// Required by the gateway to trim every user's usage when no user is given.
    pub remove_all: Option<bool>,
}

impl UsageRequest {
    /// Arguments for `GET /usage`.
    #[must_use]
    pub fn get_args(&self) -> QueryArgs {
        self.range_args()
            .with("show-entries", self.show_entries)
            .with("show-summary", self.show_summary)
    }

    /// Arguments for `DELETE /usage`.
    #[must_use]
    pub fn trim_args(&self) -> QueryArgs {
        self.range_args().with("remove-all", self.remove_all)
    }

    fn range_args(&self) -> QueryArgs {
        QueryArgs::admin()
            .with("uid", self.user_id.as_deref())
            .with("start", self.start.as_deref())
            .with("end", self.end.as_deref())
    }
}

/// A usage report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    /// Per-user, per-bucket entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<UsageEntry>>,
    /// Per-user summaries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Vec<UsageSummary>>,
}

/// Usage of one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageEntry {
    /// User id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Buckets the user touched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buckets: Option<Vec<UsageBucket>>,
}

/// Usage of one bucket within one hour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageBucket {
    /// Bucket name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    /// Start of the hour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Start of the hour, seconds since the epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epoch: Option<u64>,
    /// Bucket owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Per-operation counters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<UsageCategory>>,
}

/// Counters of one operation category, e.g. `get_obj`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageCategory {
    /// Category name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Bytes sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_sent: Option<u64>,
    /// Bytes received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_received: Option<u64>,
    /// Operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ops: Option<u64>,
    /// Successful operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_ops: Option<u64>,
}

/// Summary of one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageSummary {
    /// User id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Per-category totals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<UsageCategory>>,
    /// Grand total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<UsageTotal>,
}

/// Totals across categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageTotal {
    /// Bytes sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_sent: Option<u64>,
    /// Bytes received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_received: Option<u64>,
    /// Operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ops: Option<u64>,
    /// Successful operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_ops: Option<u64>,
}
