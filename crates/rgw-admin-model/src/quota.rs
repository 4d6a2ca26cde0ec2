//! Quota types and the quota operation arguments.

use serde::{Deserialize, Serialize};

use crate::query::QueryArgs;
use crate::validation::{ValidationError, require};

/// Which quota a user-scoped quota call addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuotaType {
    /// Limits on the user as a whole.
    User,
    /// Default limits applied to each of the user's buckets.
    Bucket,
}

impl QuotaType {
    /// Wire value of the `quota-type` parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bucket => "bucket",
        }
    }
}

impl std::fmt::Display for QuotaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A quota, as returned by the gateway and as used to set one.
///
/// `max_size` and `max_objects` use `-1` for "unlimited".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaSpec {
    /// Owner of the quota.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Bucket, for an individual bucket quota.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    /// Whether the quota is enforced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Whether limits apply to raw (pre-replication) usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_on_raw: Option<bool>,
    /// Maximum size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<i64>,
    /// Maximum size in KiB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size_kb: Option<i64>,
    /// Maximum number of objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_objects: Option<i64>,
}

impl QuotaSpec {
    /// Arguments for `GET /user?quota`.
    pub fn get_args(&self, quota_type: QuotaType) -> Result<QueryArgs, ValidationError> {
        let uid = require("user id", self.user_id.as_deref())?;
        Ok(QueryArgs::admin()
            .with("uid", uid)
            .with("quota-type", quota_type.as_str()))
    }

    /// Arguments for `PUT /user?quota`.
    pub fn set_args(&self, quota_type: QuotaType) -> Result<QueryArgs, ValidationError> {
        let args = self.get_args(quota_type)?;
        Ok(self.with_limits(args))
    }

    /// Arguments for `PUT /bucket?quota`, the quota of one bucket.
    pub fn individual_bucket_args(&self) -> Result<QueryArgs, ValidationError> {
        let uid = require("user id", self.user_id.as_deref())?;
        let bucket = require("bucket name", self.bucket.as_deref())?;
        let args = QueryArgs::admin().with("bucket", bucket).with("uid", uid);
        Ok(self.with_limits(args))
    }

    fn with_limits(&self, args: QueryArgs) -> QueryArgs {
        args.with("enabled", self.enabled)
            .with("max-size", self.max_size)
            .with("max-size-kb", self.max_size_kb)
            .with("max-objects", self.max_objects)
    }
}
