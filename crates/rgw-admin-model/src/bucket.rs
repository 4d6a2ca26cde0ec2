//! Buckets, bucket policies, links and index checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::QueryArgs;
use crate::quota::QuotaSpec;
use crate::validation::{ValidationError, require};

/// Bucket metadata and, when requested, usage statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bucket {
    /// Bucket name.
    #[serde(rename = "bucket", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Index shard count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_shards: Option<u64>,
    /// Tenant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    /// Zone group id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zonegroup: Option<String>,
    /// Placement rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_rule: Option<String>,
    /// Explicit pool placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_placement: Option<ExplicitPlacement>,
    /// Bucket instance id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Bucket marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Index type, e.g. `Normal`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_type: Option<String>,
    /// Whether versioning was ever enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioned: Option<bool>,
    /// Whether versioning is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioning_enabled: Option<bool>,
    /// Versioning state, e.g. `off`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioning: Option<String>,
    /// Whether object lock is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_lock_enabled: Option<bool>,
    /// Owning user id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Per-shard index versions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,
    /// Master index versions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_ver: Option<String>,
    /// Last modification time, as sent by the gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtime: Option<String>,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    /// Per-shard max markers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_marker: Option<String>,
    /// Usage by category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<BucketUsage>,
    /// Bucket quota.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_quota: Option<QuotaSpec>,

    /// Owner to scope the lookup to.
    #[serde(skip)]
    pub user_id: Option<String>,
    /// Request usage statistics.
    #[serde(skip)]
    pub generate_stat: Option<bool>,
    /// Purge objects on removal.
    #[serde(skip)]
    pub purge_objects: Option<bool>,
}

/// Explicit data/index pool placement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplicitPlacement {
    /// Data pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_pool: Option<String>,
    /// Extra data pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_extra_pool: Option<String>,
    /// Index pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_pool: Option<String>,
}

/// Bucket usage, split by RGW category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketUsage {
    /// Regular objects.
    #[serde(rename = "rgw.main", skip_serializing_if = "Option::is_none")]
    pub rgw_main: Option<RgwUsage>,
    /// In-progress multipart metadata.
    #[serde(rename = "rgw.multimeta", skip_serializing_if = "Option::is_none")]
    pub rgw_multimeta: Option<RgwUsage>,
}

/// Usage counters of one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RgwUsage {
    /// Bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Bytes on disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_actual: Option<u64>,
    /// Bytes after compression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_utilized: Option<u64>,
    /// KiB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_kb: Option<u64>,
    /// KiB on disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_kb_actual: Option<u64>,
    /// KiB after compression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_kb_utilized: Option<u64>,
    /// Object count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_objects: Option<u64>,
}

/// A bucket's access control policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Access control list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl: Option<PolicyAcl>,
    /// Owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<PolicyOwner>,
}

/// Access control list maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyAcl {
    /// Per-user ACL bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl_user_map: Option<Vec<PolicyAclUserMapEntry>>,
    /// Per-group ACL bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl_group_map: Option<Vec<serde_json::Value>>,
    /// Grants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_map: Option<Vec<PolicyGrantMapEntry>>,
}

/// ACL bits of one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyAclUserMapEntry {
    /// User id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// ACL bit mask.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl: Option<i32>,
}

/// One grant keyed by grantee id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyGrantMapEntry {
    /// Grantee id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant: Option<PolicyGrant>,
}

/// A grant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyGrant {
    /// Grantee type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<PolicyGrantType>,
    /// Grantee id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Grantee email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Permission bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<PolicyGrantPermission>,
    /// Grantee display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Group id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<i32>,
    /// URL spec.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_spec: Option<String>,
}

/// Grantee type wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyGrantType {
    /// Numeric grantee type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
}

/// Permission wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyGrantPermission {
    /// Permission flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<i32>,
}

/// Policy owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyOwner {
    /// Owner id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owner display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Link or unlink a bucket to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketLinkInput {
    /// Bucket name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    /// Bucket instance id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_id: Option<String>,
    /// Target user.
    #[serde(rename = "uid", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// New bucket name on link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_bucket_name: Option<String>,
}

/// Check (and optionally fix) a bucket index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckBucketIndexRequest {
    /// Bucket name.
    pub bucket: Option<String>,
    /// Also check multipart object accounting. Needs `fix`.
    pub check_objects: Option<bool>,
    /// Repair the index.
    pub fix: Option<bool>,
}

/// Result of a bucket index check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckBucketIndexResponse {
    /// Multipart entries that do not belong to any upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_multipart_entries: Option<Vec<String>>,
    /// Header comparison.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_result: Option<CheckBucketIndexResult>,
}

/// Existing vs. recalculated index header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckBucketIndexResult {
    /// Header as stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_header: Option<CheckBucketIndexHeader>,
    /// Header as recalculated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_header: Option<CheckBucketIndexHeader>,
}

/// An index header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckBucketIndexHeader {
    /// Usage recorded in the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<BucketUsage>,
}

impl Bucket {
    fn required_name(&self) -> Result<&str, ValidationError> {
        require("bucket name", self.name.as_deref())
    }

    /// Arguments for `GET /bucket` on one bucket.
    pub fn info_args(&self) -> Result<QueryArgs, ValidationError> {
        let name = self.required_name()?;
        Ok(QueryArgs::admin()
            .with("bucket", name)
            .with("uid", self.user_id.as_deref())
            .with("stats", self.generate_stat))
    }

    /// Arguments for `GET /bucket?policy`.
    pub fn policy_args(&self) -> Result<QueryArgs, ValidationError> {
        let name = self.required_name()?;
        Ok(QueryArgs::admin().with("bucket", name))
    }

    /// Arguments for `DELETE /bucket`.
    pub fn remove_args(&self) -> Result<QueryArgs, ValidationError> {
        let name = self.required_name()?;
        Ok(QueryArgs::admin()
            .with("bucket", name)
            .with("purge-objects", self.purge_objects))
    }
}

/// Arguments for `GET /bucket` listings.
///
/// `user_id` scopes the listing to one owner; `stats` switches the response
/// from bucket names to full [`Bucket`] records.
#[must_use]
pub fn bucket_listing_args(user_id: Option<&str>, stats: Option<bool>) -> QueryArgs {
    QueryArgs::admin()
        .with("uid", user_id)
        .with("stats", stats)
}

/// Arguments for `GET /bucket` listing the buckets of one user.
pub fn user_bucket_listing_args(user_id: &str, stats: bool) -> Result<QueryArgs, ValidationError> {
    let uid = require("user id", Some(user_id))?;
    Ok(bucket_listing_args(Some(uid), Some(stats)))
}

impl BucketLinkInput {
    fn required(&self) -> Result<(&str, &str), ValidationError> {
        let uid = require("user id", self.user_id.as_deref())?;
        let bucket = require("bucket name", self.bucket.as_deref())?;
        Ok((uid, bucket))
    }

    /// Arguments for `PUT /bucket` linking the bucket to the user.
    pub fn link_args(&self) -> Result<QueryArgs, ValidationError> {
        let (uid, bucket) = self.required()?;
        Ok(QueryArgs::admin()
            .with("uid", uid)
            .with("bucket-id", self.bucket_id.as_deref())
            .with("bucket", bucket)
            .with("new-bucket-name", self.new_bucket_name.as_deref()))
    }

    /// Arguments for `POST /bucket` unlinking the bucket from the user.
    pub fn unlink_args(&self) -> Result<QueryArgs, ValidationError> {
        let (uid, bucket) = self.required()?;
        Ok(QueryArgs::admin().with("uid", uid).with("bucket", bucket))
    }
}

impl CheckBucketIndexRequest {
    /// Arguments for `GET /bucket?index`.
    pub fn args(&self) -> Result<QueryArgs, ValidationError> {
        let bucket = require("bucket name", self.bucket.as_deref())?;
        Ok(QueryArgs::admin()
            .with("bucket", bucket)
            .with("check-objects", self.check_objects)
            .with("fix", self.fix))
    }
}
