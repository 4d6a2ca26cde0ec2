//! Accounts.

use serde::{Deserialize, Serialize};

use crate::query::QueryArgs;
use crate::quota::QuotaSpec;
use crate::validation::{ValidationError, require};

/// An RGW account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    /// Account id, `RGW` followed by 17 digits. Generated when absent on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Account name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Tenant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    /// Maximum users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_users: Option<i64>,
    /// Maximum roles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_roles: Option<i64>,
    /// Maximum groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_groups: Option<i64>,
    /// Maximum access keys per user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_access_keys: Option<i64>,
    /// Maximum buckets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_buckets: Option<i64>,
    /// Account quota.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota: Option<QuotaSpec>,
    /// Default bucket quota.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_quota: Option<QuotaSpec>,
}

impl Account {
    /// Arguments for `POST /account`.
    #[must_use]
    pub fn create_args(&self) -> QueryArgs {
        self.with_fields(QueryArgs::admin().with("id", self.id.as_deref()))
    }

    /// Arguments for `PUT /account`.
    pub fn modify_args(&self) -> Result<QueryArgs, ValidationError> {
        let id = require("account id", self.id.as_deref())?;
        Ok(self.with_fields(QueryArgs::admin().with("id", id)))
    }

    fn with_fields(&self, args: QueryArgs) -> QueryArgs {
        args.with("name", self.name.as_deref())
            .with("email", self.email.as_deref())
            .with("tenant", self.tenant.as_deref())
            .with("max-users", self.max_users)
            .with("max-roles", self.max_roles)
            .with("max-groups", self.max_groups)
            .with("max-access-keys", self.max_access_keys)
            .with("max-buckets", self.max_buckets)
    }
}

/// Arguments for `GET /account` and `DELETE /account`.
pub fn account_id_args(id: &str) -> Result<QueryArgs, ValidationError> {
    let id = require("account id", Some(id))?;
    Ok(QueryArgs::admin().with("id", id))
}
