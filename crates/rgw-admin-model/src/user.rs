//! Users, subusers, keys and capabilities.
//!
//! Response fields mirror the gateway's JSON. Fields that only ever travel
//! as request parameters are `#[serde(skip)]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::query::QueryArgs;
use crate::quota::QuotaSpec;
use crate::validation::{ValidationError, require};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Key flavor managed by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyType {
    /// S3 access key / secret key pair, owned by a user.
    #[default]
    S3,
    /// Swift secret, owned by a subuser.
    Swift,
}

impl KeyType {
    /// Wire value of the `key-type` parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::S3 => "s3",
            Self::Swift => "swift",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s3" => Ok(Self::S3),
            "swift" => Ok(Self::Swift),
            other => Err(ValidationError::UnsupportedKeyType(other.to_owned())),
        }
    }
}

/// Subuser access level.
///
/// The gateway accepts one spelling on input and replies with another
/// (`readwrite` becomes `read-write`, `full` becomes `full-control`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubuserAccess {
    /// No access.
    None,
    /// Read-only.
    Read,
    /// Write-only.
    Write,
    /// Read and write.
    ReadWrite,
    /// Full control.
    Full,
}

impl SubuserAccess {
    /// Spelling accepted in the `access` request parameter.
    #[must_use]
    pub fn as_input(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Read => "read",
            Self::Write => "write",
            Self::ReadWrite => "readwrite",
            Self::Full => "full",
        }
    }

    /// Spelling used in the `permissions` response field.
    #[must_use]
    pub fn as_reply(self) -> &'static str {
        match self {
            Self::None => "<none>",
            Self::Read => "read",
            Self::Write => "write",
            Self::ReadWrite => "read-write",
            Self::Full => "full-control",
        }
    }

    /// Parse the request-side spelling.
    #[must_use]
    pub fn from_input(value: &str) -> Option<Self> {
        [
            Self::None,
            Self::Read,
            Self::Write,
            Self::ReadWrite,
            Self::Full,
        ]
        .into_iter()
        .find(|access| access.as_input() == value)
    }

    /// Parse the response-side spelling.
    #[must_use]
    pub fn from_reply(value: &str) -> Option<Self> {
        [
            Self::None,
            Self::Read,
            Self::Write,
            Self::ReadWrite,
            Self::Full,
        ]
        .into_iter()
        .find(|access| access.as_reply() == value)
    }
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// An object store user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// User id (`uid`).
    #[serde(rename = "user_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// `1` when suspended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspended: Option<i32>,
    /// Bucket limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_buckets: Option<i32>,
    /// Subusers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subusers: Option<Vec<SubuserSpec>>,
    /// S3 keys. On input, the keys to look up or create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<UserKeySpec>>,
    /// Swift keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift_keys: Option<Vec<SwiftKeySpec>>,
    /// Capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caps: Option<Vec<UserCapSpec>>,
    /// Operation mask, e.g. `read, write, delete`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub op_mask: Option<String>,
    /// Default placement target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_placement: Option<String>,
    /// Default storage class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_storage_class: Option<String>,
    /// Placement tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_tags: Option<Vec<serde_json::Value>>,
    /// Default per-bucket quota.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_quota: Option<QuotaSpec>,
    /// User quota.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_quota: Option<QuotaSpec>,
    /// Swift temp URL keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_url_keys: Option<Vec<serde_json::Value>>,
    /// Backend user type, e.g. `rgw`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    /// MFA device ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_ids: Option<Vec<serde_json::Value>>,
    /// Usage statistics, when requested.
    #[serde(rename = "stats", skip_serializing_if = "Option::is_none")]
    pub stat: Option<UserStat>,
    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Whether the user is the account root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_root: Option<bool>,

    /// Key type for generated or supplied keys.
    #[serde(skip)]
    pub key_type: Option<KeyType>,
    /// Tenant to create the user in.
    #[serde(skip)]
    pub tenant: Option<String>,
    /// Generate a key pair on create/modify.
    #[serde(skip)]
    pub generate_key: Option<bool>,
    /// Purge the user's data on removal.
    #[serde(skip)]
    pub purge_data: Option<bool>,
    /// Request usage statistics on lookup.
    #[serde(skip)]
    pub generate_stat: Option<bool>,
    /// Capabilities to grant on create, e.g. `users=read;buckets=*`.
    #[serde(skip)]
    pub user_caps: Option<String>,
}

/// A subuser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubuserSpec {
    /// Subuser name, `uid:name` in responses.
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Access level. Input spelling on requests, reply spelling in responses.
    #[serde(rename = "permissions", skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,

    /// Generate a swift secret.
    #[serde(skip)]
    pub generate_secret: Option<bool>,
    /// Generate an S3 access key.
    #[serde(skip)]
    pub generate_access_key: Option<bool>,
    /// Explicit access key.
    #[serde(skip)]
    pub access_key: Option<String>,
    /// Explicit secret key on create.
    #[serde(skip)]
    pub secret_key: Option<String>,
    /// Explicit secret on modify.
    #[serde(skip)]
    pub secret: Option<String>,
    /// Remove the subuser's keys along with it.
    #[serde(skip)]
    pub purge_keys: Option<bool>,
    /// Key type of the subuser's key.
    #[serde(skip)]
    pub key_type: Option<KeyType>,
}

/// A swift key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwiftKeySpec {
    /// Owning subuser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Swift secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
}

/// A capability grant, e.g. `users` / `read`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserCapSpec {
    /// Capability type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub cap_type: Option<String>,
    /// Permission: `read`, `write` or `*`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perm: Option<String>,
}

/// An S3 key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserKeySpec {
    /// Owning user or subuser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Access key id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    /// Secret key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,

    /// User the key belongs to.
    #[serde(skip)]
    pub uid: Option<String>,
    /// Subuser the key belongs to, for swift keys.
    #[serde(skip)]
    pub subuser: Option<String>,
    /// Key type. Absent behaves as `s3`.
    #[serde(skip)]
    pub key_type: Option<KeyType>,
    /// Let the gateway generate the key.
    #[serde(skip)]
    pub generate_key: Option<bool>,
}

/// User usage statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStat {
    /// Total bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Total bytes rounded to the allocation unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_rounded: Option<u64>,
    /// Object count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_objects: Option<u64>,
}

// ---------------------------------------------------------------------------
// Operation arguments
// ---------------------------------------------------------------------------

impl User {
    fn key_list(&self) -> &[UserKeySpec] {
        self.keys.as_deref().unwrap_or_default()
    }

    fn push_key_pairs(&self, args: &mut QueryArgs) {
        for key in self.key_list() {
            args.push("access-key", key.access_key.as_deref())
                .push("secret-key", key.secret_key.as_deref());
        }
    }

    /// Arguments for `GET /user`. Needs a user id or at least one access key.
    pub fn get_args(&self) -> Result<QueryArgs, ValidationError> {
        let keys = self.key_list();
        if self.id.as_deref().is_none_or(str::is_empty) && keys.is_empty() {
            return Err(ValidationError::MissingField("user id or access key"));
        }
        for key in keys {
            require("access key", key.access_key.as_deref())?;
        }

        let mut args = QueryArgs::admin().with("uid", self.id.as_deref());
        for key in keys {
            args.push("access-key", key.access_key.as_deref());
        }
        Ok(args.with("stats", self.generate_stat))
    }

    /// Arguments for `PUT /user`.
    pub fn create_args(&self) -> Result<QueryArgs, ValidationError> {
        let uid = require("user id", self.id.as_deref())?;
        let display_name = require("display name", self.display_name.as_deref())?;

        let mut args = QueryArgs::admin()
            .with("uid", uid)
            .with("display-name", display_name)
            .with("default-placement", self.default_placement.as_deref())
            .with("email", self.email.as_deref())
            .with("key-type", self.key_type.map(KeyType::as_str));
        self.push_key_pairs(&mut args);
        Ok(args
            .with("user-caps", self.user_caps.as_deref())
            .with("tenant", self.tenant.as_deref())
            .with("generate-key", self.generate_key)
            .with("max-buckets", self.max_buckets)
            .with("suspended", self.suspended)
            .with("op-mask", self.op_mask.as_deref())
            .with("account-id", self.account_id.as_deref())
            .with("account-root", self.account_root))
    }

    /// Arguments for `DELETE /user`.
    pub fn remove_args(&self) -> Result<QueryArgs, ValidationError> {
        let uid = require("user id", self.id.as_deref())?;
        Ok(QueryArgs::admin()
            .with("uid", uid)
            .with("purge-data", self.purge_data))
    }

    /// Arguments for `POST /user`.
    pub fn modify_args(&self) -> Result<QueryArgs, ValidationError> {
        let uid = require("user id", self.id.as_deref())?;

        let mut args = QueryArgs::admin()
            .with("uid", uid)
            .with("display-name", self.display_name.as_deref())
            .with("default-placement", self.default_placement.as_deref())
            .with("email", self.email.as_deref())
            .with("generate-key", self.generate_key);
        self.push_key_pairs(&mut args);
        Ok(args
            .with("key-type", self.key_type.map(KeyType::as_str))
            .with("max-buckets", self.max_buckets)
            .with("suspended", self.suspended)
            .with("op-mask", self.op_mask.as_deref())
            .with("account-id", self.account_id.as_deref())
            .with("account-root", self.account_root))
    }
}

impl SubuserSpec {
    fn validated_access(&self) -> Result<(), ValidationError> {
        let access = self.access.as_deref().unwrap_or_default();
        SubuserAccess::from_input(access)
            .map(|_| ())
            .ok_or_else(|| ValidationError::InvalidSubuserAccess(access.to_owned()))
    }

    /// Arguments for `PUT /user` creating this subuser under `uid`.
    pub fn create_args(&self, uid: &str) -> Result<QueryArgs, ValidationError> {
        let uid = require("user id", Some(uid))?;
        let name = require("subuser name", self.name.as_deref())?;
        self.validated_access()?;

        Ok(QueryArgs::admin()
            .with("uid", uid)
            .with("subuser", name)
            .with("access", self.access.as_deref())
            .with("access-key", self.access_key.as_deref())
            .with("secret-key", self.secret_key.as_deref())
            .with("generate-secret", self.generate_secret)
            .with("gen-access-key", self.generate_access_key)
            .with("key-type", self.key_type.map(KeyType::as_str)))
    }

    /// Arguments for `POST /user` modifying this subuser under `uid`.
    pub fn modify_args(&self, uid: &str) -> Result<QueryArgs, ValidationError> {
        let uid = require("user id", Some(uid))?;
        let name = require("subuser name", self.name.as_deref())?;
        self.validated_access()?;

        Ok(QueryArgs::admin()
            .with("uid", uid)
            .with("subuser", name)
            .with("access", self.access.as_deref())
            .with("secret", self.secret.as_deref())
            .with("generate-secret", self.generate_secret)
            .with("key-type", self.key_type.map(KeyType::as_str)))
    }

    /// Arguments for `DELETE /user` removing this subuser from `uid`.
    pub fn remove_args(&self, uid: &str) -> Result<QueryArgs, ValidationError> {
        let uid = require("user id", Some(uid))?;
        let name = require("subuser name", self.name.as_deref())?;

        Ok(QueryArgs::admin()
            .with("uid", uid)
            .with("subuser", name)
            .with("purge-keys", self.purge_keys))
    }
}

impl UserKeySpec {
    fn validate_owner(&self, need_access_key: bool) -> Result<(), ValidationError> {
        match self.key_type.unwrap_or_default() {
            KeyType::Swift => {
                require("subuser id", self.subuser.as_deref())?;
            }
            KeyType::S3 => {
                require("user id", self.uid.as_deref())?;
                if need_access_key {
                    require("access key", self.access_key.as_deref())?;
                }
            }
        }
        Ok(())
    }

    /// Arguments for `PUT /user?key`.
    pub fn create_args(&self) -> Result<QueryArgs, ValidationError> {
        self.validate_owner(false)?;
        Ok(QueryArgs::admin()
            .with("uid", self.uid.as_deref())
            .with("subuser", self.subuser.as_deref())
            .with("access-key", self.access_key.as_deref())
            .with("secret-key", self.secret_key.as_deref())
            .with("key-type", self.key_type.map(KeyType::as_str))
            .with("generate-key", self.generate_key))
    }

    /// Arguments for `DELETE /user?key`.
    pub fn remove_args(&self) -> Result<QueryArgs, ValidationError> {
        self.validate_owner(true)?;
        Ok(QueryArgs::admin()
            .with("uid", self.uid.as_deref())
            .with("subuser", self.subuser.as_deref())
            .with("access-key", self.access_key.as_deref())
            .with("key-type", self.key_type.map(KeyType::as_str)))
    }
}

/// Arguments for `PUT`/`DELETE /user?caps`.
pub fn user_caps_args(uid: &str, user_caps: &str) -> Result<QueryArgs, ValidationError> {
    let uid = require("user id", Some(uid))?;
    let user_caps = require("user cap", Some(user_caps))?;
    Ok(QueryArgs::admin()
        .with("uid", uid)
        .with("user-caps", user_caps))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(args: &QueryArgs) -> Vec<(&'static str, &str)> {
        args.present().collect()
    }

    #[test]
    fn test_should_build_get_user_args_by_uid_and_keys() {
        let user = User {
            id: Some("alice".to_owned()),
            keys: Some(vec![UserKeySpec {
                access_key: Some("AK1".to_owned()),
                ..Default::default()
            }]),
            generate_stat: Some(true),
            ..Default::default()
        };
        assert_eq!(
            present(&user.get_args().unwrap()),
            vec![
                ("format", "json"),
                ("uid", "alice"),
                ("access-key", "AK1"),
                ("stats", "true")
            ]
        );
    }

    #[test]
    fn test_should_reject_get_user_without_uid_or_key() {
        assert_eq!(
            User::default().get_args(),
            Err(ValidationError::MissingField("user id or access key"))
        );

        let user = User {
            keys: Some(vec![UserKeySpec::default()]),
            ..Default::default()
        };
        assert_eq!(
            user.get_args(),
            Err(ValidationError::MissingField("access key"))
        );
    }

    #[test]
    fn test_should_build_create_user_args_in_order() {
        let user = User {
            id: Some("alice".to_owned()),
            display_name: Some("Alice".to_owned()),
            email: Some("alice@example.com".to_owned()),
            key_type: Some(KeyType::S3),
            keys: Some(vec![UserKeySpec {
                access_key: Some("AK".to_owned()),
                secret_key: Some("SK".to_owned()),
                ..Default::default()
            }]),
            user_caps: Some("users=read".to_owned()),
            max_buckets: Some(10),
            suspended: Some(0),
            ..Default::default()
        };
        assert_eq!(
            present(&user.create_args().unwrap()),
            vec![
                ("format", "json"),
                ("uid", "alice"),
                ("display-name", "Alice"),
                ("email", "alice@example.com"),
                ("key-type", "s3"),
                ("access-key", "AK"),
                ("secret-key", "SK"),
                ("user-caps", "users=read"),
                ("max-buckets", "10"),
                ("suspended", "0"),
            ]
        );
    }

    #[test]
    fn test_should_require_uid_and_display_name_on_create() {
        let user = User {
            id: Some("alice".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            user.create_args(),
            Err(ValidationError::MissingField("display name"))
        );
        assert_eq!(
            User::default().create_args(),
            Err(ValidationError::MissingField("user id"))
        );
    }

    #[test]
    fn test_should_build_modify_and_remove_user_args() {
        let user = User {
            id: Some("alice".to_owned()),
            email: Some("new@example.com".to_owned()),
            generate_key: Some(false),
            purge_data: Some(true),
            ..Default::default()
        };
        assert_eq!(
            present(&user.modify_args().unwrap()),
            vec![
                ("format", "json"),
                ("uid", "alice"),
                ("email", "new@example.com"),
                ("generate-key", "false"),
            ]
        );
        assert_eq!(
            present(&user.remove_args().unwrap()),
            vec![("format", "json"), ("uid", "alice"), ("purge-data", "true")]
        );
    }

    #[test]
    fn test_should_validate_subuser_access() {
        let mut subuser = SubuserSpec {
            name: Some("swift".to_owned()),
            access: Some("full".to_owned()),
            ..Default::default()
        };
        assert!(subuser.create_args("alice").is_ok());

        subuser.access = Some("full-control".to_owned());
        assert_eq!(
            subuser.create_args("alice"),
            Err(ValidationError::InvalidSubuserAccess("full-control".to_owned()))
        );
        assert!(subuser.modify_args("alice").is_err());
        assert!(subuser.remove_args("alice").is_ok());

        subuser.access = None;
        assert!(subuser.modify_args("alice").is_ok());
    }

    #[test]
    fn test_should_build_subuser_args() {
        let subuser = SubuserSpec {
            name: Some("alice:swift".to_owned()),
            access: Some("readwrite".to_owned()),
            generate_secret: Some(true),
            key_type: Some(KeyType::Swift),
            purge_keys: Some(true),
            ..Default::default()
        };
        assert_eq!(
            present(&subuser.create_args("alice").unwrap()),
            vec![
                ("format", "json"),
                ("uid", "alice"),
                ("subuser", "alice:swift"),
                ("access", "readwrite"),
                ("generate-secret", "true"),
                ("key-type", "swift"),
            ]
        );
        assert_eq!(
            present(&subuser.remove_args("alice").unwrap()),
            vec![
                ("format", "json"),
                ("uid", "alice"),
                ("subuser", "alice:swift"),
                ("purge-keys", "true"),
            ]
        );
        assert_eq!(
            subuser.create_args(""),
            Err(ValidationError::MissingField("user id"))
        );
    }

    #[test]
    fn test_should_validate_key_owner_by_type() {
        let swift = UserKeySpec {
            key_type: Some(KeyType::Swift),
            ..Default::default()
        };
        assert_eq!(
            swift.create_args(),
            Err(ValidationError::MissingField("subuser id"))
        );

        let s3 = UserKeySpec {
            uid: Some("alice".to_owned()),
            ..Default::default()
        };
        assert!(s3.create_args().is_ok());
        assert_eq!(
            s3.remove_args(),
            Err(ValidationError::MissingField("access key"))
        );
    }

    #[test]
    fn test_should_build_key_args() {
        let key = UserKeySpec {
            uid: Some("alice".to_owned()),
            access_key: Some("AK".to_owned()),
            key_type: Some(KeyType::S3),
            generate_key: Some(false),
            secret_key: Some("SK".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            present(&key.create_args().unwrap()),
            vec![
                ("format", "json"),
                ("uid", "alice"),
                ("access-key", "AK"),
                ("secret-key", "SK"),
                ("key-type", "s3"),
                ("generate-key", "false"),
            ]
        );
        assert_eq!(
            present(&key.remove_args().unwrap()),
            vec![
                ("format", "json"),
                ("uid", "alice"),
                ("access-key", "AK"),
                ("key-type", "s3"),
            ]
        );
    }

    #[test]
    fn test_should_parse_key_type() {
        assert_eq!("s3".parse::<KeyType>(), Ok(KeyType::S3));
        assert_eq!("swift".parse::<KeyType>(), Ok(KeyType::Swift));
        assert_eq!(
            "ldap".parse::<KeyType>(),
            Err(ValidationError::UnsupportedKeyType("ldap".to_owned()))
        );
    }

    #[test]
    fn test_should_map_subuser_access_spellings() {
        assert_eq!(SubuserAccess::from_input("readwrite"), Some(SubuserAccess::ReadWrite));
        assert_eq!(SubuserAccess::from_input(""), Some(SubuserAccess::None));
        assert_eq!(SubuserAccess::from_input("read-write"), None);
        assert_eq!(SubuserAccess::from_reply("full-control"), Some(SubuserAccess::Full));
        assert_eq!(SubuserAccess::from_reply("<none>"), Some(SubuserAccess::None));
        assert_eq!(SubuserAccess::Full.as_reply(), "full-control");
    }

    #[test]
    fn test_should_build_user_caps_args() {
        assert_eq!(
            present(&user_caps_args("alice", "usage=read").unwrap()),
            vec![("format", "json"), ("uid", "alice"), ("user-caps", "usage=read")]
        );
        assert_eq!(
            user_caps_args("alice", ""),
            Err(ValidationError::MissingField("user cap"))
        );
    }

    #[test]
    fn test_should_decode_gateway_user() {
        let body = r#"{
            "user_id": "alice",
            "display_name": "Alice",
            "email": "",
            "suspended": 0,
            "max_buckets": 1000,
            "subusers": [{"id": "alice:swift", "permissions": "full-control"}],
            "keys": [{"user": "alice", "access_key": "AK", "secret_key": "SK"}],
            "swift_keys": [{"user": "alice:swift", "secret_key": "SW"}],
            "caps": [{"type": "users", "perm": "*"}],
            "op_mask": "read, write, delete",
            "default_placement": "",
            "default_storage_class": "",
            "placement_tags": [],
            "bucket_quota": {"enabled": false, "check_on_raw": false, "max_size": -1, "max_size_kb": 0, "max_objects": -1},
            "user_quota": {"enabled": false, "check_on_raw": false, "max_size": -1, "max_size_kb": 0, "max_objects": -1},
            "temp_url_keys": [],
            "type": "rgw",
            "mfa_ids": [],
            "account_id": "",
            "account_root": false
        }"#;
        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.id.as_deref(), Some("alice"));
        assert_eq!(user.max_buckets, Some(1000));
        assert_eq!(user.user_type.as_deref(), Some("rgw"));
        assert_eq!(user.keys.as_ref().unwrap()[0].access_key.as_deref(), Some("AK"));
        assert_eq!(
            user.subusers.as_ref().unwrap()[0].access.as_deref(),
            Some("full-control")
        );
        assert_eq!(user.caps.as_ref().unwrap()[0].cap_type.as_deref(), Some("users"));
        assert_eq!(user.bucket_quota.as_ref().unwrap().max_objects, Some(-1));
        assert_eq!(user.generate_key, None);
    }
}
