//! Command line definition.

use clap::{Args, Parser, Subcommand};
use rgw_admin_client::AdminConfig;

/// RADOS Gateway admin CLI.
#[derive(Parser, Debug)]
#[command(name = "rgw-admin")]
#[command(about = "RADOS Gateway admin CLI")]
#[command(version)]
pub struct Cli {
    /// Gateway endpoint, e.g. http://rgw.local:8080 (overrides RGW_ENDPOINT)
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Admin access key (overrides RGW_ACCESS_KEY)
    #[arg(long, global = true)]
    pub access_key: Option<String>,

    /// Admin secret key (overrides RGW_SECRET_KEY)
    #[arg(long, global = true)]
    pub secret_key: Option<String>,

    /// Log level (overrides LOG_LEVEL)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Apply command line overrides on top of `base`.
    pub fn apply_overrides(&self, mut base: AdminConfig) -> AdminConfig {
        if let Some(v) = &self.endpoint {
            base.endpoint.clone_from(v);
        }
        if let Some(v) = &self.access_key {
            base.access_key.clone_from(v);
        }
        if let Some(v) = &self.secret_key {
            base.secret_key.clone_from(v);
        }
        if let Some(v) = &self.log_level {
            base.log_level.clone_from(v);
        }
        base
    }
}

/// Top level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show cluster info
    Info,
    /// User operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Bucket operations
    Bucket {
        #[command(subcommand)]
        action: BucketCommands,
    },
    /// Key operations
    Key {
        #[command(subcommand)]
        action: KeyCommands,
    },
    /// Capability operations
    Caps {
        #[command(subcommand)]
        action: CapsCommands,
    },
    /// Usage operations
    Usage {
        #[command(subcommand)]
        action: UsageCommands,
    },
    /// Account operations
    Account {
        #[command(subcommand)]
        action: AccountCommands,
    },
}

/// Fields shared by user create and modify.
#[derive(Args, Debug, Default)]
pub struct UserFields {
    /// Display name
    #[arg(long)]
    pub display_name: Option<String>,
    /// Email address
    #[arg(long)]
    pub email: Option<String>,
    /// Maximum number of buckets
    #[arg(long)]
    pub max_buckets: Option<i32>,
    /// Suspend (1) or resume (0) the user
    #[arg(long)]
    pub suspended: Option<i32>,
    /// Generate a key pair
    #[arg(long)]
    pub generate_key: bool,
}

/// User commands.
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List user ids
    List,
    /// Show a user
    Get {
        /// User id
        uid: String,
        /// Include usage statistics
        #[arg(long)]
        stats: bool,
    },
    /// Create a user
    Create {
        /// User id
        uid: String,
        #[command(flatten)]
        fields: UserFields,
    },
    /// Remove a user
    Remove {
        /// User id
        uid: String,
        /// Also remove the user's buckets and objects
        #[arg(long)]
        purge_data: bool,
    },
    /// Modify a user
    Modify {
        /// User id
        uid: String,
        #[command(flatten)]
        fields: UserFields,
    },
    /// Show the user or bucket quota of a user
    QuotaGet {
        /// User id
        uid: String,
        /// Show the default bucket quota instead of the user quota
        #[arg(long)]
        bucket: bool,
    },
    /// Set the user or bucket quota of a user
    QuotaSet {
        /// User id
        uid: String,
        /// Set the default bucket quota instead of the user quota
        #[arg(long)]
        bucket: bool,
        /// Enable or disable the quota
        #[arg(long)]
        enabled: Option<bool>,
        /// Maximum size in bytes, -1 for unlimited
        #[arg(long, allow_hyphen_values = true)]
        max_size: Option<i64>,
        /// Maximum object count, -1 for unlimited
        #[arg(long, allow_hyphen_values = true)]
        max_objects: Option<i64>,
    },
}

/// Bucket commands.
#[derive(Subcommand, Debug)]
pub enum BucketCommands {
    /// List buckets
    List {
        /// Only buckets owned by this user
        #[arg(long)]
        uid: Option<String>,
        /// Show full records with statistics
        #[arg(long)]
        stats: bool,
    },
    /// Show a bucket
    Info {
        /// Bucket name
        bucket: String,
    },
    /// Show a bucket policy
    Policy {
        /// Bucket name
        bucket: String,
    },
    /// Remove a bucket
    Remove {
        /// Bucket name
        bucket: String,
        /// Remove the bucket's objects first
        #[arg(long)]
        purge_objects: bool,
    },
    /// Link a bucket to a user
    Link {
        /// Bucket name
        bucket: String,
        /// Target user id
        #[arg(long)]
        uid: String,
        /// Bucket instance id
        #[arg(long)]
        bucket_id: Option<String>,
    },
    /// Unlink a bucket from a user
    Unlink {
        /// Bucket name
        bucket: String,
        /// User id
        #[arg(long)]
        uid: String,
    },
    /// Check a bucket index
    CheckIndex {
        /// Bucket name
        bucket: String,
        /// Check multipart object accounting
        #[arg(long)]
        check_objects: bool,
        /// Repair the index
        #[arg(long)]
        fix: bool,
    },
}

/// Key commands.
#[derive(Subcommand, Debug)]
pub enum KeyCommands {
    /// Create or generate an S3 key
    Create {
        /// User id
        uid: String,
        /// Access key, generated when omitted
        #[arg(long)]
        access_key: Option<String>,
        /// Secret key, generated when omitted
        #[arg(long)]
        secret_key: Option<String>,
    },
    /// Remove an S3 key
    Remove {
        /// User id
        uid: String,
        /// Access key
        access_key: String,
    },
}

/// Capability commands.
#[derive(Subcommand, Debug)]
pub enum CapsCommands {
    /// Grant capabilities, e.g. "usage=read,write;users=read"
    Add {
        /// User id
        uid: String,
        /// Capability string
        caps: String,
    },
    /// Revoke capabilities
    Remove {
        /// User id
        uid: String,
        /// Capability string
        caps: String,
    },
}

/// Usage commands.
#[derive(Subcommand, Debug)]
pub enum UsageCommands {
    /// Show usage
    Get {
        /// Only this user
        #[arg(long)]
        uid: Option<String>,
        /// Start of the range, e.g. "2024-01-01 00:00:00"
        #[arg(long)]
        start: Option<String>,
        /// End of the range
        #[arg(long)]
        end: Option<String>,
    },
    /// Trim usage records
    Trim {
        /// Only this user
        #[arg(long)]
        uid: Option<String>,
        /// Start of the range
        #[arg(long)]
        start: Option<String>,
        /// End of the range
        #[arg(long)]
        end: Option<String>,
        /// Trim every user's records when no uid is given
        #[arg(long)]
        remove_all: bool,
    },
}

/// Account commands.
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Show an account
    Get {
        /// Account id
        id: String,
    },
    /// Create an account
    Create {
        /// Account name
        #[arg(long)]
        name: Option<String>,
        /// Account id, generated when omitted
        #[arg(long)]
        id: Option<String>,
        /// Contact email
        #[arg(long)]
        email: Option<String>,
    },
    /// Remove an account
    Remove {
        /// Account id
        id: String,
    },
}
