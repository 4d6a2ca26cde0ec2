//! Integration tests against a live RADOS Gateway.
//!
//! These tests require a running radosgw and an admin user with the `users`,
//! `buckets`, `usage` and `info` capabilities. They are marked `#[ignore]` so
//! they don't run during normal `cargo test`.
//!
//! Run them with:
//! ```text
//! RGW_ENDPOINT=http://127.0.0.1:7480 RGW_ACCESS_KEY=... RGW_SECRET_KEY=... \
//!     cargo test -p rgw-admin-integration -- --ignored
//! ```

use std::sync::Once;

use rgw_admin_client::{AdminConfig, RgwAdminClient};
use rgw_admin_model::User;
use tracing::warn;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Create an admin client from `RGW_ENDPOINT`, `RGW_ACCESS_KEY` and
/// `RGW_SECRET_KEY`.
#[must_use]
pub fn admin_client() -> RgwAdminClient {
    init_tracing();

    let mut config = AdminConfig::from_env();
    if config.endpoint.is_empty() {
        config.endpoint = "http://127.0.0.1:7480".to_owned();
    }
    RgwAdminClient::from_config(&config).expect("RGW_ACCESS_KEY and RGW_SECRET_KEY must be set")
}

/// Generate a unique user id for a test.
#[must_use]
pub fn test_user_id(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// Create a user with a generated id and display name.
pub async fn create_test_user(client: &RgwAdminClient, prefix: &str) -> User {
    let uid = test_user_id(prefix);
    client
        .create_user(&User {
            id: Some(uid.clone()),
            display_name: Some(format!("Integration {uid}")),
            ..Default::default()
        })
        .await
        .expect("failed to create test user")
}

/// Remove a test user and its data, logging failures.
pub async fn cleanup_user(client: &RgwAdminClient, uid: &str) {
    let user = User {
        id: Some(uid.to_owned()),
        purge_data: Some(true),
        ..Default::default()
    };
    if let Err(e) = client.remove_user(&user).await {
        warn!(uid, error = %e, "Failed to remove test user");
    }
}

mod test_bucket;
mod test_error;
mod test_info;
mod test_quota;
mod test_user;
