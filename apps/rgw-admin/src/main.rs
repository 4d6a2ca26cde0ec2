//! rgw-admin - command line client for the RADOS Gateway admin API.
//!
//! # Usage
//!
//! ```text
//! RGW_ENDPOINT=http://rgw.local:8080 RGW_ACCESS_KEY=... RGW_SECRET_KEY=... rgw-admin user get alice
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RGW_ENDPOINT` | *(unset)* | Gateway base URL |
//! | `RGW_ACCESS_KEY` | *(unset)* | Admin access key (falls back to `AWS_ACCESS_KEY_ID`) |
//! | `RGW_SECRET_KEY` | *(unset)* | Admin secret key (falls back to `AWS_SECRET_ACCESS_KEY`) |
//! | `RGW_REGION` | `default` | SigV4 region |
//! | `RGW_SERVICE` | `s3` | SigV4 service |
//! | `RGW_TIMEOUT_SECS` | `3` | Request timeout |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use rgw_admin_client::{AdminConfig, RgwAdminClient};
use rgw_admin_model::{
    Account, Bucket, BucketLinkInput, CheckBucketIndexRequest, QuotaSpec, UsageRequest, User,
    UserKeySpec,
};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{
    AccountCommands, BucketCommands, CapsCommands, Cli, Commands, KeyCommands, UsageCommands,
    UserCommands, UserFields,
};

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
/// Logs go to stderr so stdout carries only command output.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to render response")?;
    println!("{text}");
    Ok(())
}

fn user_from_fields(uid: String, fields: UserFields) -> User {
    User {
        id: Some(uid),
        display_name: fields.display_name,
        email: fields.email,
        max_buckets: fields.max_buckets,
        suspended: fields.suspended,
        generate_key: fields.generate_key.then_some(true),
        ..Default::default()
    }
}

async fn run_user(client: &RgwAdminClient, action: UserCommands) -> Result<()> {
    match action {
        UserCommands::List => print_json(&client.get_users().await?),
        UserCommands::Get { uid, stats } => {
            let user = User {
                id: Some(uid),
                generate_stat: stats.then_some(true),
                ..Default::default()
            };
            print_json(&client.get_user(&user).await?)
        }
        UserCommands::Create { uid, fields } => {
            print_json(&client.create_user(&user_from_fields(uid, fields)).await?)
        }
        UserCommands::Remove { uid, purge_data } => {
            let user = User {
                id: Some(uid.clone()),
                purge_data: purge_data.then_some(true),
                ..Default::default()
            };
            client.remove_user(&user).await?;
            info!(uid, "Removed user");
            Ok(())
        }
        UserCommands::Modify { uid, fields } => {
            print_json(&client.modify_user(&user_from_fields(uid, fields)).await?)
        }
        UserCommands::QuotaGet { uid, bucket } => {
            let quota = QuotaSpec {
                user_id: Some(uid),
                ..Default::default()
            };
            let current = if bucket {
                client.get_bucket_quota(&quota).await?
            } else {
                client.get_user_quota(&quota).await?
            };
            print_json(&current)
        }
        UserCommands::QuotaSet {
            uid,
            bucket,
            enabled,
            max_size,
            max_objects,
        } => {
            let quota = QuotaSpec {
                user_id: Some(uid),
                enabled,
                max_size,
                max_objects,
                ..Default::default()
            };
            if bucket {
                client.set_bucket_quota(&quota).await?;
            } else {
                client.set_user_quota(&quota).await?;
            }
            Ok(())
        }
    }
}

async fn run_bucket(client: &RgwAdminClient, action: BucketCommands) -> Result<()> {
    let named = |name: String| Bucket {
        name: Some(name),
        ..Default::default()
    };

    match action {
        BucketCommands::List { uid: None, stats: false } => {
            print_json(&client.list_buckets().await?)
        }
        BucketCommands::List { uid: None, stats: true } => {
            print_json(&client.list_buckets_with_stat().await?)
        }
        BucketCommands::List { uid: Some(uid), stats: false } => {
            print_json(&client.list_users_buckets(&uid).await?)
        }
        BucketCommands::List { uid: Some(uid), stats: true } => {
            print_json(&client.list_users_buckets_with_stat(&uid).await?)
        }
        BucketCommands::Info { bucket } => {
            print_json(&client.get_bucket_info(&named(bucket)).await?)
        }
        BucketCommands::Policy { bucket } => {
            print_json(&client.get_bucket_policy(&named(bucket)).await?)
        }
        BucketCommands::Remove {
            bucket,
            purge_objects,
        } => {
            let bucket = Bucket {
                purge_objects: purge_objects.then_some(true),
                ..named(bucket)
            };
            client.remove_bucket(&bucket).await?;
            Ok(())
        }
        BucketCommands::Link {
            bucket,
            uid,
            bucket_id,
        } => {
            let link = BucketLinkInput {
                bucket: Some(bucket),
                bucket_id,
                user_id: Some(uid),
                new_bucket_name: None,
            };
            client.link_bucket(&link).await?;
            Ok(())
        }
        BucketCommands::Unlink { bucket, uid } => {
            let link = BucketLinkInput {
                bucket: Some(bucket),
                user_id: Some(uid),
                ..Default::default()
            };
            client.unlink_bucket(&link).await?;
            Ok(())
        }
        BucketCommands::CheckIndex {
            bucket,
            check_objects,
            fix,
        } => {
            let request = CheckBucketIndexRequest {
                bucket: Some(bucket),
                check_objects: Some(check_objects),
                fix: Some(fix),
            };
            print_json(&client.check_bucket_index(&request).await?)
        }
    }
}

async fn run(client: &RgwAdminClient, command: Commands) -> Result<()> {
    match command {
        Commands::Info => print_json(&client.get_info().await?),
        Commands::User { action } => run_user(client, action).await,
        Commands::Bucket { action } => run_bucket(client, action).await,
        Commands::Key { action } => match action {
            KeyCommands::Create {
                uid,
                access_key,
                secret_key,
            } => {
                let generate = access_key.is_none() && secret_key.is_none();
                let key = UserKeySpec {
                    uid: Some(uid),
                    access_key,
                    secret_key,
                    generate_key: generate.then_some(true),
                    ..Default::default()
                };
                print_json(&client.create_key(&key).await?)
            }
            KeyCommands::Remove { uid, access_key } => {
                let key = UserKeySpec {
                    uid: Some(uid),
                    access_key: Some(access_key),
                    ..Default::default()
                };
                client.remove_key(&key).await?;
                Ok(())
            }
        },
        Commands::Caps { action } => match action {
            CapsCommands::Add { uid, caps } => print_json(&client.add_user_cap(&uid, &caps).await?),
            CapsCommands::Remove { uid, caps } => {
                print_json(&client.remove_user_cap(&uid, &caps).await?)
            }
        },
        Commands::Usage { action } => match action {
            UsageCommands::Get { uid, start, end } => {
                let request = UsageRequest {
                    user_id: uid,
                    start,
                    end,
                    show_entries: Some(true),
                    show_summary: Some(true),
                    remove_all: None,
                };
                print_json(&client.get_usage(&request).await?)
            }
            UsageCommands::Trim {
                uid,
                start,
                end,
                remove_all,
            } => {
                let request = UsageRequest {
                    user_id: uid,
                    start,
                    end,
                    remove_all: remove_all.then_some(true),
                    ..Default::default()
                };
                client.trim_usage(&request).await?;
                Ok(())
            }
        },
        Commands::Account { action } => match action {
            AccountCommands::Get { id } => print_json(&client.get_account(&id).await?),
            AccountCommands::Create { name, id, email } => {
                let account = Account {
                    id,
                    name,
                    email,
                    ..Default::default()
                };
                print_json(&client.create_account(&account).await?)
            }
            AccountCommands::Remove { id } => {
                client.delete_account(&id).await?;
                Ok(())
            }
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.apply_overrides(AdminConfig::from_env());

    init_tracing(&config.log_level)?;
    debug!(?config, "Loaded configuration");

    let client = RgwAdminClient::from_config(&config).context("failed to create admin client")?;
    run(&client, cli.command).await
}
