use http::Method;
use rgw_admin_model::{QuotaSpec, QuotaType};

use crate::client::RgwAdminClient;
use crate::error::AdminResult;

impl RgwAdminClient {
    /// The user quota of `quota.user_id`.
    pub async fn get_user_quota(&self, quota: &QuotaSpec) -> AdminResult<QuotaSpec> {
        let args = quota.get_args(QuotaType::User)?;
        self.call_json(Method::GET, "/user?quota", &args).await
    }

    /// Set the user quota of `quota.user_id`.
    pub async fn set_user_quota(&self, quota: &QuotaSpec) -> AdminResult<()> {
        let args = quota.set_args(QuotaType::User)?;
        self.call_unit(Method::PUT, "/user?quota", &args).await
    }

    /// The default bucket quota of `quota.user_id`.
    pub async fn get_bucket_quota(&self, quota: &QuotaSpec) -> AdminResult<QuotaSpec> {
        let args = quota.get_args(QuotaType::Bucket)?;
        self.call_json(Method::GET, "/user?quota", &args).await
    }

    /// Set the default bucket quota of `quota.user_id`.
    pub async fn set_bucket_quota(&self, quota: &QuotaSpec) -> AdminResult<()> {
        let args = quota.set_args(QuotaType::Bucket)?;
        self.call_unit(Method::PUT, "/user?quota", &args).await
    }

    /// Set the quota of the single bucket `quota.bucket`.
    pub async fn set_individual_bucket_quota(&self, quota: &QuotaSpec) -> AdminResult<()> {
        let args = quota.individual_bucket_args()?;
        self.call_unit(Method::PUT, "/bucket?quota", &args).await
    }
}
