use http::Method;
use rgw_admin_model::bucket::{bucket_listing_args, user_bucket_listing_args};
use rgw_admin_model::{
    Bucket, BucketLinkInput, CheckBucketIndexRequest, CheckBucketIndexResponse, Policy,
};

use crate::client::RgwAdminClient;
use crate::error::AdminResult;

impl RgwAdminClient {
    /// Names of every bucket.
    pub async fn list_buckets(&self) -> AdminResult<Vec<String>> {
        self.call_json(Method::GET, "/bucket", &bucket_listing_args(None, None))
            .await
    }

    /// Every bucket, with statistics.
    pub async fn list_buckets_with_stat(&self) -> AdminResult<Vec<Bucket>> {
        self.call_json(Method::GET, "/bucket", &bucket_listing_args(None, Some(true)))
            .await
    }

    /// Names of the buckets owned by `uid`.
    pub async fn list_users_buckets(&self, uid: &str) -> AdminResult<Vec<String>> {
        let args = user_bucket_listing_args(uid, false)?;
        self.call_json(Method::GET, "/bucket", &args).await
    }

    /// Buckets owned by `uid`, with statistics.
    pub async fn list_users_buckets_with_stat(&self, uid: &str) -> AdminResult<Vec<Bucket>> {
        let args = user_bucket_listing_args(uid, true)?;
        self.call_json(Method::GET, "/bucket", &args).await
    }

    /// Metadata of one bucket.
    pub async fn get_bucket_info(&self, bucket: &Bucket) -> AdminResult<Bucket> {
        let args = bucket.info_args()?;
        self.call_json(Method::GET, "/bucket", &args).await
    }

    /// Access control policy of one bucket.
    pub async fn get_bucket_policy(&self, bucket: &Bucket) -> AdminResult<Policy> {
        let args = bucket.policy_args()?;
        self.call_json(Method::GET, "/bucket?policy", &args).await
    }

    /// Remove a bucket, optionally purging its objects.
    pub async fn remove_bucket(&self, bucket: &Bucket) -> AdminResult<()> {
        let args = bucket.remove_args()?;
        self.call_unit(Method::DELETE, "/bucket", &args).await
    }

    /// Link a bucket to a user, unlinking it from its previous owner.
    pub async fn link_bucket(&self, link: &BucketLinkInput) -> AdminResult<()> {
        let args = link.link_args()?;
        self.call_unit(Method::PUT, "/bucket", &args).await
    }

    /// Unlink a bucket from a user.
    pub async fn unlink_bucket(&self, link: &BucketLinkInput) -> AdminResult<()> {
        let args = link.unlink_args()?;
        self.call_unit(Method::POST, "/bucket", &args).await
    }

    /// Check, and optionally fix, a bucket index.
    pub async fn check_bucket_index(
        &self,
        request: &CheckBucketIndexRequest,
    ) -> AdminResult<CheckBucketIndexResponse> {
        let args = request.args()?;
        self.call_json(Method::GET, "/bucket?index", &args).await
    }
}
