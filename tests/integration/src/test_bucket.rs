//! Bucket integration tests.

#[cfg(test)]
mod tests {
    use rgw_admin_model::{Bucket, CheckBucketIndexRequest, ErrorReason};

    use crate::{admin_client, cleanup_user, create_test_user, test_user_id};

    #[tokio::test]
    #[ignore = "requires running radosgw"]
    async fn test_should_list_buckets() {
        let client = admin_client();

        let names = client.list_buckets().await.unwrap();
        let buckets = client.list_buckets_with_stat().await.unwrap();
        assert_eq!(names.len(), buckets.len());
    }

    #[tokio::test]
    #[ignore = "requires running radosgw"]
    async fn test_should_list_buckets_of_new_user_as_empty() {
        let client = admin_client();
        let uid = create_test_user(&client, "nobuckets").await.id.unwrap();

        assert!(client.list_users_buckets(&uid).await.unwrap().is_empty());
        assert!(client.list_users_buckets_with_stat(&uid).await.unwrap().is_empty());

        cleanup_user(&client, &uid).await;
    }

    #[tokio::test]
    #[ignore = "requires running radosgw"]
    async fn test_should_return_no_such_bucket() {
        let client = admin_client();
        let missing = Bucket {
            name: Some(test_user_id("nobucket")),
            ..Default::default()
        };

        let err = client.get_bucket_info(&missing).await.unwrap_err();
        assert!(err.is_reason(ErrorReason::NO_SUCH_BUCKET), "got {err}");

        let err = client
            .check_bucket_index(&CheckBucketIndexRequest {
                bucket: missing.name.clone(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(err.status().is_some(), "got {err}");
    }
}
