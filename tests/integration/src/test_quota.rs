//! Quota integration tests.

#[cfg(test)]
mod tests {
    use rgw_admin_model::QuotaSpec;

    use crate::{admin_client, cleanup_user, create_test_user};

    #[tokio::test]
    #[ignore = "requires running radosgw"]
    async fn test_should_set_and_get_user_quota() {
        let client = admin_client();
        let uid = create_test_user(&client, "quota").await.id.unwrap();

        client
            .set_user_quota(&QuotaSpec {
                user_id: Some(uid.clone()),
                enabled: Some(true),
                max_objects: Some(100),
                ..Default::default()
            })
            .await
            .unwrap();

        let quota = client
            .get_user_quota(&QuotaSpec {
                user_id: Some(uid.clone()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(quota.enabled, Some(true));
        assert_eq!(quota.max_objects, Some(100));

        cleanup_user(&client, &uid).await;
    }

    #[tokio::test]
    #[ignore = "requires running radosgw"]
    async fn test_should_set_and_get_bucket_quota() {
        let client = admin_client();
        let uid = create_test_user(&client, "bquota").await.id.unwrap();

        client
            .set_bucket_quota(&QuotaSpec {
                user_id: Some(uid.clone()),
                enabled: Some(true),
                max_size: Some(1 << 20),
                ..Default::default()
            })
            .await
            .unwrap();

        let quota = client
            .get_bucket_quota(&QuotaSpec {
                user_id: Some(uid.clone()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(quota.max_size, Some(1 << 20));

        cleanup_user(&client, &uid).await;
    }
}
