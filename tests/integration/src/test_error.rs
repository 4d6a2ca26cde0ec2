//! Error mapping integration tests.

#[cfg(test)]
mod tests {
    use rgw_admin_client::{AdminConfig, AdminError, RgwAdminClient};
    use rgw_admin_model::{ErrorReason, User};

    use crate::{admin_client, cleanup_user, create_test_user, test_user_id};

    #[tokio::test]
    #[ignore = "requires running radosgw"]
    async fn test_should_return_no_such_user() {
        let client = admin_client();

        let err = client
            .get_user(&User {
                id: Some(test_user_id("ghost")),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(err.is_reason(ErrorReason::NO_SUCH_USER), "got {err}");
    }

    #[tokio::test]
    #[ignore = "requires running radosgw"]
    async fn test_should_return_user_already_exists() {
        let client = admin_client();
        let created = create_test_user(&client, "dup").await;

        let err = client.create_user(&created).await.unwrap_err();
        let status = err.status().expect("expected a status error");
        assert!(
            status.is_reason(ErrorReason::USER_ALREADY_EXISTS)
                || status.is_reason(ErrorReason::KEY_EXISTS),
            "got {status}"
        );

        cleanup_user(&client, created.id.as_deref().unwrap()).await;
    }

    #[tokio::test]
    #[ignore = "requires running radosgw"]
    async fn test_should_reject_bad_signature() {
        let mut config = AdminConfig::from_env();
        if config.endpoint.is_empty() {
            config.endpoint = "http://127.0.0.1:7480".to_owned();
        }
        config.secret_key = "definitely-not-the-secret".to_owned();
        let client = RgwAdminClient::from_config(&config).unwrap();

        let err = client.get_info().await.unwrap_err();
        match err {
            AdminError::Status(status) => assert!(
                status.is_reason(ErrorReason::SIGNATURE_DOES_NOT_MATCH)
                    || status.is_reason(ErrorReason::INVALID_ACCESS_KEY)
                    || status.is_reason(ErrorReason::ACCESS_DENIED),
                "got {status}"
            ),
            other => panic!("unexpected error: {other}"),
        }
    }
}
