//! Info and usage integration tests.

#[cfg(test)]
mod tests {
    use rgw_admin_model::UsageRequest;

    use crate::admin_client;

    #[tokio::test]
    #[ignore = "requires running radosgw"]
    async fn test_should_report_storage_backend() {
        let client = admin_client();

        let info = client.get_info().await.unwrap();
        let backends = info.info_spec.unwrap().storage_backends.unwrap();
        assert!(!backends.is_empty());
        assert!(backends[0].cluster_id.as_deref().is_some_and(|id| !id.is_empty()));
    }

    #[tokio::test]
    #[ignore = "requires running radosgw"]
    async fn test_should_return_usage_summary() {
        let client = admin_client();

        let usage = client
            .get_usage(&UsageRequest {
                show_summary: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(usage.summary.is_some());
    }
}
