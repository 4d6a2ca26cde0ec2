//! User, subuser, key and capability integration tests.

#[cfg(test)]
mod tests {
    use rgw_admin_model::{KeyType, SubuserSpec, User, UserKeySpec};

    use crate::{admin_client, cleanup_user, create_test_user};

    #[tokio::test]
    #[ignore = "requires running radosgw"]
    async fn test_should_create_get_and_remove_user() {
        let client = admin_client();
        let created = create_test_user(&client, "crud").await;
        let uid = created.id.clone().unwrap();

        let fetched = client
            .get_user(&User {
                id: Some(uid.clone()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(fetched.id.as_deref(), Some(uid.as_str()));
        assert_eq!(fetched.display_name, created.display_name);

        let users = client.get_users().await.unwrap();
        assert!(users.contains(&uid));

        cleanup_user(&client, &uid).await;
        assert!(
            client
                .get_user(&User {
                    id: Some(uid),
                    ..Default::default()
                })
                .await
                .is_err()
        );
    }

    #[tokio::test]
    #[ignore = "requires running radosgw"]
    async fn test_should_modify_user() {
        let client = admin_client();
        let uid = create_test_user(&client, "modify").await.id.unwrap();

        let modified = client
            .modify_user(&User {
                id: Some(uid.clone()),
                max_buckets: Some(7),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(modified.max_buckets, Some(7));

        cleanup_user(&client, &uid).await;
    }

    #[tokio::test]
    #[ignore = "requires running radosgw"]
    async fn test_should_look_up_user_by_access_key() {
        let client = admin_client();
        let created = create_test_user(&client, "bykey").await;
        let uid = created.id.clone().unwrap();
        let access_key = created.keys.unwrap()[0].access_key.clone();

        let fetched = client
            .get_user(&User {
                keys: Some(vec![UserKeySpec {
                    access_key,
                    ..Default::default()
                }]),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(fetched.id.as_deref(), Some(uid.as_str()));

        cleanup_user(&client, &uid).await;
    }

    #[tokio::test]
    #[ignore = "requires running radosgw"]
    async fn test_should_manage_subusers_and_keys() {
        let client = admin_client();
        let uid = create_test_user(&client, "subuser").await.id.unwrap();

        let subuser = SubuserSpec {
            name: Some("swift".to_owned()),
            access: Some("read".to_owned()),
            key_type: Some(KeyType::Swift),
            generate_secret: Some(true),
            ..Default::default()
        };
        client.create_subuser(&uid, &subuser).await.unwrap();

        let keys = client
            .create_key(&UserKeySpec {
                uid: Some(uid.clone()),
                generate_key: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(keys.len() >= 2);

        let extra = keys.last().unwrap().access_key.clone();
        client
            .remove_key(&UserKeySpec {
                uid: Some(uid.clone()),
                access_key: extra,
                ..Default::default()
            })
            .await
            .unwrap();

        client
            .remove_subuser(
                &uid,
                &SubuserSpec {
                    name: Some("swift".to_owned()),
                    purge_keys: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        cleanup_user(&client, &uid).await;
    }

    #[tokio::test]
    #[ignore = "requires running radosgw"]
    async fn test_should_add_and_remove_caps() {
        let client = admin_client();
        let uid = create_test_user(&client, "caps").await.id.unwrap();

        let caps = client.add_user_cap(&uid, "usage=read").await.unwrap();
        assert!(caps.iter().any(|c| c.cap_type.as_deref() == Some("usage")));

        let caps = client.remove_user_cap(&uid, "usage=read").await.unwrap();
        assert!(caps.iter().all(|c| c.cap_type.as_deref() != Some("usage")));

        cleanup_user(&client, &uid).await;
    }
}
