use http::Method;
use rgw_admin_model::user::user_caps_args;
use rgw_admin_model::{QueryArgs, SubuserSpec, User, UserCapSpec, UserKeySpec};

use crate::client::RgwAdminClient;
use crate::error::AdminResult;

impl RgwAdminClient {
    /// Look up a user by uid or by access key.
    pub async fn get_user(&self, user: &User) -> AdminResult<User> {
        let args = user.get_args()?;
        self.call_json(Method::GET, "/user", &args).await
    }

    /// List every user id.
    pub async fn get_users(&self) -> AdminResult<Vec<String>> {
        self.call_json(Method::GET, "/metadata/user", &QueryArgs::admin())
            .await
    }

    /// Create a user.
    pub async fn create_user(&self, user: &User) -> AdminResult<User> {
        let args = user.create_args()?;
        self.call_json(Method::PUT, "/user", &args).await
    }

    /// Remove a user, optionally purging its data.
    pub async fn remove_user(&self, user: &User) -> AdminResult<()> {
        let args = user.remove_args()?;
        self.call_unit(Method::DELETE, "/user", &args).await
    }

    /// Modify a user.
    pub async fn modify_user(&self, user: &User) -> AdminResult<User> {
        let args = user.modify_args()?;
        self.call_json(Method::POST, "/user", &args).await
    }

    /// Create a subuser of `uid`.
    pub async fn create_subuser(&self, uid: &str, subuser: &SubuserSpec) -> AdminResult<()> {
        let args = subuser.create_args(uid)?;
        self.call_unit(Method::PUT, "/user", &args).await
    }

    /// Modify a subuser of `uid`.
    pub async fn modify_subuser(&self, uid: &str, subuser: &SubuserSpec) -> AdminResult<()> {
        let args = subuser.modify_args(uid)?;
        self.call_unit(Method::POST, "/user", &args).await
    }

    /// Remove a subuser of `uid`.
    pub async fn remove_subuser(&self, uid: &str, subuser: &SubuserSpec) -> AdminResult<()> {
        let args = subuser.remove_args(uid)?;
        self.call_unit(Method::DELETE, "/user", &args).await
    }

    /// Create or generate a key. Returns every key of the owner.
    pub async fn create_key(&self, key: &UserKeySpec) -> AdminResult<Vec<UserKeySpec>> {
        let args = key.create_args()?;
        self.call_json(Method::PUT, "/user?key", &args).await
    }

    /// Remove a key.
    pub async fn remove_key(&self, key: &UserKeySpec) -> AdminResult<()> {
        let args = key.remove_args()?;
        self.call_unit(Method::DELETE, "/user?key", &args).await
    }

    /// Grant capabilities, e.g. `usage=read,write;users=read`. Returns the
    /// resulting capability set.
    pub async fn add_user_cap(&self, uid: &str, user_caps: &str) -> AdminResult<Vec<UserCapSpec>> {
        let args = user_caps_args(uid, user_caps)?;
        self.call_json(Method::PUT, "/user?caps", &args).await
    }

    /// Revoke capabilities. Returns the resulting capability set.
    pub async fn remove_user_cap(
        &self,
        uid: &str,
        user_caps: &str,
    ) -> AdminResult<Vec<UserCapSpec>> {
        let args = user_caps_args(uid, user_caps)?;
        self.call_json(Method::DELETE, "/user?caps", &args).await
    }
}
