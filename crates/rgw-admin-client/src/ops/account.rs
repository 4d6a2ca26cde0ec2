use http::Method;
use rgw_admin_model::Account;
use rgw_admin_model::account::account_id_args;

use crate::client::RgwAdminClient;
use crate::error::AdminResult;

impl RgwAdminClient {
    /// Create an account. The gateway generates an id when none is given.
    pub async fn create_account(&self, account: &Account) -> AdminResult<Account> {
        self.call_json(Method::POST, "/account", &account.create_args())
            .await
    }

    /// Look up an account.
    pub async fn get_account(&self, id: &str) -> AdminResult<Account> {
        let args = account_id_args(id)?;
        self.call_json(Method::GET, "/account", &args).await
    }

    /// Delete an account.
    pub async fn delete_account(&self, id: &str) -> AdminResult<()> {
        let args = account_id_args(id)?;
        self.call_unit(Method::DELETE, "/account", &args).await
    }

    /// Modify an account.
    pub async fn modify_account(&self, account: &Account) -> AdminResult<Account> {
        let args = account.modify_args()?;
        self.call_json(Method::PUT, "/account", &args).await
    }
}
