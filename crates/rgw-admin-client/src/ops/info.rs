use http::Method;
use rgw_admin_model::{Info, QueryArgs};

use crate::client::RgwAdminClient;
use crate::error::AdminResult;

impl RgwAdminClient {
    /// Cluster info, including the storage backend fsid.
    pub async fn get_info(&self) -> AdminResult<Info> {
        self.call_json(Method::GET, "/info", &QueryArgs::admin())
            .await
    }
}
