use http::Method;
use rgw_admin_model::{Usage, UsageRequest};

use crate::client::RgwAdminClient;
use crate::error::AdminResult;

impl RgwAdminClient {
    /// Bandwidth usage report.
    pub async fn get_usage(&self, request: &UsageRequest) -> AdminResult<Usage> {
        self.call_json(Method::GET, "/usage", &request.get_args())
            .await
    }

    /// Remove usage records.
    pub async fn trim_usage(&self, request: &UsageRequest) -> AdminResult<()> {
        self.call_unit(Method::DELETE, "/usage", &request.trim_args())
            .await
    }
}
