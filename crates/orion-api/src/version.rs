// Broker version endpoint
//
// Version metadata is broker-level, not tenant-scoped, so no
// Fiware-Service headers are sent.

use tracing::debug;

use crate::client::{OrionClient, Scope};
use crate::error::Error;
use crate::models::VersionInfo;

impl OrionClient {
    /// Get broker version and build metadata.
    ///
    /// `GET /version`
    pub async fn get_version(&self) -> Result<VersionInfo, Error> {
        debug!("fetching broker version");
        self.get("version", &Scope::default()).await
    }
}
