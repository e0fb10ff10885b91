// Context provider registration endpoints

use tracing::debug;

use crate::client::{OrionClient, Scope};
use crate::error::Error;
use crate::models::Registration;

impl OrionClient {
    /// List every registration visible in the scope.
    ///
    /// `GET /v2/registrations`
    pub async fn list_registrations(&self, scope: &Scope) -> Result<Vec<Registration>, Error> {
        debug!("listing registrations");
        self.get("v2/registrations", scope).await
    }

    /// Fetch a single registration by identifier.
    ///
    /// `GET /v2/registrations/{id}`
    pub async fn get_registration(&self, id: &str, scope: &Scope) -> Result<Registration, Error> {
        debug!(id, "fetching registration");
        self.get(&format!("v2/registrations/{id}"), scope).await
    }

    /// Create a registration and return the broker-assigned identifier.
    ///
    /// `POST /v2/registrations` -- the new id arrives in the `Location`
    /// response header, not the body.
    pub async fn create_registration(
        &self,
        registration: &Registration,
        scope: &Scope,
    ) -> Result<String, Error> {
        debug!("creating registration");
        self.post_created("v2/registrations", registration, scope)
            .await
    }

    /// Delete a registration by identifier.
    ///
    /// `DELETE /v2/registrations/{id}`
    pub async fn delete_registration(&self, id: &str, scope: &Scope) -> Result<(), Error> {
        debug!(id, "deleting registration");
        self.delete(&format!("v2/registrations/{id}"), scope).await
    }
}
