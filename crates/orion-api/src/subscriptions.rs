// Subscription endpoints
//
// All calls forward the tenant scope headers; the broker partitions
// subscriptions per service / service path.

use tracing::debug;

use crate::client::{OrionClient, Scope};
use crate::error::Error;
use crate::models::Subscription;

impl OrionClient {
    /// List every subscription visible in the scope.
    ///
    /// `GET /v2/subscriptions`
    pub async fn list_subscriptions(&self, scope: &Scope) -> Result<Vec<Subscription>, Error> {
        debug!("listing subscriptions");
        self.get("v2/subscriptions", scope).await
    }

    /// Fetch a single subscription by identifier.
    ///
    /// `GET /v2/subscriptions/{id}`
    pub async fn get_subscription(&self, id: &str, scope: &Scope) -> Result<Subscription, Error> {
        debug!(id, "fetching subscription");
        self.get(&format!("v2/subscriptions/{id}"), scope).await
    }

    /// Create a subscription and return the broker-assigned identifier.
    ///
    /// `POST /v2/subscriptions` -- the new id arrives in the `Location`
    /// response header, not the body.
    pub async fn create_subscription(
        &self,
        subscription: &Subscription,
        scope: &Scope,
    ) -> Result<String, Error> {
        debug!("creating subscription");
        self.post_created("v2/subscriptions", subscription, scope)
            .await
    }

    /// Delete a subscription by identifier.
    ///
    /// `DELETE /v2/subscriptions/{id}`
    pub async fn delete_subscription(&self, id: &str, scope: &Scope) -> Result<(), Error> {
        debug!(id, "deleting subscription");
        self.delete(&format!("v2/subscriptions/{id}"), scope).await
    }
}
