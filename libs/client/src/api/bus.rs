use common::ClientResult;
use reqwest::Method;
use tracing::info;

use crate::http::AuthClient;
use crate::models::Bus;

/// Dormitory bus sign-up
#[derive(Clone)]
pub struct BusApi {
    client: AuthClient,
}

impl BusApi {
    pub fn new(client: AuthClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<Bus>> {
        Ok(self.client.get("bus").await?.data)
    }

    /// Bus the member signed up for, if any
    pub async fn my_application(&self) -> ClientResult<Option<Bus>> {
        Ok(self.client.get("bus/apply").await?.data)
    }

    pub async fn apply(&self, bus_id: i64) -> ClientResult<()> {
        info!("Applying for bus {}", bus_id);
        self.client
            .execute(
                self.client
                    .builder(Method::POST, &format!("bus/apply/{}", bus_id)),
            )
            .await
    }
}
