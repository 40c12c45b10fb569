use common::ClientResult;

use crate::http::AuthClient;
use crate::models::Conference;

/// Upcoming contests and conferences
#[derive(Clone)]
pub struct ConferenceApi {
    client: AuthClient,
}

impl ConferenceApi {
    pub fn new(client: AuthClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<Conference>> {
        Ok(self.client.get("conference").await?.data)
    }
}
