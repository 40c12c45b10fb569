use common::ClientResult;

use crate::http::AuthClient;
use crate::models::Banner;

/// Home screen banners
#[derive(Clone)]
pub struct BannerApi {
    client: AuthClient,
}

impl BannerApi {
    pub fn new(client: AuthClient) -> Self {
        Self { client }
    }

    /// Banners that have not expired yet
    pub async fn active(&self) -> ClientResult<Vec<Banner>> {
        Ok(self.client.get("banner/active").await?.data)
    }
}
