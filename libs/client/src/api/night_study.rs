use common::ClientResult;
use reqwest::Method;

use crate::http::AuthClient;
use crate::models::{NightStudy, NightStudyRequest};

#[derive(Clone)]
pub struct NightStudyApi {
    client: AuthClient,
}

impl NightStudyApi {
    pub fn new(client: AuthClient) -> Self {
        Self { client }
    }

    pub async fn my_applications(&self) -> ClientResult<Vec<NightStudy>> {
        Ok(self.client.get("night-study/my").await?.data)
    }

    /// Fails with code `APPLICATION_DURATION_PASSED` outside the application window
    pub async fn apply(&self, request: &NightStudyRequest) -> ClientResult<()> {
        self.client
            .execute(self.client.builder(Method::POST, "night-study").json(request))
            .await
    }
}
