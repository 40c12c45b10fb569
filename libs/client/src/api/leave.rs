//! Day and overnight leave applications

use common::ClientResult;
use reqwest::Method;
use tracing::info;

use crate::http::AuthClient;
use crate::models::{NewOutSleeping, NewOutgoing, OutSleeping, Outgoing};

#[derive(Clone)]
pub struct LeaveApi {
    client: AuthClient,
}

impl LeaveApi {
    pub fn new(client: AuthClient) -> Self {
        Self { client }
    }

    pub async fn my_outgoings(&self) -> ClientResult<Vec<Outgoing>> {
        Ok(self.client.get("out-going/my").await?.data)
    }

    pub async fn my_out_sleepings(&self) -> ClientResult<Vec<OutSleeping>> {
        Ok(self.client.get("out-sleeping/my").await?.data)
    }

    pub async fn apply_outgoing(&self, request: &NewOutgoing) -> ClientResult<()> {
        self.client
            .execute(self.client.builder(Method::POST, "out-going").json(request))
            .await
    }

    pub async fn apply_out_sleeping(&self, request: &NewOutSleeping) -> ClientResult<()> {
        self.client
            .execute(self.client.builder(Method::POST, "out-sleeping").json(request))
            .await
    }

    /// Withdraw a pending day-leave application
    pub async fn cancel_outgoing(&self, id: i64) -> ClientResult<()> {
        info!("Cancelling outgoing {}", id);
        self.client
            .execute(self.client.builder(Method::DELETE, &format!("out-going/{}", id)))
            .await
    }

    /// Withdraw a pending overnight-leave application
    pub async fn cancel_out_sleeping(&self, id: i64) -> ClientResult<()> {
        info!("Cancelling out-sleeping {}", id);
        self.client
            .execute(self.client.builder(Method::DELETE, &format!("out-sleeping/{}", id)))
            .await
    }
}
