//! Service registration against the client registry backend

use common::ClientResult;
use reqwest::Method;
use serde_json::Value;
use tracing::info;

use crate::http::AuthClient;
use crate::models::{ClientDetail, ClientSummary, RegisterClient, Stats};

#[derive(Clone)]
pub struct DauthApi {
    client: AuthClient,
}

impl DauthApi {
    pub fn new(client: AuthClient) -> Self {
        Self { client }
    }

    /// Every registered service
    pub async fn clients(&self) -> ClientResult<Vec<ClientSummary>> {
        Ok(self.client.get("client").await?.data)
    }

    /// Services owned by the logged-in member
    pub async fn my_clients(&self) -> ClientResult<Vec<ClientSummary>> {
        Ok(self.client.get("client/id").await?.data)
    }

    pub async fn client(&self, client_id: &str) -> ClientResult<ClientDetail> {
        Ok(self.client.get(&format!("client/{}", client_id)).await?.data)
    }

    pub async fn register(&self, request: &RegisterClient) -> ClientResult<()> {
        info!("Registering service: {}", request.client_name);
        self.client
            .execute(self.client.builder(Method::POST, "client/register").json(request))
            .await
    }

    pub async fn update(&self, detail: &ClientDetail) -> ClientResult<()> {
        info!("Updating service: {}", detail.client_id);
        self.client
            .execute(
                self.client
                    .builder(Method::PUT, &format!("client/{}", detail.client_id))
                    .json(detail),
            )
            .await
    }

    pub async fn delete(&self, client_id: &str) -> ClientResult<()> {
        info!("Deleting service: {}", client_id);
        self.client
            .execute(self.client.builder(Method::DELETE, &format!("client/{}", client_id)))
            .await
    }

    /// A random sample of services; the shape is backend-defined
    pub async fn random_clients(&self) -> ClientResult<Value> {
        Ok(self.client.get("client/random").await?.data)
    }

    pub async fn front_end_stats(&self) -> ClientResult<Stats> {
        Ok(self.client.get("front-end").await?.data)
    }

    pub async fn back_end_stats(&self) -> ClientResult<Stats> {
        Ok(self.client.get("back-end").await?.data)
    }
}
