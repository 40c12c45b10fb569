//! Client registry models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Public listing of a registered service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub client_id: String,
    pub client_name: String,
    pub client_url: String,
}

/// Full registration, including the secret, visible to its owner
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetail {
    pub client_id: String,
    pub client_secret: String,
    pub dodam_id: String,
    pub client_name: String,
    pub client_url: String,
    pub redirect_url: String,
}

impl std::fmt::Debug for ClientDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientDetail")
            .field("client_id", &self.client_id)
            .field("client_name", &self.client_name)
            .field("client_url", &self.client_url)
            .field("redirect_url", &self.redirect_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterClient {
    pub client_name: String,
    pub client_url: String,
    pub redirect_url: String,
    pub front_end: String,
    pub back_end: String,
}

/// Usage count and icon per framework name
pub type Stats = HashMap<String, (u64, String)>;
