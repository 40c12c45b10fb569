use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: i64,
    pub image_url: String,
    pub redirect_url: String,
    pub title: String,
    pub status: String,
    pub expire_at: String,
}
