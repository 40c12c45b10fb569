use chrono::NaiveDate;
use common::ClientResult;
use reqwest::Method;
use serde::Serialize;

use super::DayQuery;
use crate::http::AuthClient;
use crate::models::{AllowedSong, Chart, KeywordRequest, WakeupSong};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitSong<'a> {
    video_url: &'a str,
}

/// Wake-up song requests
#[derive(Clone)]
pub struct WakeupSongApi {
    client: AuthClient,
}

impl WakeupSongApi {
    pub fn new(client: AuthClient) -> Self {
        Self { client }
    }

    /// Songs approved to play on `date`
    pub async fn allowed(&self, date: NaiveDate) -> ClientResult<Vec<AllowedSong>> {
        let query = DayQuery::from(date);
        Ok(self
            .client
            .get_with_query("wakeup-song/allowed", &query)
            .await?
            .data)
    }

    pub async fn pending(&self) -> ClientResult<Vec<WakeupSong>> {
        Ok(self.client.get("wakeup-song/pending").await?.data)
    }

    pub async fn my_songs(&self) -> ClientResult<Vec<WakeupSong>> {
        Ok(self.client.get("wakeup-song/my").await?.data)
    }

    pub async fn chart(&self) -> ClientResult<Vec<Chart>> {
        Ok(self.client.get("wakeup-song/chart").await?.data)
    }

    pub async fn submit(&self, video_url: &str) -> ClientResult<()> {
        self.client
            .execute(
                self.client
                    .builder(Method::POST, "wakeup-song")
                    .json(&SubmitSong { video_url }),
            )
            .await
    }

    pub async fn submit_keyword(&self, artist: &str, title: &str) -> ClientResult<()> {
        let request = KeywordRequest {
            artist: artist.to_string(),
            title: title.to_string(),
        };
        self.client
            .execute(
                self.client
                    .builder(Method::POST, "wakeup-song/keyword")
                    .json(&request),
            )
            .await
    }
}
