use chrono::NaiveDate;
use common::ClientResult;

use crate::http::AuthClient;
use crate::models::Schedule;

#[derive(Clone)]
pub struct ScheduleApi {
    client: AuthClient,
}

impl ScheduleApi {
    pub fn new(client: AuthClient) -> Self {
        Self { client }
    }

    pub async fn today(&self) -> ClientResult<Vec<Schedule>> {
        Ok(self.client.get("schedule/today").await?.data)
    }

    /// Schedules overlapping `start..=end`
    pub async fn search(&self, start: NaiveDate, end: NaiveDate) -> ClientResult<Vec<Schedule>> {
        let query = [
            ("startAt", start.format("%Y-%m-%d").to_string()),
            ("endAt", end.format("%Y-%m-%d").to_string()),
        ];
        Ok(self.client.get_with_query("schedule/search", &query).await?.data)
    }
}
