use chrono::NaiveDate;
use common::ClientResult;

use super::DayQuery;
use crate::http::AuthClient;
use crate::models::Meal;

#[derive(Clone)]
pub struct MealApi {
    client: AuthClient,
}

impl MealApi {
    pub fn new(client: AuthClient) -> Self {
        Self { client }
    }

    /// Breakfast, lunch and dinner served on `date`
    pub async fn meal(&self, date: NaiveDate) -> ClientResult<Meal> {
        let query = DayQuery::from(date);
        Ok(self.client.get_with_query("meal", &query).await?.data)
    }
}
