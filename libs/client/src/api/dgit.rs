//! GitHub activity leaderboard

use common::ClientResult;

use crate::http::AuthClient;
use crate::models::{GitUser, Repository, WeeklyRank, WeeklyTop};

const WEEKLY_RANK_PAGE_SIZE: u32 = 10;

#[derive(Clone)]
pub struct DgitApi {
    client: AuthClient,
}

impl DgitApi {
    pub fn new(client: AuthClient) -> Self {
        Self { client }
    }

    /// Users ranked by total contributions
    pub async fn total_commits(&self) -> ClientResult<Vec<GitUser>> {
        Ok(self.client.get("github-user/total").await?.data)
    }

    /// Repositories ranked by stars
    pub async fn repositories(&self) -> ClientResult<Vec<Repository>> {
        Ok(self.client.get("github-repository").await?.data)
    }

    pub async fn pull_requests(&self) -> ClientResult<Vec<GitUser>> {
        Ok(self.client.get("github-user/pull-request").await?.data)
    }

    /// Users ranked by contributions this week
    pub async fn weekly(&self) -> ClientResult<Vec<GitUser>> {
        Ok(self.client.get("github-week").await?.data)
    }

    pub async fn weekly_top(&self) -> ClientResult<Vec<WeeklyTop>> {
        Ok(self.client.get("github-week/top").await?.data)
    }

    pub async fn weekly_rank(&self, page: u32) -> ClientResult<Vec<WeeklyRank>> {
        let query = [("page", page), ("limit", WEEKLY_RANK_PAGE_SIZE)];
        Ok(self.client.get_with_query("github-week/rank", &query).await?.data)
    }
}
