//! GitHub ranking models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GitUser {
    pub github_id: String,
    pub name: String,
    pub contributions: u64,
    pub user_image: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub pull_request: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub repository_id: i64,
    pub repository_name: String,
    pub total_stars: u64,
    pub github_id: String,
    pub github_user_image: String,
}

/// How often a user topped the weekly ranking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTop {
    pub github_id: String,
    pub name: String,
    pub win_count: u32,
    pub user_image: String,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRank {
    pub ranked_date: String,
    pub github_id: String,
    pub name: String,
    pub contributions: u64,
    pub user_image: String,
    #[serde(default)]
    pub bio: Option<String>,
}
