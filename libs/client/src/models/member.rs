//! Member profile and point models

use serde::{Deserialize, Serialize};

/// Student record attached to members and applications
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub grade: u8,
    pub room: u8,
    pub number: u8,
    #[serde(default)]
    pub parent_phone: Option<String>,
}

/// Member profile from `member/my`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub student: Option<Student>,
    pub created_at: String,
    pub modified_at: String,
}

/// Profile update payload for `member/info`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub grade: u8,
    pub room: u8,
    pub number: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PointType {
    Dormitory,
    School,
}

impl PointType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PointType::Dormitory => "DORMITORY",
            PointType::School => "SCHOOL",
        }
    }
}

/// Bonus/minus point tally
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub id: i64,
    pub bonus: i32,
    pub minus: i32,
    pub offset: i32,
    #[serde(rename = "type")]
    pub point_type: PointType,
    #[serde(default)]
    pub student: Option<Student>,
}
