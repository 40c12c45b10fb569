use serde::{Deserialize, Serialize};

use super::ApprovalStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WakeupSong {
    pub id: i64,
    pub thumbnail: String,
    pub video_title: String,
    pub video_id: String,
    pub video_url: String,
    pub channel_title: String,
    pub status: ApprovalStatus,
    pub created_at: String,
}

/// Approved song, with the requesting student when the backend shares it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllowedSong {
    #[serde(flatten)]
    pub song: WakeupSong,
    #[serde(default)]
    pub student: Option<super::Student>,
}

/// Music chart entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chart {
    pub rank: u32,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub thumbnail: String,
}

/// Request a song by artist and title instead of a video URL
#[derive(Debug, Clone, Serialize)]
pub struct KeywordRequest {
    pub artist: String,
    pub title: String,
}
