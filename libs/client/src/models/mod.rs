//! Backend payload models

pub mod auth;
pub mod banner;
pub mod bus;
pub mod conference;
pub mod dauth;
pub mod git;
pub mod leave;
pub mod meal;
pub mod member;
pub mod night_study;
pub mod schedule;
pub mod wakeup_song;

// Re-export for convenience
pub use auth::{LoginRequest, LoginTokens, SignUpRequest};
pub use banner::Banner;
pub use bus::Bus;
pub use conference::Conference;
pub use dauth::{ClientDetail, ClientSummary, RegisterClient, Stats};
pub use git::{GitUser, Repository, WeeklyRank, WeeklyTop};
pub use leave::{NewOutSleeping, NewOutgoing, OutSleeping, Outgoing};
pub use meal::{Meal, MealDetail, MealTime};
pub use member::{Member, Point, PointType, Student, UpdateProfile};
pub use night_study::{NightStudy, NightStudyRequest};
pub use schedule::Schedule;
pub use wakeup_song::{AllowedSong, Chart, KeywordRequest, WakeupSong};

use serde::{Deserialize, Serialize};

/// Review state shared by every application the school approves
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    Pending,
    Allowed,
    Rejected,
}
