//! Outgoing (day leave) and out-sleeping (overnight leave) models

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize, Serializer};

use super::{ApprovalStatus, Student};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Outgoing {
    pub id: i64,
    pub reason: String,
    pub status: ApprovalStatus,
    pub start_at: String,
    pub end_at: String,
    #[serde(default)]
    pub student: Option<Student>,
    #[serde(default)]
    pub reject_reason: Option<String>,
    #[serde(default)]
    pub dinner_or_not: bool,
    pub created_at: String,
    pub modified_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutSleeping {
    pub id: i64,
    pub reason: String,
    pub status: ApprovalStatus,
    pub start_at: String,
    pub end_at: String,
    #[serde(default)]
    pub student: Option<Student>,
    #[serde(default)]
    pub reject_reason: Option<String>,
    pub created_at: String,
    pub modified_at: String,
}

/// Day-leave application; times are sent to the minute
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOutgoing {
    pub reason: String,
    #[serde(serialize_with = "to_the_minute")]
    pub start_at: NaiveDateTime,
    #[serde(serialize_with = "to_the_minute")]
    pub end_at: NaiveDateTime,
    pub dinner_or_not: bool,
}

/// Overnight-leave application
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOutSleeping {
    pub reason: String,
    pub start_at: NaiveDate,
    pub end_at: NaiveDate,
}

fn to_the_minute<S: Serializer>(at: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&at.format("%Y-%m-%dT%H:%M:00"))
}
