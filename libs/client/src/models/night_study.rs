use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ApprovalStatus, Student};

/// Night-study application payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NightStudyRequest {
    pub content: String,
    pub start_at: NaiveDate,
    pub end_at: NaiveDate,
    pub do_need_phone: bool,
    pub place: String,
    pub reason_for_phone: String,
}

/// Submitted night-study application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NightStudy {
    pub id: i64,
    pub content: String,
    pub status: ApprovalStatus,
    pub do_need_phone: bool,
    #[serde(default)]
    pub reason_for_phone: Option<String>,
    #[serde(default)]
    pub student: Option<Student>,
    pub place: String,
    #[serde(default)]
    pub reject_reason: Option<String>,
    pub start_at: String,
    pub end_at: String,
    pub created_at: String,
    pub modified_at: String,
}
