use serde::{Deserialize, Serialize};

/// School calendar entry; `date` holds the start and end day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(rename = "type")]
    pub schedule_type: String,
    pub date: Vec<String>,
    #[serde(default)]
    pub target_grades: Vec<String>,
}
