use serde::{Deserialize, Serialize};

/// Dormitory bus departing after school
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bus {
    pub id: i64,
    pub bus_name: String,
    #[serde(default)]
    pub description: String,
    pub people_limit: u32,
    pub apply_count: u32,
    pub leave_time: String,
    pub time_required: String,
}

impl Bus {
    pub fn is_full(&self) -> bool {
        self.apply_count >= self.people_limit
    }
}
