use serde::{Deserialize, Serialize};

/// Contest, hackathon or conference listed on the home screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    pub title: String,
    pub organization: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    pub event_type: String,
    pub link: String,
}

impl Conference {
    /// Whether the event spans more than its start day
    pub fn is_multi_day(&self) -> bool {
        self.end_date
            .as_deref()
            .is_some_and(|end| !end.is_empty() && end != self.start_date)
    }
}
