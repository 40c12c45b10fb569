//! Typed wrappers over the backend endpoints
//!
//! Each API borrows nothing: it holds a clone of the [`AuthClient`] for its
//! backend and returns the `data` of the success envelope.

pub mod auth;
pub mod banner;
pub mod bus;
pub mod conference;
pub mod dauth;
pub mod dgit;
pub mod leave;
pub mod meal;
pub mod member;
pub mod night_study;
pub mod schedule;
pub mod wakeup_song;

pub use auth::AuthApi;
pub use banner::BannerApi;
pub use bus::BusApi;
pub use conference::ConferenceApi;
pub use dauth::DauthApi;
pub use dgit::DgitApi;
pub use leave::LeaveApi;
pub use meal::MealApi;
pub use member::MemberApi;
pub use night_study::NightStudyApi;
pub use schedule::ScheduleApi;
pub use wakeup_song::WakeupSongApi;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// `year`/`month`/`day` query the meal and wake-up song endpoints take
#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct DayQuery {
    year: i32,
    month: u32,
    day: u32,
}

impl From<NaiveDate> for DayQuery {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_query_uses_calendar_month() {
        let query = DayQuery::from(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(
            query,
            DayQuery {
                year: 2024,
                month: 1,
                day: 31
            }
        );
    }
}
