//! Home screen: every section of the dashboard's landing page

use chrono::Local;
use client::Clients;
use client::models::{
    AllowedSong, ApprovalStatus, Banner, Bus, Conference, Meal, MealTime, Member, OutSleeping,
    Outgoing, Schedule,
};
use common::{ClientError, ClientResult};
use tracing::error;

/// Fetch every home section concurrently and print what succeeded
///
/// Sections: profile, today's schedule, today's meal, buses, outgoing and
/// out-sleeping applications, today's wake-up songs, conferences, banners.
///
/// A failed section is logged and skipped. An expired session aborts the
/// whole screen.
pub async fn show(clients: &Clients) -> Result<(), ClientError> {
    let member = clients.member();
    let schedule = clients.schedule();
    let meals = clients.meal();
    let bus = clients.bus();
    let leave = clients.leave();
    let songs = clients.wakeup_song();
    let conference = clients.conference();
    let banner = clients.banner();
    let today = Local::now().date_naive();

    let (
        profile,
        schedules,
        meal,
        buses,
        outgoings,
        out_sleepings,
        allowed,
        conferences,
        banners,
    ) = tokio::join!(
        member.my_profile(),
        schedule.today(),
        meals.meal(today),
        bus.list(),
        leave.my_outgoings(),
        leave.my_out_sleepings(),
        songs.allowed(today),
        conference.list(),
        banner.active()
    );

    if let Some(profile) = section("profile", profile)? {
        println!("{}", render_profile(&profile));
    }
    if let Some(schedules) = section("schedule", schedules)? {
        println!("{}", render_schedules(&schedules));
    }
    if let Some(meal) = section("meal", meal)? {
        println!("{}", render_meal(&meal));
    }
    if let Some(buses) = section("bus", buses)? {
        println!("{}", render_buses(&buses));
    }
    if let Some(outgoings) = section("outgoing", outgoings)? {
        println!("{}", render_outgoings(&outgoings));
    }
    if let Some(out_sleepings) = section("out-sleeping", out_sleepings)? {
        println!("{}", render_out_sleepings(&out_sleepings));
    }
    if let Some(allowed) = section("wakeup-song", allowed)? {
        println!("{}", render_songs(&allowed));
    }
    if let Some(conferences) = section("conference", conferences)? {
        println!("{}", render_conferences(&conferences));
    }
    if let Some(banners) = section("banner", banners)? {
        println!("{}", render_banners(&banners));
    }
    Ok(())
}

fn section<T>(name: &str, result: ClientResult<T>) -> Result<Option<T>, ClientError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_session_expired() => Err(err),
        Err(err) => {
            error!(section = name, error = %err, "Failed to load section");
            Ok(None)
        }
    }
}

fn render_profile(member: &Member) -> String {
    match &member.student {
        Some(student) => format!(
            "{} ({}학년 {}반 {}번)",
            member.name, student.grade, student.room, student.number
        ),
        None => member.name.clone(),
    }
}

fn render_schedules(schedules: &[Schedule]) -> String {
    if schedules.is_empty() {
        return "오늘 일정이 없습니다".to_string();
    }
    schedules
        .iter()
        .map(|schedule| match &schedule.place {
            Some(place) => format!("- {} @ {}", schedule.name, place),
            None => format!("- {}", schedule.name),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_meal(meal: &Meal) -> String {
    if !meal.exists {
        return "오늘은 급식이 없습니다".to_string();
    }
    [("아침", &meal.breakfast), ("점심", &meal.lunch), ("저녁", &meal.dinner)]
        .into_iter()
        .filter_map(|(label, time)| time.as_ref().map(|time| render_meal_time(label, time)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_meal_time(label: &str, time: &MealTime) -> String {
    let menu = time
        .details
        .iter()
        .map(|detail| detail.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}: {} ({:.0}kcal)", label, menu, time.calorie)
}

fn render_buses(buses: &[Bus]) -> String {
    buses
        .iter()
        .map(|bus| {
            let state = if bus.is_full() { " 마감" } else { "" };
            format!(
                "- {} {} {}/{}{}",
                bus.bus_name, bus.leave_time, bus.apply_count, bus.people_limit, state
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn status_label(status: ApprovalStatus) -> &'static str {
    match status {
        ApprovalStatus::Pending => "대기",
        ApprovalStatus::Allowed => "승인",
        ApprovalStatus::Rejected => "거절",
    }
}

fn render_outgoings(outgoings: &[Outgoing]) -> String {
    if outgoings.is_empty() {
        return "외출 신청 내역이 없습니다".to_string();
    }
    outgoings
        .iter()
        .map(|outgoing| {
            format!(
                "- [{}] {} ({} ~ {})",
                status_label(outgoing.status),
                outgoing.reason,
                outgoing.start_at,
                outgoing.end_at
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_out_sleepings(out_sleepings: &[OutSleeping]) -> String {
    if out_sleepings.is_empty() {
        return "외박 신청 내역이 없습니다".to_string();
    }
    out_sleepings
        .iter()
        .map(|out_sleeping| {
            format!(
                "- [{}] {} ({} ~ {})",
                status_label(out_sleeping.status),
                out_sleeping.reason,
                out_sleeping.start_at,
                out_sleeping.end_at
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_songs(songs: &[AllowedSong]) -> String {
    if songs.is_empty() {
        return "오늘의 기상송이 없습니다".to_string();
    }
    songs
        .iter()
        .map(|allowed| format!("- {} {}", allowed.song.video_title, allowed.song.video_url))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_conferences(conferences: &[Conference]) -> String {
    conferences
        .iter()
        .map(|conference| {
            let period = match &conference.end_date {
                Some(end) if conference.is_multi_day() => {
                    format!("{} - {}", conference.start_date, end)
                }
                _ => conference.start_date.clone(),
            };
            format!(
                "- {} ({}, {}) {}",
                conference.title, conference.organization, period, conference.link
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_banners(banners: &[Banner]) -> String {
    banners
        .iter()
        .map(|banner| format!("- {} {}", banner.title, banner.redirect_url))
        .collect::<Vec<_>>()
        .join("\n")
}
