use crate::dates::{Month, date_key, today};
use crate::models::{ActivityPoint, MemberStatus, MonthSummary, ReportRow, Store, TodayStatus};
use crate::streak::consecutive_days_at;
use chrono::NaiveDate;

pub fn today_status(store: &Store) -> TodayStatus {
    today_status_at(today(), store)
}

pub fn today_status_at(today: NaiveDate, store: &Store) -> TodayStatus {
    let date = date_key(today);
    let members: Vec<MemberStatus> = store
        .members
        .iter()
        .map(|member| {
            let chapters = store.chapters_on(&date, member);
            MemberStatus {
                member: member.clone(),
                chapters,
                checked_in: chapters.is_some(),
                streak: consecutive_days_at(today, member, store),
            }
        })
        .collect();

    TodayStatus {
        checked_in: members.iter().filter(|status| status.checked_in).count(),
        total_members: members.len(),
        date,
        members,
    }
}

pub fn monthly_report(store: &Store, month: Month) -> Vec<ReportRow> {
    monthly_report_at(today(), store, month)
}

/// One row per current member, highest monthly total first. Equal totals
/// keep member-list order.
pub fn monthly_report_at(today: NaiveDate, store: &Store, month: Month) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = store
        .members
        .iter()
        .map(|member| ReportRow {
            member: member.clone(),
            total_chapters: member_total(store, month, member),
            streak: consecutive_days_at(today, member, store),
        })
        .collect();

    rows.sort_by(|a, b| b.total_chapters.cmp(&a.total_chapters));
    rows
}

pub fn daily_activity(store: &Store, month: Month) -> Vec<ActivityPoint> {
    (1..=month.days())
        .map(|day| {
            let checked_in = month
                .day(day)
                .and_then(|date| store.entries.get(&date_key(date)))
                .map(|entries| entries.values().filter(|chapters| **chapters >= 1).count())
                .unwrap_or(0);
            ActivityPoint { day, checked_in }
        })
        .collect()
}

pub fn month_summary(store: &Store, month: Month) -> MonthSummary {
    month_summary_at(today(), store, month)
}

pub fn month_summary_at(today: NaiveDate, store: &Store, month: Month) -> MonthSummary {
    let leaderboard = monthly_report_at(today, store, month);
    MonthSummary {
        month: month.key(),
        days: month.days(),
        total_chapters: leaderboard
            .iter()
            .fold(0u64, |acc, row| acc.saturating_add(row.total_chapters)),
        leaderboard,
        activity: daily_activity(store, month),
    }
}

fn member_total(store: &Store, month: Month, member: &str) -> u64 {
    store
        .entries
        .iter()
        .filter(|(date, _)| month.contains(date))
        .filter_map(|(_, entries)| entries.get(member))
        .fold(0u64, |acc, chapters| acc.saturating_add(u64::from(*chapters)))
}
