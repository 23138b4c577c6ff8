use crate::dates::{date_key, today};
use crate::models::Store;
use chrono::NaiveDate;

/// Longest walk back through history (ten years). A streak that reaches
/// this bound is reported as the bound itself.
pub const MAX_STREAK_DAYS: u32 = 3650;

pub fn consecutive_days(member: &str, store: &Store) -> u32 {
    consecutive_days_at(today(), member, store)
}

pub fn consecutive_days_at(today: NaiveDate, member: &str, store: &Store) -> u32 {
    let mut streak = 0;
    let mut day = today;
    while streak < MAX_STREAK_DAYS {
        if store.chapters_on(&date_key(day), member).is_none() {
            break;
        }
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn store_with_days(member: &str, today: NaiveDate, offsets: &[i64]) -> Store {
        let mut store = Store::with_members([member]);
        for offset in offsets {
            let key = date_key(today - Duration::days(*offset));
            store.entries.entry(key).or_default().insert(member.to_string(), 2);
        }
        store
    }

    #[test]
    fn streak_counts_back_from_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let store = store_with_days("A", today, &[0, 1, 2, 4]);
        assert_eq!(consecutive_days_at(today, "A", &store), 3);
    }

    #[test]
    fn streak_is_zero_without_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let store = store_with_days("A", today, &[1, 2, 3, 4, 5]);
        assert_eq!(consecutive_days_at(today, "A", &store), 0);
    }

    #[test]
    fn streak_spans_month_boundary() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let store = store_with_days("A", today, &[0, 1, 2]);
        assert_eq!(consecutive_days_at(today, "A", &store), 3);
    }

    #[test]
    fn streak_ignores_other_members() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let mut store = store_with_days("A", today, &[0, 1]);
        store.members.push("B".to_string());
        assert_eq!(consecutive_days_at(today, "B", &store), 0);
    }

    #[test]
    fn streak_stops_at_cap() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let offsets: Vec<i64> = (0..i64::from(MAX_STREAK_DAYS) + 10).collect();
        let store = store_with_days("A", today, &offsets);
        assert_eq!(consecutive_days_at(today, "A", &store), MAX_STREAK_DAYS);
    }
}
