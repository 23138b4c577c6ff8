use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type DayEntries = BTreeMap<String, u32>;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Store {
    pub members: Vec<String>,
    #[serde(rename = "records")]
    pub entries: BTreeMap<String, DayEntries>,
}

impl Store {
    pub fn with_members<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
            entries: BTreeMap::new(),
        }
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|member| member == name)
    }

    pub fn chapters_on(&self, date_key: &str, member: &str) -> Option<u32> {
        self.entries
            .get(date_key)
            .and_then(|day| day.get(member))
            .copied()
            .filter(|chapters| *chapters >= 1)
    }
}

#[derive(Debug, Deserialize)]
pub struct MemberRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckInRequest {
    pub member: String,
    pub chapters: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberStatus {
    pub member: String,
    pub chapters: Option<u32>,
    pub checked_in: bool,
    pub streak: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodayStatus {
    pub date: String,
    pub checked_in: usize,
    pub total_members: usize,
    pub members: Vec<MemberStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportRow {
    pub member: String,
    pub total_chapters: u64,
    pub streak: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityPoint {
    pub day: u32,
    pub checked_in: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthSummary {
    pub month: String,
    pub days: u32,
    pub total_chapters: u64,
    pub leaderboard: Vec<ReportRow>,
    pub activity: Vec<ActivityPoint>,
}
