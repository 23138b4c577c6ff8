use crate::dates::today_key;
use crate::errors::TrackerError;
use crate::models::Store;

pub fn normalize_member_name(name: &str) -> Result<String, TrackerError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::InvalidMemberName);
    }
    Ok(trimmed.to_string())
}

pub fn parse_chapters(value: &serde_json::Value) -> Result<u32, TrackerError> {
    let invalid = || TrackerError::InvalidChapters(value.to_string());
    let number = match value {
        serde_json::Value::Number(number) => number.as_i64().ok_or_else(invalid)?,
        serde_json::Value::String(text) => text.trim().parse::<i64>().map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };
    validate_chapters(number)
}

fn validate_chapters(chapters: i64) -> Result<u32, TrackerError> {
    if chapters < 1 {
        return Err(TrackerError::InvalidChapters(chapters.to_string()));
    }
    u32::try_from(chapters).map_err(|_| TrackerError::InvalidChapters(chapters.to_string()))
}

pub fn add_member(store: &Store, name: &str) -> Result<Store, TrackerError> {
    let name = normalize_member_name(name)?;
    if store.has_member(&name) {
        return Err(TrackerError::DuplicateMember(name));
    }
    let mut next = store.clone();
    next.members.push(name);
    Ok(next)
}

pub fn remove_member(store: &Store, name: &str) -> Store {
    let mut next = store.clone();
    next.members.retain(|member| member != name);
    for entries in next.entries.values_mut() {
        entries.remove(name);
    }
    next.entries.retain(|_, entries| !entries.is_empty());
    next
}

pub fn check_in(store: &Store, member: &str, chapters: i64) -> Result<Store, TrackerError> {
    check_in_on(store, &today_key(), member, chapters)
}

pub fn check_in_on(
    store: &Store,
    date_key: &str,
    member: &str,
    chapters: i64,
) -> Result<Store, TrackerError> {
    let chapters = validate_chapters(chapters)?;
    if !store.has_member(member) {
        return Err(TrackerError::UnknownMember(member.to_string()));
    }
    let mut next = store.clone();
    next.entries
        .entry(date_key.to_string())
        .or_default()
        .insert(member.to_string(), chapters);
    Ok(next)
}

pub fn edit_record(store: &Store, member: &str, chapters: i64) -> Result<Store, TrackerError> {
    check_in(store, member, chapters)
}

pub fn edit_record_on(
    store: &Store,
    date_key: &str,
    member: &str,
    chapters: i64,
) -> Result<Store, TrackerError> {
    check_in_on(store, date_key, member, chapters)
}
