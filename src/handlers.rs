use crate::dates::{Month, today_key};
use crate::errors::{AppError, TrackerError};
use crate::export::{export_filename, month_csv};
use crate::models::{CheckInRequest, MemberRequest, MonthQuery, MonthSummary, Store, TodayStatus};
use crate::mutations::{self, normalize_member_name, parse_chapters};
use crate::state::AppState;
use crate::stats::{month_summary, today_status};
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};
use tracing::info;

pub async fn index() -> Html<String> {
    Html(render_index(&today_key(), &Month::current().key()))
}

pub async fn get_today(State(state): State<AppState>) -> Json<TodayStatus> {
    let store = state.snapshot().await;
    Json(today_status(&store))
}

pub async fn get_report(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthSummary>, AppError> {
    let month = resolve_month(query.month.as_deref())?;
    let store = state.snapshot().await;
    Ok(Json(month_summary(&store, month)))
}

pub async fn list_members(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.snapshot().await.members.clone())
}

pub async fn add_member(
    State(state): State<AppState>,
    Json(payload): Json<MemberRequest>,
) -> Result<(StatusCode, Json<Vec<String>>), AppError> {
    let name = normalize_member_name(&payload.name)?;
    let store = state.apply(|store| mutations::add_member(store, &name)).await?;
    info!("added member {name:?}");
    Ok((StatusCode::CREATED, Json(store.members.clone())))
}

pub async fn remove_member(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<String>>, AppError> {
    let mut removed = false;
    let store = state
        .apply(|store| {
            removed = store.has_member(&name);
            Ok(mutations::remove_member(store, &name))
        })
        .await?;
    if removed {
        info!("removed member {name:?}");
    }
    Ok(Json(store.members.clone()))
}

pub async fn check_in(
    State(state): State<AppState>,
    Json(payload): Json<CheckInRequest>,
) -> Result<Json<TodayStatus>, AppError> {
    apply_check_in(&state, payload, mutations::check_in).await
}

pub async fn edit_check_in(
    State(state): State<AppState>,
    Json(payload): Json<CheckInRequest>,
) -> Result<Json<TodayStatus>, AppError> {
    apply_check_in(&state, payload, mutations::edit_record).await
}

pub async fn export_csv(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<impl IntoResponse, AppError> {
    let month = resolve_month(query.month.as_deref())?;
    let store = state.snapshot().await;
    let disposition = format!("attachment; filename=\"{}\"", export_filename(month));
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        month_csv(&store, month),
    ))
}

type CheckInFn = fn(&Store, &str, i64) -> Result<Store, TrackerError>;

async fn apply_check_in(
    state: &AppState,
    payload: CheckInRequest,
    operation: CheckInFn,
) -> Result<Json<TodayStatus>, AppError> {
    let chapters = parse_chapters(&payload.chapters)?;
    let member = payload.member.trim();
    let store = state
        .apply(|store| operation(store, member, i64::from(chapters)))
        .await?;
    info!("{member:?} logged {chapters} chapters");
    Ok(Json(today_status(&store)))
}

fn resolve_month(value: Option<&str>) -> Result<Month, TrackerError> {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => Month::parse(value),
        None => Ok(Month::current()),
    }
}
