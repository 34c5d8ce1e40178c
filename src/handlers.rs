use crate::catalog::GestureDefinition;
use crate::errors::AppError;
use crate::export;
use crate::models::{
    BoardQuery, DayResponse, GestureLabelRequest, JournalView, RangeRequest, RangeResponse, Stats,
    ToggleRequest,
};
use crate::range::{MonthSpan, parse_date_key};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect},
};
use chrono::Local;
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct RenameForm {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct RangeForm {
    pub start_date: String,
    pub months_to_show: u32,
}

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Html<String>, AppError> {
    let filter = query.filter.unwrap_or_default();
    let journal = state.journal.lock().await;
    let selected = match query.day.as_deref() {
        Some(key) => Some(journal.day(key)?),
        None => None,
    };
    let view = journal.view(&filter);
    Ok(Html(render_index(&view, selected.as_ref(), &filter)))
}

pub async fn get_journal(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Json<JournalView> {
    let filter = query.filter.unwrap_or_default();
    let journal = state.journal.lock().await;
    Json(journal.view(&filter))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<Stats> {
    let journal = state.journal.lock().await;
    Json(journal.stats())
}

pub async fn list_gestures(State(state): State<AppState>) -> Json<Vec<GestureDefinition>> {
    let journal = state.journal.lock().await;
    Json(journal.catalog().to_vec())
}

pub async fn add_gesture(
    State(state): State<AppState>,
    Json(payload): Json<GestureLabelRequest>,
) -> Result<(StatusCode, Json<GestureDefinition>), AppError> {
    let mut journal = state.journal.lock().await;
    let added = journal.add_gesture(&payload.label)?;
    Ok((StatusCode::CREATED, Json(added)))
}

pub async fn rename_gesture(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<GestureLabelRequest>,
) -> Result<Json<GestureDefinition>, AppError> {
    let mut journal = state.journal.lock().await;
    Ok(Json(journal.rename_gesture(&id, &payload.label)?))
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DayResponse>, AppError> {
    let journal = state.journal.lock().await;
    Ok(Json(journal.day(&key)?))
}

pub async fn toggle_day(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let mut journal = state.journal.lock().await;
    let day = write_through(|| journal.toggle(&key, payload.gesture.trim()))?;
    Ok(Json(day))
}

pub async fn clear_day(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut journal = state.journal.lock().await;
    write_through(|| journal.clear_day(&key))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn clear_all(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let mut journal = state.journal.lock().await;
    write_through(|| journal.clear_all())?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_range(State(state): State<AppState>) -> Json<RangeResponse> {
    let journal = state.journal.lock().await;
    Json(journal.range())
}

pub async fn update_range(
    State(state): State<AppState>,
    Json(payload): Json<RangeRequest>,
) -> Result<Json<RangeResponse>, AppError> {
    let start = payload
        .start_date
        .as_deref()
        .map(|value| parse_date_key(value.trim()))
        .transpose()?;
    let span = payload.months_to_show.map(MonthSpan::try_from).transpose()?;

    let mut journal = state.journal.lock().await;
    if let Some(start) = start {
        journal.set_start_date(start);
    }
    if let Some(span) = span {
        journal.set_span(span);
    }
    Ok(Json(journal.range()))
}

pub async fn reset_range(State(state): State<AppState>) -> Json<RangeResponse> {
    let mut journal = state.journal.lock().await;
    journal.set_start_date(today());
    Json(journal.range())
}

pub async fn export_json(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let journal = state.journal.lock().await;
    let body = journal.export_json()?;
    let filename = export::json_filename(journal.start_date());
    Ok((
        [
            (header::CONTENT_TYPE, String::from("application/json")),
            (header::CONTENT_DISPOSITION, attachment(&filename)),
        ],
        body,
    ))
}

pub async fn export_csv(State(state): State<AppState>) -> impl IntoResponse {
    let journal = state.journal.lock().await;
    let filename = export::csv_filename(journal.start_date());
    (
        [
            (header::CONTENT_TYPE, String::from("text/csv; charset=utf-8")),
            (header::CONTENT_DISPOSITION, attachment(&filename)),
        ],
        journal.export_csv(),
    )
}

pub async fn print_view(State(state): State<AppState>) -> Html<String> {
    let journal = state.journal.lock().await;
    Html(journal.print_html())
}

pub async fn form_toggle(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Form(form): Form<ToggleRequest>,
) -> Result<Redirect, AppError> {
    let mut journal = state.journal.lock().await;
    write_through(|| journal.toggle(&key, form.gesture.trim()))?;
    Ok(Redirect::to(&format!("/?day={key}")))
}

pub async fn form_clear_day(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Redirect, AppError> {
    let mut journal = state.journal.lock().await;
    write_through(|| journal.clear_day(&key))?;
    Ok(Redirect::to("/"))
}

pub async fn form_clear_all(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let mut journal = state.journal.lock().await;
    write_through(|| journal.clear_all())?;
    Ok(Redirect::to("/"))
}

pub async fn form_add_gesture(
    State(state): State<AppState>,
    Form(form): Form<GestureLabelRequest>,
) -> Result<Redirect, AppError> {
    if form.label.trim().is_empty() {
        warn!("ignoring blank gesture label");
        return Ok(Redirect::to("/"));
    }
    let mut journal = state.journal.lock().await;
    journal.add_gesture(&form.label)?;
    Ok(Redirect::to("/"))
}

pub async fn form_rename_gesture(
    State(state): State<AppState>,
    Form(form): Form<RenameForm>,
) -> Result<Redirect, AppError> {
    let mut journal = state.journal.lock().await;
    journal.rename_gesture(&form.id, &form.label)?;
    Ok(Redirect::to("/"))
}

pub async fn form_range(
    State(state): State<AppState>,
    Form(form): Form<RangeForm>,
) -> Result<Redirect, AppError> {
    let start = parse_date_key(form.start_date.trim())?;
    let span = MonthSpan::try_from(form.months_to_show)?;
    let mut journal = state.journal.lock().await;
    journal.set_start_date(start);
    journal.set_span(span);
    Ok(Redirect::to("/"))
}

pub async fn form_today(State(state): State<AppState>) -> Redirect {
    let mut journal = state.journal.lock().await;
    journal.set_start_date(today());
    Redirect::to("/")
}

/// Runs a journal mutation that writes to storage without stalling the
/// other tasks on this worker.
fn write_through<T>(mutation: impl FnOnce() -> T) -> T {
    tokio::task::block_in_place(mutation)
}

fn attachment(filename: &str) -> String {
    format!("attachment; filename=\"{filename}\"")
}

fn today() -> chrono::NaiveDate {
    Local::now().date_naive()
}
