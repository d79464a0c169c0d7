//! Event endpoints

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
};
use serde::Deserialize;

use daygrid_core::{
    BucketedEvents, CalendarDate, CalendarGrid, Event, NewEvent, PageResult, View,
    bucket_events, build_grid, search,
};

use crate::routes::{ApiResponse, AppError, UserId};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/event/date", get(events_by_date))
        .route("/api/event/search", get(search_events))
        .route("/api/event/grid", get(month_grid))
        .route("/api/event/create", post(create_event))
        .route("/api/event/{id}/edit", put(update_event))
        .route("/api/event/{id}/remove", delete(delete_event))
}

/// Query for GET /api/event/date
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateQuery {
    #[serde(rename = "type")]
    pub view: String,
    pub start_date: String,
    pub end_date: String,
}

/// GET /api/event/date - Events in a date range, grouped for a view
async fn events_by_date(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Query(query): Query<DateQuery>,
) -> Result<Json<ApiResponse<BucketedEvents>>, AppError> {
    let view: View = query.view.parse()?;
    let start = CalendarDate::parse(&query.start_date)?;
    let end = CalendarDate::parse(&query.end_date)?;

    let events = state.store().read().await.for_user(&user_id);
    let bucketed = bucket_events(&events, start, end, view)?;

    tracing::debug!(%user_id, %view, %start, %end, count = bucketed.event_count(), "bucketed events");

    Ok(ApiResponse::new("Success", bucketed))
}

/// Query for GET /api/event/search
#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: String,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// GET /api/event/search - Page through events whose title matches a keyword
async fn search_events(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<PageResult>>, AppError> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(state.page_size());

    let events = state.store().read().await.for_user(&user_id);
    let result = search(&events, &query.search, page, limit)?;

    Ok(ApiResponse::new("Success", result))
}

/// Query for GET /api/event/grid
#[derive(Deserialize)]
pub struct GridQuery {
    pub date: Option<String>,
}

/// GET /api/event/grid - The 42-day month grid around a date (default today)
async fn month_grid(
    Query(query): Query<GridQuery>,
) -> Result<Json<ApiResponse<CalendarGrid>>, AppError> {
    let reference = match query.date.as_deref() {
        Some(date) => CalendarDate::parse(date)?,
        None => CalendarDate::today(),
    };

    Ok(ApiResponse::new("Success", build_grid(reference)))
}

/// POST /api/event/create - Create a new event
async fn create_event(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(req): Json<NewEvent>,
) -> Result<Json<ApiResponse<Event>>, AppError> {
    let event = state
        .store()
        .write()
        .await
        .commit(|store| store.create(&user_id, req))?;

    tracing::info!(%user_id, id = %event.id, date = %event.date, "created event");

    Ok(ApiResponse::new("Event has been created successfully", event))
}

/// PUT /api/event/:id/edit - Replace an event's fields
async fn update_event(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
    Json(req): Json<NewEvent>,
) -> Result<Json<ApiResponse<Event>>, AppError> {
    let event = state
        .store()
        .write()
        .await
        .commit(|store| store.update(&user_id, &id, req))?;

    tracing::info!(%user_id, %id, "updated event");

    Ok(ApiResponse::new("Event has been updated successfully", event))
}

/// DELETE /api/event/:id/remove - Delete an event
async fn delete_event(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state
        .store()
        .write()
        .await
        .commit(|store| store.delete(&user_id, &id))?;

    tracing::info!(%user_id, %id, "deleted event");

    Ok(ApiResponse::message("Event has been deleted successfully"))
}
