use std::collections::BTreeMap;

use actix_web::{HttpResponse, Responder, web};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::error::ServiceError;
use crate::model::Patch;
use crate::service::{roster, scheduler};
use crate::store::MySqlStore;

// "09:00" from clients, "09:00:00" accepted for round-tripping
fn parse_time(value: &str) -> Result<NaiveTime, ServiceError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| ServiceError::InvalidInput(format!("invalid time of day: {value}")))
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize, ToSchema)]
pub struct ScheduleShift {
    #[schema(example = 1)]
    pub user_id: u64,

    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub work_date: NaiveDate,

    #[schema(example = "09:00")]
    pub start_time: String,

    #[schema(example = "17:00")]
    pub end_time: String,

    /// Omit to keep the stored value, send null to clear it.
    #[schema(value_type = Option<String>, example = "cashier", nullable = true)]
    #[serde(default)]
    pub role: Patch<String>,

    /// Omit to keep the stored value, send null to clear it.
    #[schema(value_type = Option<String>, example = "main store", nullable = true)]
    #[serde(default)]
    pub location: Patch<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct ScheduleWeek {
    #[schema(example = 1)]
    pub user_id: u64,

    #[schema(example = "2023-12-31", value_type = String, format = "date")]
    pub week_start: NaiveDate,

    /// Day offset (0..6 relative to week_start) to (start, end) pair. Missing
    /// or null offsets are skipped, not scheduled as day-off shifts.
    #[schema(value_type = Object, example = json!({"0": ["09:00", "17:00"], "2": ["09:00", "17:00"]}))]
    pub windows: BTreeMap<u8, Option<(String, String)>>,

    #[schema(value_type = Option<String>, example = "cashier", nullable = true)]
    #[serde(default)]
    pub role: Patch<String>,

    #[schema(value_type = Option<String>, example = "main store", nullable = true)]
    #[serde(default)]
    pub location: Patch<String>,

    /// When false, a colliding window fails the batch with 409.
    #[schema(example = true)]
    #[serde(default = "default_true")]
    pub skip_existing: bool,
}

#[derive(Deserialize, IntoParams)]
pub struct RosterQuery {
    /// First date of the range, inclusive
    #[param(value_type = String, format = "date", example = "2024-01-01")]
    pub start_date: NaiveDate,
    /// Last date of the range, inclusive
    #[param(value_type = String, format = "date", example = "2024-01-07")]
    pub end_date: NaiveDate,
}

/// Schedule one shift (idempotent upsert on the exact window).
#[utoipa::path(
    post,
    path = "/api/v1/shifts",
    request_body = ScheduleShift,
    responses(
        (status = 200, description = "Shift scheduled or updated", body = Shift),
        (status = 400, description = "Malformed payload"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Shifts"
)]
pub async fn schedule_shift(
    store: web::Data<MySqlStore>,
    payload: web::Json<ScheduleShift>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    let start = parse_time(&payload.start_time)?;
    let end = parse_time(&payload.end_time)?;

    let shift = scheduler::schedule_shift(
        store.get_ref(),
        payload.user_id,
        payload.work_date,
        start,
        end,
        payload.role,
        payload.location,
    )
    .await?;

    Ok(HttpResponse::Ok().json(shift))
}

/// Schedule a week of shifts in one call.
#[utoipa::path(
    post,
    path = "/api/v1/shifts/week",
    request_body = ScheduleWeek,
    responses(
        (status = 200, description = "Batch outcome", body = WeekSchedule),
        (status = 400, description = "Malformed payload"),
        (status = 409, description = "Duplicate shift with skip_existing=false", body = Object, example = json!({
            "message": "duplicate shift exists"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Shifts"
)]
pub async fn schedule_week(
    store: web::Data<MySqlStore>,
    payload: web::Json<ScheduleWeek>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();

    let mut windows: [Option<(NaiveTime, NaiveTime)>; 7] = Default::default();
    for (offset, pair) in &payload.windows {
        // offsets past the week are ignored
        let Some(slot) = windows.get_mut(*offset as usize) else {
            continue;
        };
        if let Some((start, end)) = pair {
            *slot = Some((parse_time(start)?, parse_time(end)?));
        }
    }

    let outcome = scheduler::schedule_week(
        store.get_ref(),
        payload.user_id,
        payload.week_start,
        &windows,
        payload.role,
        payload.location,
        payload.skip_existing,
    )
    .await?;

    Ok(HttpResponse::Ok().json(outcome))
}

/// Roster across all users for a date range.
#[utoipa::path(
    get,
    path = "/api/v1/roster",
    params(RosterQuery),
    responses(
        (status = 200, description = "Shifts ordered by date then start time", body = [RosterEntry]),
        (status = 400, description = "Malformed query"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Shifts"
)]
pub async fn get_roster(
    store: web::Data<MySqlStore>,
    query: web::Query<RosterQuery>,
) -> actix_web::Result<impl Responder> {
    let entries = roster::get_roster(store.get_ref(), query.start_date, query.end_date).await?;
    Ok(HttpResponse::Ok().json(entries))
}
