use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDateTime;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::clock::SystemClock;
use crate::service::tracker;
use crate::store::MySqlStore;

#[derive(Deserialize, ToSchema)]
pub struct ClockPayload {
    #[schema(example = 1)]
    pub user_id: u64,

    #[schema(example = 1)]
    pub shift_id: u64,

    /// Defaults to the current local time when omitted.
    #[schema(example = "2024-01-01T09:05:00", value_type = String, format = "date-time", nullable = true)]
    #[serde(default)]
    pub when: Option<NaiveDateTime>,
}

#[derive(Deserialize, ToSchema)]
pub struct EnsurePayload {
    #[schema(example = 1)]
    pub user_id: u64,

    #[schema(example = 1)]
    pub shift_id: u64,

    #[schema(example = false, nullable = true)]
    #[serde(default)]
    pub approved: Option<bool>,
}

#[derive(Deserialize, IntoParams)]
pub struct AttendanceFilter {
    /// List one user's attendance records
    #[param(example = 1)]
    pub user_id: Option<u64>,
    /// List all attendance on one shift
    #[param(example = 1)]
    pub shift_id: Option<u64>,
}

#[derive(Deserialize, ToSchema)]
pub struct ApprovePayload {
    #[schema(example = 1)]
    pub user_id: u64,

    #[schema(example = 1)]
    pub shift_id: u64,
}

/// Clock-in endpoint. Repeating the call once clocked in is a no-op.
#[utoipa::path(
    post,
    path = "/api/v1/attendance/clock-in",
    request_body = ClockPayload,
    responses(
        (status = 200, description = "Clocked in", body = Attendance),
        (status = 404, description = "No attendance record for this shift/user", body = Object, example = json!({
            "message": "attendance record not found for this shift/user"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn clock_in(
    store: web::Data<MySqlStore>,
    payload: web::Json<ClockPayload>,
) -> actix_web::Result<impl Responder> {
    let record = tracker::clock_in(
        store.get_ref(),
        &SystemClock,
        payload.user_id,
        payload.shift_id,
        payload.when,
    )
    .await?;
    Ok(HttpResponse::Ok().json(record))
}

/// Clock-out endpoint. Fails before clock-in; repeating it is a no-op.
#[utoipa::path(
    post,
    path = "/api/v1/attendance/clock-out",
    request_body = ClockPayload,
    responses(
        (status = 200, description = "Clocked out", body = Attendance),
        (status = 400, description = "Clock-out before clock-in", body = Object, example = json!({
            "message": "cannot clock out before clocking in"
        })),
        (status = 404, description = "No attendance record for this shift/user"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn clock_out(
    store: web::Data<MySqlStore>,
    payload: web::Json<ClockPayload>,
) -> actix_web::Result<impl Responder> {
    let record = tracker::clock_out(
        store.get_ref(),
        &SystemClock,
        payload.user_id,
        payload.shift_id,
        payload.when,
    )
    .await?;
    Ok(HttpResponse::Ok().json(record))
}

/// Fetch-or-create the attendance shell for a shift/user pair.
#[utoipa::path(
    post,
    path = "/api/v1/attendance",
    request_body = EnsurePayload,
    responses(
        (status = 200, description = "Attendance record", body = Attendance),
        (status = 400, description = "Missing identifiers", body = Object, example = json!({
            "message": "user_id and shift_id are required"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn ensure_record(
    store: web::Data<MySqlStore>,
    payload: web::Json<EnsurePayload>,
) -> actix_web::Result<impl Responder> {
    let record = tracker::ensure_attendance_record(
        store.get_ref(),
        payload.user_id,
        payload.shift_id,
        payload.approved,
    )
    .await?;
    Ok(HttpResponse::Ok().json(record))
}

/// List attendance records for one user or one shift.
#[utoipa::path(
    get,
    path = "/api/v1/attendance",
    params(AttendanceFilter),
    responses(
        (status = 200, description = "Matching attendance records", body = [Attendance]),
        (status = 400, description = "Neither filter supplied", body = Object, example = json!({
            "message": "provide user_id or shift_id"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_records(
    store: web::Data<MySqlStore>,
    query: web::Query<AttendanceFilter>,
) -> actix_web::Result<impl Responder> {
    let records = tracker::list_attendance(store.get_ref(), query.user_id, query.shift_id).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Fetch one attendance record by id.
#[utoipa::path(
    get,
    path = "/api/v1/attendance/{id}",
    params(
        ("id" = u64, Path, description = "Attendance record id")
    ),
    responses(
        (status = 200, description = "Attendance record", body = Attendance),
        (status = 404, description = "Attendance not found", body = Object, example = json!({
            "message": "Attendance not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn get_record(
    store: web::Data<MySqlStore>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    match tracker::get_attendance(store.get_ref(), id).await? {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "Attendance not found"
        }))),
    }
}

/// Approve an attendance record (admin-gated upstream).
#[utoipa::path(
    put,
    path = "/api/v1/attendance/approve",
    request_body = ApprovePayload,
    responses(
        (status = 200, description = "Approved", body = Attendance),
        (status = 404, description = "No attendance record for this shift/user"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn approve(
    store: web::Data<MySqlStore>,
    payload: web::Json<ApprovePayload>,
) -> actix_web::Result<impl Responder> {
    let record =
        tracker::approve_attendance(store.get_ref(), payload.user_id, payload.shift_id).await?;
    Ok(HttpResponse::Ok().json(record))
}

/// Withdraw approval from an attendance record.
#[utoipa::path(
    put,
    path = "/api/v1/attendance/unapprove",
    request_body = ApprovePayload,
    responses(
        (status = 200, description = "Approval withdrawn", body = Attendance),
        (status = 404, description = "No attendance record for this shift/user"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn unapprove(
    store: web::Data<MySqlStore>,
    payload: web::Json<ApprovePayload>,
) -> actix_web::Result<impl Responder> {
    let record =
        tracker::unapprove_attendance(store.get_ref(), payload.user_id, payload.shift_id).await?;
    Ok(HttpResponse::Ok().json(record))
}
