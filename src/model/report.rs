use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use utoipa::ToSchema;

use super::shift::Shift;

/// Running per-user totals inside a weekly report, keyed by user id.
#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
pub struct UserTotals {
    #[schema(example = "bob")]
    pub username: String,

    #[schema(example = 8.0)]
    pub scheduled_hours: f64,

    #[schema(example = 4.0)]
    pub worked_hours: f64,
}

/// One shift row in a weekly report: shift fields plus hours and actual
/// clock timestamps.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShiftDetail {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = 1)]
    pub user_id: u64,

    #[schema(example = "bob")]
    pub username: String,

    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub work_date: NaiveDate,

    #[schema(example = "09:00:00", value_type = String)]
    pub start_time: chrono::NaiveTime,

    #[schema(example = "17:00:00", value_type = String)]
    pub end_time: chrono::NaiveTime,

    #[schema(example = "cashier", nullable = true)]
    pub role: Option<String>,

    #[schema(example = "main store", nullable = true)]
    pub location: Option<String>,

    #[schema(example = 8.0)]
    pub scheduled_hours: f64,

    #[schema(example = 4.0)]
    pub worked_hours: f64,

    #[schema(example = "2024-01-01T09:05:00", value_type = String, nullable = true)]
    pub time_in: Option<NaiveDateTime>,

    #[schema(example = "2024-01-01T13:05:00", value_type = String, nullable = true)]
    pub time_out: Option<NaiveDateTime>,

    #[schema(example = false)]
    pub approved: bool,
}

/// Scheduled-vs-worked aggregation over one 7-day window. Users with no shifts
/// in range do not appear in `totals_per_user`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WeeklyReport {
    #[schema(example = "2023-12-31", value_type = String, format = "date")]
    pub week_start: NaiveDate,

    #[schema(example = "2024-01-06", value_type = String, format = "date")]
    pub week_end: NaiveDate,

    #[schema(value_type = Object)]
    pub totals_per_user: BTreeMap<u64, UserTotals>,

    pub shifts: Vec<ShiftDetail>,
}

/// Outcome of a week-long scheduling batch.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WeekSchedule {
    pub created: Vec<Shift>,
    pub skipped: Vec<Shift>,
}

/// Round to two decimal places, the precision every reported hour figure uses.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
