use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One scheduled work window. The tuple (user_id, work_date, start_time,
/// end_time) is unique; the window never moves once created.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Shift {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = 1)]
    pub user_id: u64,

    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub work_date: NaiveDate,

    #[schema(example = "09:00:00", value_type = String)]
    pub start_time: NaiveTime,

    #[schema(example = "17:00:00", value_type = String)]
    pub end_time: NaiveTime,

    #[schema(example = "cashier", nullable = true)]
    pub role: Option<String>,

    #[schema(example = "main store", nullable = true)]
    pub location: Option<String>,
}

impl Shift {
    /// Scheduled length in hours. Windows with end <= start do not wrap
    /// overnight; they clamp to zero.
    pub fn duration_hours(&self) -> f64 {
        let start = self.work_date.and_time(self.start_time);
        let end = self.work_date.and_time(self.end_time);
        ((end - start).num_seconds() as f64 / 3600.0).max(0.0)
    }
}

/// Shift columns for insertion, before an id exists.
#[derive(Debug, Clone)]
pub struct NewShift {
    pub user_id: u64,
    pub work_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub role: Option<String>,
    pub location: Option<String>,
}

/// Roster row: a shift joined with its owner's username.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct RosterEntry {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = 1)]
    pub user_id: u64,

    #[schema(example = "bob")]
    pub username: String,

    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub work_date: NaiveDate,

    #[schema(example = "09:00:00", value_type = String)]
    pub start_time: NaiveTime,

    #[schema(example = "17:00:00", value_type = String)]
    pub end_time: NaiveTime,

    #[schema(example = "cashier", nullable = true)]
    pub role: Option<String>,

    #[schema(example = "main store", nullable = true)]
    pub location: Option<String>,
}
