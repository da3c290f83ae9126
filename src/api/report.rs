use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::service::report;
use crate::store::MySqlStore;

#[derive(Deserialize, IntoParams)]
pub struct WeeklyQuery {
    /// First day of the 7-day window (callers typically pass a Monday or
    /// Sunday; any date works)
    #[param(value_type = String, format = "date", example = "2023-12-31")]
    pub week_start: NaiveDate,
}

/// Scheduled vs. worked hours per user for one week, with per-shift detail.
#[utoipa::path(
    get,
    path = "/api/v1/report/weekly",
    params(WeeklyQuery),
    responses(
        (status = 200, description = "Weekly report", body = WeeklyReport),
        (status = 400, description = "Malformed query"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
pub async fn weekly(
    store: web::Data<MySqlStore>,
    query: web::Query<WeeklyQuery>,
) -> actix_web::Result<impl Responder> {
    let report = report::weekly_report(store.get_ref(), query.week_start).await?;
    Ok(HttpResponse::Ok().json(report))
}
