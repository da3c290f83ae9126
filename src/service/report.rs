use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::error::ServiceResult;
use crate::model::report::round2;
use crate::model::{ShiftDetail, UserTotals, WeeklyReport};
use crate::store::Store;

/// Aggregate scheduled vs. worked hours over [week_start, week_start + 6].
///
/// Each shift contributes its scheduled duration and, when an attendance
/// record with both timestamps exists, its worked hours to the owner's
/// running totals. Totals are rounded to two decimals only after the whole
/// week is summed; detail rows are rounded individually.
pub async fn weekly_report(store: &impl Store, week_start: NaiveDate) -> ServiceResult<WeeklyReport> {
    let week_end = week_start + Duration::days(6);
    let shifts = store.shifts_in_range(week_start, week_end).await?;

    let mut totals_per_user: BTreeMap<u64, UserTotals> = BTreeMap::new();
    let mut details = Vec::with_capacity(shifts.len());

    for shift in shifts {
        let scheduled = shift.duration_hours();
        let attendance = store.attendance_for(shift.id, shift.user_id).await?;
        let worked = attendance.as_ref().map_or(0.0, |a| a.hours_worked());

        let username = match totals_per_user.get(&shift.user_id) {
            Some(t) => t.username.clone(),
            None => store
                .user_by_id(shift.user_id)
                .await?
                .map(|u| u.username)
                .unwrap_or_default(),
        };

        let totals = totals_per_user
            .entry(shift.user_id)
            .or_insert_with(|| UserTotals {
                username: username.clone(),
                scheduled_hours: 0.0,
                worked_hours: 0.0,
            });
        totals.scheduled_hours += scheduled;
        totals.worked_hours += worked;

        details.push(ShiftDetail {
            id: shift.id,
            user_id: shift.user_id,
            username,
            work_date: shift.work_date,
            start_time: shift.start_time,
            end_time: shift.end_time,
            role: shift.role,
            location: shift.location,
            scheduled_hours: round2(scheduled),
            worked_hours: round2(worked),
            time_in: attendance.as_ref().and_then(|a| a.time_in),
            time_out: attendance.as_ref().and_then(|a| a.time_out),
            approved: attendance.map_or(false, |a| a.approved),
        });
    }

    for totals in totals_per_user.values_mut() {
        totals.scheduled_hours = round2(totals.scheduled_hours);
        totals.worked_hours = round2(totals.worked_hours);
    }

    Ok(WeeklyReport {
        week_start,
        week_end,
        totals_per_user,
        shifts: details,
    })
}
