use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::{ServiceError, ServiceResult};
use crate::model::{NewShift, Patch, Shift, WeekSchedule};
use crate::store::Store;

/// Upsert a shift by its unique (user, date, start, end) window.
///
/// An existing window only has its metadata patched, so re-posting identical
/// windows is safe. A fresh shift gets an empty attendance shell for its
/// owner; clock-in/out later mutate that shell. No start < end validation
/// happens here; an inverted window is stored and reports zero hours.
pub async fn schedule_shift(
    store: &impl Store,
    user_id: u64,
    work_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    role: Patch<String>,
    location: Patch<String>,
) -> ServiceResult<Shift> {
    if let Some(existing) = store
        .shift_by_window(user_id, work_date, start_time, end_time)
        .await?
    {
        let shift = if role.is_keep() && location.is_keep() {
            existing
        } else {
            store.update_shift_meta(existing.id, role, location).await?
        };
        return Ok(shift);
    }

    let shift = store
        .insert_shift(NewShift {
            user_id,
            work_date,
            start_time,
            end_time,
            role: role.into_option(),
            location: location.into_option(),
        })
        .await?;

    if store.attendance_for(shift.id, user_id).await?.is_none() {
        store.insert_attendance(shift.id, user_id, false).await?;
    }

    Ok(shift)
}

/// Schedule up to seven shifts relative to `week_start`. `windows[offset]`
/// holds the (start, end) pair for that day; `None` offsets are skipped
/// entirely rather than treated as day-off shifts.
///
/// With `skip_existing`, colliding windows are metadata-patched and reported
/// under `skipped`. Without it, the first collision aborts the batch with
/// `DuplicateShift`; days already written in this call remain committed.
pub async fn schedule_week(
    store: &impl Store,
    user_id: u64,
    week_start: NaiveDate,
    windows: &[Option<(NaiveTime, NaiveTime)>; 7],
    role: Patch<String>,
    location: Patch<String>,
    skip_existing: bool,
) -> ServiceResult<WeekSchedule> {
    let mut created = Vec::new();
    let mut skipped = Vec::new();

    for (offset, window) in windows.iter().enumerate() {
        let Some((start, end)) = window else {
            continue;
        };
        let work_day = week_start + Duration::days(offset as i64);

        if let Some(existing) = store
            .shift_by_window(user_id, work_day, *start, *end)
            .await?
        {
            if !skip_existing {
                return Err(ServiceError::DuplicateShift);
            }
            let shift = if role.is_keep() && location.is_keep() {
                existing
            } else {
                store
                    .update_shift_meta(existing.id, role.clone(), location.clone())
                    .await?
            };
            skipped.push(shift);
            continue;
        }

        created.push(
            schedule_shift(
                store,
                user_id,
                work_day,
                *start,
                *end,
                role.clone(),
                location.clone(),
            )
            .await?,
        );
    }

    Ok(WeekSchedule { created, skipped })
}
