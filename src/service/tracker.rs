use chrono::NaiveDateTime;

use crate::clock::Clock;
use crate::error::{ServiceError, ServiceResult};
use crate::model::Attendance;
use crate::store::Store;

/// Record the actual start of work. The attendance shell must already exist
/// (the scheduler creates it with the shift). Repeated calls are no-ops once
/// `time_in` is set; the first timestamp wins.
pub async fn clock_in(
    store: &impl Store,
    clock: &impl Clock,
    user_id: u64,
    shift_id: u64,
    when: Option<NaiveDateTime>,
) -> ServiceResult<Attendance> {
    let mut record = store
        .attendance_for(shift_id, user_id)
        .await?
        .ok_or(ServiceError::RecordNotFound)?;

    if record.time_in.is_some() {
        return Ok(record);
    }

    record.time_in = Some(when.unwrap_or_else(|| clock.now()));
    store.update_attendance(&record).await?;
    Ok(record)
}

/// Record the actual end of work. Requires a prior clock-in; idempotent once
/// `time_out` is set.
pub async fn clock_out(
    store: &impl Store,
    clock: &impl Clock,
    user_id: u64,
    shift_id: u64,
    when: Option<NaiveDateTime>,
) -> ServiceResult<Attendance> {
    let mut record = store
        .attendance_for(shift_id, user_id)
        .await?
        .ok_or(ServiceError::RecordNotFound)?;

    if record.time_in.is_none() {
        return Err(ServiceError::InvalidSequence);
    }
    if record.time_out.is_some() {
        return Ok(record);
    }

    record.time_out = Some(when.unwrap_or_else(|| clock.now()));
    store.update_attendance(&record).await?;
    Ok(record)
}

/// Fetch-or-create the attendance shell for (shift, user), patching the
/// approved flag when a differing value is supplied.
pub async fn ensure_attendance_record(
    store: &impl Store,
    user_id: u64,
    shift_id: u64,
    approved: Option<bool>,
) -> ServiceResult<Attendance> {
    if user_id == 0 || shift_id == 0 {
        return Err(ServiceError::InvalidInput(
            "user_id and shift_id are required".into(),
        ));
    }

    if let Some(mut record) = store.attendance_for(shift_id, user_id).await? {
        if let Some(flag) = approved {
            if flag != record.approved {
                record.approved = flag;
                store.update_attendance(&record).await?;
            }
        }
        return Ok(record);
    }

    Ok(store
        .insert_attendance(shift_id, user_id, approved.unwrap_or(false))
        .await?)
}

/// Single attendance record by id, for detail views.
pub async fn get_attendance(
    store: &impl Store,
    attendance_id: u64,
) -> ServiceResult<Option<Attendance>> {
    Ok(store.attendance_by_id(attendance_id).await?)
}

/// Attendance listing filtered by user or by shift. The user filter wins when
/// both are supplied; at least one is required.
pub async fn list_attendance(
    store: &impl Store,
    user_id: Option<u64>,
    shift_id: Option<u64>,
) -> ServiceResult<Vec<Attendance>> {
    match (user_id, shift_id) {
        (Some(user_id), _) => Ok(store.attendance_for_user(user_id).await?),
        (None, Some(shift_id)) => Ok(store.attendance_for_shift(shift_id).await?),
        (None, None) => Err(ServiceError::InvalidInput(
            "provide user_id or shift_id".into(),
        )),
    }
}

pub async fn approve_attendance(
    store: &impl Store,
    user_id: u64,
    shift_id: u64,
) -> ServiceResult<Attendance> {
    set_approved(store, user_id, shift_id, true).await
}

pub async fn unapprove_attendance(
    store: &impl Store,
    user_id: u64,
    shift_id: u64,
) -> ServiceResult<Attendance> {
    set_approved(store, user_id, shift_id, false).await
}

// Writes only when the flag actually changes.
async fn set_approved(
    store: &impl Store,
    user_id: u64,
    shift_id: u64,
    flag: bool,
) -> ServiceResult<Attendance> {
    let mut record = store
        .attendance_for(shift_id, user_id)
        .await?
        .ok_or(ServiceError::RecordNotFound)?;

    if record.approved != flag {
        record.approved = flag;
        store.update_attendance(&record).await?;
    }
    Ok(record)
}
