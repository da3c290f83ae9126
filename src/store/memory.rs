use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{NaiveDate, NaiveTime};

use super::{Store, StoreError};
use crate::model::{Attendance, NewShift, Patch, RosterEntry, Shift, User};

#[derive(Default)]
struct Inner {
    users: BTreeMap<u64, User>,
    shifts: BTreeMap<u64, Shift>,
    attendance: BTreeMap<u64, Attendance>,
    next_user_id: u64,
    next_shift_id: u64,
    next_attendance_id: u64,
}

/// In-memory store with the same uniqueness guarantees as the MySQL schema.
/// Used by the test suites so the services run without a database.
#[derive(Default)]
pub struct MemStore {
    inner: Mutex<Inner>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemStore {
    async fn insert_user(&self, username: &str, is_admin: bool) -> Result<User, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.values().any(|u| u.username == username) {
            return Err(StoreError::Duplicate);
        }
        inner.next_user_id += 1;
        let user = User {
            id: inner.next_user_id,
            username: username.to_string(),
            is_admin,
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn user_by_id(&self, id: u64) -> Result<Option<User>, StoreError> {
        Ok(self.inner.lock().unwrap().users.get(&id).cloned())
    }

    async fn shift_by_window(
        &self,
        user_id: u64,
        work_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Option<Shift>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .shifts
            .values()
            .find(|s| {
                s.user_id == user_id
                    && s.work_date == work_date
                    && s.start_time == start_time
                    && s.end_time == end_time
            })
            .cloned())
    }

    async fn insert_shift(&self, shift: NewShift) -> Result<Shift, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let collision = inner.shifts.values().any(|s| {
            s.user_id == shift.user_id
                && s.work_date == shift.work_date
                && s.start_time == shift.start_time
                && s.end_time == shift.end_time
        });
        if collision {
            return Err(StoreError::Duplicate);
        }
        inner.next_shift_id += 1;
        let stored = Shift {
            id: inner.next_shift_id,
            user_id: shift.user_id,
            work_date: shift.work_date,
            start_time: shift.start_time,
            end_time: shift.end_time,
            role: shift.role,
            location: shift.location,
        };
        inner.shifts.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update_shift_meta(
        &self,
        id: u64,
        role: Patch<String>,
        location: Patch<String>,
    ) -> Result<Shift, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let shift = inner
            .shifts
            .get_mut(&id)
            .ok_or(StoreError::Database(sqlx::Error::RowNotFound))?;
        role.apply(&mut shift.role);
        location.apply(&mut shift.location);
        Ok(shift.clone())
    }

    async fn shifts_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Shift>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut shifts: Vec<Shift> = inner
            .shifts
            .values()
            .filter(|s| s.work_date >= start && s.work_date <= end)
            .cloned()
            .collect();
        shifts.sort_by_key(|s| (s.work_date, s.start_time, s.id));
        Ok(shifts)
    }

    async fn roster_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RosterEntry>, StoreError> {
        let shifts = self.shifts_in_range(start, end).await?;
        let inner = self.inner.lock().unwrap();
        Ok(shifts
            .into_iter()
            .map(|s| {
                let username = inner
                    .users
                    .get(&s.user_id)
                    .map(|u| u.username.clone())
                    .unwrap_or_default();
                RosterEntry {
                    id: s.id,
                    user_id: s.user_id,
                    username,
                    work_date: s.work_date,
                    start_time: s.start_time,
                    end_time: s.end_time,
                    role: s.role,
                    location: s.location,
                }
            })
            .collect())
    }

    async fn attendance_for(
        &self,
        shift_id: u64,
        user_id: u64,
    ) -> Result<Option<Attendance>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .attendance
            .values()
            .find(|a| a.shift_id == shift_id && a.user_id == user_id)
            .cloned())
    }

    async fn attendance_by_id(&self, id: u64) -> Result<Option<Attendance>, StoreError> {
        Ok(self.inner.lock().unwrap().attendance.get(&id).cloned())
    }

    async fn attendance_for_user(&self, user_id: u64) -> Result<Vec<Attendance>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .attendance
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn attendance_for_shift(&self, shift_id: u64) -> Result<Vec<Attendance>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .attendance
            .values()
            .filter(|a| a.shift_id == shift_id)
            .cloned()
            .collect())
    }

    async fn insert_attendance(
        &self,
        shift_id: u64,
        user_id: u64,
        approved: bool,
    ) -> Result<Attendance, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let collision = inner
            .attendance
            .values()
            .any(|a| a.shift_id == shift_id && a.user_id == user_id);
        if collision {
            return Err(StoreError::Duplicate);
        }
        inner.next_attendance_id += 1;
        let record = Attendance {
            id: inner.next_attendance_id,
            shift_id,
            user_id,
            time_in: None,
            time_out: None,
            approved,
        };
        inner.attendance.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update_attendance(&self, record: &Attendance) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let stored = inner
            .attendance
            .get_mut(&record.id)
            .ok_or(StoreError::Database(sqlx::Error::RowNotFound))?;
        *stored = record.clone();
        Ok(())
    }
}
