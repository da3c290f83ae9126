pub mod memory;
pub mod mysql;

use chrono::{NaiveDate, NaiveTime};
use derive_more::Display;

use crate::model::{Attendance, NewShift, Patch, RosterEntry, Shift, User};

pub use memory::MemStore;
pub use mysql::MySqlStore;

/// Persistence failure, kept distinct from business errors. `Duplicate` is how
/// both backends surface a unique-key race; callers relying on the
/// (user, date, start, end) or (shift, user) constraints see it instead of a
/// raw driver error.
#[derive(Debug, Display)]
pub enum StoreError {
    #[display(fmt = "unique constraint violated")]
    Duplicate,
    #[display(fmt = "database error: {}", _0)]
    Database(sqlx::Error),
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        // SQLSTATE 23000: integrity constraint violation (MySQL duplicate key)
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.code().as_deref() == Some("23000") {
                return StoreError::Duplicate;
            }
        }
        StoreError::Database(e)
    }
}

/// Repository surface the services run against. Each call is one transactional
/// unit of work; uniqueness of shift windows and attendance pairs is enforced
/// here, not by application-level locking.
#[allow(async_fn_in_trait)]
pub trait Store {
    async fn insert_user(&self, username: &str, is_admin: bool) -> Result<User, StoreError>;
    async fn user_by_id(&self, id: u64) -> Result<Option<User>, StoreError>;

    /// Probe the unique (user, date, start, end) window.
    async fn shift_by_window(
        &self,
        user_id: u64,
        work_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Option<Shift>, StoreError>;

    async fn insert_shift(&self, shift: NewShift) -> Result<Shift, StoreError>;

    /// Apply a metadata patch (role/location only; the window is immutable) and
    /// return the updated row. `Keep` fields are not written at all.
    async fn update_shift_meta(
        &self,
        id: u64,
        role: Patch<String>,
        location: Patch<String>,
    ) -> Result<Shift, StoreError>;

    /// Shifts with work_date in [start, end], ordered by (date, start time).
    async fn shifts_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Shift>, StoreError>;

    /// Same range and order as `shifts_in_range`, joined with the owner's
    /// username.
    async fn roster_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RosterEntry>, StoreError>;

    async fn attendance_for(
        &self,
        shift_id: u64,
        user_id: u64,
    ) -> Result<Option<Attendance>, StoreError>;

    async fn attendance_by_id(&self, id: u64) -> Result<Option<Attendance>, StoreError>;

    /// All of one user's attendance records, ordered by id.
    async fn attendance_for_user(&self, user_id: u64) -> Result<Vec<Attendance>, StoreError>;

    /// All attendance records on one shift, ordered by id.
    async fn attendance_for_shift(&self, shift_id: u64) -> Result<Vec<Attendance>, StoreError>;

    async fn insert_attendance(
        &self,
        shift_id: u64,
        user_id: u64,
        approved: bool,
    ) -> Result<Attendance, StoreError>;

    /// Persist the mutable attendance fields (time_in, time_out, approved).
    async fn update_attendance(&self, record: &Attendance) -> Result<(), StoreError>;
}
