use chrono::{NaiveDate, NaiveTime};
use sqlx::MySqlPool;

use super::{Store, StoreError};
use crate::model::{Attendance, NewShift, Patch, RosterEntry, Shift, User};

/// sqlx-backed store. Uses the runtime query API throughout; unique-key
/// enforcement lives in the schema (see `db::init_schema`).
#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn shift_by_id(&self, id: u64) -> Result<Shift, StoreError> {
        let shift = sqlx::query_as::<_, Shift>(
            r#"
            SELECT id, user_id, work_date, start_time, end_time, role, location
            FROM shifts
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(shift)
    }
}

impl Store for MySqlStore {
    async fn insert_user(&self, username: &str, is_admin: bool) -> Result<User, StoreError> {
        let result = sqlx::query("INSERT INTO users (username, is_admin) VALUES (?, ?)")
            .bind(username)
            .bind(is_admin)
            .execute(&self.pool)
            .await?;

        Ok(User {
            id: result.last_insert_id(),
            username: username.to_string(),
            is_admin,
        })
    }

    async fn user_by_id(&self, id: u64) -> Result<Option<User>, StoreError> {
        let user =
            sqlx::query_as::<_, User>("SELECT id, username, is_admin FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(user)
    }

    async fn shift_by_window(
        &self,
        user_id: u64,
        work_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Option<Shift>, StoreError> {
        let shift = sqlx::query_as::<_, Shift>(
            r#"
            SELECT id, user_id, work_date, start_time, end_time, role, location
            FROM shifts
            WHERE user_id = ? AND work_date = ? AND start_time = ? AND end_time = ?
            "#,
        )
        .bind(user_id)
        .bind(work_date)
        .bind(start_time)
        .bind(end_time)
        .fetch_optional(&self.pool)
        .await?;
        Ok(shift)
    }

    async fn insert_shift(&self, shift: NewShift) -> Result<Shift, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO shifts (user_id, work_date, start_time, end_time, role, location)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(shift.user_id)
        .bind(shift.work_date)
        .bind(shift.start_time)
        .bind(shift.end_time)
        .bind(&shift.role)
        .bind(&shift.location)
        .execute(&self.pool)
        .await?;

        Ok(Shift {
            id: result.last_insert_id(),
            user_id: shift.user_id,
            work_date: shift.work_date,
            start_time: shift.start_time,
            end_time: shift.end_time,
            role: shift.role,
            location: shift.location,
        })
    }

    async fn update_shift_meta(
        &self,
        id: u64,
        role: Patch<String>,
        location: Patch<String>,
    ) -> Result<Shift, StoreError> {
        // Build the SET clause dynamically so Keep fields are never written.
        let mut sets: Vec<&str> = Vec::new();
        let mut values: Vec<Option<String>> = Vec::new();

        if !role.is_keep() {
            sets.push("role = ?");
            values.push(role.into_option());
        }
        if !location.is_keep() {
            sets.push("location = ?");
            values.push(location.into_option());
        }

        if !sets.is_empty() {
            let sql = format!("UPDATE shifts SET {} WHERE id = ?", sets.join(", "));
            let mut query = sqlx::query(&sql);
            for value in values {
                query = query.bind(value);
            }
            query.bind(id).execute(&self.pool).await?;
        }

        self.shift_by_id(id).await
    }

    async fn shifts_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Shift>, StoreError> {
        let shifts = sqlx::query_as::<_, Shift>(
            r#"
            SELECT id, user_id, work_date, start_time, end_time, role, location
            FROM shifts
            WHERE work_date BETWEEN ? AND ?
            ORDER BY work_date ASC, start_time ASC, id ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;
        Ok(shifts)
    }

    async fn roster_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RosterEntry>, StoreError> {
        let entries = sqlx::query_as::<_, RosterEntry>(
            r#"
            SELECT s.id, s.user_id, u.username, s.work_date,
                   s.start_time, s.end_time, s.role, s.location
            FROM shifts s
            JOIN users u ON u.id = s.user_id
            WHERE s.work_date BETWEEN ? AND ?
            ORDER BY s.work_date ASC, s.start_time ASC, s.id ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    async fn attendance_for(
        &self,
        shift_id: u64,
        user_id: u64,
    ) -> Result<Option<Attendance>, StoreError> {
        let record = sqlx::query_as::<_, Attendance>(
            r#"
            SELECT id, shift_id, user_id, time_in, time_out, approved
            FROM attendance
            WHERE shift_id = ? AND user_id = ?
            "#,
        )
        .bind(shift_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn attendance_by_id(&self, id: u64) -> Result<Option<Attendance>, StoreError> {
        let record = sqlx::query_as::<_, Attendance>(
            r#"
            SELECT id, shift_id, user_id, time_in, time_out, approved
            FROM attendance
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn attendance_for_user(&self, user_id: u64) -> Result<Vec<Attendance>, StoreError> {
        let records = sqlx::query_as::<_, Attendance>(
            r#"
            SELECT id, shift_id, user_id, time_in, time_out, approved
            FROM attendance
            WHERE user_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    async fn attendance_for_shift(&self, shift_id: u64) -> Result<Vec<Attendance>, StoreError> {
        let records = sqlx::query_as::<_, Attendance>(
            r#"
            SELECT id, shift_id, user_id, time_in, time_out, approved
            FROM attendance
            WHERE shift_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(shift_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    async fn insert_attendance(
        &self,
        shift_id: u64,
        user_id: u64,
        approved: bool,
    ) -> Result<Attendance, StoreError> {
        let result =
            sqlx::query("INSERT INTO attendance (shift_id, user_id, approved) VALUES (?, ?, ?)")
                .bind(shift_id)
                .bind(user_id)
                .bind(approved)
                .execute(&self.pool)
                .await?;

        Ok(Attendance {
            id: result.last_insert_id(),
            shift_id,
            user_id,
            time_in: None,
            time_out: None,
            approved,
        })
    }

    async fn update_attendance(&self, record: &Attendance) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            UPDATE attendance
            SET time_in = ?, time_out = ?, approved = ?
            WHERE id = ?
            "#,
        )
        .bind(record.time_in)
        .bind(record.time_out)
        .bind(record.approved)
        .bind(record.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
