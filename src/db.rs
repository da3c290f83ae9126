use anyhow::Context;
use sqlx::MySqlPool;

pub async fn init_db(database_url: &str) -> MySqlPool {
    MySqlPool::connect(database_url)
        .await
        .expect("Failed to connect to database")
}

/// Idempotent schema bootstrap. The unique keys here are what the scheduler
/// and tracker lean on: one window per (user, date, start, end), one
/// attendance row per (shift, user).
pub async fn init_schema(pool: &MySqlPool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id        BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            username  VARCHAR(20) NOT NULL,
            is_admin  BOOLEAN NOT NULL DEFAULT FALSE,
            UNIQUE KEY uq_users_username (username)
        )
        "#,
    )
    .execute(pool)
    .await
    .context("create users table")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shifts (
            id          BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            user_id     BIGINT UNSIGNED NOT NULL,
            work_date   DATE NOT NULL,
            start_time  TIME NOT NULL,
            end_time    TIME NOT NULL,
            role        VARCHAR(50) NULL,
            location    VARCHAR(100) NULL,
            UNIQUE KEY uq_user_shift_window (user_id, work_date, start_time, end_time),
            KEY idx_shifts_work_date (work_date),
            CONSTRAINT fk_shifts_user FOREIGN KEY (user_id) REFERENCES users (id)
        )
        "#,
    )
    .execute(pool)
    .await
    .context("create shifts table")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id        BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            shift_id  BIGINT UNSIGNED NOT NULL,
            user_id   BIGINT UNSIGNED NOT NULL,
            time_in   DATETIME NULL,
            time_out  DATETIME NULL,
            approved  BOOLEAN NOT NULL DEFAULT FALSE,
            UNIQUE KEY uq_attendance_shift_user (shift_id, user_id),
            KEY idx_attendance_user (user_id),
            CONSTRAINT fk_attendance_shift FOREIGN KEY (shift_id) REFERENCES shifts (id),
            CONSTRAINT fk_attendance_user FOREIGN KEY (user_id) REFERENCES users (id)
        )
        "#,
    )
    .execute(pool)
    .await
    .context("create attendance table")?;

    Ok(())
}
