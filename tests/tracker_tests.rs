mod common;

use common::{dt, seed_shift, seed_user};
use pretty_assertions::assert_eq;

use rosterd::clock::FixedClock;
use rosterd::error::ServiceError;
use rosterd::service::tracker;
use rosterd::store::{MemStore, Store};

#[actix_web::test]
async fn clock_in_defaults_to_the_injected_clock() {
    let store = MemStore::new();
    let user = seed_user(&store, "bob").await;
    let shift = seed_shift(&store, user.id, "2024-01-01", "09:00", "17:00").await;
    let clock = FixedClock(dt("2024-01-01T09:05"));

    let record = tracker::clock_in(&store, &clock, user.id, shift.id, None)
        .await
        .unwrap();
    assert_eq!(record.time_in, Some(dt("2024-01-01T09:05")));
    assert_eq!(record.time_out, None);
}

#[actix_web::test]
async fn repeat_clock_in_keeps_the_first_timestamp() {
    let store = MemStore::new();
    let user = seed_user(&store, "bob").await;
    let shift = seed_shift(&store, user.id, "2024-01-01", "09:00", "17:00").await;
    let clock = FixedClock(dt("2024-01-01T09:05"));

    tracker::clock_in(&store, &clock, user.id, shift.id, None)
        .await
        .unwrap();
    let again = tracker::clock_in(
        &store,
        &clock,
        user.id,
        shift.id,
        Some(dt("2024-01-01T11:00")),
    )
    .await
    .unwrap();

    assert_eq!(again.time_in, Some(dt("2024-01-01T09:05")));
}

#[actix_web::test]
async fn clock_in_without_a_record_is_not_found() {
    let store = MemStore::new();
    let user = seed_user(&store, "bob").await;
    let clock = FixedClock(dt("2024-01-01T09:05"));

    let err = tracker::clock_in(&store, &clock, user.id, 999, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::RecordNotFound));
}

#[actix_web::test]
async fn clock_out_before_clock_in_fails_and_leaves_state_empty() {
    let store = MemStore::new();
    let user = seed_user(&store, "bob").await;
    let shift = seed_shift(&store, user.id, "2024-01-01", "09:00", "17:00").await;
    let clock = FixedClock(dt("2024-01-01T13:05"));

    let err = tracker::clock_out(&store, &clock, user.id, shift.id, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidSequence));

    let record = store.attendance_for(shift.id, user.id).await.unwrap().unwrap();
    assert_eq!(record.time_in, None);
    assert_eq!(record.time_out, None);
}

#[actix_web::test]
async fn clock_out_is_idempotent_after_the_first_call() {
    let store = MemStore::new();
    let user = seed_user(&store, "bob").await;
    let shift = seed_shift(&store, user.id, "2024-01-01", "09:00", "17:00").await;
    let clock = FixedClock(dt("2024-01-01T09:05"));

    tracker::clock_in(&store, &clock, user.id, shift.id, None)
        .await
        .unwrap();
    let first = tracker::clock_out(
        &store,
        &clock,
        user.id,
        shift.id,
        Some(dt("2024-01-01T13:05")),
    )
    .await
    .unwrap();
    let second = tracker::clock_out(
        &store,
        &clock,
        user.id,
        shift.id,
        Some(dt("2024-01-01T18:00")),
    )
    .await
    .unwrap();

    assert_eq!(first.time_out, Some(dt("2024-01-01T13:05")));
    assert_eq!(second.time_out, first.time_out);
    assert_eq!(second.hours_worked(), 4.0);
}

#[actix_web::test]
async fn attendance_json_carries_rounded_hours_worked() {
    let store = MemStore::new();
    let user = seed_user(&store, "bob").await;
    let shift = seed_shift(&store, user.id, "2024-01-01", "09:00", "17:00").await;
    let clock = FixedClock(dt("2024-01-01T09:05"));

    tracker::clock_in(&store, &clock, user.id, shift.id, None)
        .await
        .unwrap();
    let record = tracker::clock_out(
        &store,
        &clock,
        user.id,
        shift.id,
        Some(dt("2024-01-01T13:05")),
    )
    .await
    .unwrap();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["hours_worked"], serde_json::json!(4.0));
    assert_eq!(json["time_in"], serde_json::json!("2024-01-01T09:05:00"));
    assert_eq!(json["approved"], serde_json::json!(false));
}

#[actix_web::test]
async fn attendance_lists_by_user_or_shift() {
    let store = MemStore::new();
    let bob = seed_user(&store, "bob").await;
    let alice = seed_user(&store, "alice").await;
    let s1 = seed_shift(&store, bob.id, "2024-01-01", "09:00", "17:00").await;
    let s2 = seed_shift(&store, bob.id, "2024-01-02", "09:00", "17:00").await;
    seed_shift(&store, alice.id, "2024-01-01", "10:00", "14:00").await;

    let bobs = tracker::list_attendance(&store, Some(bob.id), None)
        .await
        .unwrap();
    let shifts: Vec<u64> = bobs.iter().map(|a| a.shift_id).collect();
    assert_eq!(shifts, vec![s1.id, s2.id]);

    let on_s1 = tracker::list_attendance(&store, None, Some(s1.id))
        .await
        .unwrap();
    assert_eq!(on_s1.len(), 1);
    assert_eq!(on_s1[0].user_id, bob.id);

    let err = tracker::list_attendance(&store, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}

#[actix_web::test]
async fn attendance_fetch_by_id() {
    let store = MemStore::new();
    let user = seed_user(&store, "bob").await;
    let shift = seed_shift(&store, user.id, "2024-01-01", "09:00", "17:00").await;

    let record = store
        .attendance_for(shift.id, user.id)
        .await
        .unwrap()
        .unwrap();

    let found = tracker::get_attendance(&store, record.id).await.unwrap();
    assert_eq!(found.map(|a| a.id), Some(record.id));

    let missing = tracker::get_attendance(&store, 999).await.unwrap();
    assert!(missing.is_none());
}

#[actix_web::test]
async fn ensure_record_rejects_zero_identifiers() {
    let store = MemStore::new();

    let err = tracker::ensure_attendance_record(&store, 0, 1, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));

    let err = tracker::ensure_attendance_record(&store, 1, 0, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}

#[actix_web::test]
async fn ensure_record_creates_then_fetches_and_patches_approved() {
    let store = MemStore::new();
    let user = seed_user(&store, "bob").await;

    // No scheduler involved: shell created directly
    let created = tracker::ensure_attendance_record(&store, user.id, 42, Some(true))
        .await
        .unwrap();
    assert!(created.approved);

    // Same pair again: fetched, flag patched down
    let fetched = tracker::ensure_attendance_record(&store, user.id, 42, Some(false))
        .await
        .unwrap();
    assert_eq!(fetched.id, created.id);
    assert!(!fetched.approved);

    // Omitted flag leaves the stored value alone
    let untouched = tracker::ensure_attendance_record(&store, user.id, 42, None)
        .await
        .unwrap();
    assert!(!untouched.approved);
}

#[actix_web::test]
async fn approve_and_unapprove_toggle_the_flag() {
    let store = MemStore::new();
    let user = seed_user(&store, "bob").await;
    let shift = seed_shift(&store, user.id, "2024-01-01", "09:00", "17:00").await;

    let approved = tracker::approve_attendance(&store, user.id, shift.id)
        .await
        .unwrap();
    assert!(approved.approved);

    // Approving twice is a no-op, not an error
    let again = tracker::approve_attendance(&store, user.id, shift.id)
        .await
        .unwrap();
    assert!(again.approved);

    let withdrawn = tracker::unapprove_attendance(&store, user.id, shift.id)
        .await
        .unwrap();
    assert!(!withdrawn.approved);
}

#[actix_web::test]
async fn approve_without_a_record_is_not_found() {
    let store = MemStore::new();
    let user = seed_user(&store, "bob").await;

    let err = tracker::approve_attendance(&store, user.id, 999)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::RecordNotFound));
}
