mod common;

use common::{d, dt, seed_shift, seed_user};
use pretty_assertions::assert_eq;

use rosterd::clock::FixedClock;
use rosterd::service::{report, tracker};
use rosterd::store::MemStore;

#[actix_web::test]
async fn empty_week_yields_empty_report() {
    let store = MemStore::new();
    seed_user(&store, "bob").await;

    let report = report::weekly_report(&store, d("2023-12-31")).await.unwrap();

    assert_eq!(report.week_start, d("2023-12-31"));
    assert_eq!(report.week_end, d("2024-01-06"));
    assert!(report.totals_per_user.is_empty());
    assert!(report.shifts.is_empty());
}

#[actix_web::test]
async fn bob_works_four_of_eight_scheduled_hours() {
    let store = MemStore::new();
    let bob = seed_user(&store, "bob").await;
    let shift = seed_shift(&store, bob.id, "2024-01-01", "09:00", "17:00").await;
    assert_eq!(shift.duration_hours(), 8.0);

    let clock = FixedClock(dt("2024-01-01T09:05"));
    tracker::clock_in(&store, &clock, bob.id, shift.id, None)
        .await
        .unwrap();
    tracker::clock_out(
        &store,
        &clock,
        bob.id,
        shift.id,
        Some(dt("2024-01-01T13:05")),
    )
    .await
    .unwrap();

    // Sunday-start week covering the Monday shift
    let report = report::weekly_report(&store, d("2023-12-31")).await.unwrap();

    let totals = report.totals_per_user.get(&bob.id).expect("bob in totals");
    assert_eq!(totals.username, "bob");
    assert_eq!(totals.scheduled_hours, 8.0);
    assert_eq!(totals.worked_hours, 4.0);

    assert_eq!(report.shifts.len(), 1);
    let detail = &report.shifts[0];
    assert_eq!(detail.username, "bob");
    assert_eq!(detail.scheduled_hours, 8.0);
    assert_eq!(detail.worked_hours, 4.0);
    assert_eq!(detail.time_in, Some(dt("2024-01-01T09:05")));
    assert_eq!(detail.time_out, Some(dt("2024-01-01T13:05")));
    assert!(!detail.approved);
}

#[actix_web::test]
async fn totals_accumulate_across_a_users_shifts() {
    let store = MemStore::new();
    let bob = seed_user(&store, "bob").await;
    let alice = seed_user(&store, "alice").await;

    let s1 = seed_shift(&store, bob.id, "2024-01-01", "09:00", "17:00").await;
    seed_shift(&store, bob.id, "2024-01-02", "09:00", "13:00").await;
    seed_shift(&store, alice.id, "2024-01-03", "10:00", "16:00").await;

    let clock = FixedClock(dt("2024-01-01T09:00"));
    tracker::clock_in(&store, &clock, bob.id, s1.id, None)
        .await
        .unwrap();
    tracker::clock_out(&store, &clock, bob.id, s1.id, Some(dt("2024-01-01T17:00")))
        .await
        .unwrap();

    let report = report::weekly_report(&store, d("2023-12-31")).await.unwrap();

    assert_eq!(report.totals_per_user.len(), 2);
    let bob_totals = &report.totals_per_user[&bob.id];
    assert_eq!(bob_totals.scheduled_hours, 12.0);
    assert_eq!(bob_totals.worked_hours, 8.0);

    let alice_totals = &report.totals_per_user[&alice.id];
    assert_eq!(alice_totals.scheduled_hours, 6.0);
    assert_eq!(alice_totals.worked_hours, 0.0);

    assert_eq!(report.shifts.len(), 3);
}

#[actix_web::test]
async fn hours_are_rounded_to_two_decimals() {
    let store = MemStore::new();
    let bob = seed_user(&store, "bob").await;

    // 20 minutes scheduled = 0.333... hours
    seed_shift(&store, bob.id, "2024-01-01", "09:00", "09:20").await;

    let report = report::weekly_report(&store, d("2024-01-01")).await.unwrap();
    assert_eq!(report.totals_per_user[&bob.id].scheduled_hours, 0.33);
    assert_eq!(report.shifts[0].scheduled_hours, 0.33);
}

#[actix_web::test]
async fn shifts_outside_the_window_are_excluded() {
    let store = MemStore::new();
    let bob = seed_user(&store, "bob").await;

    seed_shift(&store, bob.id, "2024-01-06", "09:00", "17:00").await;
    seed_shift(&store, bob.id, "2024-01-07", "09:00", "17:00").await;

    let report = report::weekly_report(&store, d("2023-12-31")).await.unwrap();

    // Only the shift on week_end day (Jan 6) is in range
    assert_eq!(report.shifts.len(), 1);
    assert_eq!(report.shifts[0].work_date, d("2024-01-06"));
    assert_eq!(report.totals_per_user[&bob.id].scheduled_hours, 8.0);
}

#[actix_web::test]
async fn zero_duration_shift_contributes_nothing() {
    let store = MemStore::new();
    let bob = seed_user(&store, "bob").await;

    seed_shift(&store, bob.id, "2024-01-01", "17:00", "09:00").await;

    let report = report::weekly_report(&store, d("2024-01-01")).await.unwrap();
    assert_eq!(report.totals_per_user[&bob.id].scheduled_hours, 0.0);
    assert_eq!(report.shifts[0].scheduled_hours, 0.0);
}
