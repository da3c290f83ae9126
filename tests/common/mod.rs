#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use rosterd::model::{Patch, Shift, User};
use rosterd::service::scheduler;
use rosterd::store::{MemStore, Store};

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
}

pub async fn seed_user(store: &MemStore, username: &str) -> User {
    store.insert_user(username, false).await.unwrap()
}

pub async fn seed_shift(
    store: &MemStore,
    user_id: u64,
    date: &str,
    start: &str,
    end: &str,
) -> Shift {
    scheduler::schedule_shift(
        store,
        user_id,
        d(date),
        t(start),
        t(end),
        Patch::Keep,
        Patch::Keep,
    )
    .await
    .unwrap()
}
