//! Checked booking writes against a real database.

use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use scheduler_core::booking::{STATUS_APPROVED, STATUS_DENIED, STATUS_PENDING};
use scheduler_core::types::DbId;
use scheduler_db::models::booking::{BookingFilter, BookingValues};
use scheduler_db::models::room::CreateRoom;
use scheduler_db::repositories::{BookingRepo, BookingWrite, RoomRepo};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

async fn seed_room(pool: &PgPool) -> DbId {
    RoomRepo::create(
        pool,
        &CreateRoom {
            location_id: "A-101".to_string(),
            hall_type: "Lecture Hall".to_string(),
            department: "Computing".to_string(),
            seating_capacity: 40,
            computer_count: 0,
            floor: 1,
        },
    )
    .await
    .unwrap()
    .id
}

fn values(room_id: DbId, start: NaiveTime, end: NaiveTime, status: &str) -> BookingValues {
    BookingValues {
        room_id,
        booking_date: day(),
        start_time: start,
        end_time: end,
        seat_count: 40,
        total_count: 30,
        purpose: None,
        booked_by: None,
        status: status.to_string(),
    }
}

async fn save(pool: &PgPool, id: Option<DbId>, v: &BookingValues) -> BookingWrite {
    BookingRepo::save_checked(pool, id, v).await.unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn back_to_back_bookings_are_accepted(pool: PgPool) {
    let room = seed_room(&pool).await;
    let first = save(&pool, None, &values(room, t(9, 0), t(10, 0), STATUS_APPROVED)).await;
    assert!(matches!(first, BookingWrite::Saved(_)));

    let second = save(&pool, None, &values(room, t(10, 0), t(11, 0), STATUS_PENDING)).await;
    assert!(matches!(second, BookingWrite::Saved(_)));
}

#[sqlx::test(migrations = "./migrations")]
async fn overlap_with_approved_booking_is_rejected(pool: PgPool) {
    let room = seed_room(&pool).await;
    let BookingWrite::Saved(held) =
        save(&pool, None, &values(room, t(9, 0), t(10, 30), STATUS_APPROVED)).await
    else {
        panic!("first booking should be saved");
    };

    let clash = save(&pool, None, &values(room, t(10, 0), t(11, 0), STATUS_PENDING)).await;
    assert!(matches!(clash, BookingWrite::Conflict { conflicting_id } if conflicting_id == held.id));

    let all = BookingRepo::list(&pool, &BookingFilter::default()).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn pending_bookings_do_not_block(pool: PgPool) {
    let room = seed_room(&pool).await;
    save(&pool, None, &values(room, t(9, 0), t(11, 0), STATUS_PENDING)).await;
    let other = save(&pool, None, &values(room, t(9, 30), t(10, 30), STATUS_PENDING)).await;
    assert!(matches!(other, BookingWrite::Saved(_)));
}

#[sqlx::test(migrations = "./migrations")]
async fn update_does_not_conflict_with_itself(pool: PgPool) {
    let room = seed_room(&pool).await;
    let BookingWrite::Saved(b) =
        save(&pool, None, &values(room, t(9, 0), t(10, 0), STATUS_APPROVED)).await
    else {
        panic!("booking should be saved");
    };

    let moved = save(&pool, Some(b.id), &values(room, t(9, 30), t(10, 30), STATUS_APPROVED)).await;
    let BookingWrite::Saved(moved) = moved else {
        panic!("self-overlap must not conflict");
    };
    assert_eq!(moved.start_time, t(9, 30));
}

#[sqlx::test(migrations = "./migrations")]
async fn denying_an_overlapping_booking_is_allowed(pool: PgPool) {
    let room = seed_room(&pool).await;
    save(&pool, None, &values(room, t(9, 0), t(10, 0), STATUS_APPROVED)).await;
    let BookingWrite::Saved(pending) =
        save(&pool, None, &values(room, t(10, 0), t(11, 0), STATUS_PENDING)).await
    else {
        panic!("pending booking should be saved");
    };

    // Stretch it into the approved slot and deny in the same write.
    let denied = save(
        &pool,
        Some(pending.id),
        &values(room, t(9, 30), t(11, 0), STATUS_DENIED),
    )
    .await;
    assert!(matches!(denied, BookingWrite::Saved(b) if b.status == STATUS_DENIED));
}

#[sqlx::test(migrations = "./migrations")]
async fn approving_an_overlapping_booking_is_rejected(pool: PgPool) {
    let room = seed_room(&pool).await;
    save(&pool, None, &values(room, t(9, 0), t(10, 30), STATUS_APPROVED)).await;
    let BookingWrite::Saved(pending) =
        save(&pool, None, &values(room, t(10, 30), t(11, 30), STATUS_PENDING)).await
    else {
        panic!("pending booking should be saved");
    };

    // Moving a pending booking into the held slot is allowed...
    let moved = values(room, t(10, 0), t(11, 0), STATUS_PENDING);
    assert!(matches!(save(&pool, Some(pending.id), &moved).await, BookingWrite::Saved(_)));

    // ...but approving it there is not.
    let approve = BookingValues {
        status: STATUS_APPROVED.to_string(),
        ..moved
    };
    assert!(matches!(
        save(&pool, Some(pending.id), &approve).await,
        BookingWrite::Conflict { .. }
    ));
}

#[sqlx::test(migrations = "./migrations")]
async fn list_applies_filters(pool: PgPool) {
    let room = seed_room(&pool).await;
    save(&pool, None, &values(room, t(8, 0), t(9, 0), STATUS_APPROVED)).await;
    save(&pool, None, &values(room, t(12, 0), t(13, 0), STATUS_PENDING)).await;

    let approved = BookingRepo::list(
        &pool,
        &BookingFilter {
            room_id: Some(room),
            date: Some(day()),
            status: Some(STATUS_APPROVED.to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].start_time, t(8, 0));

    let other_day = BookingRepo::list(
        &pool,
        &BookingFilter {
            date: NaiveDate::from_ymd_opt(2025, 3, 11),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(other_day.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn updating_missing_booking_is_row_not_found(pool: PgPool) {
    let room = seed_room(&pool).await;
    let err = BookingRepo::save_checked(&pool, Some(9999), &values(room, t(9, 0), t(10, 0), STATUS_PENDING))
        .await
        .unwrap_err();
    assert!(matches!(err, sqlx::Error::RowNotFound));
}
