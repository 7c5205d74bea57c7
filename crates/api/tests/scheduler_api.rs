//! End-to-end resource scenarios against a real database.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use scheduler_core::booking::CONFLICT_MESSAGE;
use serde_json::json;
use sqlx::PgPool;

async fn create_room(pool: &PgPool, location: &str, capacity: i32) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/rooms",
        json!({
            "locationId": location,
            "hallType": "Lecture Hall",
            "department": "Computing",
            "seatingCapacity": capacity
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

fn booking(room_id: i64, start: &str, end: &str, status: &str) -> serde_json::Value {
    json!({
        "roomId": room_id,
        "date": "2025-03-10",
        "startTime": start,
        "endTime": end,
        "seatCount": 40,
        "totalCount": 30,
        "status": status
    })
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn max_workload_defaults_then_persists(pool: PgPool) {
    let json = body_json(get(build_test_app(pool.clone()), "/api/settings/max-workload").await).await;
    assert_eq!(json["maxWorkload"], 20);

    let rejected = post_json(
        build_test_app(pool.clone()),
        "/api/settings/max-workload",
        json!({ "maxWorkload": 0 }),
    )
    .await;
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);

    let saved = post_json(
        build_test_app(pool.clone()),
        "/api/settings/max-workload",
        json!({ "maxWorkload": 25 }),
    )
    .await;
    assert_eq!(saved.status(), StatusCode::OK);
    assert_eq!(body_json(saved).await["maxWorkload"], 25);

    let json = body_json(get(build_test_app(pool), "/api/settings/max-workload").await).await;
    assert_eq!(json["maxWorkload"], 25);
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn overlapping_booking_is_rejected_back_to_back_is_not(pool: PgPool) {
    let room = create_room(&pool, "A-101", 40).await;

    let first = post_json(
        build_test_app(pool.clone()),
        "/api/bookings",
        booking(room, "09:00:00", "10:30:00", "Approved"),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let clash = post_json(
        build_test_app(pool.clone()),
        "/api/bookings",
        booking(room, "10:00:00", "11:00:00", "Pending"),
    )
    .await;
    assert_eq!(clash.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(clash).await["error"], CONFLICT_MESSAGE);

    let adjacent = post_json(
        build_test_app(pool.clone()),
        "/api/bookings",
        booking(room, "10:30:00", "11:30:00", "Pending"),
    )
    .await;
    assert_eq!(adjacent.status(), StatusCode::CREATED);
    assert_eq!(body_json(adjacent).await["status"], "Pending");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn booking_seat_rules_are_enforced(pool: PgPool) {
    let room = create_room(&pool, "B-202", 40).await;

    let mut wrong_seats = booking(room, "09:00:00", "10:00:00", "Pending");
    wrong_seats["seatCount"] = json!(35);
    let response = post_json(build_test_app(pool.clone()), "/api/bookings", wrong_seats).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut too_many = booking(room, "09:00:00", "10:00:00", "Pending");
    too_many["totalCount"] = json!(41);
    let response = post_json(build_test_app(pool.clone()), "/api/bookings", too_many).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let missing_room = post_json(
        build_test_app(pool),
        "/api/bookings",
        booking(9999, "09:00:00", "10:00:00", "Pending"),
    )
    .await;
    assert_eq!(missing_room.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn approving_into_a_held_slot_is_rejected(pool: PgPool) {
    let room = create_room(&pool, "C-303", 40).await;
    post_json(
        build_test_app(pool.clone()),
        "/api/bookings",
        booking(room, "09:00:00", "10:00:00", "Approved"),
    )
    .await;

    // Pending requests are not checked against each other.
    let pending = post_json(
        build_test_app(pool.clone()),
        "/api/bookings",
        booking(room, "10:00:00", "11:00:00", "Pending"),
    )
    .await;
    let id = body_json(pending).await["id"].as_i64().unwrap();

    let moved = put_json(
        build_test_app(pool.clone()),
        &format!("/api/bookings/{id}"),
        json!({ "startTime": "09:30:00" }),
    )
    .await;
    assert_eq!(moved.status(), StatusCode::OK);

    let approve = put_json(
        build_test_app(pool.clone()),
        &format!("/api/bookings/{id}/status"),
        json!({ "status": "Approved" }),
    )
    .await;
    assert_eq!(approve.status(), StatusCode::BAD_REQUEST);

    let deny = put_json(
        build_test_app(pool),
        &format!("/api/bookings/{id}/status"),
        json!({ "status": "Denied" }),
    )
    .await;
    assert_eq!(deny.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Subjects, module overviews, activities
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn subject_and_module_mutations_are_logged(pool: PgPool) {
    let created = post_json(
        build_test_app(pool.clone()),
        "/api/subjects",
        json!({
            "name": "Compilers",
            "subjectId": "CS401",
            "credit": 4,
            "timeDuration": 60,
            "department": "Computing",
            "year": 4
        }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let subject_id = body_json(created).await["id"].as_i64().unwrap();

    let module = post_json(
        build_test_app(pool.clone()),
        "/api/module-overviews",
        json!({ "subjectId": subject_id, "lectureCount": 20 }),
    )
    .await;
    assert_eq!(module.status(), StatusCode::CREATED);
    assert_eq!(body_json(module).await["subjectCode"], "CS401");

    let feed = body_json(get(build_test_app(pool.clone()), "/api/activities?limit=10").await).await;
    let types: Vec<&str> = feed
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, ["module_created", "subject_created"]);

    let duplicate = post_json(
        build_test_app(pool),
        "/api/subjects",
        json!({
            "name": "Compilers II",
            "subjectId": "CS401",
            "credit": 4,
            "timeDuration": 60,
            "department": "Computing",
            "year": 4
        }),
    )
    .await;
    assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(duplicate).await["error"], "Subject ID already exists");
}

// ---------------------------------------------------------------------------
// Batches and deletes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn batch_number_uniqueness_ignores_own_record(pool: PgPool) {
    let body = |batch_no: &str| {
        json!({
            "name": "Software Engineering",
            "intakeType": "May",
            "batchNo": batch_no,
            "year": 1,
            "semester": 1,
            "department": "Computing",
            "studentCount": 50,
            "startDate": "2025-05-05",
            "endDate": "2025-10-31",
            "scheduleType": "Weekend"
        })
    };

    let first = post_json(build_test_app(pool.clone()), "/api/batches", body("SE-25-05")).await;
    let first_id = body_json(first).await["id"].as_i64().unwrap();
    let second = post_json(build_test_app(pool.clone()), "/api/batches", body("SE-25-06")).await;
    let second_id = body_json(second).await["id"].as_i64().unwrap();

    let dup = post_json(build_test_app(pool.clone()), "/api/batches", body("SE-25-05")).await;
    assert_eq!(dup.status(), StatusCode::BAD_REQUEST);

    let keep_own = put_json(
        build_test_app(pool.clone()),
        &format!("/api/batches/{first_id}"),
        json!({ "batchNo": "SE-25-05", "studentCount": 55 }),
    )
    .await;
    assert_eq!(keep_own.status(), StatusCode::OK);

    let take_other = put_json(
        build_test_app(pool),
        &format!("/api/batches/{second_id}"),
        json!({ "batchNo": "SE-25-05" }),
    )
    .await;
    assert_eq!(take_other.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_missing_records_returns_404(pool: PgPool) {
    for resource in [
        "subjects",
        "lecturers",
        "batches",
        "rooms",
        "bookings",
        "facility-issues",
        "module-overviews",
    ] {
        let response = delete(build_test_app(pool.clone()), &format!("/api/{resource}/424242")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "DELETE /api/{resource}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_a_room_keeps_its_bookings_and_issues(pool: PgPool) {
    let room = create_room(&pool, "A1", 40).await;

    let booked = post_json(
        build_test_app(pool.clone()),
        "/api/bookings",
        booking(room, "09:00:00", "10:00:00", "Approved"),
    )
    .await;
    assert_eq!(booked.status(), StatusCode::CREATED);

    let reported = post_json(
        build_test_app(pool.clone()),
        "/api/facility-issues",
        json!({ "roomId": room, "issues": ["Projector"] }),
    )
    .await;
    assert_eq!(reported.status(), StatusCode::CREATED);

    let removed = delete(build_test_app(pool.clone()), &format!("/api/rooms/{room}")).await;
    assert_eq!(removed.status(), StatusCode::NO_CONTENT);

    let bookings = body_json(get(build_test_app(pool.clone()), "/api/bookings").await).await;
    assert_eq!(bookings.as_array().map(Vec::len), Some(1));
    assert_eq!(bookings[0]["roomId"], room);

    let issues = body_json(get(build_test_app(pool), "/api/facility-issues").await).await;
    assert_eq!(issues.as_array().map(Vec::len), Some(1));
}
