//! Handlers for the `/bookings` resource.
//!
//! Every write resolves to a full [`BookingValues`] first, is validated
//! against the target room, and is then stored through
//! [`BookingRepo::save_checked`], which rejects slots already held by an
//! approved booking.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use scheduler_core::booking::{validate_booking_request, CONFLICT_MESSAGE, VALID_BOOKING_STATUSES};
use scheduler_core::error::CoreError;
use scheduler_core::types::DbId;
use scheduler_core::validation::{validate_one_of, validate_request};
use scheduler_db::models::booking::{
    Booking, BookingFilter, BookingValues, CreateBooking, UpdateBooking, UpdateBookingStatus,
};
use scheduler_db::repositories::{BookingRepo, BookingWrite, RoomRepo};
use scheduler_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Booking",
        id,
    })
}

fn validate_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("status", status, VALID_BOOKING_STATUSES)
}

/// Check the request against its room, then store it.
async fn validate_and_save(
    pool: &DbPool,
    id: Option<DbId>,
    values: &BookingValues,
) -> AppResult<Booking> {
    let room = RoomRepo::find_by_id(pool, values.room_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: values.room_id,
        }))?;
    validate_booking_request(
        room.seating_capacity,
        values.seat_count,
        values.total_count,
        values.start_time,
        values.end_time,
    )?;

    save(pool, id, values).await
}

async fn save(pool: &DbPool, id: Option<DbId>, values: &BookingValues) -> AppResult<Booking> {
    match BookingRepo::save_checked(pool, id, values).await? {
        BookingWrite::Saved(booking) => Ok(booking),
        BookingWrite::Conflict { conflicting_id } => {
            tracing::info!(
                room_id = values.room_id,
                date = %values.booking_date,
                conflicting_id,
                "Booking rejected: slot already held",
            );
            Err(CoreError::Conflict(CONFLICT_MESSAGE.to_string()).into())
        }
    }
}

/// POST /api/bookings
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    validate_request(&input)?;
    if let Some(status) = &input.status {
        validate_status(status)?;
    }

    let values = BookingValues::from_create(&input);
    let booking = validate_and_save(&state.pool, None, &values).await?;

    tracing::info!(
        booking_id = booking.id,
        room_id = booking.room_id,
        date = %booking.booking_date,
        "Booking created",
    );
    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /api/bookings
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<BookingFilter>,
) -> AppResult<Json<Vec<Booking>>> {
    if let Some(status) = &filter.status {
        validate_status(status)?;
    }
    let bookings = BookingRepo::list(&state.pool, &filter).await?;
    Ok(Json(bookings))
}

/// GET /api/bookings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Booking>> {
    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(booking))
}

/// PUT /api/bookings/{id}
///
/// Fields left out keep their stored values; the merged booking goes
/// through the same checks as a new one.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateBooking>,
) -> AppResult<Json<Booking>> {
    validate_request(&input)?;
    if let Some(status) = &input.status {
        validate_status(status)?;
    }

    let existing = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let values = BookingValues::merged(&existing, &input);
    let booking = validate_and_save(&state.pool, Some(id), &values).await?;

    tracing::info!(booking_id = id, status = %booking.status, "Booking updated");
    Ok(Json(booking))
}

/// PUT /api/bookings/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateBookingStatus>,
) -> AppResult<Json<Booking>> {
    validate_status(&input.status)?;

    let existing = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let booking = save(
        &state.pool,
        Some(id),
        &BookingValues::with_status(&existing, &input.status),
    )
    .await?;

    tracing::info!(booking_id = id, status = %booking.status, "Booking status changed");
    Ok(Json(booking))
}

/// DELETE /api/bookings/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if BookingRepo::delete(&state.pool, id).await? {
        tracing::info!(booking_id = id, "Booking deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
