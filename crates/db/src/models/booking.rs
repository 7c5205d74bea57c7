//! Room booking entity model and DTOs.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use scheduler_core::booking::STATUS_PENDING;
use scheduler_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: DbId,
    pub room_id: DbId,
    #[serde(rename = "date")]
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub seat_count: i32,
    pub total_count: i32,
    pub purpose: Option<String>,
    pub booked_by: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for requesting a booking.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub room_id: DbId,
    #[serde(rename = "date")]
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub seat_count: i32,
    pub total_count: i32,
    pub purpose: Option<String>,
    #[validate(length(min = 1, message = "Booked by must not be empty"))]
    pub booked_by: Option<String>,
    /// Defaults to `Pending` when omitted.
    pub status: Option<String>,
}

/// DTO for partially updating a booking.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBooking {
    pub room_id: Option<DbId>,
    #[serde(rename = "date")]
    pub booking_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub seat_count: Option<i32>,
    pub total_count: Option<i32>,
    pub purpose: Option<String>,
    #[validate(length(min = 1, message = "Booked by must not be empty"))]
    pub booked_by: Option<String>,
    pub status: Option<String>,
}

/// DTO for `PUT /bookings/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBookingStatus {
    pub status: String,
}

/// Optional filters for listing bookings (`?roomId=&date=&status=`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFilter {
    pub room_id: Option<DbId>,
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
}

/// Complete column values for one booking write.
///
/// Creates and updates both resolve to this shape before validation and
/// the conflict check, so both paths enforce identical rules.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingValues {
    pub room_id: DbId,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub seat_count: i32,
    pub total_count: i32,
    pub purpose: Option<String>,
    pub booked_by: Option<String>,
    pub status: String,
}

impl BookingValues {
    /// Values for a new booking; status defaults to `Pending`.
    pub fn from_create(input: &CreateBooking) -> Self {
        Self {
            room_id: input.room_id,
            booking_date: input.booking_date,
            start_time: input.start_time,
            end_time: input.end_time,
            seat_count: input.seat_count,
            total_count: input.total_count,
            purpose: input.purpose.clone(),
            booked_by: input.booked_by.clone(),
            status: input
                .status
                .clone()
                .unwrap_or_else(|| STATUS_PENDING.to_string()),
        }
    }

    /// Stored values overlaid with the fields present in `input`.
    pub fn merged(existing: &Booking, input: &UpdateBooking) -> Self {
        Self {
            room_id: input.room_id.unwrap_or(existing.room_id),
            booking_date: input.booking_date.unwrap_or(existing.booking_date),
            start_time: input.start_time.unwrap_or(existing.start_time),
            end_time: input.end_time.unwrap_or(existing.end_time),
            seat_count: input.seat_count.unwrap_or(existing.seat_count),
            total_count: input.total_count.unwrap_or(existing.total_count),
            purpose: input.purpose.clone().or_else(|| existing.purpose.clone()),
            booked_by: input.booked_by.clone().or_else(|| existing.booked_by.clone()),
            status: input.status.clone().unwrap_or_else(|| existing.status.clone()),
        }
    }

    /// Values of an existing row with only the status replaced.
    pub fn with_status(existing: &Booking, status: &str) -> Self {
        Self::merged(
            existing,
            &UpdateBooking {
                status: Some(status.to_string()),
                ..Default::default()
            },
        )
    }
}
