//! Room booking rules: statuses, request validation, and overlap detection.
//!
//! A booking occupies the half-open interval `[start, end)` on one room and
//! one date. Two bookings conflict when both are on the same room and date,
//! the existing one is approved, and
//! `existing.start < new.end && existing.end > new.start`.
//! Back-to-back bookings (one ends exactly when the next starts) therefore
//! never conflict.

use chrono::NaiveTime;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Submitted, awaiting a decision. New bookings start here.
pub const STATUS_PENDING: &str = "Pending";
/// Confirmed; the room is held for this slot.
pub const STATUS_APPROVED: &str = "Approved";
/// Rejected by staff.
pub const STATUS_DENIED: &str = "Denied";

/// All valid booking statuses.
pub const VALID_BOOKING_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED, STATUS_DENIED];

/// Message returned when a requested slot collides with an approved booking.
pub const CONFLICT_MESSAGE: &str = "Room is already booked for the selected time slot";

// ---------------------------------------------------------------------------
// Time ranges
// ---------------------------------------------------------------------------

/// Half-open time-of-day interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    /// Build a range, rejecting empty or inverted intervals.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, CoreError> {
        if start >= end {
            return Err(CoreError::Validation(
                "Start time must be before end time".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Whether two ranges share any instant.
    pub fn overlaps(&self, other: &Self) -> bool {
        other.start < self.end && other.end > self.start
    }
}

/// An existing booking on the candidate's room and date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedSlot {
    pub id: DbId,
    pub range: TimeRange,
    pub status: String,
}

/// Return the first approved slot that overlaps `candidate`.
///
/// `exclude` skips one booking id so an update never conflicts with the
/// row it is replacing. Slots are expected to be on the same room and date
/// as the candidate already.
pub fn find_conflict<'a>(
    candidate: &TimeRange,
    existing: &'a [BookedSlot],
    exclude: Option<DbId>,
) -> Option<&'a BookedSlot> {
    existing.iter().find(|slot| {
        Some(slot.id) != exclude && slot.status == STATUS_APPROVED && slot.range.overlaps(candidate)
    })
}

/// Reject with [`CoreError::Conflict`] when `candidate` collides with an
/// approved slot.
pub fn ensure_no_conflict(
    candidate: &TimeRange,
    existing: &[BookedSlot],
    exclude: Option<DbId>,
) -> Result<(), CoreError> {
    match find_conflict(candidate, existing, exclude) {
        Some(_) => Err(CoreError::Conflict(CONFLICT_MESSAGE.to_string())),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Request validation
// ---------------------------------------------------------------------------

/// Validate seat figures of a booking against the target room.
///
/// The requested seat count must equal the room's seating capacity, and
/// the number of attendees cannot exceed the seats requested.
pub fn validate_seat_counts(
    room_capacity: i32,
    seat_count: i32,
    total_count: i32,
) -> Result<(), CoreError> {
    if seat_count < 0 || total_count < 0 {
        return Err(CoreError::Validation(
            "Seat and attendee counts must not be negative".to_string(),
        ));
    }
    if seat_count != room_capacity {
        return Err(CoreError::Validation(format!(
            "Seat count must match the room capacity of {room_capacity}"
        )));
    }
    if total_count > seat_count {
        return Err(CoreError::Validation(
            "Total count cannot exceed the seat count".to_string(),
        ));
    }
    Ok(())
}

/// Validate a booking request against its target room: the time range must
/// be non-empty and the seat figures must fit the room.
pub fn validate_booking_request(
    room_capacity: i32,
    seat_count: i32,
    total_count: i32,
    start: NaiveTime,
    end: NaiveTime,
) -> Result<TimeRange, CoreError> {
    let range = TimeRange::new(start, end)?;
    validate_seat_counts(room_capacity, seat_count, total_count)?;
    Ok(range)
}
