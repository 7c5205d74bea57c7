//! Repository for the `bookings` table.
//!
//! Writes go through [`BookingRepo::save_checked`], which runs the overlap
//! check and the insert/update inside one `SERIALIZABLE` transaction so two
//! concurrent requests cannot both claim the same slot.

use chrono::{NaiveDate, NaiveTime};
use sqlx::{PgPool, Postgres, Transaction};
use scheduler_core::booking::{self, BookedSlot, TimeRange, STATUS_APPROVED};
use scheduler_core::types::DbId;

use crate::models::booking::{Booking, BookingFilter, BookingValues};

const COLUMNS: &str = "id, room_id, booking_date, start_time, end_time, seat_count, \
                       total_count, purpose, booked_by, status, created_at, updated_at";

/// Result of a checked booking write.
#[derive(Debug)]
pub enum BookingWrite {
    Saved(Booking),
    /// An approved booking already holds an overlapping slot.
    Conflict { conflicting_id: DbId },
}

/// Provides CRUD operations for room bookings.
pub struct BookingRepo;

impl BookingRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List bookings matching every filter that is set, ordered by date and
    /// start time.
    pub async fn list(pool: &PgPool, filter: &BookingFilter) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings
             WHERE ($1::BIGINT IS NULL OR room_id = $1)
               AND ($2::DATE IS NULL OR booking_date = $2)
               AND ($3::TEXT IS NULL OR status = $3)
             ORDER BY booking_date, start_time, id"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(filter.room_id)
            .bind(filter.date)
            .bind(&filter.status)
            .fetch_all(pool)
            .await
    }

    /// Insert (`id = None`) or overwrite (`id = Some`) a booking after
    /// checking the slot against approved bookings on the same room and date.
    ///
    /// New bookings are always checked. Updates are checked only when the
    /// resulting status is `Approved`, so a pending or denied booking can
    /// always be edited or declined. Updating a missing row yields
    /// [`sqlx::Error::RowNotFound`].
    pub async fn save_checked(
        pool: &PgPool,
        id: Option<DbId>,
        values: &BookingValues,
    ) -> Result<BookingWrite, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await?;

        if id.is_none() || values.status == STATUS_APPROVED {
            let slots = Self::approved_slots(&mut tx, values.room_id, values.booking_date).await?;
            let candidate = TimeRange {
                start: values.start_time,
                end: values.end_time,
            };
            if let Some(hit) = booking::find_conflict(&candidate, &slots, id) {
                return Ok(BookingWrite::Conflict {
                    conflicting_id: hit.id,
                });
            }
        }

        let saved = match id {
            None => Self::insert(&mut tx, values).await?,
            Some(id) => Self::overwrite(&mut tx, id, values).await?,
        };
        tx.commit().await?;
        Ok(BookingWrite::Saved(saved))
    }

    /// Delete a booking. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn approved_slots(
        tx: &mut Transaction<'_, Postgres>,
        room_id: DbId,
        date: NaiveDate,
    ) -> Result<Vec<BookedSlot>, sqlx::Error> {
        let rows: Vec<(DbId, NaiveTime, NaiveTime, String)> = sqlx::query_as(
            "SELECT id, start_time, end_time, status FROM bookings
             WHERE room_id = $1 AND booking_date = $2 AND status = $3",
        )
        .bind(room_id)
        .bind(date)
        .bind(STATUS_APPROVED)
        .fetch_all(&mut **tx)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, start, end, status)| BookedSlot {
                id,
                range: TimeRange { start, end },
                status,
            })
            .collect())
    }

    async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        values: &BookingValues,
    ) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings
                (room_id, booking_date, start_time, end_time, seat_count, total_count,
                 purpose, booked_by, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(values.room_id)
            .bind(values.booking_date)
            .bind(values.start_time)
            .bind(values.end_time)
            .bind(values.seat_count)
            .bind(values.total_count)
            .bind(&values.purpose)
            .bind(&values.booked_by)
            .bind(&values.status)
            .fetch_one(&mut **tx)
            .await
    }

    async fn overwrite(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        values: &BookingValues,
    ) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET
                room_id = $2,
                booking_date = $3,
                start_time = $4,
                end_time = $5,
                seat_count = $6,
                total_count = $7,
                purpose = $8,
                booked_by = $9,
                status = $10
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(values.room_id)
            .bind(values.booking_date)
            .bind(values.start_time)
            .bind(values.end_time)
            .bind(values.seat_count)
            .bind(values.total_count)
            .bind(&values.purpose)
            .bind(&values.booked_by)
            .bind(&values.status)
            .fetch_one(&mut **tx)
            .await
    }
}
