//! PostgreSQL implementation of AccessRepository.
//!
//! Access records are appended to `access_personal`, `access_group` and
//! `access_coach`. Each gated insert reads its booking `FOR SHARE` inside a
//! serializable transaction, so a concurrent status update waits for the
//! insert to commit (or vice versa).

use super::booking_repository::{self, BookingRow};
use super::transaction::begin_serializable;
use crate::domain::access::{AccessRecord, CheckInOutcome};
use crate::domain::foundation::{
    BookingId, DomainError, FacilityId, PlanKind, Timestamp, UserId,
};
use crate::ports::{AccessGrant, AccessRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the AccessRepository port.
pub struct PostgresAccessRepository {
    pool: PgPool,
}

impl PostgresAccessRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AccessRow {
    booking_id: Uuid,
    date: DateTime<Utc>,
}

fn table(kind: PlanKind) -> &'static str {
    match kind {
        PlanKind::Personal => "access_personal",
        PlanKind::Group => "access_group",
        PlanKind::Coach => "access_coach",
    }
}

fn insert_sql(kind: PlanKind) -> String {
    format!(
        "INSERT INTO {} (booking_id, date) VALUES ($1, $2)",
        table(kind)
    )
}

fn decode_error(e: DomainError) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(e))
}

impl PostgresAccessRepository {
    async fn insert_if_granted(&self, record: &AccessRecord) -> Result<AccessGrant, sqlx::Error> {
        let mut tx = begin_serializable(&self.pool).await?;

        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1 FOR SHARE",
            booking_repository::COLUMNS,
            booking_repository::table(record.kind)
        );
        let row: Option<BookingRow> = sqlx::query_as(&sql)
            .bind(record.booking_id.as_uuid())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(booking) = row
            .map(|r| r.into_booking(record.kind))
            .transpose()
            .map_err(decode_error)?
        else {
            tx.rollback().await?;
            return Ok(AccessGrant::BookingMissing);
        };

        if !booking.access_status.permits_entry() {
            tx.rollback().await?;
            return Ok(AccessGrant::NotGranted(booking.access_status));
        }

        sqlx::query(&insert_sql(record.kind))
            .bind(record.booking_id.as_uuid())
            .bind(record.date.as_datetime())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(AccessGrant::Recorded(record.clone()))
    }

    async fn check_in_locked(
        &self,
        user_id: &UserId,
        facility_id: &FacilityId,
        now: Timestamp,
    ) -> Result<CheckInOutcome, sqlx::Error> {
        let mut tx = begin_serializable(&self.pool).await?;

        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
            SELECT b.id, b.subscription_id, b.user_id, b.payment, b.access_status,
                   b.start_date, b.count, b.created_at, b.updated_at
            FROM booking_personal b
            JOIN subscription_personal s ON s.id = b.subscription_id
            WHERE b.user_id = $1 AND s.facility_id = $2
            FOR SHARE OF b
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(facility_id.as_uuid())
        .fetch_all(&mut *tx)
        .await?;

        let bookings = rows
            .into_iter()
            .map(|r| r.into_booking(PlanKind::Personal))
            .collect::<Result<Vec<_>, _>>()
            .map_err(decode_error)?;

        let Some(booking) = bookings
            .iter()
            .filter(|b| b.admits_entry_at(now))
            .max_by_key(|b| b.start_date)
        else {
            tx.rollback().await?;
            return Ok(CheckInOutcome::Denied);
        };

        sqlx::query(&insert_sql(PlanKind::Personal))
            .bind(booking.id.as_uuid())
            .bind(now.as_datetime())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::debug!(booking_id = %booking.id, "Check-in stamped access record");
        Ok(CheckInOutcome::Granted)
    }
}

#[async_trait]
impl AccessRepository for PostgresAccessRepository {
    async fn record_if_granted(&self, record: &AccessRecord) -> Result<AccessGrant, DomainError> {
        self.insert_if_granted(record)
            .await
            .map_err(|e| DomainError::database("record access", e))
    }

    async fn list_for_booking(
        &self,
        kind: PlanKind,
        booking_id: &BookingId,
    ) -> Result<Vec<AccessRecord>, DomainError> {
        let sql = format!(
            "SELECT booking_id, date FROM {} WHERE booking_id = $1 ORDER BY id ASC",
            table(kind)
        );

        let rows: Vec<AccessRow> = sqlx::query_as(&sql)
            .bind(booking_id.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("list access records", e))?;

        Ok(rows
            .into_iter()
            .map(|r| {
                AccessRecord::new(
                    kind,
                    BookingId::from_uuid(r.booking_id),
                    Timestamp::from_datetime(r.date),
                )
            })
            .collect())
    }

    async fn check_in(
        &self,
        user_id: &UserId,
        facility_id: &FacilityId,
        now: Timestamp,
    ) -> Result<CheckInOutcome, DomainError> {
        self.check_in_locked(user_id, facility_id, now)
            .await
            .map_err(|e| DomainError::database("check in", e))
    }
}
