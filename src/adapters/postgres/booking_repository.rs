//! PostgreSQL implementation of BookingRepository.
//!
//! Bookings of each kind are stored in `booking_personal`, `booking_group`
//! and `booking_coach`, all with the same columns.

use super::subscription_repository::{self, SubscriptionRow};
use super::transaction::begin_serializable;
use crate::domain::booking::{AccessStatus, AdmissionDecision, Booking, CapacityWindow};
use crate::domain::foundation::{
    BookingId, DomainError, ErrorCode, PlanKind, SubscriptionId, Timestamp, UserId,
};
use crate::ports::{BookingFilter, BookingRepository, GroupAdmission};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgConnection;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the BookingRepository port.
pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a booking.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct BookingRow {
    id: Uuid,
    subscription_id: Uuid,
    user_id: Uuid,
    payment: i64,
    access_status: String,
    start_date: DateTime<Utc>,
    count: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BookingRow {
    pub(super) fn into_booking(self, kind: PlanKind) -> Result<Booking, DomainError> {
        let access_status: AccessStatus = self.access_status.parse().map_err(|_| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid access_status value: {}", self.access_status),
            )
        })?;

        Ok(Booking {
            id: BookingId::from_uuid(self.id),
            kind,
            subscription_id: SubscriptionId::from_uuid(self.subscription_id),
            user_id: UserId::from_uuid(self.user_id),
            payment: self.payment,
            access_status,
            start_date: Timestamp::from_datetime(self.start_date),
            count: self.count,
            created_at: Timestamp::from_datetime(self.created_at),
            updated_at: Timestamp::from_datetime(self.updated_at),
        })
    }
}

/// Table holding bookings of `kind`.
pub(super) fn table(kind: PlanKind) -> &'static str {
    match kind {
        PlanKind::Personal => "booking_personal",
        PlanKind::Group => "booking_group",
        PlanKind::Coach => "booking_coach",
    }
}

pub(super) const COLUMNS: &str = "id, subscription_id, user_id, payment, access_status, \
                                  start_date, count, created_at, updated_at";

fn insert_sql(kind: PlanKind) -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        table(kind),
        COLUMNS
    )
}

fn bind_insert<'q>(
    sql: &'q str,
    booking: &'q Booking,
) -> sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments> {
    sqlx::query(sql)
        .bind(booking.id.as_uuid())
        .bind(booking.subscription_id.as_uuid())
        .bind(booking.user_id.as_uuid())
        .bind(booking.payment)
        .bind(booking.access_status.as_str())
        .bind(booking.start_date.as_datetime())
        .bind(booking.count)
        .bind(booking.created_at.as_datetime())
        .bind(booking.updated_at.as_datetime())
}

/// Counts granted group bookings on `$1` whose window covers `$2`, where the
/// window length in hours is `$3`. `$4` excludes one booking id (or none).
fn active_count_sql() -> String {
    format!(
        r#"
        SELECT COUNT(*) FROM {}
        WHERE subscription_id = $1
          AND access_status = '{}'
          AND start_date <= $2
          AND start_date + make_interval(hours => $3) > $2
          AND ($4::uuid IS NULL OR id <> $4)
        "#,
        table(PlanKind::Group),
        AccessStatus::Granted.as_str()
    )
}

fn update_sql(kind: PlanKind) -> String {
    format!(
        r#"
        UPDATE {} SET
            subscription_id = $2,
            user_id = $3,
            payment = $4,
            access_status = $5,
            start_date = $6,
            count = $7,
            updated_at = $8
        WHERE id = $1
        "#,
        table(kind)
    )
}

fn bind_update<'q>(
    sql: &'q str,
    booking: &'q Booking,
) -> sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments> {
    sqlx::query(sql)
        .bind(booking.id.as_uuid())
        .bind(booking.subscription_id.as_uuid())
        .bind(booking.user_id.as_uuid())
        .bind(booking.payment)
        .bind(booking.access_status.as_str())
        .bind(booking.start_date.as_datetime())
        .bind(booking.count)
        .bind(booking.updated_at.as_datetime())
}

/// Locks the group subscription row `FOR UPDATE` and returns its window.
///
/// The lock queues every other gated write for the same subscription behind
/// the current transaction.
async fn lock_group_window(
    conn: &mut PgConnection,
    subscription_id: &SubscriptionId,
) -> Result<Option<CapacityWindow>, sqlx::Error> {
    let sql = format!(
        "SELECT {} FROM {} WHERE id = $1 FOR UPDATE",
        subscription_repository::projection(PlanKind::Group),
        subscription_repository::table(PlanKind::Group)
    );
    let row: Option<SubscriptionRow> = sqlx::query_as(&sql)
        .bind(subscription_id.as_uuid())
        .fetch_optional(conn)
        .await?;

    Ok(row
        .map(|r| r.into_subscription(PlanKind::Group))
        .transpose()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
        .and_then(|s| s.capacity_window()))
}

async fn count_active(
    conn: &mut PgConnection,
    subscription_id: &SubscriptionId,
    window: CapacityWindow,
    now: Timestamp,
    exclude: Option<&BookingId>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(&active_count_sql())
        .bind(subscription_id.as_uuid())
        .bind(now.as_datetime())
        .bind(window.duration_hours())
        .bind(exclude.map(|id| *id.as_uuid()))
        .fetch_one(conn)
        .await
}

impl PostgresBookingRepository {
    /// Capacity check and insert in one serializable transaction.
    async fn insert_within_capacity(
        &self,
        booking: &Booking,
        now: Timestamp,
    ) -> Result<GroupAdmission, sqlx::Error> {
        let mut tx = begin_serializable(&self.pool).await?;

        let Some(window) = lock_group_window(&mut tx, &booking.subscription_id).await? else {
            tx.rollback().await?;
            return Ok(GroupAdmission::SubscriptionMissing);
        };

        let active = count_active(&mut tx, &booking.subscription_id, window, now, None).await?;
        if let AdmissionDecision::Full { capacity, active } = window.admit(active) {
            tx.rollback().await?;
            return Ok(GroupAdmission::Full { capacity, active });
        }

        let sql = insert_sql(PlanKind::Group);
        bind_insert(&sql, booking).execute(&mut *tx).await?;
        tx.commit().await?;

        Ok(GroupAdmission::Admitted)
    }

    /// Capacity check and update in one serializable transaction.
    ///
    /// `Ok(None)` means no group booking has this id.
    async fn replace_within_capacity(
        &self,
        booking: &Booking,
        now: Timestamp,
    ) -> Result<Option<GroupAdmission>, sqlx::Error> {
        let mut tx = begin_serializable(&self.pool).await?;

        match lock_group_window(&mut tx, &booking.subscription_id).await? {
            Some(window) if window.occupies_slot(booking, now) => {
                let active = count_active(
                    &mut tx,
                    &booking.subscription_id,
                    window,
                    now,
                    Some(&booking.id),
                )
                .await?;
                if let AdmissionDecision::Full { capacity, active } = window.admit(active) {
                    tx.rollback().await?;
                    return Ok(Some(GroupAdmission::Full { capacity, active }));
                }
            }
            Some(_) => {}
            None if booking.access_status.permits_entry() => {
                tx.rollback().await?;
                return Ok(Some(GroupAdmission::SubscriptionMissing));
            }
            None => {}
        }

        let sql = update_sql(PlanKind::Group);
        let result = bind_update(&sql, booking).execute(&mut *tx).await?;
        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }
        tx.commit().await?;

        Ok(Some(GroupAdmission::Admitted))
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn save(&self, booking: &Booking) -> Result<(), DomainError> {
        let sql = insert_sql(booking.kind);
        bind_insert(&sql, booking)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("save booking", e))?;
        Ok(())
    }

    async fn save_within_capacity(
        &self,
        booking: &Booking,
        now: Timestamp,
    ) -> Result<GroupAdmission, DomainError> {
        self.insert_within_capacity(booking, now)
            .await
            .map_err(|e| DomainError::database("admit group booking", e))
    }

    async fn update(&self, booking: &Booking) -> Result<(), DomainError> {
        let sql = update_sql(booking.kind);
        let result = bind_update(&sql, booking)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("update booking", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::BookingNotFound,
                "Booking not found",
            ));
        }
        Ok(())
    }

    async fn update_within_capacity(
        &self,
        booking: &Booking,
        now: Timestamp,
    ) -> Result<GroupAdmission, DomainError> {
        self.replace_within_capacity(booking, now)
            .await
            .map_err(|e| DomainError::database("update group booking", e))?
            .ok_or_else(|| DomainError::new(ErrorCode::BookingNotFound, "Booking not found"))
    }

    async fn find_by_id(
        &self,
        kind: PlanKind,
        id: &BookingId,
    ) -> Result<Option<Booking>, DomainError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, table(kind));

        let row: Option<BookingRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("find booking", e))?;

        row.map(|r| r.into_booking(kind)).transpose()
    }

    async fn delete(&self, kind: PlanKind, id: &BookingId) -> Result<(), DomainError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", table(kind));

        let result = sqlx::query(&sql)
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete booking", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::BookingNotFound,
                "Booking not found",
            ));
        }
        Ok(())
    }

    async fn list(
        &self,
        kind: PlanKind,
        filter: &BookingFilter,
    ) -> Result<Vec<Booking>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM {}
            WHERE ($1::uuid IS NULL OR user_id = $1)
              AND ($2::uuid IS NULL OR subscription_id = $2)
            ORDER BY created_at ASC, id ASC
            "#,
            COLUMNS,
            table(kind)
        );

        let rows: Vec<BookingRow> = sqlx::query_as(&sql)
            .bind(filter.user_id.map(|u| *u.as_uuid()))
            .bind(filter.subscription_id.map(|s| *s.as_uuid()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("list bookings", e))?;

        rows.into_iter().map(|r| r.into_booking(kind)).collect()
    }
}
