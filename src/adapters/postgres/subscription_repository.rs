//! PostgreSQL implementation of SubscriptionRepository.
//!
//! Each kind lives in its own table (`subscription_personal`,
//! `subscription_group`, `subscription_coach`). The shared columns are
//! identical; the variant columns differ, so selects project missing
//! columns as typed NULLs and map everything through one row struct.

use crate::domain::foundation::{
    CoachId, DomainError, ErrorCode, FacilityId, PlanKind, SubscriptionId, Timestamp,
};
use crate::domain::subscription::{Offering, Subscription};
use crate::ports::{SubscriptionFilter, SubscriptionRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the SubscriptionRepository port.
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a subscription of any kind.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct SubscriptionRow {
    id: Uuid,
    facility_id: Uuid,
    plan_type: String,
    description: String,
    price: i64,
    duration_hours: i32,
    coach_id: Option<Uuid>,
    capacity: Option<i32>,
    class_time: Option<DateTime<Utc>>,
    count: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SubscriptionRow {
    pub(super) fn into_subscription(self, kind: PlanKind) -> Result<Subscription, DomainError> {
        let offering = match kind {
            PlanKind::Personal => Offering::Personal {
                count: required(self.count, "count")?,
            },
            PlanKind::Group => Offering::Group {
                coach_id: CoachId::from_uuid(required(self.coach_id, "coach_id")?),
                capacity: required(self.capacity, "capacity")?,
                time: Timestamp::from_datetime(required(self.class_time, "class_time")?),
                count: required(self.count, "count")?,
            },
            PlanKind::Coach => Offering::Coach {
                coach_id: CoachId::from_uuid(required(self.coach_id, "coach_id")?),
            },
        };

        Ok(Subscription {
            id: SubscriptionId::from_uuid(self.id),
            facility_id: FacilityId::from_uuid(self.facility_id),
            plan_type: self.plan_type,
            description: self.description,
            price: self.price,
            duration_hours: self.duration_hours,
            offering,
            created_at: Timestamp::from_datetime(self.created_at),
            updated_at: Timestamp::from_datetime(self.updated_at),
        })
    }
}

fn required<T>(value: Option<T>, column: &str) -> Result<T, DomainError> {
    value.ok_or_else(|| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Column {} is unexpectedly NULL", column),
        )
    })
}

/// Table holding subscriptions of `kind`.
pub(super) fn table(kind: PlanKind) -> &'static str {
    match kind {
        PlanKind::Personal => "subscription_personal",
        PlanKind::Group => "subscription_group",
        PlanKind::Coach => "subscription_coach",
    }
}

/// Column list that yields a [`SubscriptionRow`] from the table of `kind`.
pub(super) fn projection(kind: PlanKind) -> &'static str {
    match kind {
        PlanKind::Personal => {
            "id, facility_id, plan_type, description, price, duration_hours, \
             NULL::uuid AS coach_id, NULL::integer AS capacity, \
             NULL::timestamptz AS class_time, count, created_at, updated_at"
        }
        PlanKind::Group => {
            "id, facility_id, plan_type, description, price, duration_hours, \
             coach_id, capacity, class_time, count, created_at, updated_at"
        }
        PlanKind::Coach => {
            "id, facility_id, plan_type, description, price, duration_hours, \
             coach_id, NULL::integer AS capacity, NULL::timestamptz AS class_time, \
             NULL::integer AS count, created_at, updated_at"
        }
    }
}

fn not_found() -> DomainError {
    DomainError::new(ErrorCode::SubscriptionNotFound, "Subscription not found")
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let s = subscription;
        let result = match &s.offering {
            Offering::Personal { count } => {
                sqlx::query(
                    r#"
                    INSERT INTO subscription_personal (
                        id, facility_id, plan_type, description, price, duration_hours,
                        count, created_at, updated_at
                    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                    "#,
                )
                .bind(s.id.as_uuid())
                .bind(s.facility_id.as_uuid())
                .bind(&s.plan_type)
                .bind(&s.description)
                .bind(s.price)
                .bind(s.duration_hours)
                .bind(count)
                .bind(s.created_at.as_datetime())
                .bind(s.updated_at.as_datetime())
                .execute(&self.pool)
                .await
            }
            Offering::Group {
                coach_id,
                capacity,
                time,
                count,
            } => {
                sqlx::query(
                    r#"
                    INSERT INTO subscription_group (
                        id, facility_id, plan_type, description, price, duration_hours,
                        coach_id, capacity, class_time, count, created_at, updated_at
                    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                    "#,
                )
                .bind(s.id.as_uuid())
                .bind(s.facility_id.as_uuid())
                .bind(&s.plan_type)
                .bind(&s.description)
                .bind(s.price)
                .bind(s.duration_hours)
                .bind(coach_id.as_uuid())
                .bind(capacity)
                .bind(time.as_datetime())
                .bind(count)
                .bind(s.created_at.as_datetime())
                .bind(s.updated_at.as_datetime())
                .execute(&self.pool)
                .await
            }
            Offering::Coach { coach_id } => {
                sqlx::query(
                    r#"
                    INSERT INTO subscription_coach (
                        id, facility_id, plan_type, description, price, duration_hours,
                        coach_id, created_at, updated_at
                    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                    "#,
                )
                .bind(s.id.as_uuid())
                .bind(s.facility_id.as_uuid())
                .bind(&s.plan_type)
                .bind(&s.description)
                .bind(s.price)
                .bind(s.duration_hours)
                .bind(coach_id.as_uuid())
                .bind(s.created_at.as_datetime())
                .bind(s.updated_at.as_datetime())
                .execute(&self.pool)
                .await
            }
        };

        result.map_err(|e| DomainError::database("save subscription", e))?;
        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let s = subscription;
        let result = match &s.offering {
            Offering::Personal { count } => {
                sqlx::query(
                    r#"
                    UPDATE subscription_personal SET
                        facility_id = $2, plan_type = $3, description = $4, price = $5,
                        duration_hours = $6, count = $7, updated_at = $8
                    WHERE id = $1
                    "#,
                )
                .bind(s.id.as_uuid())
                .bind(s.facility_id.as_uuid())
                .bind(&s.plan_type)
                .bind(&s.description)
                .bind(s.price)
                .bind(s.duration_hours)
                .bind(count)
                .bind(s.updated_at.as_datetime())
                .execute(&self.pool)
                .await
            }
            Offering::Group {
                coach_id,
                capacity,
                time,
                count,
            } => {
                sqlx::query(
                    r#"
                    UPDATE subscription_group SET
                        facility_id = $2, plan_type = $3, description = $4, price = $5,
                        duration_hours = $6, coach_id = $7, capacity = $8, class_time = $9,
                        count = $10, updated_at = $11
                    WHERE id = $1
                    "#,
                )
                .bind(s.id.as_uuid())
                .bind(s.facility_id.as_uuid())
                .bind(&s.plan_type)
                .bind(&s.description)
                .bind(s.price)
                .bind(s.duration_hours)
                .bind(coach_id.as_uuid())
                .bind(capacity)
                .bind(time.as_datetime())
                .bind(count)
                .bind(s.updated_at.as_datetime())
                .execute(&self.pool)
                .await
            }
            Offering::Coach { coach_id } => {
                sqlx::query(
                    r#"
                    UPDATE subscription_coach SET
                        facility_id = $2, plan_type = $3, description = $4, price = $5,
                        duration_hours = $6, coach_id = $7, updated_at = $8
                    WHERE id = $1
                    "#,
                )
                .bind(s.id.as_uuid())
                .bind(s.facility_id.as_uuid())
                .bind(&s.plan_type)
                .bind(&s.description)
                .bind(s.price)
                .bind(s.duration_hours)
                .bind(coach_id.as_uuid())
                .bind(s.updated_at.as_datetime())
                .execute(&self.pool)
                .await
            }
        };

        let result = result.map_err(|e| DomainError::database("update subscription", e))?;
        if result.rows_affected() == 0 {
            return Err(not_found());
        }
        Ok(())
    }

    async fn find_by_id(
        &self,
        kind: PlanKind,
        id: &SubscriptionId,
    ) -> Result<Option<Subscription>, DomainError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            projection(kind),
            table(kind)
        );

        let row: Option<SubscriptionRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("find subscription", e))?;

        row.map(|r| r.into_subscription(kind)).transpose()
    }

    async fn delete(&self, kind: PlanKind, id: &SubscriptionId) -> Result<(), DomainError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", table(kind));

        let result = sqlx::query(&sql)
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete subscription", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }
        Ok(())
    }

    async fn list(
        &self,
        kind: PlanKind,
        filter: &SubscriptionFilter,
    ) -> Result<Vec<Subscription>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM {}
            WHERE ($1::uuid IS NULL OR facility_id = $1)
            ORDER BY created_at ASC, id ASC
            "#,
            projection(kind),
            table(kind)
        );

        let rows: Vec<SubscriptionRow> = sqlx::query_as(&sql)
            .bind(filter.facility_id.map(|f| *f.as_uuid()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("list subscriptions", e))?;

        rows.into_iter().map(|r| r.into_subscription(kind)).collect()
    }
}
