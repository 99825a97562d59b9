//! Serializable transactions shared by the gated writes.
//!
//! A serialization failure (SQLSTATE 40001) aborts the transaction and is
//! reported to the caller as a storage error; nothing is retried here.

use sqlx::{PgPool, Postgres, Transaction};

/// Opens a transaction at SERIALIZABLE isolation.
pub(super) async fn begin_serializable(
    pool: &PgPool,
) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}
