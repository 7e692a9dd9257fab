use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::errors::domain::DomainError;

/// Execute a function within a database transaction.
///
/// Begins a transaction, runs the closure, commits on Ok and performs a
/// best-effort rollback on Err (the original error is preserved). Every
/// multi-write operation in the services layer goes through here so that a
/// schedule generation or result registration is all-or-nothing.
pub async fn with_txn<R, F>(db: &DatabaseConnection, f: F) -> Result<R, DomainError>
where
    F: AsyncFnOnce(&DatabaseTransaction) -> Result<R, DomainError>,
{
    let txn = db.begin().await.map_err(DomainError::from)?;
    let out = f(&txn).await;

    match out {
        Ok(val) => {
            txn.commit().await.map_err(DomainError::from)?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
