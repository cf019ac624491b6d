use std::sync::Arc;

use actix_web::{HttpMessage, HttpRequest};
use futures_util::future::BoxFuture;
use sea_orm::{DatabaseTransaction, TransactionTrait};

use super::txn_policy;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// A shared transaction wrapper that can be injected into request extensions
#[derive(Clone)]
pub struct SharedTxn(pub Arc<DatabaseTransaction>);

impl SharedTxn {
    /// Get a reference to the underlying database transaction
    pub fn transaction(&self) -> &DatabaseTransaction {
        &self.0
    }
}

/// Execute a function within a database transaction
///
/// 1) If a SharedTxn is in request extensions → use it (no commit/rollback here)
/// 2) Otherwise → begin txn, run closure, apply policy on Ok / rollback on Err
pub async fn with_txn<R, F>(
    req: Option<&HttpRequest>,
    state: &AppState,
    f: F,
) -> Result<R, AppError>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> BoxFuture<'a, Result<R, AppError>>,
{
    // Extract any SharedTxn out of request extensions *before* awaiting to
    // avoid holding a RefCell borrow.
    let shared_txn: Option<SharedTxn> = if let Some(r) = req {
        r.extensions().get::<SharedTxn>().cloned()
    } else {
        None
    };

    if let Some(shared) = shared_txn {
        return f(shared.transaction()).await;
    }

    let txn = state.db.begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => match txn_policy::current() {
            txn_policy::TxnPolicy::CommitOnOk => {
                txn.commit().await?;
                Ok(val)
            }
            txn_policy::TxnPolicy::RollbackOnOk => {
                txn.rollback().await?;
                Ok(val)
            }
        },
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
