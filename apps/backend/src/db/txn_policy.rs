use std::sync::OnceLock;

/// What `with_txn` does with a transaction whose closure succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnPolicy {
    /// Commit on success. Production default.
    CommitOnOk,
    /// Roll back on success, leaving the database untouched. Test suites
    /// set this to keep cases isolated without cleanup code.
    RollbackOnOk,
}

static POLICY: OnceLock<TxnPolicy> = OnceLock::new();

/// Current process-wide policy; `CommitOnOk` unless one was set.
pub fn current() -> TxnPolicy {
    POLICY.get().copied().unwrap_or(TxnPolicy::CommitOnOk)
}

/// Fix the policy for the rest of the process. First caller wins; later
/// calls are ignored.
pub fn set_txn_policy(policy: TxnPolicy) {
    let _ = POLICY.set(policy);
}
