//! Build-time game constants shared by pool selection and the
//! investigation-over arithmetic.

use std::time::Duration;

use crate::errors::domain::{DomainError, ValidationKind};

/// How many suspects are pooled into one investigation. The original board
/// game used 12; the digital rules settled on 15.
pub const POOL_SIZE: usize = 15;

/// Default polling cadence while waiting for a round's answer.
pub const ANSWER_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Default bound on the answer wait; elapsing it is a Timeout, never an
/// empty answer.
pub const ANSWER_WAIT_TIMEOUT: Duration = Duration::from_secs(60);

/// A pool must be odd (so "all but the criminal" is even-handed for the
/// original deck layout) and large enough to leave a deduction to make.
pub fn validate_pool_size(size: usize) -> Result<(), DomainError> {
    if size < 3 || size % 2 == 0 {
        return Err(DomainError::validation(
            ValidationKind::WrongPoolSize,
            format!("pool size must be odd and at least 3, got {size}"),
        ));
    }
    Ok(())
}
