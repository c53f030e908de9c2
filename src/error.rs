//! Error types for the propagation helpers.

use crate::fw_warn;
use std::fmt::Display;
use thiserror::Error;

/// Generic failure code returned when a condition check fails and no more
/// specific cause is available.
pub const GENERIC_FAILURE: i32 = -1;

/// A failure surfaced by one of the propagation helpers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FwError {
    /// A fallible operation reported a negative result code. The original
    /// code is preserved so callers can keep propagating it unchanged.
    #[error("operation failed with code {0}")]
    Code(i32),

    /// A required condition evaluated to false. No producer code exists for
    /// this case, so it flattens to [`GENERIC_FAILURE`].
    #[error("condition check failed")]
    CheckFailed,
}

impl FwError {
    /// Flatten the error back into the signed result-code convention.
    pub const fn code(&self) -> i32 {
        match self {
            Self::Code(code) => *code,
            Self::CheckFailed => GENERIC_FAILURE,
        }
    }
}

impl From<FwError> for i32 {
    fn from(error: FwError) -> Self {
        error.code()
    }
}

/// Trait for non-fatal error types that can be "reported" to the console.
///
/// This trait is meant to be implemented for [`Result`](Result)s.
pub trait ReportableError {
    /// Log a warning to the console if the [`Result`] variant is an [`Err`], or do nothing if it's [`Ok`].
    fn report(self, desc: &str);
}

impl<T, E: Display> ReportableError for Result<T, E> {
    fn report(self, desc: &str) {
        if let Err(why) = self {
            fw_warn!("{desc}: {why}");
        }
    }
}
