//! Fail-fast checks for signed result codes and boolean preconditions.
//!
//! Both helpers are stateless and reentrant. On failure they emit exactly one
//! error-severity record naming the call site and the failing value, then hand
//! the failure back for the caller's `?` to propagate. Nothing is retried,
//! recovered or deduplicated here; policy belongs to the frames above.

use crate::{fw_error, FwError, FwResult};
use std::panic::Location;

/// Check a signed result code from a fallible operation.
///
/// Non-negative codes pass through unchanged. A negative code is logged with
/// the caller's source location and wrapped in [`FwError::Code`], preserving
/// the exact value for upward propagation. Usually invoked through
/// [`check_ok!`](crate::check_ok).
#[track_caller]
pub fn ok_or_code(code: i32) -> FwResult<i32> {
    if code < 0 {
        let location = Location::caller();
        fw_error!(
            "Error at {}:{}:{}",
            location.file(),
            location.line(),
            code
        );
        return Err(FwError::Code(code));
    }

    Ok(code)
}

/// Check a boolean precondition.
///
/// A false condition is logged with the caller's source location and yields
/// [`FwError::CheckFailed`], which flattens to the generic -1 sentinel. The
/// logged value is the condition itself (always 0), so the record carries no
/// cause beyond "something was false here". Usually invoked through
/// [`check_true!`](crate::check_true).
#[track_caller]
pub fn true_or_fail(condition: bool) -> FwResult<()> {
    if !condition {
        let location = Location::caller();
        fw_error!(
            "Error at {}:{}:{}",
            location.file(),
            location.line(),
            i32::from(condition)
        );
        return Err(FwError::CheckFailed);
    }

    Ok(())
}
