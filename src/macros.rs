//! Helpers/utilities in form of macros.

/// Check a signed result code, and if it is negative, log it and return the
/// same code (as [`FwError::Code`](crate::FwError::Code)) from the enclosing
/// function. Evaluates to the code on success.
#[macro_export]
macro_rules! check_ok {
    ($e: expr) => {
        $crate::check::ok_or_code($e)?
    };
}

/// Check a condition, and if it is false, log it and return the generic
/// failure sentinel ([`FwError::CheckFailed`](crate::FwError::CheckFailed))
/// from the enclosing function.
#[macro_export]
macro_rules! check_true {
    ($e: expr) => {
        $crate::check::true_or_fail($e)?
    };
}
