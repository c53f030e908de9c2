//! Fail-fast error propagation helpers for firmware code.
//!
//! Fallible firmware operations conventionally report signed integer result
//! codes: negative means failure, non-negative means success. This crate wraps
//! that convention in typed errors and call-site helpers that log the failing
//! location and code, then propagate the failure unchanged to the caller.
//!
//! ```
//! use fwutils::{check_ok, check_true, FwResult};
//!
//! fn configure_sensor(raw_gain: i32) -> FwResult<()> {
//!     let gain = check_ok!(raw_gain);
//!     check_true!(gain < 128);
//!     Ok(())
//! }
//!
//! assert!(configure_sensor(3).is_ok());
//! assert_eq!(configure_sensor(-7).unwrap_err().code(), -7);
//! ```
#![allow(clippy::module_name_repetitions)]
#![warn(clippy::unwrap_used)]

pub mod check;
mod error;
pub mod logging;
mod macros;

pub use error::{FwError, ReportableError, GENERIC_FAILURE};
pub type FwResult<T> = ::std::result::Result<T, FwError>;
