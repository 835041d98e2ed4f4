//! The error taxonomy shared by the crate's components.
//!
//! Only argument validation produces an [`Error`]. Absent values never
//! do: lookups answer with `None`, and inserting a duplicate or
//! deleting a missing value is a silent no-op.

use thiserror::Error;

/// Errors that can be returned by operations validating their
/// arguments.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument was outside the range the operation supports.
    #[error("invalid argument: {msg}")]
    InvalidArgument {
        /// What was wrong with the argument.
        msg: &'static str,
    },
}

/// Shorthand for results carrying a crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Returns an `InvalidArgument` error carrying `msg` when the test
/// condition is false. Otherwise returns Ok.
pub(crate) fn check_argument(test: bool, msg: &'static str) -> Result<()> {
    if test {
        Ok(())
    } else {
        Err(Error::InvalidArgument { msg })
    }
}
