//! Parser errors

use thiserror::Error;

/// The ways parsing can fail.
///
/// Malformed input isn't one of them. That's reported as diagnostics, and
/// parsing carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The caller asked for parsing to stop through a
    /// [`CancellationToken`][crate::CancellationToken].
    #[error("parsing was cancelled")]
    Cancelled,
}
