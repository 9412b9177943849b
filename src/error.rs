//! Error taxonomy for clipboard operations.
//!
//! Every failure a [`ClipboardSession`](crate::session::ClipboardSession)
//! operation can hit maps to exactly one variant here. Variants carry the
//! platform's own diagnostic text where one exists, so the CLI can print it
//! verbatim behind its `ERROR: ` prefix.

use thiserror::Error;

/// Failure kinds for clipboard access.
///
/// All of these are recoverable in principle (a caller may retry), but
/// nothing in this crate retries — failures surface immediately.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard service is available on this platform. Permanent for the
    /// lifetime of the process; retrying cannot succeed.
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// The system-wide clipboard lock is held by another process or session,
    /// or the platform denied access.
    #[error("clipboard is already occupied: {0}")]
    Acquire(String),

    /// Releasing the clipboard lock failed; the session stays open.
    #[error("close failed: {0}")]
    Release(String),

    /// The platform refused to empty the clipboard.
    #[error("empty failed: {0}")]
    Clear(String),

    /// The memory block for outgoing text could not be allocated.
    #[error("set failed: {0}")]
    Allocation(String),

    /// Clipboard data could not be locked for reading or writing.
    #[error("lock failed: {0}")]
    Lock(String),

    /// Neither the plain-text nor the wide-text representation is present.
    #[error("get failed: clipboard holds no text")]
    NoData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_platform_diagnostic() {
        let e = ClipboardError::Acquire("held by pid 4242".into());
        assert_eq!(
            e.to_string(),
            "clipboard is already occupied: held by pid 4242"
        );
    }

    #[test]
    fn no_data_has_fixed_message() {
        assert_eq!(
            ClipboardError::NoData.to_string(),
            "get failed: clipboard holds no text"
        );
    }
}
