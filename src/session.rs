//! Scoped access to the system clipboard.
//!
//! [`ClipboardSession`] owns the open/close state of one handle to the
//! clipboard service and marshals plain text in and out of it. Every
//! operation exists in two forms with identical semantics:
//!
//! - a throwing form returning `Result<_, ClipboardError>`, and
//! - a `_noex` form that never fails, reporting the outcome as a `bool`
//!   (the richest set variant also fills a caller-supplied diagnostic
//!   `String`).
//!
//! Both forms are thin adapters over one internal fallible implementation,
//! so they cannot drift apart.
//!
//! The compound operations (`clear`, `set_text`, `get_text`) auto-open a
//! closed session and restore the closed state before returning, on success
//! and on failure alike; calling them on a closed session is observably
//! stateless.

use crate::backend::{ClipboardBackend, SystemBackend, TextFormat};
use crate::error::ClipboardError;

/// One session against the single, system-wide clipboard.
///
/// `is_open` tracks this session's own view of the lock, not the system's:
/// if something else in the process bypasses the session and takes the
/// clipboard directly, these queries will not see it. At most one open/close
/// pair is outstanding at any time; re-opening an open session is a no-op.
pub struct ClipboardSession<B: ClipboardBackend = SystemBackend> {
    backend: B,
    is_open: bool,
}

impl ClipboardSession<SystemBackend> {
    /// Session against the real system clipboard, created closed.
    pub fn new() -> Self {
        Self::with_backend(SystemBackend::new())
    }
}

impl Default for ClipboardSession<SystemBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ClipboardBackend> ClipboardSession<B> {
    /// Session over an explicit backend, created closed.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            is_open: false,
        }
    }

    /// Acquire exclusive clipboard access. No-op if already open.
    ///
    /// Fails with [`ClipboardError::Acquire`] when another process or
    /// session holds the clipboard, or
    /// [`ClipboardError::UnsupportedPlatform`] when there is no clipboard
    /// service at all.
    pub fn open(&mut self) -> Result<(), ClipboardError> {
        if self.is_open {
            return Ok(());
        }
        self.backend.acquire()?;
        self.is_open = true;
        Ok(())
    }

    /// Non-throwing [`Self::open`].
    pub fn open_noex(&mut self) -> bool {
        self.open().is_ok()
    }

    /// Release clipboard access. No-op if already closed; on a failed
    /// release the session stays open.
    pub fn close(&mut self) -> Result<(), ClipboardError> {
        if !self.is_open {
            return Ok(());
        }
        self.backend.release()?;
        self.is_open = false;
        Ok(())
    }

    /// Non-throwing [`Self::close`].
    pub fn close_noex(&mut self) -> bool {
        self.close().is_ok()
    }

    /// Whether this session currently holds the clipboard open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether this session is closed.
    pub fn is_closed(&self) -> bool {
        !self.is_open
    }

    /// Empty the clipboard. Auto-opens a closed session and closes it again
    /// before returning.
    pub fn clear(&mut self) -> Result<(), ClipboardError> {
        self.with_auto_open(|backend| backend.clear())
    }

    /// Non-throwing [`Self::clear`].
    pub fn clear_noex(&mut self) -> bool {
        self.clear().is_ok()
    }

    /// Set the clipboard text, tagged as plain text. Auto-opens/auto-closes
    /// like [`Self::clear`].
    pub fn set_text(&mut self, content: &str) -> Result<(), ClipboardError> {
        self.set_text_as(content, TextFormat::Text)
    }

    /// Set the clipboard text under an explicit format tag. Only
    /// [`TextFormat::Text`] is exercised by the CLI; the overload exists for
    /// callers tagging payloads themselves.
    pub fn set_text_as(
        &mut self,
        content: &str,
        format: TextFormat,
    ) -> Result<(), ClipboardError> {
        self.with_auto_open(|backend| {
            backend.clear()?;
            backend.store(format, content)
        })
    }

    /// Non-throwing [`Self::set_text`].
    pub fn set_text_noex(&mut self, content: &str) -> bool {
        self.set_text(content).is_ok()
    }

    /// Non-throwing [`Self::set_text`] that additionally writes the failure
    /// diagnostic into `err`. `err` is cleared on success.
    pub fn set_text_noex_msg(&mut self, content: &str, err: &mut String) -> bool {
        match self.set_text(content) {
            Ok(()) => {
                err.clear();
                true
            }
            Err(e) => {
                err.clear();
                err.push_str(&e.to_string());
                false
            }
        }
    }

    /// Read the clipboard text. Tries the narrow plain-text representation
    /// first, then the wide one. Auto-opens/auto-closes like
    /// [`Self::clear`]. Returns a fresh copy; no reference to
    /// platform-owned memory survives the call.
    ///
    /// Fails with [`ClipboardError::NoData`] when neither representation is
    /// present, or [`ClipboardError::Lock`] when present data cannot be
    /// read.
    pub fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.with_auto_open(|backend| match backend.load(TextFormat::Text) {
            Err(ClipboardError::NoData) => backend.load(TextFormat::UnicodeText),
            other => other,
        })
    }

    /// Non-throwing [`Self::get_text`]. Writes the text into `out` only on
    /// success; on failure `out` is left untouched.
    pub fn get_text_noex(&mut self, out: &mut String) -> bool {
        match self.get_text() {
            Ok(text) => {
                *out = text;
                true
            }
            Err(_) => false,
        }
    }

    /// Run `op` with the clipboard open, restoring the prior open/closed
    /// state on every exit path. The first failure wins: a compensating
    /// close after a failed `op` is attempted but cannot mask the original
    /// error, while a failed close after a successful `op` is reported.
    fn with_auto_open<T>(
        &mut self,
        op: impl FnOnce(&mut B) -> Result<T, ClipboardError>,
    ) -> Result<T, ClipboardError> {
        let auto_opened = self.is_closed();
        if auto_opened {
            self.open()?;
        }
        let result = op(&mut self.backend);
        if auto_opened {
            if result.is_ok() {
                self.close()?;
            } else {
                let _ = self.close_noex();
            }
        }
        result
    }
}

impl<B: ClipboardBackend> Drop for ClipboardSession<B> {
    fn drop(&mut self) {
        // Best-effort release; teardown never propagates.
        if self.is_open {
            let _ = self.backend.release();
            self.is_open = false;
        }
    }
}
