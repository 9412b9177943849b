//! Platform seam between [`ClipboardSession`](crate::session::ClipboardSession)
//! and the operating system's clipboard service.
//!
//! The session never talks to the OS directly; it drives a
//! [`ClipboardBackend`]. Two implementations ship here: [`SystemBackend`]
//! (the real service, via `arboard`) and [`MemoryBackend`] (in-process, for
//! headless environments and tests).

use crate::error::ClipboardError;

/// Format tag for text handed to or read from the clipboard.
///
/// Only plain text is exercised by the CLI; the wide variant exists for the
/// read-side fallback and for callers that need to tag payloads explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextFormat {
    /// Narrow, single-byte text (the default tag).
    Text,
    /// Wide/unicode text.
    UnicodeText,
}

/// The platform clipboard service as the session sees it: a single,
/// system-wide resource with exclusive acquire/release and tagged text
/// payloads.
///
/// Callers must pair `acquire` with `release`; `clear`, `store` and `load`
/// assume the service has been acquired.
pub trait ClipboardBackend {
    /// Take the exclusive system-wide clipboard lock.
    fn acquire(&mut self) -> Result<(), ClipboardError>;

    /// Release the lock taken by `acquire`.
    fn release(&mut self) -> Result<(), ClipboardError>;

    /// Empty the clipboard's contents.
    fn clear(&mut self) -> Result<(), ClipboardError>;

    /// Hand `content` to the clipboard under `format`. Ownership of the
    /// stored payload passes to the service.
    fn store(&mut self, format: TextFormat, content: &str) -> Result<(), ClipboardError>;

    /// Read back the payload tagged `format`, as a fresh copy.
    fn load(&mut self, format: TextFormat) -> Result<String, ClipboardError>;
}

/// The real system clipboard, backed by `arboard`.
///
/// `acquire` binds the platform context and doubles as the capability check:
/// on platforms without a clipboard service it fails with
/// [`ClipboardError::UnsupportedPlatform`] every time, never partially.
/// `arboard` is unicode-native, so both [`TextFormat`] tags map to the same
/// underlying text channel here.
#[derive(Default)]
pub struct SystemBackend {
    ctx: Option<arboard::Clipboard>,
}

impl SystemBackend {
    pub fn new() -> Self {
        Self { ctx: None }
    }

    fn ctx(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        // The session guarantees acquire() ran first; a missing context at
        // this point means the caller bypassed the session discipline.
        self.ctx
            .as_mut()
            .ok_or_else(|| ClipboardError::Acquire("clipboard is not acquired".into()))
    }
}

impl ClipboardBackend for SystemBackend {
    fn acquire(&mut self) -> Result<(), ClipboardError> {
        if self.ctx.is_some() {
            return Ok(());
        }
        match arboard::Clipboard::new() {
            Ok(ctx) => {
                self.ctx = Some(ctx);
                Ok(())
            }
            Err(arboard::Error::ClipboardNotSupported) => Err(ClipboardError::UnsupportedPlatform(
                "no clipboard service is available".into(),
            )),
            Err(e) => Err(ClipboardError::Acquire(e.to_string())),
        }
    }

    fn release(&mut self) -> Result<(), ClipboardError> {
        // Dropping the context releases the platform binding; arboard's
        // teardown does not report failure.
        self.ctx = None;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ClipboardError> {
        let ctx = self.ctx()?;
        ctx.clear()
            .map_err(|e| ClipboardError::Clear(e.to_string()))
    }

    fn store(&mut self, _format: TextFormat, content: &str) -> Result<(), ClipboardError> {
        let ctx = self.ctx()?;
        ctx.set_text(content.to_owned()).map_err(|e| match e {
            arboard::Error::ClipboardNotSupported => {
                ClipboardError::UnsupportedPlatform(e.to_string())
            }
            arboard::Error::ClipboardOccupied => ClipboardError::Acquire(e.to_string()),
            arboard::Error::ConversionFailure => ClipboardError::Lock(e.to_string()),
            other => ClipboardError::Allocation(other.to_string()),
        })
    }

    fn load(&mut self, _format: TextFormat) -> Result<String, ClipboardError> {
        let ctx = self.ctx()?;
        ctx.get_text().map_err(|e| match e {
            arboard::Error::ContentNotAvailable => ClipboardError::NoData,
            arboard::Error::ClipboardNotSupported => {
                ClipboardError::UnsupportedPlatform(e.to_string())
            }
            arboard::Error::ClipboardOccupied => ClipboardError::Acquire(e.to_string()),
            other => ClipboardError::Lock(other.to_string()),
        })
    }
}

/// In-process clipboard with the same contract as [`SystemBackend`].
///
/// Holds one slot per [`TextFormat`] and an `occupied` toggle that simulates
/// another process holding the system-wide lock. Useful for headless
/// environments (CI has no clipboard service) and for tests that need
/// deterministic contention.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    narrow: Option<String>,
    wide: Option<String>,
    occupied: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate another process taking or releasing the system lock.
    pub fn set_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }

    fn slot(&mut self, format: TextFormat) -> &mut Option<String> {
        match format {
            TextFormat::Text => &mut self.narrow,
            TextFormat::UnicodeText => &mut self.wide,
        }
    }
}

impl ClipboardBackend for MemoryBackend {
    fn acquire(&mut self) -> Result<(), ClipboardError> {
        if self.occupied {
            return Err(ClipboardError::Acquire(
                "clipboard is held by another process".into(),
            ));
        }
        Ok(())
    }

    fn release(&mut self) -> Result<(), ClipboardError> {
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ClipboardError> {
        self.narrow = None;
        self.wide = None;
        Ok(())
    }

    fn store(&mut self, format: TextFormat, content: &str) -> Result<(), ClipboardError> {
        *self.slot(format) = Some(content.to_owned());
        Ok(())
    }

    fn load(&mut self, format: TextFormat) -> Result<String, ClipboardError> {
        self.slot(format).clone().ok_or(ClipboardError::NoData)
    }
}
