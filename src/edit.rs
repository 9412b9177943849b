//! Interactive clipboard editing: feed lines from a reader into the
//! clipboard until a sentinel or end of input.

use std::io::BufRead;

use crate::backend::ClipboardBackend;
use crate::error::ClipboardError;
use crate::session::ClipboardSession;

/// Replace the clipboard text from `reader`, line by line.
///
/// The first line replaces the clipboard's contents; every following line is
/// appended to the current contents with a `\n` separator. A line containing
/// a NUL byte is the stop sentinel: the loop ends immediately without
/// writing that line. The loop also ends at end of input.
///
/// Each append re-reads the clipboard rather than keeping a local copy, so
/// text another writer put there mid-loop is appended to, not overwritten.
pub fn edit_from_reader<B: ClipboardBackend>(
    session: &mut ClipboardSession<B>,
    reader: impl BufRead,
) -> Result<(), ClipboardError> {
    let mut first = true;
    for line in reader.lines().map_while(Result::ok) {
        if line.contains('\0') {
            return Ok(());
        }
        if first {
            session.set_text(&line)?;
            first = false;
        } else {
            let current = session.get_text()?;
            session.set_text(&format!("{current}\n{line}"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use std::io::Cursor;

    fn mem_session() -> ClipboardSession<MemoryBackend> {
        ClipboardSession::with_backend(MemoryBackend::new())
    }

    #[test]
    fn lines_append_with_newline_separator() {
        let mut session = mem_session();
        edit_from_reader(&mut session, Cursor::new("a\nb\nc\n")).unwrap();
        assert_eq!(session.get_text().unwrap(), "a\nb\nc");
    }

    #[test]
    fn first_line_replaces_existing_contents() {
        let mut session = mem_session();
        session.set_text("stale").unwrap();
        edit_from_reader(&mut session, Cursor::new("fresh\n")).unwrap();
        assert_eq!(session.get_text().unwrap(), "fresh");
    }

    #[test]
    fn nul_sentinel_stops_before_writing() {
        let mut session = mem_session();
        edit_from_reader(&mut session, Cursor::new("a\n\0bad\nc\n")).unwrap();
        assert_eq!(session.get_text().unwrap(), "a");
    }

    #[test]
    fn nul_in_first_line_writes_nothing() {
        let mut session = mem_session();
        edit_from_reader(&mut session, Cursor::new("\0stop\n")).unwrap();
        assert!(matches!(session.get_text(), Err(ClipboardError::NoData)));
    }

    #[test]
    fn empty_input_writes_nothing() {
        let mut session = mem_session();
        edit_from_reader(&mut session, Cursor::new("")).unwrap();
        assert!(matches!(session.get_text(), Err(ClipboardError::NoData)));
    }

    #[test]
    fn empty_lines_are_kept() {
        let mut session = mem_session();
        edit_from_reader(&mut session, Cursor::new("a\n\nb\n")).unwrap();
        assert_eq!(session.get_text().unwrap(), "a\n\nb");
    }

    #[test]
    fn session_ends_closed() {
        let mut session = mem_session();
        edit_from_reader(&mut session, Cursor::new("a\nb\n")).unwrap();
        assert!(session.is_closed());
    }

    #[test]
    fn failing_write_stops_the_loop() {
        let mut backend = MemoryBackend::new();
        backend.set_occupied(true);
        let mut session = ClipboardSession::with_backend(backend);
        assert!(edit_from_reader(&mut session, Cursor::new("a\n")).is_err());
    }
}
