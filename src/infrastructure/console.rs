//! Direct Unicode output to an interactive console
//!
//! On Windows, text written as bytes to a console is reinterpreted with the
//! console code page, so a real console gets `WriteConsoleW` instead.

/// Outcome of a direct console write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleWrite {
    /// Nothing reached the console; the caller should write bytes instead
    Unavailable,
    Complete,
    /// Part of the text reached the console before a write failed
    Interrupted { written: usize },
}

#[cfg_attr(not(windows), allow(dead_code))]
const CHUNK_UNITS: usize = 16 * 1024;

/// Feed `units` to `write` in chunks of at most `chunk` units.
///
/// Chunks never end between the halves of a surrogate pair. `write` returns
/// the number of units accepted, or `None` on failure.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn write_units<F>(units: &[u16], chunk: usize, mut write: F) -> ConsoleWrite
where
    F: FnMut(&[u16]) -> Option<usize>,
{
    let mut offset = 0;
    while offset < units.len() {
        let mut end = (offset + chunk).min(units.len());
        if end < units.len() && end - offset > 1 && (0xD800..=0xDBFF).contains(&units[end - 1]) {
            end -= 1;
        }

        match write(&units[offset..end]) {
            Some(n) if n > 0 => offset += n.min(end - offset),
            _ if offset == 0 => return ConsoleWrite::Unavailable,
            _ => return ConsoleWrite::Interrupted { written: offset },
        }
    }
    ConsoleWrite::Complete
}

/// Write `text` straight to the console attached to stdout.
#[cfg(windows)]
pub fn write_console(text: &str) -> ConsoleWrite {
    use std::ptr;

    use windows_sys::Win32::Foundation::INVALID_HANDLE_VALUE;
    use windows_sys::Win32::System::Console::{
        GetConsoleMode, GetStdHandle, WriteConsoleW, STD_OUTPUT_HANDLE,
    };

    // SAFETY: querying the process's standard output handle.
    let handle = unsafe { GetStdHandle(STD_OUTPUT_HANDLE) };
    if handle.is_null() || handle == INVALID_HANDLE_VALUE {
        return ConsoleWrite::Unavailable;
    }

    let mut mode: u32 = 0;
    // SAFETY: `mode` is a valid out pointer; fails for non-console handles.
    if unsafe { GetConsoleMode(handle, &mut mode) } == 0 {
        return ConsoleWrite::Unavailable;
    }

    let units: Vec<u16> = text.encode_utf16().collect();
    write_units(&units, CHUNK_UNITS, |chunk| {
        let mut written = 0u32;
        // SAFETY: the pointer and length describe a live slice of `units`.
        let ok = unsafe {
            WriteConsoleW(
                handle,
                chunk.as_ptr().cast(),
                chunk.len() as u32,
                &mut written,
                ptr::null(),
            )
        };
        (ok != 0).then_some(written as usize)
    })
}

/// Write `text` straight to the console attached to stdout.
///
/// There is no separate console path outside Windows.
#[cfg(not(windows))]
pub fn write_console(_text: &str) -> ConsoleWrite {
    ConsoleWrite::Unavailable
}
