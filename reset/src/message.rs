//! Fixed-capacity message assembly.
//!
//! Diagnostic messages are formatted into a stack buffer: the recorder
//! runs on the panic path, where allocation is off the table.

use core::fmt::{self, Write};

use crate::layout::MAX_MSG_SIZE;

/// Truncating formatter over a fixed stack buffer.
///
/// Writes past the capacity are dropped rather than reported as errors, so
/// `write!` into the buffer never fails. Truncation lands on a UTF-8
/// character boundary.
pub struct MsgBuf {
    buf: [u8; MAX_MSG_SIZE],
    len: usize,
}

impl MsgBuf {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            buf: [0; MAX_MSG_SIZE],
            len: 0,
        }
    }

    /// The formatted contents.
    pub fn as_str(&self) -> &str {
        // Only whole UTF-8 fragments are ever copied in.
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

impl Default for MsgBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MsgBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let space = MAX_MSG_SIZE - self.len;
        let bytes = s.as_bytes();
        if bytes.len() <= space {
            self.buf[self.len..self.len + bytes.len()].copy_from_slice(bytes);
            self.len += bytes.len();
        } else {
            let mut cut = space;
            while cut > 0 && !s.is_char_boundary(cut) {
                cut -= 1;
            }
            self.buf[self.len..self.len + cut].copy_from_slice(&bytes[..cut]);
            self.len += cut;
        }
        Ok(())
    }
}
