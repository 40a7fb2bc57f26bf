//! Output sinks for the value encodings.
//!
//! Writers never fail: they push text into an [`Emitter`] and move on. Sinks
//! backed by real I/O remember the first error and report it from
//! [`IoEmitter::finish`], so a tree walk is never interrupted halfway.

use std::io::{self, Write};

/// Destination for encoded text.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a single character.
    fn emit_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.emit(c.encode_utf8(&mut buf));
    }

    /// Emit a newline (`\n`).
    fn emit_newline(&mut self) {
        self.emit_char('\n');
    }

    /// Emit a single space.
    fn emit_space(&mut self) {
        self.emit_char(' ');
    }
}

/// In-memory sink.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Consume the emitter and return the text.
    pub fn output(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_char(&mut self, c: char) {
        self.buffer.push(c);
    }
}

/// Sink over any [`io::Write`].
///
/// After the first failed write, later output is discarded and the error
/// is returned by [`finish`](IoEmitter::finish).
pub struct IoEmitter<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> IoEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Flush the writer and return it, or the first error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Emitter for IoEmitter<W> {
    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.writer.write_all(text.as_bytes()) {
            self.error = Some(err);
        }
    }
}
