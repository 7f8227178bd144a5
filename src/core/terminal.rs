//! Terminal output sink used by the program loop.

use std::io::{self, Write};

/// Minimal terminal interface: dimensions plus a write path for finished frames.
pub trait Terminal {
    /// Write output to the terminal.
    fn write(&mut self, data: &str) -> io::Result<()>;

    /// Terminal dimensions.
    fn columns(&self) -> u16;
    fn rows(&self) -> u16;
}

/// A terminal over any writer with fixed dimensions.
///
/// Useful for hosts that size the screen themselves and for capturing frames in tests.
pub struct WriterTerminal<W: Write> {
    writer: W,
    columns: u16,
    rows: u16,
}

impl<W: Write> WriterTerminal<W> {
    pub fn new(writer: W, columns: u16, rows: u16) -> Self {
        Self {
            writer,
            columns,
            rows,
        }
    }

    pub fn set_size(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Terminal for WriterTerminal<W> {
    fn write(&mut self, data: &str) -> io::Result<()> {
        self.writer.write_all(data.as_bytes())?;
        self.writer.flush()
    }

    fn columns(&self) -> u16 {
        self.columns
    }

    fn rows(&self) -> u16 {
        self.rows
    }
}
