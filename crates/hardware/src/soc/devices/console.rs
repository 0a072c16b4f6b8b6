//! Console implementations.
//!
//! Provides the stdout console used by the command-line runner and an
//! in-memory console that records printed values.

use std::io::{self, Write};

use crate::soc::traits::Console;

/// Writes each value as a decimal line to stdout and flushes immediately.
#[derive(Debug, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn print_value(&mut self, value: u8) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{value}")?;
        out.flush()
    }
}

/// Writes each value as a decimal line to any `Write` sink, flushing after every line.
#[derive(Debug)]
pub struct WriterConsole<W: Write> {
    writer: W,
}

impl<W: Write> WriterConsole<W> {
    /// Wraps a writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Console for WriterConsole<W> {
    fn print_value(&mut self, value: u8) -> io::Result<()> {
        writeln!(self.writer, "{value}")?;
        self.writer.flush()
    }
}

/// Records printed values in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferConsole {
    values: Vec<u8>,
}

impl BufferConsole {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Values printed so far, in order.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Printed values rendered as the lines stdout would have shown.
    pub fn lines(&self) -> Vec<String> {
        self.values.iter().map(u8::to_string).collect()
    }
}

impl Console for BufferConsole {
    fn print_value(&mut self, value: u8) -> io::Result<()> {
        self.values.push(value);
        Ok(())
    }
}
