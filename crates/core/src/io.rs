// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Streams handed through to commands.

use parking_lot::Mutex;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// Output, error and input streams of a shell session.
///
/// The core never interprets these; commands write to them and the binary
/// decides where they go.
pub struct Io {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
    input: Box<dyn BufRead + Send>,
}

impl Io {
    pub fn new(
        out: impl Write + Send + 'static,
        err: impl Write + Send + 'static,
        input: impl BufRead + Send + 'static,
    ) -> Self {
        Self {
            out: Box::new(out),
            err: Box::new(err),
            input: Box::new(input),
        }
    }

    /// Process stdout, stderr and stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr(), io::BufReader::new(io::stdin()))
    }

    /// In-memory streams with empty input; returns the buffers to inspect.
    pub fn captured() -> (Self, Captured) {
        let captured = Captured::default();
        let io = Self::new(captured.out.clone(), captured.err.clone(), io::empty());
        (io, captured)
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    pub fn err(&mut self) -> &mut dyn Write {
        &mut *self.err
    }

    pub fn input(&mut self) -> &mut dyn BufRead {
        &mut *self.input
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

impl Default for Io {
    fn default() -> Self {
        Self::new(io::sink(), io::sink(), io::empty())
    }
}

impl std::fmt::Debug for Io {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Io").finish_non_exhaustive()
    }
}

/// Handles on the buffers behind [`Io::captured`].
#[derive(Clone, Debug, Default)]
pub struct Captured {
    pub out: SharedBuffer,
    pub err: SharedBuffer,
}

/// Clonable in-memory writer; all clones append to the same bytes.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Return the contents and clear the buffer.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.bytes.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "io_tests.rs"]
mod tests;
