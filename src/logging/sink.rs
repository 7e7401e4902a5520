//! Output sinks for formatted lines.

use std::io::{self, Write};
use std::sync::Mutex;

/// Destination for formatted log lines.
///
/// A sink receives one complete line per call, without the trailing newline.
pub trait Sink: Send + Sync {
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Writes each line to the process's standard error stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        // Holding the lock keeps concurrent records from interleaving.
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{}", line)?;
        stderr.flush()
    }
}

/// Collects lines in memory.
///
/// Useful when embedding the registry somewhere stderr is not observable,
/// and for asserting on exact output.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(line.to_string());
        Ok(())
    }
}
