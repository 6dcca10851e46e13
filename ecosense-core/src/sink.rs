//! Output sinks over `std::io`
//!
//! On a host the "serial link" is whatever writer the process was handed:
//! an opened tty device, stdout under a terminal, or a capture buffer in
//! tests. All of them go through [`WriterSink`].

use std::io::Write;

use crate::errors::{NodeError, NodeResult};
use crate::traits::OutputSink;

/// Output sink over any `io::Write`
///
/// Lines are flushed immediately: the host peer reads the link
/// line-by-line and brace-counts the JSON block, so buffering a partial
/// document would stall it.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer as an output sink
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> NodeResult<()> {
        writeln!(self.writer, "{line}").map_err(|_| NodeError::SinkWrite)?;
        self.writer.flush().map_err(|_| NodeError::SinkWrite)
    }
}

/// Capture sink for tests
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Every line written, in order
    pub lines: Vec<String>,
}

impl MemorySink {
    /// Create an empty capture sink
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for MemorySink {
    fn write_line(&mut self, line: &str) -> NodeResult<()> {
        self.lines.push(line.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_sink_terminates_lines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_line("Sample 1: NH3=0.00ppm").unwrap();
        sink.write_line("done").unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "Sample 1: NH3=0.00ppm\ndone\n");
    }

    #[test]
    fn memory_sink_keeps_order() {
        let mut sink = MemorySink::new();
        sink.write_line("a").unwrap();
        sink.write_line("b").unwrap();
        assert_eq!(sink.lines, vec!["a", "b"]);
    }
}
