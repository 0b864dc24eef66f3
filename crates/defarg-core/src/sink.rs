//! Destinations for rendered overloads.
//!
//! Each overload is handed over as one unit of text, in enumeration order.

use crate::error::{OverloadError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Receives rendered overloads one at a time.
pub trait OverloadSink {
    /// Accept one complete overload.
    fn accept(&mut self, overload: &str) -> Result<()>;

    /// Checked before every emission; returning `false` ends generation early.
    fn wants_more(&self) -> bool {
        true
    }
}

impl<F> OverloadSink for F
where
    F: FnMut(&str) -> Result<()>,
{
    fn accept(&mut self, overload: &str) -> Result<()> {
        self(overload)
    }
}

/// Collects overloads and joins them into a single string.
#[derive(Debug, Default)]
pub struct StringSink {
    units: Vec<String>,
    total_len: usize,
}

impl StringSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of overloads collected so far.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The collected overloads, one entry per unit.
    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// Concatenate all units into one pre-sized buffer.
    pub fn into_string(self) -> String {
        let mut out = String::with_capacity(self.total_len);
        for unit in &self.units {
            out.push_str(unit);
        }
        out
    }
}

impl OverloadSink for StringSink {
    fn accept(&mut self, overload: &str) -> Result<()> {
        self.total_len += overload.len();
        self.units.push(overload.to_string());
        Ok(())
    }
}

/// Streams each overload to an [`io::Write`] as soon as it is rendered.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Bytes written so far.
    pub fn bytes_written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl WriterSink<io::StdoutLock<'static>> {
    /// A sink writing to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}

/// A buffered sink over a freshly created (or truncated) file.
///
/// The file is closed when the sink is dropped, including when generation
/// fails part-way; call [`WriterSink::finish`] to observe flush errors.
pub type FileSink = WriterSink<BufWriter<File>>;

impl FileSink {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(OverloadError::MissingField { field: "output path" });
        }
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> OverloadSink for WriterSink<W> {
    fn accept(&mut self, overload: &str) -> Result<()> {
        self.writer.write_all(overload.as_bytes())?;
        self.written += overload.len();
        Ok(())
    }
}

/// Passes at most `limit` overloads through to the inner sink.
#[derive(Debug)]
pub struct Limited<S> {
    inner: S,
    remaining: usize,
}

impl<S: OverloadSink> Limited<S> {
    pub fn new(inner: S, limit: usize) -> Self {
        Self {
            inner,
            remaining: limit,
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: OverloadSink> OverloadSink for Limited<S> {
    fn accept(&mut self, overload: &str) -> Result<()> {
        self.remaining = self.remaining.saturating_sub(1);
        self.inner.accept(overload)
    }

    fn wants_more(&self) -> bool {
        self.remaining > 0 && self.inner.wants_more()
    }
}
