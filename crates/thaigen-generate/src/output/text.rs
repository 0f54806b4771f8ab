use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::GenerationError;

/// Line-oriented sink that streams sentences as they are produced.
pub struct SentenceSink<W: Write> {
    inner: CountingWriter<W>,
    lines: u64,
}

impl SentenceSink<BufWriter<File>> {
    /// Create or truncate `path`.
    pub fn create(path: &Path) -> Result<Self, GenerationError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(GenerationError::Sink)?;
        }
        let file = File::create(path).map_err(GenerationError::Sink)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> SentenceSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: CountingWriter::new(writer),
            lines: 0,
        }
    }

    pub fn write_line(&mut self, line: &str) -> Result<(), GenerationError> {
        self.inner
            .write_all(line.as_bytes())
            .map_err(GenerationError::Sink)?;
        self.inner.write_all(b"\n").map_err(GenerationError::Sink)?;
        self.lines += 1;
        Ok(())
    }

    pub fn lines_written(&self) -> u64 {
        self.lines
    }

    pub fn bytes_written(&self) -> u64 {
        self.inner.bytes_written()
    }

    pub fn flush(&mut self) -> Result<(), GenerationError> {
        self.inner.flush().map_err(GenerationError::Sink)
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> Result<W, GenerationError> {
        self.flush()?;
        Ok(self.inner.inner)
    }
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
