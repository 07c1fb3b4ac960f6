use std::io::{Read, Write};

use crate::stats::{TransferCount, TransferStats};


/// Counts every read made through it.
///
/// Each `read` call is forwarded to the wrapped reader untouched and
/// tallied afterwards, whatever its outcome. End-of-stream and failed
/// calls count as operations too; they just move zero bytes.
#[derive(Debug)]
pub struct CountingReader<R: Read> {
    reader: R,
    stats: TransferStats,
}

impl<R: Read> CountingReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, stats: TransferStats::new() }
    }

    /// Total bytes read and read calls made so far.
    pub fn read_count(&self) -> TransferCount {
        self.stats.snapshot()
    }

    /// A handle onto the read totals, pollable from other threads.
    pub fn read_stats(&self) -> TransferStats {
        self.stats.clone()
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let read = self.reader.read(buf);
        // a failed call is still one operation, it just moved no bytes
        self.stats.record(read.as_ref().copied().unwrap_or(0));
        read
    }
}

/// Writes pass through unmetered, keeping the write half of a wrapped
/// duplex stream usable.
impl<R: Read + Write> Write for CountingReader<R> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.reader.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.reader.flush()
    }
}


/// Counts every write made through it.
///
/// The mirror of [`CountingReader`]: `write` calls are forwarded and
/// tallied regardless of outcome. `flush` is forwarded but is not an
/// operation.
#[derive(Debug)]
pub struct CountingWriter<W: Write> {
    writer: W,
    stats: TransferStats,
}

impl<W: Write> CountingWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, stats: TransferStats::new() }
    }

    /// Total bytes written and write calls made so far.
    pub fn write_count(&self) -> TransferCount {
        self.stats.snapshot()
    }

    /// A handle onto the write totals, pollable from other threads.
    pub fn write_stats(&self) -> TransferStats {
        self.stats.clone()
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let written = self.writer.write(buf);
        self.stats.record(written.as_ref().copied().unwrap_or(0));
        written
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

/// Reads pass through unmetered.
impl<W: Write + Read> Read for CountingWriter<W> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.writer.read(buf)
    }
}


/// Counts both directions of a duplex stream, independently.
///
/// The stream is wrapped once: reads are tallied by an outer
/// [`CountingReader`], writes pass through it unmetered and are
/// tallied by an inner [`CountingWriter`]. Neither tally ever touches
/// the other, and no locking is added around the stream itself.
#[derive(Debug)]
pub struct CountingStream<T: Read + Write> {
    inner: CountingReader<CountingWriter<T>>,
}

impl<T: Read + Write> CountingStream<T> {
    pub fn new(stream: T) -> Self {
        Self { inner: CountingReader::new(CountingWriter::new(stream)) }
    }

    /// Total bytes read and read calls made so far.
    pub fn read_count(&self) -> TransferCount {
        self.inner.read_count()
    }

    /// Total bytes written and write calls made so far.
    pub fn write_count(&self) -> TransferCount {
        self.inner.get_ref().write_count()
    }

    /// A handle onto the read totals, pollable from other threads.
    pub fn read_stats(&self) -> TransferStats {
        self.inner.read_stats()
    }

    /// A handle onto the write totals, pollable from other threads.
    pub fn write_stats(&self) -> TransferStats {
        self.inner.get_ref().write_stats()
    }

    pub fn get_ref(&self) -> &T {
        self.inner.get_ref().get_ref()
    }

    pub fn get_mut(&mut self) -> &mut T {
        self.inner.get_mut().get_mut()
    }

    pub fn into_inner(self) -> T {
        self.inner.into_inner().into_inner()
    }
}

impl<T: Read + Write> Read for CountingStream<T> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<T: Read + Write> Write for CountingStream<T> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
