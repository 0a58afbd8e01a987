// SPDX-License-Identifier: MIT

use std::io::{Result, Write};

/// Simple output counters.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IoStats {
    pub writes: u64,
    pub write_bytes: u64,
    pub flushes: u64,

    /// Whole sectors handed to the stream.
    pub sectors: u64,
    /// Zero bytes added to complete short sectors.
    pub padding_bytes: u64,
}

/// Transparent instrumentation wrapper around a `Write` stream.
#[derive(Debug)]
pub struct IOCounter<W: Write> {
    inner: W,
    pub stats: IoStats,
}

impl<W: Write> IOCounter<W> {
    #[inline]
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            stats: IoStats::default(),
        }
    }

    #[inline]
    pub fn snapshot(&self) -> IoStats {
        self.stats
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for IOCounter<W> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let n = self.inner.write(buf)?;
        self.stats.writes += 1;
        self.stats.write_bytes += n as u64;
        Ok(n)
    }

    #[inline]
    fn flush(&mut self) -> Result<()> {
        self.stats.flushes += 1;
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_bytes_and_flushes() {
        let mut counter = IOCounter::new(Vec::new());
        counter.write_all(&[1, 2, 3]).unwrap();
        counter.write_all(&[4]).unwrap();
        counter.flush().unwrap();

        let stats = counter.snapshot();
        assert_eq!(stats.write_bytes, 4);
        assert_eq!(stats.flushes, 1);
        assert_eq!(counter.into_inner(), vec![1, 2, 3, 4]);
    }
}
