// SPDX-License-Identifier: MIT

use std::io::Write;

use zerocopy::{Immutable, IntoBytes};

use crate::prelude::*;
use crate::PAD_FILL;

/// Byte order selector for single-endian fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

/// Sequential writer that emits whole sectors only.
///
/// Content is staged in a one-sector buffer. Opening the next sector (or
/// finishing) zero-pads whatever was left unwritten and hands exactly
/// [`SECTOR_SIZE`] bytes to the stream, so the stream position is always a
/// multiple of the sector size between sectors.
///
/// The stream is expected to be positioned at `first_sector * SECTOR_SIZE`
/// already; the writer never seeks.
#[derive(Debug)]
pub struct SectorWriter<W: Write> {
    io: IOCounter<W>,
    buf: [u8; SECTOR_SIZE],
    pos: usize,
    first_sector: u32,
    opened: u32,
}

impl<W: Write> SectorWriter<W> {
    #[inline]
    pub fn new(io: W, first_sector: u32) -> Self {
        Self {
            io: IOCounter::new(io),
            buf: [0u8; SECTOR_SIZE],
            pos: 0,
            first_sector,
            opened: 0,
        }
    }

    /// Index of the open sector, `None` before the first `next_sector()`.
    #[inline]
    pub fn current_sector(&self) -> Option<u32> {
        self.opened.checked_sub(1).map(|n| self.first_sector + n)
    }

    /// Finalizes the open sector (if any) and opens the following one.
    pub fn next_sector(&mut self) -> IsoIOResult<Sector<'_, W>> {
        self.first_sector
            .checked_add(self.opened)
            .ok_or(IsoIOError::IndexOverflow)?;

        if self.opened > 0 {
            self.emit()?;
        }
        self.opened += 1;
        self.pos = 0;
        Ok(Sector { w: self })
    }

    /// Pads and emits the last sector, then flushes the stream.
    pub fn finish(mut self) -> IsoIOResult<(W, IoStats)> {
        if self.opened > 0 {
            self.emit()?;
        }
        self.io.flush()?;
        let stats = self.io.snapshot();
        Ok((self.io.into_inner(), stats))
    }

    #[inline]
    pub fn stats(&self) -> IoStats {
        self.io.snapshot()
    }

    fn emit(&mut self) -> IsoIOResult {
        let pad = SECTOR_SIZE - self.pos;
        self.buf[self.pos..].fill(0);
        self.io.write_all(&self.buf)?;
        self.io.stats.sectors += 1;
        self.io.stats.padding_bytes += pad as u64;
        self.pos = SECTOR_SIZE;
        Ok(())
    }
}

/// Handle on the open sector.
///
/// Every write is bounds-checked against the sector end: a write that does
/// not fit fails with [`IsoIOError::SectorOverflow`] and leaves the buffer
/// untouched.
#[derive(Debug)]
pub struct Sector<'a, W: Write> {
    w: &'a mut SectorWriter<W>,
}

impl<'a, W: Write> Sector<'a, W> {
    /// Absolute index of this sector.
    #[inline]
    pub fn index(&self) -> u32 {
        self.w.first_sector + (self.w.opened - 1)
    }

    /// Bytes already written into this sector.
    #[inline]
    pub fn position(&self) -> usize {
        self.w.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        SECTOR_SIZE - self.w.pos
    }

    fn reserve(&mut self, len: usize) -> IsoIOResult<&mut [u8]> {
        if len > self.remaining() {
            return Err(IsoIOError::SectorOverflow {
                sector: self.index(),
                pos: self.w.pos,
                len,
            });
        }
        let start = self.w.pos;
        self.w.pos += len;
        Ok(&mut self.w.buf[start..start + len])
    }

    #[inline]
    pub fn write_bytes(&mut self, data: &[u8]) -> IsoIOResult {
        self.reserve(data.len())?.copy_from_slice(data);
        Ok(())
    }

    #[inline]
    pub fn write_u8(&mut self, value: u8) -> IsoIOResult {
        self.write_bytes(&[value])
    }

    #[inline]
    pub fn write_zeros(&mut self, len: usize) -> IsoIOResult {
        self.reserve(len)?.fill(0);
        Ok(())
    }

    /// Writes exactly `len` bytes: `s` left-aligned, truncated if longer,
    /// the rest filled with [`PAD_FILL`].
    pub fn write_padded_str(&mut self, s: &str, len: usize) -> IsoIOResult {
        let bytes = s.as_bytes();
        let n = bytes.len().min(len);
        let field = self.reserve(len)?;
        field[..n].copy_from_slice(&bytes[..n]);
        field[n..].fill(PAD_FILL);
        Ok(())
    }

    /// Zero-fills the rest of the sector. Returns the number of bytes filled.
    pub fn pad_with_zeros(&mut self) -> usize {
        let n = self.remaining();
        self.w.buf[self.w.pos..].fill(0);
        self.w.pos = SECTOR_SIZE;
        self.w.io.stats.padding_bytes += n as u64;
        n
    }

    /// Writes the raw bytes of a zerocopy value.
    #[inline]
    pub fn write_struct<T: IntoBytes + Immutable + ?Sized>(&mut self, val: &T) -> IsoIOResult {
        self.write_bytes(val.as_bytes())
    }

    // Implements le/be/order/both writers for u16 and u32
    crate::sector_impl_primitive_w!(u16 => BothEndianU16, u32 => BothEndianU32);
}
