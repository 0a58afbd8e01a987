// SPDX-License-Identifier: MIT

use std::io::{ErrorKind as IoErrorKind, Read, Write};

use isoio::prelude::*;
use time::OffsetDateTime;

use crate::core::errors::*;
use crate::core::utils::time_utils;
use crate::fs::iso9660::{layout::IsoLayout, types::*};

/// Outcome of a successful build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    pub layout: IsoLayout,
    pub stats: IoStats,
    pub bytes_read: u64,
}

/// IsoBuilder:
/// - Writes the primary volume descriptor, the terminator, both path tables
///   and the root directory at the positions fixed by [`IsoLayout`].
/// - Streams the file content sector by sector behind the root directory.
/// - Fails on any disagreement between the layout and what was actually
///   written or read; nothing is retried and no partial output is cleaned up.
///
/// The output stream must already sit at the end of the system area.
#[derive(Debug, Clone)]
pub struct IsoBuilder<'a> {
    layout: &'a IsoLayout,
    file_name: &'a str,
    volume_id: &'a str,
    timestamp: OffsetDateTime,
}

impl<'a> IsoBuilder<'a> {
    /// `file_name` must already be validated (see [`iso_file_name`](super::name::iso_file_name)).
    /// It doubles as the volume identifier unless overridden.
    pub fn new(layout: &'a IsoLayout, file_name: &'a str) -> Self {
        Self {
            layout,
            file_name,
            volume_id: file_name,
            timestamp: time_utils::now_utc(),
        }
    }

    pub fn with_volume_id(mut self, volume_id: &'a str) -> Self {
        self.volume_id = volume_id;
        self
    }

    /// Fixes the creation time, e.g. for reproducible images.
    pub fn with_timestamp(mut self, timestamp: OffsetDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn build<R: Read, W: Write>(&self, input: &mut R, output: W) -> IsoResult<(W, BuildReport)> {
        let layout = self.layout;
        let mut w = SectorWriter::new(output, layout.primary_volume_sector);

        self.write_volume_descriptors(&mut w)?;
        self.write_path_tables(&mut w)?;
        self.write_root_directory(&mut w)?;
        let bytes_read = self.write_data(&mut w, input)?;

        if bytes_read != layout.file_size as u64 {
            return Err(IsoError::SizeChanged {
                expected: layout.file_size,
                actual: bytes_read,
            });
        }
        if w.current_sector() != Some(layout.last_sector()) {
            return Err(IsoError::SectorCountMismatch {
                expected: layout.last_sector(),
                actual: w.current_sector(),
            });
        }

        let (output, stats) = w.finish()?;
        Ok((
            output,
            BuildReport {
                layout: *layout,
                stats,
                bytes_read,
            },
        ))
    }

    fn write_volume_descriptors<W: Write>(&self, w: &mut SectorWriter<W>) -> IsoResult {
        let mut sector = w.next_sector()?;
        expect_sector(
            "primary volume descriptor",
            self.layout.primary_volume_sector,
            sector.index(),
        )?;
        write_primary_volume_descriptor(&mut sector, self.layout, self.volume_id, self.timestamp)?;

        let mut sector = w.next_sector()?;
        expect_sector(
            "volume descriptor set terminator",
            self.layout.terminator_sector,
            sector.index(),
        )?;
        write_terminator(&mut sector)
    }

    fn write_path_tables<W: Write>(&self, w: &mut SectorWriter<W>) -> IsoResult {
        let root = self.layout.root_directory_sector;

        let mut sector = w.next_sector()?;
        expect_sector("L path table", self.layout.l_path_table_sector, sector.index())?;
        write_path_table(&mut sector, Endian::Little, root)?;

        let mut sector = w.next_sector()?;
        expect_sector("M path table", self.layout.m_path_table_sector, sector.index())?;
        write_path_table(&mut sector, Endian::Big, root)
    }

    fn write_root_directory<W: Write>(&self, w: &mut SectorWriter<W>) -> IsoResult {
        let layout = self.layout;
        let recorded_at = DirDateTime::from_datetime(self.timestamp);

        let mut sector = w.next_sector()?;
        expect_sector("root directory", layout.root_directory_sector, sector.index())?;
        let root = sector.index();

        DirectoryRecord::directory(DirectoryIdentifier::Current, root, recorded_at)
            .write_to(&mut sector)?;
        DirectoryRecord::directory(DirectoryIdentifier::Parent, root, recorded_at)
            .write_to(&mut sector)?;
        DirectoryRecord::file(
            self.file_name,
            layout.first_data_sector,
            layout.file_size,
            recorded_at,
        )
        .write_to(&mut sector)?;
        sector.pad_with_zeros();
        Ok(())
    }

    /// Copies the input into fresh sectors, one full chunk per sector.
    fn write_data<R: Read, W: Write>(&self, w: &mut SectorWriter<W>, input: &mut R) -> IsoResult<u64> {
        let expected = self.layout.file_size as u64;
        let mut chunk = [0u8; SECTOR_SIZE];
        let mut total = 0u64;

        loop {
            let n = read_chunk(input, &mut chunk)?;
            if n == 0 {
                break;
            }
            let first = total == 0;
            total += n as u64;
            if total > expected {
                return Err(IsoError::SizeChanged {
                    expected: self.layout.file_size,
                    actual: total,
                });
            }

            let mut sector = w.next_sector()?;
            if first {
                expect_sector("first data sector", self.layout.first_data_sector, sector.index())?;
            }
            sector.write_bytes(&chunk[..n])?;

            if n < SECTOR_SIZE {
                break;
            }
        }

        if total == 0 {
            // The empty file still owns one zero-filled sector.
            let sector = w.next_sector()?;
            expect_sector("first data sector", self.layout.first_data_sector, sector.index())?;
        }

        Ok(total)
    }
}

/// Fills `buf` from `input` until it is full or the input ends.
fn read_chunk<R: Read>(input: &mut R, buf: &mut [u8]) -> IsoResult<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == IoErrorKind::Interrupted => continue,
            Err(e) => return Err(IsoError::Read(e)),
        }
    }
    Ok(filled)
}

#[inline]
fn expect_sector(what: &'static str, expected: u32, actual: u32) -> IsoResult {
    if expected != actual {
        return Err(IsoError::UnexpectedSector {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}
