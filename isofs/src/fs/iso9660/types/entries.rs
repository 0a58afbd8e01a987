// SPDX-License-Identifier: MIT

use std::io::Write;

use isoio::prelude::*;

use crate::core::errors::*;
use crate::fs::iso9660::{attr::FileFlags, constant::*, types::DirDateTime};

/// Identifier carried by a directory record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryIdentifier<'a> {
    /// `.`, also used for the root record of the volume descriptor.
    Current,
    /// `..`
    Parent,
    File(&'a str),
}

impl<'a> DirectoryIdentifier<'a> {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            DirectoryIdentifier::Current => &[ISO_IDENT_CURRENT],
            DirectoryIdentifier::Parent => &[ISO_IDENT_PARENT],
            DirectoryIdentifier::File(name) => name.as_bytes(),
        }
    }
}

/// One directory record: `.`, `..` or the file entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryRecord<'a> {
    pub identifier: DirectoryIdentifier<'a>,
    pub extent: u32,
    pub data_length: u32,
    pub recorded_at: DirDateTime,
    pub flags: FileFlags,
}

impl<'a> DirectoryRecord<'a> {
    /// A directory whose extent is a single sector.
    pub fn directory(
        identifier: DirectoryIdentifier<'a>,
        extent: u32,
        recorded_at: DirDateTime,
    ) -> Self {
        Self {
            identifier,
            extent,
            data_length: ISO_SECTOR_SIZE,
            recorded_at,
            flags: FileFlags::DIRECTORY,
        }
    }

    pub fn file(name: &'a str, extent: u32, size: u32, recorded_at: DirDateTime) -> Self {
        Self {
            identifier: DirectoryIdentifier::File(name),
            extent,
            data_length: size,
            recorded_at,
            flags: FileFlags::empty(),
        }
    }

    /// Record length including the pad byte that keeps it even.
    #[inline]
    pub fn record_len(&self) -> usize {
        let len = ISO_DIR_RECORD_FIXED_LEN + self.identifier.as_bytes().len();
        len + len % 2
    }

    /// Encodes the record at the current position of `sector`.
    ///
    /// Returns the number of bytes written.
    pub fn write_to<W: Write>(&self, sector: &mut Sector<'_, W>) -> IsoResult<usize> {
        let identifier = self.identifier.as_bytes();
        if identifier.len() > ISO_MAX_IDENTIFIER_LEN {
            return Err(IsoError::IdentifierTooLong(identifier.len()));
        }
        let record_len = self.record_len();

        sector.write_u8(record_len as u8)?;
        sector.write_u8(0)?; // extended attribute record length
        sector.write_u32_both(self.extent)?;
        sector.write_u32_both(self.data_length)?;
        sector.write_struct(&self.recorded_at)?;
        sector.write_u8(self.flags.bits())?;
        sector.write_u8(0)?; // file unit size (not interleaved)
        sector.write_u8(0)?; // interleave gap size
        sector.write_u16_both(ISO_VOLUME_SEQUENCE_NUMBER)?;
        sector.write_u8(identifier.len() as u8)?;
        sector.write_bytes(identifier)?;
        if identifier.len() % 2 == 0 {
            sector.write_u8(0)?;
        }

        Ok(record_len)
    }
}
