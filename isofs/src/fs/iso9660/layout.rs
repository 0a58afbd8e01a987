// SPDX-License-Identifier: MIT

use crate::core::errors::*;
use crate::fs::iso9660::constant::*;

/// Sector layout of a single-file image.
///
/// Computed once from the input size, before any content-dependent field
/// is written, and handed to the builder which checks every position
/// against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoLayout {
    pub file_size: u32,

    pub primary_volume_sector: u32,
    pub terminator_sector: u32,
    pub l_path_table_sector: u32,
    pub m_path_table_sector: u32,
    pub root_directory_sector: u32,

    pub first_data_sector: u32,
    pub data_sectors: u32,
    pub total_sectors: u32,
}

impl IsoLayout {
    pub fn for_file_size(file_size: u64) -> IsoResult<Self> {
        let file_size = u32::try_from(file_size).map_err(|_| IsoError::FileTooLarge(file_size))?;
        let data_sectors = Self::data_sectors_for(file_size);

        Ok(Self {
            file_size,
            primary_volume_sector: ISO_PRIMARY_VOLUME_SECTOR,
            terminator_sector: ISO_PRIMARY_VOLUME_SECTOR + 1,
            l_path_table_sector: ISO_L_PATH_TABLE_SECTOR,
            m_path_table_sector: ISO_M_PATH_TABLE_SECTOR,
            root_directory_sector: ISO_ROOT_DIRECTORY_SECTOR,
            first_data_sector: ISO_ROOT_DIRECTORY_SECTOR + 1,
            data_sectors,
            total_sectors: ISO_HEADER_SECTORS + data_sectors,
        })
    }

    /// `max(1, ceil(size / sector))`: an empty file still owns one sector.
    #[inline]
    pub fn data_sectors_for(file_size: u32) -> u32 {
        file_size.div_ceil(ISO_SECTOR_SIZE).max(1)
    }

    #[inline]
    pub fn last_sector(&self) -> u32 {
        self.total_sectors - 1
    }

    #[inline]
    pub fn image_size_bytes(&self) -> u64 {
        self.total_sectors as u64 * ISO_SECTOR_SIZE as u64
    }

    /// Zero bytes completing the final data sector.
    #[inline]
    pub fn tail_padding_bytes(&self) -> u32 {
        (self.data_sectors as u64 * ISO_SECTOR_SIZE as u64 - self.file_size as u64) as u32
    }
}
