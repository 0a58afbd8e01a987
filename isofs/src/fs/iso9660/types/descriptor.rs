// SPDX-License-Identifier: MIT

use std::io::Write;

use isoio::prelude::*;
use time::OffsetDateTime;

use crate::core::errors::*;
use crate::fs::iso9660::{
    constant::*,
    layout::IsoLayout,
    types::{DecDateTime, DirDateTime, DirectoryIdentifier, DirectoryRecord},
};

/// Writes the primary volume descriptor into `sector` and zero-pads it.
///
/// All optional identifiers are left blank. `volume_id` is truncated to
/// its 32-byte field.
pub fn write_primary_volume_descriptor<W: Write>(
    sector: &mut Sector<'_, W>,
    layout: &IsoLayout,
    volume_id: &str,
    now: OffsetDateTime,
) -> IsoResult {
    sector.write_u8(ISO_VD_PRIMARY)?;
    sector.write_bytes(ISO_STANDARD_ID)?;
    sector.write_u8(ISO_VD_VERSION)?;
    sector.write_u8(0)?; // unused

    sector.write_padded_str("", ISO_SYSTEM_ID_LEN)?;
    sector.write_padded_str(volume_id, ISO_VOLUME_ID_LEN)?;

    sector.write_zeros(8)?;
    sector.write_u32_both(layout.total_sectors)?; // volume space size
    sector.write_zeros(32)?; // escape sequences (unused)

    sector.write_u16_both(ISO_VOLUME_SET_SIZE)?;
    sector.write_u16_both(ISO_VOLUME_SEQUENCE_NUMBER)?;
    sector.write_u16_both(ISO_SECTOR_SIZE as u16)?;
    sector.write_u32_both(ISO_PATH_TABLE_SIZE)?;

    sector.write_u32_le(layout.l_path_table_sector)?;
    sector.write_u32_le(0)?; // no optional L path table
    sector.write_u32_be(layout.m_path_table_sector)?;
    sector.write_u32_be(0)?; // no optional M path table

    DirectoryRecord::directory(
        DirectoryIdentifier::Current,
        layout.root_directory_sector,
        DirDateTime::from_datetime(now),
    )
    .write_to(sector)?;

    sector.write_padded_str("", ISO_VOLUME_SET_ID_LEN)?;
    sector.write_padded_str("", ISO_PUBLISHER_ID_LEN)?;
    sector.write_padded_str("", ISO_PREPARER_ID_LEN)?;
    sector.write_padded_str("", ISO_APPLICATION_ID_LEN)?;

    sector.write_padded_str("", ISO_FILE_ID_FIELD_LEN)?; // copyright
    sector.write_padded_str("", ISO_FILE_ID_FIELD_LEN)?; // abstract
    sector.write_padded_str("", ISO_FILE_ID_FIELD_LEN)?; // bibliographic

    let created = DecDateTime::from_datetime(now);
    sector.write_struct(&created)?; // creation
    sector.write_struct(&created)?; // modification
    sector.write_struct(&DecDateTime::unspecified())?; // expiration
    sector.write_struct(&DecDateTime::unspecified())?; // effective

    sector.write_u8(ISO_FILE_STRUCTURE_VERSION)?;
    sector.write_u8(0)?;

    // 512 bytes application use + 653 reserved
    sector.pad_with_zeros();
    Ok(())
}

/// Writes the volume descriptor set terminator and zero-pads the sector.
pub fn write_terminator<W: Write>(sector: &mut Sector<'_, W>) -> IsoResult {
    sector.write_u8(ISO_VD_TERMINATOR)?;
    sector.write_bytes(ISO_STANDARD_ID)?;
    sector.write_u8(ISO_VD_VERSION)?;
    sector.pad_with_zeros();
    Ok(())
}
