// SPDX-License-Identifier: MIT

use isoio::SECTOR_SIZE;

// === Disk Layout Parameters ===

pub const ISO_SECTOR_SIZE: u32 = SECTOR_SIZE as u32; // Logical Block Size
pub const ISO_SYSTEM_AREA_SECTORS: u32 = 16;

// === Special Sector Numbers ===

pub const ISO_PRIMARY_VOLUME_SECTOR: u32 = ISO_SYSTEM_AREA_SECTORS;
pub const ISO_VOLUME_DESCRIPTOR_SECTORS: u32 = 2; // primary + terminator
pub const ISO_L_PATH_TABLE_SECTOR: u32 = ISO_PRIMARY_VOLUME_SECTOR + ISO_VOLUME_DESCRIPTOR_SECTORS;
pub const ISO_M_PATH_TABLE_SECTOR: u32 = ISO_L_PATH_TABLE_SECTOR + 1;
pub const ISO_PATH_TABLE_SECTORS: u32 = 2; // no optional copies
pub const ISO_ROOT_DIRECTORY_SECTOR: u32 = ISO_L_PATH_TABLE_SECTOR + ISO_PATH_TABLE_SECTORS;
pub const ISO_HEADER_SECTORS: u32 = ISO_ROOT_DIRECTORY_SECTOR + 1;

// === Volume Descriptor Constants ===

pub const ISO_STANDARD_ID: &[u8; 5] = b"CD001";
pub const ISO_VD_VERSION: u8 = 0x01;
pub const ISO_VD_PRIMARY: u8 = 0x01;
pub const ISO_VD_TERMINATOR: u8 = 0xFF;
pub const ISO_FILE_STRUCTURE_VERSION: u8 = 0x01;
pub const ISO_VOLUME_SET_SIZE: u16 = 1;
pub const ISO_VOLUME_SEQUENCE_NUMBER: u16 = 1;
pub const ISO_PATH_TABLE_SIZE: u32 = ISO_SECTOR_SIZE;

// Field widths, in order of appearance
pub const ISO_SYSTEM_ID_LEN: usize = 32;
pub const ISO_VOLUME_ID_LEN: usize = 32;
pub const ISO_VOLUME_SET_ID_LEN: usize = 128;
pub const ISO_PUBLISHER_ID_LEN: usize = 128;
pub const ISO_PREPARER_ID_LEN: usize = 128;
pub const ISO_APPLICATION_ID_LEN: usize = 128;
pub const ISO_FILE_ID_FIELD_LEN: usize = 37; // copyright / abstract / bibliographic

// === Directory Record Constants ===

pub const ISO_DIR_RECORD_FIXED_LEN: usize = 33;
pub const ISO_MAX_IDENTIFIER_LEN: usize = 32;
pub const ISO_IDENT_CURRENT: u8 = 0x00; // "."
pub const ISO_IDENT_PARENT: u8 = 0x01; // ".."

// === Path Table Constants ===

pub const ISO_ROOT_DIRECTORY_NUMBER: u16 = 1;
pub const ISO_ROOT_IDENTIFIER_LEN: u8 = 1;
