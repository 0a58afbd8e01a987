// SPDX-License-Identifier: MIT

use std::io::Write;

use isoio::prelude::*;

use crate::core::errors::*;
use crate::fs::iso9660::constant::*;

/// Writes a path table holding only the root directory, then zero-pads
/// the sector.
///
/// `order` selects the type L (little-endian) or type M (big-endian) table.
pub fn write_path_table<W: Write>(
    sector: &mut Sector<'_, W>,
    order: Endian,
    root_extent: u32,
) -> IsoResult {
    sector.write_u8(ISO_ROOT_IDENTIFIER_LEN)?;
    sector.write_u8(0)?; // extended attribute record length
    sector.write_u32_order(order, root_extent)?;
    sector.write_u16_order(order, ISO_ROOT_DIRECTORY_NUMBER)?;
    sector.write_u8(ISO_IDENT_CURRENT)?;
    sector.write_u8(0)?; // pad to even length
    sector.pad_with_zeros();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(order: Endian) -> Vec<u8> {
        let mut w = SectorWriter::new(Vec::new(), 18);
        write_path_table(&mut w.next_sector().unwrap(), order, 20).unwrap();
        w.finish().unwrap().0
    }

    #[test]
    fn test_little_endian_table() {
        let out = encode(Endian::Little);
        assert_eq!(out.len(), SECTOR_SIZE);
        assert_eq!(&out[..10], &[1, 0, 20, 0, 0, 0, 1, 0, 0, 0]);
        assert!(out[10..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_big_endian_table() {
        let out = encode(Endian::Big);
        assert_eq!(&out[..10], &[1, 0, 0, 0, 0, 20, 0, 1, 0, 0]);
    }
}
