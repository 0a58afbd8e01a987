// SPDX-License-Identifier: MIT

use std::fs;
use std::io::Cursor;

use isofs::iso9660::*;
use isoio::SECTOR_SIZE;
use time::macros::datetime;
use zerocopy::FromBytes;

/// Root file entry decoded from a finished image.
struct DecodedFile {
    name: String,
    extent: u32,
    data: Vec<u8>,
}

fn both_u32(bytes: &[u8]) -> u32 {
    let v = BothEndianU32::read_from_bytes(bytes).expect("8-byte field");
    assert!(v.is_consistent(), "both-endian halves disagree");
    v.get_le()
}

fn sector(image: &[u8], index: u32) -> &[u8] {
    let start = index as usize * SECTOR_SIZE;
    &image[start..start + SECTOR_SIZE]
}

/// Follows PVD -> root directory -> file record -> extent.
fn decode(image: &[u8]) -> (u32, DecodedFile) {
    assert_eq!(image.len() % SECTOR_SIZE, 0, "image is not sector aligned");

    let pvd = sector(image, ISO_PRIMARY_VOLUME_SECTOR);
    assert_eq!(pvd[0], ISO_VD_PRIMARY);
    assert_eq!(&pvd[1..6], ISO_STANDARD_ID);
    let total = both_u32(&pvd[80..88]);

    let term = sector(image, ISO_PRIMARY_VOLUME_SECTOR + 1);
    assert_eq!(term[0], ISO_VD_TERMINATOR);

    let root_record = &pvd[156..190];
    let root_extent = both_u32(&root_record[2..10]);
    let root = sector(image, root_extent);

    // Skip "." and ".."
    let mut off = 0usize;
    for _ in 0..2 {
        assert_eq!(both_u32(&root[off + 2..off + 10]), root_extent);
        off += root[off] as usize;
    }

    let rec = &root[off..off + root[off] as usize];
    let extent = both_u32(&rec[2..10]);
    let len = both_u32(&rec[10..18]) as usize;
    let name_len = rec[32] as usize;
    let name = String::from_utf8(rec[33..33 + name_len].to_vec()).unwrap();

    let start = extent as usize * SECTOR_SIZE;
    let data = image[start..start + len].to_vec();

    (total, DecodedFile { name, extent, data })
}

fn build_in_memory(data: &[u8]) -> Vec<u8> {
    let layout = IsoLayout::for_file_size(data.len() as u64).unwrap();
    let mut image = vec![0u8; ISO_SYSTEM_AREA_SECTORS as usize * SECTOR_SIZE];
    IsoBuilder::new(&layout, "PAYLOAD")
        .with_timestamp(datetime!(2024-06-01 00:00:00 UTC))
        .build(&mut Cursor::new(data), &mut image)
        .unwrap();
    image
}

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 % 253) as u8).collect()
}

#[test]
fn round_trip_recovers_original_bytes() {
    for size in [1usize, 100, 2047, 2048, 2049, 5000, 3 * SECTOR_SIZE, 10_001] {
        let data = pattern(size);
        let image = build_in_memory(&data);
        let (total, file) = decode(&image);

        let expected_total = 21 + size.div_ceil(SECTOR_SIZE).max(1);
        assert_eq!(total as usize, expected_total, "size {size}");
        assert_eq!(image.len(), expected_total * SECTOR_SIZE, "size {size}");
        assert_eq!(file.name, "PAYLOAD");
        assert_eq!(file.extent, 21);
        assert_eq!(file.data, data, "size {size}");
    }
}

#[test]
fn empty_input_has_one_zero_sector() {
    let image = build_in_memory(&[]);
    let (total, file) = decode(&image);
    assert_eq!(total, 22);
    assert!(file.data.is_empty());
    assert!(sector(&image, 21).iter().all(|&b| b == 0));
}

#[test]
fn path_tables_point_at_root_in_both_orders() {
    let image = build_in_memory(b"hello");
    let l = sector(&image, ISO_L_PATH_TABLE_SECTOR);
    let m = sector(&image, ISO_M_PATH_TABLE_SECTOR);
    assert_eq!(u32::from_le_bytes(l[2..6].try_into().unwrap()), 20);
    assert_eq!(u32::from_be_bytes(m[2..6].try_into().unwrap()), 20);
    assert_eq!(u16::from_le_bytes(l[6..8].try_into().unwrap()), 1);
    assert_eq!(u16::from_be_bytes(m[6..8].try_into().unwrap()), 1);
}

#[test]
fn example_5000_bytes_layout() {
    let data = pattern(5000);
    let image = build_in_memory(&data);
    assert_eq!(image.len() / SECTOR_SIZE, 24);

    let last = sector(&image, 23);
    assert_eq!(&last[..904], &data[4096..]);
    assert_eq!(last[904..].len(), 1144);
    assert!(last[904..].iter().all(|&b| b == 0));
}

#[test]
fn build_image_writes_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("boot_1");
    let output = dir.path().join("out.iso");
    let data = pattern(4321);
    fs::write(&input, &data).unwrap();

    let report = build_image(&input, &output, &ImageOptions::default()).unwrap();
    assert_eq!(report.bytes_read, 4321);
    assert_eq!(report.layout.total_sectors, 24);

    let image = fs::read(&output).unwrap();
    assert_eq!(image.len() as u64, report.layout.image_size_bytes());
    assert!(image[..16 * SECTOR_SIZE].iter().all(|&b| b == 0));

    let (_, file) = decode(&image);
    assert_eq!(file.name, "BOOT_1");
    assert_eq!(file.data, data);

    // Volume identifier defaults to the file name
    let pvd = sector(&image, 16);
    assert_eq!(&pvd[40..46], b"BOOT_1");
}

#[test]
fn volume_id_override() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("DATA");
    let output = dir.path().join("out.iso");
    fs::write(&input, b"x").unwrap();

    let options = ImageOptions {
        volume_id: Some("my_volume".into()),
        timestamp: Some(datetime!(2030-01-01 00:00:00 UTC)),
    };
    build_image(&input, &output, &options).unwrap();

    let image = fs::read(&output).unwrap();
    let pvd = sector(&image, 16);
    assert_eq!(&pvd[40..49], b"MY_VOLUME");
    assert_eq!(&pvd[813..817], b"2030");
}

#[test]
fn invalid_name_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("kernel.bin");
    let output = dir.path().join("out.iso");
    fs::write(&input, b"data").unwrap();

    let err = build_image(&input, &output, &ImageOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(!output.exists());
}

#[test]
fn existing_output_is_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("DATA");
    let output = dir.path().join("out.iso");
    fs::write(&input, b"data").unwrap();
    fs::write(&output, b"precious").unwrap();

    let err = build_image(&input, &output, &ImageOptions::default()).unwrap_err();
    assert!(matches!(err, IsoError::OutputExists(_)));
    assert_eq!(err.kind(), ErrorKind::Io);
    assert_eq!(fs::read(&output).unwrap(), b"precious");
}

#[test]
fn missing_input_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.iso");

    let err = build_image(&dir.path().join("NOPE"), &output, &ImageOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);
    assert!(!output.exists());

    // A directory is not a usable input either
    let err = build_image(dir.path(), &output, &ImageOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);
    assert!(!output.exists());
}
