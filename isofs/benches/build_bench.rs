// SPDX-License-Identifier: MIT

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::io::{Cursor, Seek, SeekFrom};

use isofs::iso9660::*;

criterion_group!(benches, build_bench);
criterion_main!(benches);

pub fn build_bench(c: &mut Criterion) {
    const SIZE_BYTES: usize = 8 * 1024 * 1024;
    let data = vec![0xA5u8; SIZE_BYTES];
    let layout = IsoLayout::for_file_size(SIZE_BYTES as u64).expect("layout failed");

    let mut group = c.benchmark_group("iso9660");
    group.throughput(Throughput::Bytes(SIZE_BYTES as u64));

    let mut image = Vec::with_capacity(layout.image_size_bytes() as usize);
    group.bench_function("build_mem", |b| {
        b.iter(|| {
            image.clear();
            IsoBuilder::new(&layout, "BENCH")
                .build(&mut Cursor::new(&data), &mut image)
                .expect("build failed");
        });
    });

    let mut file = tempfile::tempfile().expect("tempfile failed");
    group.bench_function("build_file", |b| {
        b.iter(|| {
            file.seek(SeekFrom::Start(
                ISO_SYSTEM_AREA_SECTORS as u64 * ISO_SECTOR_SIZE as u64,
            ))
            .expect("seek failed");
            let out = std::io::BufWriter::new(&mut file);
            IsoBuilder::new(&layout, "BENCH")
                .build(&mut Cursor::new(&data), out)
                .expect("build failed");
        });
    });

    group.finish();
}
