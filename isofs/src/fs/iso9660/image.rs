// SPDX-License-Identifier: MIT

//! File-backed image creation.
//!
//! Order matters for the failure modes: the input is opened, measured and
//! its name validated before the output is created, so usage and
//! validation errors never leave a file behind. The output is created
//! exclusively and is left as-is if a later step fails.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind as IoErrorKind, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use time::OffsetDateTime;

use crate::core::errors::*;
use crate::fs::iso9660::{
    constant::*,
    formatter::{BuildReport, IsoBuilder},
    layout::IsoLayout,
    name::{iso_file_name, iso_file_name_from_path},
};

/// Input file with the facts observed when it was opened.
#[derive(Debug)]
pub struct SourceFile {
    pub file: File,
    pub path: PathBuf,
    pub iso_name: String,
    pub size: u64,
}

impl SourceFile {
    pub fn open(path: &Path) -> IsoResult<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            IoErrorKind::NotFound => IsoError::MissingInput(path.to_path_buf()),
            _ => IsoError::Read(e),
        })?;
        let meta = file.metadata().map_err(IsoError::Read)?;
        if !meta.is_file() {
            return Err(IsoError::MissingInput(path.to_path_buf()));
        }
        let iso_name = iso_file_name_from_path(path)?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
            iso_name,
            size: meta.len(),
        })
    }
}

/// Creates `path` (never overwriting) and seeks past the system area.
pub fn create_output(path: &Path) -> IsoResult<BufWriter<File>> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            IoErrorKind::AlreadyExists => IsoError::OutputExists(path.to_path_buf()),
            _ => IsoError::from(e),
        })?;
    file.seek(SeekFrom::Start(
        ISO_SYSTEM_AREA_SECTORS as u64 * ISO_SECTOR_SIZE as u64,
    ))?;
    Ok(BufWriter::new(file))
}

#[derive(Debug, Clone, Default)]
pub struct ImageOptions {
    /// Volume identifier; defaults to the file name.
    pub volume_id: Option<String>,
    /// Creation time; defaults to now.
    pub timestamp: Option<OffsetDateTime>,
}

/// Wraps `input` into a new image at `output`.
pub fn build_image(input: &Path, output: &Path, options: &ImageOptions) -> IsoResult<BuildReport> {
    build_image_with(input, output, options, |file, _| file)
}

/// Like [`build_image`], with `wrap` applied to the opened input (and its
/// size) before streaming, e.g. to attach a progress reader.
pub fn build_image_with<R, F>(
    input: &Path,
    output: &Path,
    options: &ImageOptions,
    wrap: F,
) -> IsoResult<BuildReport>
where
    R: Read,
    F: FnOnce(File, u64) -> R,
{
    let source = SourceFile::open(input)?;
    let layout = IsoLayout::for_file_size(source.size)?;
    let volume_id = match &options.volume_id {
        Some(id) => iso_file_name(id)?,
        None => source.iso_name.clone(),
    };

    let out = create_output(output)?;

    let mut builder = IsoBuilder::new(&layout, &source.iso_name).with_volume_id(&volume_id);
    if let Some(timestamp) = options.timestamp {
        builder = builder.with_timestamp(timestamp);
    }
    let mut reader = wrap(source.file, source.size);
    let (_out, report) = builder.build(&mut reader, out)?;
    Ok(report)
}
