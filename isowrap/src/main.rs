// SPDX-License-Identifier: MIT

mod utils;

use anyhow::Context;
use clap::Parser;
use isofs::iso9660::*;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use crate::utils::{LogLevel, pretty_bytes, progress_reader, sector_span, set_log_level};

#[derive(Parser)]
#[command(
    name = "isowrap",
    version,
    about = "Wrap a single file into an ISO9660 image",
    long_about = None
)]
struct Cli {
    /// File placed in the root directory (name limited to A-Z, 0-9 and _)
    infile: PathBuf,
    /// Image to create, never overwritten if it already exists
    outfile: PathBuf,

    /// Volume identifier, defaults to the file name
    #[arg(long, value_name = "ID")]
    volume_id: Option<String>,

    /// Only print the computed layout, don't write the image
    #[arg(long)]
    dry_run: bool,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the layout and write statistics
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    set_log_level(match (cli.quiet, cli.verbose) {
        (true, _) => LogLevel::Quiet,
        (_, true) => LogLevel::Verbose,
        _ => LogLevel::Normal,
    });

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.dry_run {
        return plan(cli);
    }

    crate::log_info!("Writing ISO9660 image to: {}", cli.outfile.display());
    let started = Instant::now();
    let options = ImageOptions {
        volume_id: cli.volume_id.clone(),
        timestamp: None,
    };
    let report = build_image_with(&cli.infile, &cli.outfile, &options, |file, size| {
        progress_reader(file, size, "streaming")
    })
    .with_context(|| {
        format!(
            "could not wrap {} into {}",
            cli.infile.display(),
            cli.outfile.display()
        )
    })?;

    print_layout(&report.layout);
    crate::log_verbose!(
        "{} writes, {} bytes, {} sectors ({} bytes of padding), {} flushes",
        report.stats.writes,
        report.stats.write_bytes,
        report.stats.sectors,
        report.stats.padding_bytes,
        report.stats.flushes,
    );
    crate::log_info!(
        "Done: {} ({}) in {:.2?}",
        cli.outfile.display(),
        pretty_bytes(report.layout.image_size_bytes()),
        started.elapsed()
    );
    Ok(())
}

/// Validates the inputs and prints the layout without touching the output.
fn plan(cli: &Cli) -> anyhow::Result<()> {
    let source = SourceFile::open(&cli.infile)?;
    let layout = IsoLayout::for_file_size(source.size)?;
    let volume_id = match &cli.volume_id {
        Some(id) => iso_file_name(id)?,
        None => source.iso_name.clone(),
    };
    if cli.outfile.exists() {
        return Err(IsoError::OutputExists(cli.outfile.clone()).into());
    }

    crate::log_normal!("Dry run mode: no data will be written.");
    crate::log_info!(
        "File:   {} as {} ({})",
        source.path.display(),
        source.iso_name,
        pretty_bytes(source.size)
    );
    crate::log_info!("Volume: {volume_id}");
    print_layout(&layout);
    Ok(())
}

fn print_layout(layout: &IsoLayout) {
    crate::log_verbose!("System area      {}", sector_span(0, ISO_SYSTEM_AREA_SECTORS));
    crate::log_verbose!("Primary volume   {}", layout.primary_volume_sector);
    crate::log_verbose!("Terminator       {}", layout.terminator_sector);
    crate::log_verbose!("L path table     {}", layout.l_path_table_sector);
    crate::log_verbose!("M path table     {}", layout.m_path_table_sector);
    crate::log_verbose!("Root directory   {}", layout.root_directory_sector);
    crate::log_verbose!(
        "File data        {} ({} bytes of tail padding)",
        sector_span(layout.first_data_sector, layout.data_sectors),
        layout.tail_padding_bytes()
    );
    crate::log_info!(
        "{} sectors of {} bytes",
        layout.total_sectors,
        ISO_SECTOR_SIZE
    );
}

fn report(e: &anyhow::Error) {
    let internal = e
        .downcast_ref::<IsoError>()
        .is_some_and(IsoError::is_internal);
    if internal {
        crate::log_error!("internal error: {e:#}");
    } else {
        crate::log_error!("{e:#}");
    }
}
