// SPDX-License-Identifier: MIT

use indicatif::{ProgressBar, ProgressBarIter, ProgressFinish, ProgressStyle};
use std::io::Read;

use crate::utils::{LogLevel, log_level};

/// Wraps `reader` so that every read advances a byte progress bar.
///
/// The bar is hidden in quiet mode and cleared once the reader is dropped.
pub fn progress_reader<R: Read>(reader: R, total_size: u64, message: &str) -> ProgressBarIter<R> {
    let pb = if log_level() == LogLevel::Quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(total_size)
    };
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.white}] {bytes}/{total_bytes} (ETA {eta_precise}) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█░░");

    pb.with_style(style)
        .with_message(message.to_string())
        .with_finish(ProgressFinish::AndClear)
        .wrap_read(reader)
}
