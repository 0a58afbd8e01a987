// SPDX-License-Identifier: MIT

//! Minimal ISO9660 images holding exactly one file.
//!
//! The image layout is fixed: system area, primary volume descriptor,
//! terminator, both path tables, the root directory, then the file data.
//! See [`iso9660::IsoLayout`] and [`iso9660::IsoBuilder`].

// Core Modules
pub mod core;
pub mod fs;

// Errors
pub use crate::core::errors::*;

// Utilities
pub use crate::core::utils::time_utils::*;

// Filesystem APIs
/// ISO9660 single-file implementation.
///
/// See [`iso9660::IsoLayout`], [`iso9660::IsoBuilder`] and [`iso9660::build_image`].
pub mod iso9660 {
    pub use super::fs::iso9660::prelude::*;
}
