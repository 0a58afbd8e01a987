// SPDX-License-Identifier: MIT

//! Sector-aligned output.
//!
//! [`SectorWriter`](sector::SectorWriter) buffers one fixed-size sector at a
//! time and only ever hands whole, zero-padded sectors to the underlying
//! stream. Fields are appended through the [`Sector`](sector::Sector) handle
//! returned by `next_sector()`:
//! - raw bytes, zero fill, fixed-length padded strings
//! - little-endian, big-endian and both-endian integers
//! - zerocopy structs

// Core modules
pub mod errors;
mod macros;
pub mod sector;
pub mod stats;
pub mod types;

// Prelude re-exports (central entrypoint)
pub mod prelude {
    pub use super::SECTOR_SIZE;
    pub use super::errors::*;
    pub use super::sector::{Endian, Sector, SectorWriter};
    pub use super::stats::*;
    pub use super::types::*;
}

// Constants

/// Size of one sector in bytes. Every structural pointer addresses units of this size.
pub const SECTOR_SIZE: usize = 2048;

/// Filler byte used by [`Sector::write_padded_str`](sector::Sector::write_padded_str).
pub const PAD_FILL: u8 = 0x00;
