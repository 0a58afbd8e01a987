// SPDX-License-Identifier: MIT

pub mod datetime;
pub mod descriptor;
pub mod entries;
pub mod path_table;

pub use datetime::*;
pub use descriptor::*;
pub use entries::*;
pub use path_table::*;

pub use isoio::types::{BothEndianU16, BothEndianU32};
