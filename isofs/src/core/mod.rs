// SPDX-License-Identifier: MIT

// === Sub-modules ===
pub mod errors;
pub mod utils;

// === Error types ===
pub use errors::*;
