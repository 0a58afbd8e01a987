// SPDX-License-Identifier: MIT

pub mod attr;
pub mod constant;
pub mod formatter;
pub mod image;
pub mod layout;
pub mod name;
pub mod types;

pub mod prelude {
    pub use super::attr::*;
    pub use super::constant::*;
    pub use super::formatter::*;
    pub use super::image::*;
    pub use super::layout::*;
    pub use super::name::*;
    pub use super::types::*;
    pub use crate::core::errors::*;
}
