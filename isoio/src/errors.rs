// SPDX-License-Identifier: MIT

use core::fmt;

/// Result type for sector I/O operations.
pub type IsoIOResult<T = ()> = core::result::Result<T, IsoIOError>;

/// Error type for sector I/O operations.
#[derive(Debug)]
pub enum IsoIOError {
    /// Underlying stream failure.
    Io(std::io::Error),

    /// A write would run past the end of the open sector.
    SectorOverflow { sector: u32, pos: usize, len: usize },

    /// The next sector index does not fit in 32 bits.
    IndexOverflow,
}

impl IsoIOError {
    pub fn msg(&self) -> &'static str {
        match self {
            IsoIOError::Io(_) => "I/O error",
            IsoIOError::SectorOverflow { .. } => "write past the end of a sector",
            IsoIOError::IndexOverflow => "sector index overflow",
        }
    }

    /// Layout bugs, as opposed to environmental failures.
    pub fn is_internal(&self) -> bool {
        !matches!(self, IsoIOError::Io(_))
    }
}

impl From<std::io::Error> for IsoIOError {
    #[cold]
    #[inline(never)]
    fn from(e: std::io::Error) -> Self {
        IsoIOError::Io(e)
    }
}

impl fmt::Display for IsoIOError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsoIOError::Io(e) => write!(f, "{}: {e}", self.msg()),
            IsoIOError::SectorOverflow { sector, pos, len } => write!(
                f,
                "{} (sector {sector}, offset {pos}, {len} bytes)",
                self.msg()
            ),
            IsoIOError::IndexOverflow => f.write_str(self.msg()),
        }
    }
}

impl std::error::Error for IsoIOError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IsoIOError::Io(e) => Some(e),
            _ => None,
        }
    }
}
