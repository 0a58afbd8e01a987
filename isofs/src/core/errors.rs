// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;

pub use isoio::errors::*;

/// Broad failure category, used to pick a diagnostic and exit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or unusable input argument.
    Usage,
    /// Environmental failure on the input or output stream.
    Io,
    /// Input rejected before any output was created.
    Validation,
    /// Layout computation defect. Never retried.
    Internal,
}

/// Top-level error
#[derive(Debug)]
pub enum IsoError {
    IO(IsoIOError),
    Read(std::io::Error),
    MissingInput(PathBuf),
    OutputExists(PathBuf),
    InvalidFileName {
        name: String,
        reason: &'static str,
    },
    FileTooLarge(u64),
    IdentifierTooLong(usize),
    UnexpectedSector {
        what: &'static str,
        expected: u32,
        actual: u32,
    },
    SizeChanged {
        expected: u32,
        actual: u64,
    },
    SectorCountMismatch {
        expected: u32,
        actual: Option<u32>,
    },
}

impl IsoError {
    pub fn msg(&self) -> &'static str {
        match self {
            IsoError::IO(e) => e.msg(),
            IsoError::Read(_) => "could not read from input file",
            IsoError::MissingInput(_) => "input file not found",
            IsoError::OutputExists(_) => "output file already exists",
            IsoError::InvalidFileName { .. } => {
                "input file name does not satisfy the ISO9660 character set constraints"
            }
            IsoError::FileTooLarge(_) => "input file is too large",
            IsoError::IdentifierTooLong(_) => "identifier length is out of bounds",
            IsoError::UnexpectedSector { .. } => "unexpected sector",
            IsoError::SizeChanged { .. } => {
                "input file size changed while the ISO file was being created"
            }
            IsoError::SectorCountMismatch { .. } => "unexpected last sector number",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            IsoError::IO(e) if e.is_internal() => ErrorKind::Internal,
            IsoError::IO(_) | IsoError::Read(_) | IsoError::OutputExists(_) => ErrorKind::Io,
            IsoError::MissingInput(_) => ErrorKind::Usage,
            IsoError::InvalidFileName { .. } | IsoError::FileTooLarge(_) => ErrorKind::Validation,
            IsoError::IdentifierTooLong(_)
            | IsoError::UnexpectedSector { .. }
            | IsoError::SizeChanged { .. }
            | IsoError::SectorCountMismatch { .. } => ErrorKind::Internal,
        }
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        self.kind() == ErrorKind::Internal
    }
}

// === impl From ===

impl From<IsoIOError> for IsoError {
    fn from(e: IsoIOError) -> Self {
        IsoError::IO(e)
    }
}

impl From<std::io::Error> for IsoError {
    fn from(e: std::io::Error) -> Self {
        IsoError::IO(IsoIOError::Io(e))
    }
}

// === impl Display ===

impl fmt::Display for IsoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsoError::IO(e) => write!(f, "{e}"),
            IsoError::Read(e) => write!(f, "{}: {e}", self.msg()),
            IsoError::MissingInput(path) | IsoError::OutputExists(path) => {
                write!(f, "{} ({})", self.msg(), path.display())
            }
            IsoError::InvalidFileName { name, reason } => {
                write!(f, "{} ({name}: {reason})", self.msg())
            }
            IsoError::FileTooLarge(size) => write!(f, "{} ({size} bytes)", self.msg()),
            IsoError::IdentifierTooLong(len) => write!(f, "{} ({len} bytes)", self.msg()),
            IsoError::UnexpectedSector {
                what,
                expected,
                actual,
            } => write!(
                f,
                "{} for {what} (expected {expected}, actual {actual})",
                self.msg()
            ),
            IsoError::SizeChanged { expected, actual } => write!(
                f,
                "{} (expected to read {expected}, read {actual})",
                self.msg()
            ),
            IsoError::SectorCountMismatch { expected, actual } => match actual {
                Some(actual) => write!(
                    f,
                    "{} (expected {expected}, actual {actual})",
                    self.msg()
                ),
                None => write!(f, "{} (expected {expected}, no sector written)", self.msg()),
            },
        }
    }
}

impl std::error::Error for IsoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IsoError::IO(e) => Some(e),
            IsoError::Read(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for image construction.
pub type IsoResult<T = ()> = Result<T, IsoError>;
