// SPDX-License-Identifier: MIT

//! File name handling for the single root entry.
//!
//! ISO9660 level 1 restricts identifiers to capital letters, digits and
//! underscores. Callers uppercase the host name first; everything else
//! outside `[A-Z0-9_]` is rejected rather than rewritten.

use std::path::Path;

use crate::core::errors::*;
use crate::fs::iso9660::constant::ISO_MAX_IDENTIFIER_LEN;

/// `true` for bytes allowed in an identifier.
#[inline]
pub fn is_iso_char(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_'
}

/// Checks an already uppercased name against `[A-Z0-9_]+`.
pub fn validate_iso_name(name: &str) -> IsoResult {
    if name.is_empty() {
        return Err(IsoError::InvalidFileName {
            name: name.to_string(),
            reason: "empty name",
        });
    }
    if !name.bytes().all(is_iso_char) {
        return Err(IsoError::InvalidFileName {
            name: name.to_string(),
            reason: "only A-Z, 0-9 and _ are allowed",
        });
    }
    Ok(())
}

/// Uppercases, validates and truncates a host file name.
pub fn iso_file_name(raw: &str) -> IsoResult<String> {
    let mut name = raw.to_ascii_uppercase();
    validate_iso_name(&name)?;
    name.truncate(ISO_MAX_IDENTIFIER_LEN);
    Ok(name)
}

/// [`iso_file_name`] applied to the last component of `path`.
pub fn iso_file_name_from_path(path: &Path) -> IsoResult<String> {
    let raw = path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| IsoError::InvalidFileName {
            name: path.display().to_string(),
            reason: "not a valid UTF-8 file name",
        })?;
    iso_file_name(raw)
}
