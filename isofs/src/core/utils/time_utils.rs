// SPDX-License-Identifier: MIT

//! Time utilities for volume and directory timestamps.

use time::OffsetDateTime;

/// Returns the current UTC time.
pub fn now_utc() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_utc_is_utc() {
        let now = now_utc();
        assert!(now.offset().is_utc());
        assert!(now.year() >= 2024);
    }
}
