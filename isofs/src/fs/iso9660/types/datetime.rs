// SPDX-License-Identifier: MIT

use time::{OffsetDateTime, UtcOffset};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

/// 17-byte volume descriptor timestamp.
///
/// Sixteen ASCII digits `YYYYMMDDHHMMSScc` (cc = hundredths) followed by
/// the offset from GMT in 15-minute intervals.
#[derive(IntoBytes, FromBytes, KnownLayout, Immutable, Unaligned, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct DecDateTime {
    pub digits: [u8; 16],
    pub gmt_offset: i8,
}

impl DecDateTime {
    pub fn from_datetime(t: OffsetDateTime) -> Self {
        let mut digits = [b'0'; 16];
        put_digits(&mut digits[0..4], t.year().clamp(1, 9999) as u32);
        put_digits(&mut digits[4..6], u8::from(t.month()) as u32);
        put_digits(&mut digits[6..8], t.day() as u32);
        put_digits(&mut digits[8..10], t.hour() as u32);
        put_digits(&mut digits[10..12], t.minute() as u32);
        put_digits(&mut digits[12..14], t.second() as u32);
        put_digits(&mut digits[14..16], t.millisecond() as u32 / 10);

        Self {
            digits,
            gmt_offset: gmt_offset_quarters(t.offset()),
        }
    }

    /// "Not specified": all digits `'0'`, offset zero.
    pub const fn unspecified() -> Self {
        Self {
            digits: [b'0'; 16],
            gmt_offset: 0,
        }
    }

    #[inline]
    pub fn is_unspecified(&self) -> bool {
        *self == Self::unspecified()
    }
}

/// 7-byte directory record timestamp.
#[derive(IntoBytes, FromBytes, KnownLayout, Immutable, Unaligned, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct DirDateTime {
    pub years_since_1900: u8,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub gmt_offset: i8,
}

impl DirDateTime {
    pub fn from_datetime(t: OffsetDateTime) -> Self {
        Self {
            years_since_1900: (t.year() - 1900).clamp(0, u8::MAX as i32) as u8,
            month: u8::from(t.month()),
            day: t.day(),
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
            gmt_offset: gmt_offset_quarters(t.offset()),
        }
    }
}

fn put_digits(out: &mut [u8], mut value: u32) {
    for b in out.iter_mut().rev() {
        *b = b'0' + (value % 10) as u8;
        value /= 10;
    }
}

/// Offset in 15-minute units, clamped to the -48..=52 range of the format.
fn gmt_offset_quarters(offset: UtcOffset) -> i8 {
    (offset.whole_minutes() / 15).clamp(-48, 52) as i8
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, offset};

    #[test]
    fn test_dec_datetime_digits() {
        let t = datetime!(2024-03-07 09:05:42.378 UTC);
        let d = DecDateTime::from_datetime(t);
        assert_eq!(&d.digits, b"2024030709054237");
        assert_eq!(d.gmt_offset, 0);
        assert_eq!(d.as_bytes().len(), 17);
        assert!(!d.is_unspecified());
    }

    #[test]
    fn test_dec_datetime_offset() {
        let t = datetime!(2024-03-07 09:05:42 UTC).to_offset(offset!(+2));
        let d = DecDateTime::from_datetime(t);
        assert_eq!(&d.digits[8..10], b"11");
        assert_eq!(d.gmt_offset, 8);
    }

    #[test]
    fn test_unspecified() {
        let d = DecDateTime::unspecified();
        assert_eq!(d.as_bytes(), b"0000000000000000\0");
        assert!(d.is_unspecified());
    }

    #[test]
    fn test_dir_datetime() {
        let t = datetime!(1999-12-31 23:59:58 UTC);
        let d = DirDateTime::from_datetime(t);
        assert_eq!(d.as_bytes(), &[99, 12, 31, 23, 59, 58, 0]);
    }
}
