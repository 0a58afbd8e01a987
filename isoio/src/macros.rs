// SPDX-License-Identifier: MIT

/// Implements fixed-width integer writers on `Sector`.
///
/// For each `ty => Both` pair this generates `write_<ty>_le`, `write_<ty>_be`,
/// `write_<ty>_order` and `write_<ty>_both`, the latter emitting the
/// both-endian struct `Both`.
#[macro_export]
macro_rules! sector_impl_primitive_w {
    ($($ty:ident => $both:ident),+ $(,)?) => {
        $(
            paste::paste! {
                #[inline(always)]
                pub fn [<write_ $ty _le>](&mut self, value: $ty) -> IsoIOResult {
                    self.write_bytes(&value.to_le_bytes())
                }

                #[inline(always)]
                pub fn [<write_ $ty _be>](&mut self, value: $ty) -> IsoIOResult {
                    self.write_bytes(&value.to_be_bytes())
                }

                #[inline(always)]
                pub fn [<write_ $ty _order>](&mut self, order: Endian, value: $ty) -> IsoIOResult {
                    match order {
                        Endian::Little => self.[<write_ $ty _le>](value),
                        Endian::Big => self.[<write_ $ty _be>](value),
                    }
                }

                #[inline(always)]
                pub fn [<write_ $ty _both>](&mut self, value: $ty) -> IsoIOResult {
                    self.write_struct(&$both::new(value))
                }
            }
        )+
    };
}
