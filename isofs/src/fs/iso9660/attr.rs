// SPDX-License-Identifier: MIT

bitflags::bitflags! {
    /// Directory record file flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FileFlags: u8 {
        const HIDDEN       = 0x01;
        const DIRECTORY    = 0x02;
        const ASSOCIATED   = 0x04;
        const RECORD       = 0x08;
        const PROTECTION   = 0x10;
        const MULTI_EXTENT = 0x80;
    }
}
