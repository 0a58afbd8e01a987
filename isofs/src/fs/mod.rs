// SPDX-License-Identifier: MIT

pub mod iso9660;
