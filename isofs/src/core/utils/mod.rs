// SPDX-License-Identifier: MIT

pub mod time_utils;
