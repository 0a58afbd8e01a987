// SPDX-License-Identifier: MIT

//! Both-endian fields.
//!
//! A both-endian field stores the same value twice, little-endian half
//! first, so readers on either byte order can use it directly.

use zerocopy::byteorder::{BigEndian, LittleEndian, U16, U32};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

#[derive(IntoBytes, FromBytes, KnownLayout, Immutable, Unaligned, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct BothEndianU16 {
    pub le: U16<LittleEndian>,
    pub be: U16<BigEndian>,
}

impl BothEndianU16 {
    #[inline]
    pub fn new(value: u16) -> Self {
        Self {
            le: U16::new(value),
            be: U16::new(value),
        }
    }

    #[inline]
    pub fn get_le(&self) -> u16 {
        self.le.get()
    }

    #[inline]
    pub fn get_be(&self) -> u16 {
        self.be.get()
    }

    /// Both halves decode to the same value.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.get_le() == self.get_be()
    }
}

#[derive(IntoBytes, FromBytes, KnownLayout, Immutable, Unaligned, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct BothEndianU32 {
    pub le: U32<LittleEndian>,
    pub be: U32<BigEndian>,
}

impl BothEndianU32 {
    #[inline]
    pub fn new(value: u32) -> Self {
        Self {
            le: U32::new(value),
            be: U32::new(value),
        }
    }

    #[inline]
    pub fn get_le(&self) -> u32 {
        self.le.get()
    }

    #[inline]
    pub fn get_be(&self) -> u32 {
        self.be.get()
    }

    /// Both halves decode to the same value.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.get_le() == self.get_be()
    }
}
