//! Radiotap base header encoding and decoding
//!
//! The fixed 8-byte header that prefixes every radiotap-tagged 802.11
//! frame. Multi-byte fields are little-endian on the wire regardless of
//! host byte order.

use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RadiotapError, Result};
use crate::present::PresentBit;

/// Size of the fixed base header in bytes
pub const HEADER_LEN: usize = 8;

/// Radiotap format version, always 0
pub const RADIOTAP_VERSION: u8 = 0;

/// Fixed radiotap base header
///
/// Wire layout:
///
/// ```text
/// offset 0: u8  version   (== 0)
/// offset 1: u8  pad
/// offset 2: u16 length    (LE, total header length including variable fields)
/// offset 4: u32 present   (LE, first present word; bit 31 chains another)
/// ```
///
/// This type carries no validation: a consuming parser is responsible for
/// rejecting `version != 0`, `length < 8`, or a present-word chain that
/// runs past the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadiotapHeader {
    /// Format version, 0 in every valid capture
    pub version: u8,
    /// Alignment filler, value not meaningful
    pub pad: u8,
    /// Total header length in bytes, equal to the offset of the first
    /// payload byte
    pub length: u16,
    /// First present word; bit N set means field N follows the header
    pub present: u32,
}

impl RadiotapHeader {
    /// Create a header with the given total length and present word
    pub fn new(length: u16, present: u32) -> Self {
        Self {
            version: RADIOTAP_VERSION,
            pad: 0,
            length,
            present,
        }
    }

    /// Serialize to exactly [`HEADER_LEN`] bytes
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        self.put(&mut &mut out[..]);
        out
    }

    /// Write the header into a buffer
    pub fn put<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.version);
        buf.put_u8(self.pad);
        buf.put_u16_le(self.length);
        buf.put_u32_le(self.present);
    }

    /// Parse the base header from the start of a frame buffer
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(RadiotapError::Truncated {
                needed: HEADER_LEN,
                got: data.len(),
            });
        }

        let mut buf = data;
        let version = buf.get_u8();
        let pad = buf.get_u8();
        let length = buf.get_u16_le();
        let present = buf.get_u32_le();

        Ok(Self {
            version,
            pad,
            length,
            present,
        })
    }

    /// Check whether a presence bit is set in the first present word
    pub fn is_present(&self, bit: PresentBit) -> bool {
        self.present & bit.mask() != 0
    }

    /// Another 32-bit present word immediately follows this one
    pub fn has_ext(&self) -> bool {
        self.is_present(PresentBit::Ext)
    }

    /// The present word switches to a vendor-defined namespace
    pub fn has_vendor_namespace(&self) -> bool {
        self.is_present(PresentBit::VendorNamespace)
    }
}

impl Default for RadiotapHeader {
    fn default() -> Self {
        Self::new(HEADER_LEN as u16, 0)
    }
}

impl fmt::Display for RadiotapHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "radiotap v{} len={} present={:#010x}{}",
            self.version,
            self.length,
            self.present,
            if self.has_ext() { " +ext" } else { "" }
        )
    }
}
