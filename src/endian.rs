//! Little-endian conversion helpers
//!
//! Radiotap is little-endian on the wire. These wrappers mirror the
//! `bswap_NN`/`leNNtoh` names consumers of capture headers expect and
//! delegate to the native integer primitives, so they compile to no-ops
//! on little-endian hosts.

/// Swap the byte order of a 16-bit value
#[inline]
pub const fn swap16(x: u16) -> u16 {
    x.swap_bytes()
}

/// Swap the byte order of a 32-bit value
#[inline]
pub const fn swap32(x: u32) -> u32 {
    x.swap_bytes()
}

/// Swap the byte order of a 64-bit value
#[inline]
pub const fn swap64(x: u64) -> u64 {
    x.swap_bytes()
}

/// Convert a little-endian 16-bit value to host byte order
#[inline]
pub const fn le16toh(x: u16) -> u16 {
    u16::from_le(x)
}

/// Convert a little-endian 32-bit value to host byte order
#[inline]
pub const fn le32toh(x: u32) -> u32 {
    u32::from_le(x)
}

/// Convert a little-endian 64-bit value to host byte order
#[inline]
pub const fn le64toh(x: u64) -> u64 {
    u64::from_le(x)
}
