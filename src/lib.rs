//! # radiotap-defs - Radiotap wire-format definitions
//!
//! The data contract of the radiotap capture metadata format: the fixed
//! 8-byte base header prefixed to 802.11 frames in monitor mode, the
//! presence bitmap naming which optional metadata fields follow it, and
//! the per-field flag/subfield bit layouts.
//!
//! This crate is the constant table a radiotap parser or injector links
//! against. It deliberately stops at the base header: walking the
//! variable-length field stream, per-field alignment, and vendor
//! namespace chaining are a consumer's job, driven by a field-size table
//! this crate does not define.

pub mod endian;
pub mod error;
pub mod flags;
pub mod header;
pub mod present;

pub use endian::{le16toh, le32toh, le64toh, swap16, swap32, swap64};
pub use error::{RadiotapError, Result};
pub use header::{RadiotapHeader, HEADER_LEN, RADIOTAP_VERSION};
pub use present::PresentBit;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
