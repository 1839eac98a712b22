//! Radiotap presence bitmap definitions
//!
//! Each bit in the 32-bit present word of the base header names one
//! optional metadata field that follows the fixed header. Bit positions
//! are wire-format values and must never be renumbered.

use serde::{Deserialize, Serialize};

/// Bit positions of the radiotap present word
///
/// Bit 18 (XChannel) was never formally defined and is intentionally
/// absent. Bits 29-31 carry namespace/extension semantics and are valid
/// in every present word, vendor namespaces included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PresentBit {
    /// TSF timer value at first bit of MPDU (u64, microseconds)
    Tsft = 0,
    /// Per-frame flags (see [`crate::flags::frame_flags`])
    Flags = 1,
    /// TX/RX data rate in 500 kbps units
    Rate = 2,
    /// Channel frequency and flags (see [`crate::flags::channel_flags`])
    Channel = 3,
    /// FHSS hop set and pattern
    Fhss = 4,
    /// Antenna signal power in dBm
    DbmAntsignal = 5,
    /// Antenna noise power in dBm
    DbmAntnoise = 6,
    /// Barker code lock quality
    LockQuality = 7,
    /// Transmit attenuation from max power, unitless
    TxAttenuation = 8,
    /// Transmit attenuation from max power, in dB
    DbTxAttenuation = 9,
    /// Transmit power in dBm
    DbmTxPower = 10,
    /// Antenna index
    Antenna = 11,
    /// Antenna signal power in dB above an arbitrary reference
    DbAntsignal = 12,
    /// Antenna noise power in dB above an arbitrary reference
    DbAntnoise = 13,
    /// Receive flags (see [`crate::flags::rx_flags`])
    RxFlags = 14,
    /// Transmit flags (see [`crate::flags::tx_flags`])
    TxFlags = 15,
    /// RTS retry count
    RtsRetries = 16,
    /// Data retry count
    DataRetries = 17,
    /// 802.11n MCS information (see [`crate::flags::mcs`])
    Mcs = 19,
    /// A-MPDU status (see [`crate::flags::ampdu`])
    AmpduStatus = 20,
    /// 802.11ac VHT information (see [`crate::flags::vht`])
    Vht = 21,
    /// Sampled timestamp (see [`crate::flags::timestamp`])
    Timestamp = 22,
    /// Reset to the standard radiotap namespace
    RadiotapNamespace = 29,
    /// Switch to a vendor-defined namespace
    VendorNamespace = 30,
    /// Another present word follows this one
    Ext = 31,
}

impl PresentBit {
    /// Every defined presence bit, in ascending bit order
    pub const ALL: [PresentBit; 25] = [
        PresentBit::Tsft,
        PresentBit::Flags,
        PresentBit::Rate,
        PresentBit::Channel,
        PresentBit::Fhss,
        PresentBit::DbmAntsignal,
        PresentBit::DbmAntnoise,
        PresentBit::LockQuality,
        PresentBit::TxAttenuation,
        PresentBit::DbTxAttenuation,
        PresentBit::DbmTxPower,
        PresentBit::Antenna,
        PresentBit::DbAntsignal,
        PresentBit::DbAntnoise,
        PresentBit::RxFlags,
        PresentBit::TxFlags,
        PresentBit::RtsRetries,
        PresentBit::DataRetries,
        PresentBit::Mcs,
        PresentBit::AmpduStatus,
        PresentBit::Vht,
        PresentBit::Timestamp,
        PresentBit::RadiotapNamespace,
        PresentBit::VendorNamespace,
        PresentBit::Ext,
    ];

    /// Bit position within the present word (0..=31)
    pub fn bit(self) -> u8 {
        self as u8
    }

    /// Single-bit mask for testing a present word
    pub fn mask(self) -> u32 {
        1u32 << (self as u8)
    }

    /// Look up the presence bit for a bit position, if one is defined
    pub fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(PresentBit::Tsft),
            1 => Some(PresentBit::Flags),
            2 => Some(PresentBit::Rate),
            3 => Some(PresentBit::Channel),
            4 => Some(PresentBit::Fhss),
            5 => Some(PresentBit::DbmAntsignal),
            6 => Some(PresentBit::DbmAntnoise),
            7 => Some(PresentBit::LockQuality),
            8 => Some(PresentBit::TxAttenuation),
            9 => Some(PresentBit::DbTxAttenuation),
            10 => Some(PresentBit::DbmTxPower),
            11 => Some(PresentBit::Antenna),
            12 => Some(PresentBit::DbAntsignal),
            13 => Some(PresentBit::DbAntnoise),
            14 => Some(PresentBit::RxFlags),
            15 => Some(PresentBit::TxFlags),
            16 => Some(PresentBit::RtsRetries),
            17 => Some(PresentBit::DataRetries),
            19 => Some(PresentBit::Mcs),
            20 => Some(PresentBit::AmpduStatus),
            21 => Some(PresentBit::Vht),
            22 => Some(PresentBit::Timestamp),
            29 => Some(PresentBit::RadiotapNamespace),
            30 => Some(PresentBit::VendorNamespace),
            31 => Some(PresentBit::Ext),
            _ => None,
        }
    }
}
