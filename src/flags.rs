//! Per-field flag and subfield bit layouts
//!
//! Each module covers exactly one presence-bit field. Constants are wire
//! protocol values: disjoint within their group except where a mask is
//! documented to contain shifted sub-values, and never renumbered.

/// Flags field (presence bit 1)
pub mod frame_flags {
    /// Sent/received during CFP
    pub const CFP: u8 = 0x01;
    /// Sent/received with short preamble
    pub const SHORTPRE: u8 = 0x02;
    /// Sent/received with WEP encryption
    pub const WEP: u8 = 0x04;
    /// Sent/received with fragmentation
    pub const FRAG: u8 = 0x08;
    /// Frame includes FCS
    pub const FCS: u8 = 0x10;
    /// Frame has padding between 802.11 header and payload
    pub const DATAPAD: u8 = 0x20;
    /// Frame failed FCS check
    pub const BADFCS: u8 = 0x40;
}

/// Channel field flags (presence bit 3)
pub mod channel_flags {
    /// CCK channel
    pub const CCK: u16 = 0x0020;
    /// OFDM channel
    pub const OFDM: u16 = 0x0040;
    /// 2.4 GHz spectrum channel
    pub const GHZ2: u16 = 0x0080;
    /// 5 GHz spectrum channel
    pub const GHZ5: u16 = 0x0100;
    /// Dynamic CCK-OFDM channel
    pub const DYN: u16 = 0x0400;
    /// Half-rate (10 MHz) channel
    pub const HALF: u16 = 0x4000;
    /// Quarter-rate (5 MHz) channel
    pub const QUARTER: u16 = 0x8000;
}

/// RX flags field (presence bit 14)
pub mod rx_flags {
    /// PLCP CRC check failed
    pub const BADPLCP: u16 = 0x0002;
}

/// TX flags field (presence bit 15)
pub mod tx_flags {
    /// Transmission failed due to excessive retries
    pub const FAIL: u16 = 0x0001;
    /// Transmission used CTS-to-self protection
    pub const CTS: u16 = 0x0002;
    /// Transmission used RTS/CTS handshake
    pub const RTS: u16 = 0x0004;
    /// Transmission should not expect an ACK
    pub const NOACK: u16 = 0x0008;
}

/// MCS field (presence bit 19): known flags, then the flags byte layout
pub mod mcs {
    pub const HAVE_BW: u8 = 0x01;
    pub const HAVE_MCS: u8 = 0x02;
    pub const HAVE_GI: u8 = 0x04;
    pub const HAVE_FMT: u8 = 0x08;
    pub const HAVE_FEC: u8 = 0x10;
    pub const HAVE_STBC: u8 = 0x20;

    /// Bandwidth subfield of the flags byte
    pub const BW_MASK: u8 = 0x03;
    pub const BW_20: u8 = 0;
    pub const BW_40: u8 = 1;
    pub const BW_20L: u8 = 2;
    pub const BW_20U: u8 = 3;

    pub const SGI: u8 = 0x04;
    pub const FMT_GF: u8 = 0x08;
    pub const FEC_LDPC: u8 = 0x10;

    /// STBC stream count subfield of the flags byte
    pub const STBC_MASK: u8 = 0x60;
    pub const STBC_1: u8 = 1;
    pub const STBC_2: u8 = 2;
    pub const STBC_3: u8 = 3;
    pub const STBC_SHIFT: u8 = 5;

    /// Extract the bandwidth value (one of BW_20/BW_40/BW_20L/BW_20U)
    pub fn bandwidth(flags: u8) -> u8 {
        flags & BW_MASK
    }

    /// Extract the number of STBC streams (0..=3)
    pub fn stbc_streams(flags: u8) -> u8 {
        (flags & STBC_MASK) >> STBC_SHIFT
    }
}

/// A-MPDU status field flags (presence bit 20)
pub mod ampdu {
    /// Driver reports zero-length subframes
    pub const REPORT_ZEROLEN: u16 = 0x0001;
    /// This is a zero-length subframe
    pub const IS_ZEROLEN: u16 = 0x0002;
    /// Last-subframe status is known
    pub const LAST_KNOWN: u16 = 0x0004;
    /// This is the last subframe of the A-MPDU
    pub const IS_LAST: u16 = 0x0008;
    /// Delimiter CRC error on this subframe
    pub const DELIM_CRC_ERR: u16 = 0x0010;
    /// Delimiter CRC value is reported
    pub const DELIM_CRC_KNOWN: u16 = 0x0020;
}

/// VHT field (presence bit 21): known word, flags byte, coding byte
pub mod vht {
    pub const KNOWN_STBC: u16 = 0x0001;
    pub const KNOWN_TXOP_PS_NA: u16 = 0x0002;
    pub const KNOWN_GI: u16 = 0x0004;
    pub const KNOWN_SGI_NSYM_DIS: u16 = 0x0008;
    pub const KNOWN_LDPC_EXTRA_OFDM_SYM: u16 = 0x0010;
    pub const KNOWN_BEAMFORMED: u16 = 0x0020;
    pub const KNOWN_BANDWIDTH: u16 = 0x0040;
    pub const KNOWN_GROUP_ID: u16 = 0x0080;
    pub const KNOWN_PARTIAL_AID: u16 = 0x0100;

    pub const FLAG_STBC: u8 = 0x01;
    pub const FLAG_TXOP_PS_NA: u8 = 0x02;
    pub const FLAG_SGI: u8 = 0x04;
    pub const FLAG_SGI_NSYM_M10_9: u8 = 0x08;
    pub const FLAG_LDPC_EXTRA_OFDM_SYM: u8 = 0x10;
    pub const FLAG_BEAMFORMED: u8 = 0x20;

    /// Per-user LDPC coding bits
    pub const CODING_LDPC_USER0: u8 = 0x01;
    pub const CODING_LDPC_USER1: u8 = 0x02;
    pub const CODING_LDPC_USER2: u8 = 0x04;
    pub const CODING_LDPC_USER3: u8 = 0x08;
}

/// Timestamp field (presence bit 22): unit and sampling-position nibbles,
/// plus the flags byte
pub mod timestamp {
    pub const UNIT_MASK: u16 = 0x000F;
    pub const UNIT_MS: u16 = 0x0000;
    pub const UNIT_US: u16 = 0x0001;
    pub const UNIT_NS: u16 = 0x0003;

    pub const SPOS_MASK: u16 = 0x00F0;
    pub const SPOS_BEGIN_MPDU: u16 = 0x0000;
    pub const SPOS_PLCP_SIG_ACQ: u16 = 0x0010;
    pub const SPOS_EO_PPDU: u16 = 0x0020;
    pub const SPOS_EO_MPDU: u16 = 0x0030;
    pub const SPOS_UNKNOWN: u16 = 0x00F0;

    pub const FLAG_64BIT: u8 = 0x00;
    pub const FLAG_32BIT: u8 = 0x01;
    pub const FLAG_ACCURACY: u8 = 0x02;

    /// Extract the unit value (UNIT_MS/UNIT_US/UNIT_NS)
    pub fn unit(word: u16) -> u16 {
        word & UNIT_MASK
    }

    /// Extract the sampling position (one of the SPOS_* values)
    pub fn sampling_position(word: u16) -> u16 {
        word & SPOS_MASK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_flag_values() {
        assert_eq!(frame_flags::CFP, 0x01);
        assert_eq!(frame_flags::SHORTPRE, 0x02);
        assert_eq!(frame_flags::WEP, 0x04);
        assert_eq!(frame_flags::FRAG, 0x08);
        assert_eq!(frame_flags::FCS, 0x10);
        assert_eq!(frame_flags::DATAPAD, 0x20);
        assert_eq!(frame_flags::BADFCS, 0x40);
    }

    #[test]
    fn test_channel_flag_values() {
        assert_eq!(channel_flags::CCK, 0x0020);
        assert_eq!(channel_flags::OFDM, 0x0040);
        assert_eq!(channel_flags::GHZ2, 0x0080);
        assert_eq!(channel_flags::GHZ5, 0x0100);
        assert_eq!(channel_flags::DYN, 0x0400);
        assert_eq!(channel_flags::HALF, 0x4000);
        assert_eq!(channel_flags::QUARTER, 0x8000);
    }

    #[test]
    fn test_rx_tx_flag_values() {
        assert_eq!(rx_flags::BADPLCP, 0x0002);
        assert_eq!(tx_flags::FAIL, 0x0001);
        assert_eq!(tx_flags::CTS, 0x0002);
        assert_eq!(tx_flags::RTS, 0x0004);
        assert_eq!(tx_flags::NOACK, 0x0008);
    }

    #[test]
    fn test_mcs_values() {
        assert_eq!(mcs::HAVE_BW, 0x01);
        assert_eq!(mcs::HAVE_MCS, 0x02);
        assert_eq!(mcs::HAVE_GI, 0x04);
        assert_eq!(mcs::HAVE_FMT, 0x08);
        assert_eq!(mcs::HAVE_FEC, 0x10);
        assert_eq!(mcs::HAVE_STBC, 0x20);
        assert_eq!(mcs::BW_MASK, 0x03);
        assert_eq!(mcs::SGI, 0x04);
        assert_eq!(mcs::FMT_GF, 0x08);
        assert_eq!(mcs::FEC_LDPC, 0x10);
        assert_eq!(mcs::STBC_MASK, 0x60);
        assert_eq!(mcs::STBC_SHIFT, 5);
    }

    #[test]
    fn test_mcs_bandwidth_extraction() {
        for bw in [mcs::BW_20, mcs::BW_40, mcs::BW_20L, mcs::BW_20U] {
            assert_eq!(mcs::bandwidth(bw), bw);
            // Unrelated bits set must not leak into the subfield
            assert_eq!(mcs::bandwidth(bw | mcs::SGI | mcs::STBC_MASK), bw);
        }
    }

    #[test]
    fn test_mcs_stbc_extraction() {
        for streams in [mcs::STBC_1, mcs::STBC_2, mcs::STBC_3] {
            let flags = streams << mcs::STBC_SHIFT;
            assert_eq!(mcs::stbc_streams(flags), streams);
            assert_eq!(mcs::stbc_streams(flags | mcs::BW_MASK | mcs::SGI), streams);
        }
        assert_eq!(mcs::stbc_streams(0), 0);
    }

    #[test]
    fn test_ampdu_values() {
        assert_eq!(ampdu::REPORT_ZEROLEN, 0x0001);
        assert_eq!(ampdu::IS_ZEROLEN, 0x0002);
        assert_eq!(ampdu::LAST_KNOWN, 0x0004);
        assert_eq!(ampdu::IS_LAST, 0x0008);
        assert_eq!(ampdu::DELIM_CRC_ERR, 0x0010);
        assert_eq!(ampdu::DELIM_CRC_KNOWN, 0x0020);
    }

    #[test]
    fn test_vht_values() {
        assert_eq!(vht::KNOWN_STBC, 0x0001);
        assert_eq!(vht::KNOWN_TXOP_PS_NA, 0x0002);
        assert_eq!(vht::KNOWN_GI, 0x0004);
        assert_eq!(vht::KNOWN_SGI_NSYM_DIS, 0x0008);
        assert_eq!(vht::KNOWN_LDPC_EXTRA_OFDM_SYM, 0x0010);
        assert_eq!(vht::KNOWN_BEAMFORMED, 0x0020);
        assert_eq!(vht::KNOWN_BANDWIDTH, 0x0040);
        assert_eq!(vht::KNOWN_GROUP_ID, 0x0080);
        assert_eq!(vht::KNOWN_PARTIAL_AID, 0x0100);
        assert_eq!(vht::FLAG_STBC, 0x01);
        assert_eq!(vht::FLAG_TXOP_PS_NA, 0x02);
        assert_eq!(vht::FLAG_SGI, 0x04);
        assert_eq!(vht::FLAG_SGI_NSYM_M10_9, 0x08);
        assert_eq!(vht::FLAG_LDPC_EXTRA_OFDM_SYM, 0x10);
        assert_eq!(vht::FLAG_BEAMFORMED, 0x20);
        assert_eq!(vht::CODING_LDPC_USER0, 0x01);
        assert_eq!(vht::CODING_LDPC_USER1, 0x02);
        assert_eq!(vht::CODING_LDPC_USER2, 0x04);
        assert_eq!(vht::CODING_LDPC_USER3, 0x08);
    }

    #[test]
    fn test_timestamp_values() {
        assert_eq!(timestamp::UNIT_MASK, 0x000F);
        assert_eq!(timestamp::UNIT_MS, 0x0000);
        assert_eq!(timestamp::UNIT_US, 0x0001);
        assert_eq!(timestamp::UNIT_NS, 0x0003);
        assert_eq!(timestamp::SPOS_MASK, 0x00F0);
        assert_eq!(timestamp::SPOS_BEGIN_MPDU, 0x0000);
        assert_eq!(timestamp::SPOS_PLCP_SIG_ACQ, 0x0010);
        assert_eq!(timestamp::SPOS_EO_PPDU, 0x0020);
        assert_eq!(timestamp::SPOS_EO_MPDU, 0x0030);
        assert_eq!(timestamp::SPOS_UNKNOWN, 0x00F0);
        assert_eq!(timestamp::FLAG_64BIT, 0x00);
        assert_eq!(timestamp::FLAG_32BIT, 0x01);
        assert_eq!(timestamp::FLAG_ACCURACY, 0x02);
    }

    #[test]
    fn test_timestamp_subfield_extraction() {
        for unit in [timestamp::UNIT_MS, timestamp::UNIT_US, timestamp::UNIT_NS] {
            assert_eq!(timestamp::unit(unit), unit);
            assert_eq!(timestamp::unit(unit | timestamp::SPOS_EO_PPDU), unit);
        }
        for spos in [
            timestamp::SPOS_BEGIN_MPDU,
            timestamp::SPOS_PLCP_SIG_ACQ,
            timestamp::SPOS_EO_PPDU,
            timestamp::SPOS_EO_MPDU,
            timestamp::SPOS_UNKNOWN,
        ] {
            assert_eq!(timestamp::sampling_position(spos), spos);
            assert_eq!(timestamp::sampling_position(spos | timestamp::UNIT_NS), spos);
        }
    }

    #[test]
    fn test_masks_disjoint_within_group() {
        // Single-bit flag groups must not overlap internally
        let frame = [
            frame_flags::CFP,
            frame_flags::SHORTPRE,
            frame_flags::WEP,
            frame_flags::FRAG,
            frame_flags::FCS,
            frame_flags::DATAPAD,
            frame_flags::BADFCS,
        ];
        let mut acc = 0u8;
        for f in frame {
            assert_eq!(acc & f, 0);
            acc |= f;
        }

        let chan = [
            channel_flags::CCK,
            channel_flags::OFDM,
            channel_flags::GHZ2,
            channel_flags::GHZ5,
            channel_flags::DYN,
            channel_flags::HALF,
            channel_flags::QUARTER,
        ];
        let mut acc = 0u16;
        for f in chan {
            assert_eq!(acc & f, 0);
            acc |= f;
        }

        // Subfields of the MCS flags byte must not overlap each other
        assert_eq!(mcs::BW_MASK & mcs::STBC_MASK, 0);
        assert_eq!(mcs::BW_MASK & (mcs::SGI | mcs::FMT_GF | mcs::FEC_LDPC), 0);
        assert_eq!(mcs::STBC_MASK & (mcs::SGI | mcs::FMT_GF | mcs::FEC_LDPC), 0);
        assert_eq!(timestamp::UNIT_MASK & timestamp::SPOS_MASK, 0);
    }
}
