//! Header rules for the versioned CRX containers.
//!
//! CRX2 layout:
//! - Magic: "Cr24" (4 bytes)
//! - Version: 2 (4 bytes, little-endian)
//! - Public key length (4 bytes, little-endian)
//! - Signature length (4 bytes, little-endian)
//! - Public key, signature
//! - ZIP data
//!
//! CRX3 layout:
//! - Magic: "Cr24" (4 bytes)
//! - Version: 3 (4 bytes, little-endian)
//! - Header length (4 bytes, little-endian)
//! - Header (protobuf, variable length)
//! - ZIP data
//!
//! Signatures and the protobuf header are skipped, never verified.

use crate::error::{Error, Result};
use crate::unpack::ContainerFormat;

const CRX2_FIXED_LEN: u64 = 16;
const CRX3_FIXED_LEN: u64 = 12;

pub(crate) fn read_u32_le(data: &[u8], at: usize) -> Result<u32> {
    data.get(at..at + 4)
        .and_then(|bytes| bytes.try_into().ok())
        .map(u32::from_le_bytes)
        .ok_or(Error::TooSmall)
}

pub fn crx2_offset(data: &[u8]) -> Result<usize> {
    if data.len() < CRX2_FIXED_LEN as usize {
        return Err(Error::TooSmall);
    }

    let pubkey_len = read_u32_le(data, 8)?;
    let sig_len = read_u32_le(data, 12)?;
    let offset = CRX2_FIXED_LEN + u64::from(pubkey_len) + u64::from(sig_len);

    bounded(ContainerFormat::Crx2, offset, data.len())
}

pub fn crx3_offset(data: &[u8]) -> Result<usize> {
    if data.len() < CRX3_FIXED_LEN as usize {
        return Err(Error::TooSmall);
    }

    let header_len = read_u32_le(data, 8)?;
    let offset = CRX3_FIXED_LEN + u64::from(header_len);

    bounded(ContainerFormat::Crx3, offset, data.len())
}

/// A payload must hold at least one byte; an offset at or past the end is corrupt.
fn bounded(format: ContainerFormat, offset: u64, len: usize) -> Result<usize> {
    match usize::try_from(offset) {
        Ok(at) if at < len => Ok(at),
        _ => Err(Error::HeaderExceedsFile {
            format,
            offset,
            len,
        }),
    }
}
