pub mod crx;

use std::fmt;

use crate::error::{Error, Result};

/// Signature of a bare ZIP archive.
pub const ZIP_MAGIC: &[u8; 2] = b"PK";

/// Signature shared by every CRX container version.
pub const CRX_MAGIC: &[u8; 4] = b"Cr24";

/// Smallest buffer that can carry a CRX magic, version and first length field.
pub const MIN_CRX_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFormat {
    Zip,
    Crx2,
    Crx3,
}

impl ContainerFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerFormat::Zip => "ZIP",
            ContainerFormat::Crx2 => "CRX2",
            ContainerFormat::Crx3 => "CRX3",
        }
    }
}

impl fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte position of the embedded ZIP inside the original buffer.
///
/// Always strictly less than the buffer length it was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadLocation {
    pub offset: usize,
}

impl PayloadLocation {
    /// The `[offset, len)` sub-range of `data` holding the archive.
    ///
    /// Empty when `data` is shorter than the buffer this location came from.
    pub fn slice<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        data.get(self.offset..).unwrap_or_default()
    }
}

pub fn detect_format(data: &[u8]) -> Result<ContainerFormat> {
    // A bare ZIP short-circuits every header check
    if data.starts_with(ZIP_MAGIC) {
        return Ok(ContainerFormat::Zip);
    }

    if data.len() < MIN_CRX_LEN {
        return Err(Error::TooSmall);
    }

    if !data.starts_with(CRX_MAGIC) {
        return Err(Error::UnrecognizedFormat);
    }

    match crx::read_u32_le(data, 4)? {
        2 => Ok(ContainerFormat::Crx2),
        3 => Ok(ContainerFormat::Crx3),
        version => Err(Error::UnsupportedVersion(version)),
    }
}

pub fn locate(data: &[u8], format: ContainerFormat) -> Result<PayloadLocation> {
    let offset = match format {
        ContainerFormat::Zip => 0,
        ContainerFormat::Crx2 => crx::crx2_offset(data)?,
        ContainerFormat::Crx3 => crx::crx3_offset(data)?,
    };

    Ok(PayloadLocation { offset })
}

/// Detects the container and returns it together with the ZIP payload view.
pub fn payload(data: &[u8]) -> Result<(ContainerFormat, &[u8])> {
    let format = detect_format(data)?;
    let location = locate(data, format)?;
    Ok((format, location.slice(data)))
}
