//! iNES cartridge file parsing.
//!
//! Only as much of the format is modeled as `mapper_id == 0` (NROM) needs:
//! the 16-byte header, an optional 512-byte trainer to skip, and the raw
//! PRG/CHR banks. NES 2.0 and mappers other than NROM are out of scope.

use crate::Mirroring;

const MAGIC: [u8; 4] = [0x4E, 0x45, 0x53, 0x1A];
const HEADER_LEN: usize = 16;
const TRAINER_LEN: usize = 512;
const PRG_BANK_LEN: usize = 16384;
const CHR_BANK_LEN: usize = 8192;

/// Cartridge load failures, all recoverable at the host boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CartridgeError {
    /// File is shorter than the 16-byte header.
    #[error("file too small to contain an iNES header: {0} bytes")]
    FileTooSmall(usize),

    /// The first four bytes are not `4E 45 53 1A`.
    #[error("bad iNES magic number: {0:02X?}")]
    InvalidMagic([u8; 4]),

    /// `mapper_id` extracted from the header is not 0.
    #[error("unsupported mapper id {0}, only NROM (mapper 0) is supported")]
    UnsupportedMapper(u8),

    /// Header claims zero PRG banks.
    #[error("PRG bank count cannot be zero")]
    ZeroPrgBanks,

    /// File ends before the PRG/CHR data the header promises.
    #[error("file truncated: expected at least {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
}

/// The fields of an iNES header this crate cares about.
pub(crate) struct Header {
    pub prg_banks: u8,
    pub chr_banks: u8,
    pub mirroring: Mirroring,
    pub has_trainer: bool,
    pub mapper_id: u8,
}

impl Header {
    fn parse(data: &[u8]) -> Result<Self, CartridgeError> {
        if data.len() < HEADER_LEN {
            return Err(CartridgeError::FileTooSmall(data.len()));
        }
        let magic = [data[0], data[1], data[2], data[3]];
        if magic != MAGIC {
            return Err(CartridgeError::InvalidMagic(magic));
        }

        let prg_banks = data[4];
        let chr_banks = data[5];
        let mirroring = if data[6] & 0x01 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };
        let has_trainer = data[6] & 0x04 != 0;
        let mapper_id = (data[7] & 0xF0) | (data[6] >> 4);

        if prg_banks == 0 {
            return Err(CartridgeError::ZeroPrgBanks);
        }
        if mapper_id != 0 {
            return Err(CartridgeError::UnsupportedMapper(mapper_id));
        }

        Ok(Self {
            prg_banks,
            chr_banks,
            mirroring,
            has_trainer,
            mapper_id,
        })
    }
}

/// The parsed contents of an NROM iNES file: PRG/CHR data and mirroring.
pub struct Rom {
    pub(crate) prg_rom: Vec<u8>,
    pub(crate) chr_rom: Vec<u8>,
    pub(crate) mirroring: Mirroring,
    pub(crate) prg_banks: u8,
    pub(crate) chr_banks: u8,
}

impl Rom {
    /// Parses a complete iNES file held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`CartridgeError`] if the header is malformed, names a
    /// mapper other than NROM, or the file is truncated relative to what
    /// the header promises.
    pub fn from_ines_bytes(data: &[u8]) -> Result<Self, CartridgeError> {
        let header = Header::parse(data)?;

        let mut offset = HEADER_LEN;
        if header.has_trainer {
            offset += TRAINER_LEN;
        }

        let prg_len = usize::from(header.prg_banks) * PRG_BANK_LEN;
        let chr_len = usize::from(header.chr_banks) * CHR_BANK_LEN;
        let expected = offset + prg_len + chr_len;
        if data.len() < expected {
            return Err(CartridgeError::Truncated {
                expected,
                actual: data.len(),
            });
        }

        let prg_rom = data[offset..offset + prg_len].to_vec();
        offset += prg_len;
        let chr_rom = data[offset..offset + chr_len].to_vec();

        Ok(Self {
            prg_rom,
            chr_rom,
            mirroring: header.mirroring,
            prg_banks: header.prg_banks,
            chr_banks: header.chr_banks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(prg_banks: u8, chr_banks: u8, flags6: u8) -> Vec<u8> {
        let mut h = vec![0x4E, 0x45, 0x53, 0x1A, prg_banks, chr_banks, flags6, 0];
        h.resize(HEADER_LEN, 0);
        h
    }

    #[test]
    fn rejects_bad_magic() {
        let mut data = header(1, 1, 0);
        data[0] = 0;
        assert!(matches!(
            Rom::from_ines_bytes(&data),
            Err(CartridgeError::InvalidMagic(_))
        ));
    }

    #[test]
    fn rejects_non_nrom_mapper() {
        let mut data = header(1, 1, 0xD0); // mapper nibble high = 0xD -> nonzero mapper
        data.extend(vec![0; 16384 + 8192]);
        assert!(matches!(
            Rom::from_ines_bytes(&data),
            Err(CartridgeError::UnsupportedMapper(_))
        ));
    }

    #[test]
    fn rejects_zero_prg_banks() {
        let data = header(0, 1, 0);
        assert!(matches!(
            Rom::from_ines_bytes(&data),
            Err(CartridgeError::ZeroPrgBanks)
        ));
    }

    #[test]
    fn rejects_truncated_file() {
        let mut data = header(2, 1, 0);
        data.extend(vec![0; 1024]);
        assert!(matches!(
            Rom::from_ines_bytes(&data),
            Err(CartridgeError::Truncated { .. })
        ));
    }

    #[test]
    fn parses_minimal_nrom_256() {
        let mut data = header(2, 1, 0x01); // vertical mirroring
        data.extend(vec![0xAB; 32768]);
        data.extend(vec![0xCD; 8192]);
        let rom = Rom::from_ines_bytes(&data).unwrap();
        assert_eq!(rom.prg_banks, 2);
        assert_eq!(rom.chr_banks, 1);
        assert_eq!(rom.mirroring, Mirroring::Vertical);
        assert_eq!(rom.prg_rom.len(), 32768);
        assert_eq!(rom.chr_rom.len(), 8192);
    }

    #[test]
    fn skips_trainer_when_present() {
        let mut data = header(1, 0, 0x04); // trainer flag set
        data.extend(vec![0xEE; 512]); // trainer
        data.extend(vec![0x11; 16384]); // PRG
        let rom = Rom::from_ines_bytes(&data).unwrap();
        assert_eq!(rom.prg_rom[0], 0x11);
    }
}
