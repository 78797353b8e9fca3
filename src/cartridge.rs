//! NES cartridge loading from the iNES container (.nes files).
//!
//! Implements the fixed 16-byte [iNES](https://www.nesdev.org/wiki/INES)
//! header: magic "NES\x1A", byte 4 = PRG bank count (16 KiB units), byte 5 =
//! CHR bank count (8 KiB units); PRG data follows immediately. Bytes 6–9
//! carry mapper/mirroring flags this core keeps but does not interpret.
//! A malformed image is a rejected load, never a crash.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;

use log::debug;

pub const HEADER_LEN: usize = 16;
pub const PRG_BANK_LEN: usize = 0x4000;
pub const CHR_BANK_LEN: usize = 0x2000;

/// Cartridge image rejected at load time, before any CPU state is touched.
#[derive(Debug)]
pub enum LoadError {
    /// The first four header bytes were not "NES\x1A".
    BadMagic([u8; 4]),
    /// The file ended before the header or the declared PRG/CHR data.
    Truncated { expected: usize, actual: usize },
    Io(io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::BadMagic(magic) => {
                write!(
                    f,
                    "invalid iNES magic {:02X} {:02X} {:02X} {:02X}",
                    magic[0], magic[1], magic[2], magic[3]
                )
            }
            LoadError::Truncated { expected, actual } => {
                write!(f, "truncated iNES image: need {expected} bytes, have {actual}")
            }
            LoadError::Io(err) => write!(f, "failed to read ROM: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// Parsed iNES image: PRG/CHR bank data plus the raw flag bytes.
pub struct Cartridge {
    pub prg_rom: Vec<u8>,
    pub chr_rom: Vec<u8>,
    /// Header bytes 6–9 (mapper, mirroring, etc.) for external collaborators.
    pub flags: [u8; 4],
}

impl Cartridge {
    /// Load and parse an iNES file.
    pub fn load(path: &str) -> Result<Self, LoadError> {
        let data = fs::read(path)?;
        Self::parse(&data)
    }

    /// Parse an iNES image from raw bytes.
    pub fn parse(data: &[u8]) -> Result<Self, LoadError> {
        if data.len() < HEADER_LEN {
            return Err(LoadError::Truncated {
                expected: HEADER_LEN,
                actual: data.len(),
            });
        }
        if &data[0..4] != b"NES\x1A" {
            return Err(LoadError::BadMagic([data[0], data[1], data[2], data[3]]));
        }

        let prg_len = data[4] as usize * PRG_BANK_LEN;
        let chr_len = data[5] as usize * CHR_BANK_LEN;
        let expected = HEADER_LEN + prg_len + chr_len;
        if data.len() < expected {
            return Err(LoadError::Truncated {
                expected,
                actual: data.len(),
            });
        }

        debug!("iNES image: {} PRG bank(s), {} CHR bank(s)", data[4], data[5]);

        Ok(Self {
            prg_rom: data[HEADER_LEN..HEADER_LEN + prg_len].to_vec(),
            chr_rom: data[HEADER_LEN + prg_len..expected].to_vec(),
            flags: [data[6], data[7], data[8], data[9]],
        })
    }

    /// CPU address the PRG image maps at: $C000 for a single 16 KiB bank
    /// (mirroring the nestest layout), $8000 when two banks fill the whole
    /// cartridge window.
    pub fn prg_load_address(&self) -> u16 {
        if self.prg_rom.len() > PRG_BANK_LEN {
            0x8000
        } else {
            0xC000
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(prg_banks: u8, chr_banks: u8) -> Vec<u8> {
        let mut data = vec![0u8; HEADER_LEN];
        data[0..4].copy_from_slice(b"NES\x1A");
        data[4] = prg_banks;
        data[5] = chr_banks;
        data[6] = 0x01;
        data.resize(
            HEADER_LEN + prg_banks as usize * PRG_BANK_LEN + chr_banks as usize * CHR_BANK_LEN,
            0xEA,
        );
        data
    }

    #[test]
    fn single_bank_maps_at_c000() {
        let cart = Cartridge::parse(&image(1, 1)).unwrap();

        assert_eq!(cart.prg_rom.len(), PRG_BANK_LEN);
        assert_eq!(cart.chr_rom.len(), CHR_BANK_LEN);
        assert_eq!(cart.prg_load_address(), 0xC000);
        assert_eq!(cart.flags[0], 0x01);
    }

    #[test]
    fn two_banks_map_at_8000() {
        let cart = Cartridge::parse(&image(2, 0)).unwrap();

        assert_eq!(cart.prg_rom.len(), 2 * PRG_BANK_LEN);
        assert!(cart.chr_rom.is_empty());
        assert_eq!(cart.prg_load_address(), 0x8000);
    }

    #[test]
    fn bad_magic_is_rejected() {
        let mut data = image(1, 0);
        data[3] = 0x00;

        match Cartridge::parse(&data) {
            Err(LoadError::BadMagic(magic)) => assert_eq!(&magic[0..3], b"NES"),
            other => panic!("expected BadMagic, got {:?}", other.err()),
        }
    }

    #[test]
    fn truncated_prg_is_rejected() {
        let mut data = image(2, 0);
        data.truncate(HEADER_LEN + PRG_BANK_LEN);

        match Cartridge::parse(&data) {
            Err(LoadError::Truncated { expected, actual }) => {
                assert_eq!(expected, HEADER_LEN + 2 * PRG_BANK_LEN);
                assert_eq!(actual, HEADER_LEN + PRG_BANK_LEN);
            }
            other => panic!("expected Truncated, got {:?}", other.err()),
        }
    }

    #[test]
    fn short_header_is_rejected() {
        assert!(matches!(
            Cartridge::parse(b"NES\x1A"),
            Err(LoadError::Truncated { .. })
        ));
    }
}
