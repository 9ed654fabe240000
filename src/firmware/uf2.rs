//! UF2 images that erase a flash region on nRF52840 boards.
//!
//! Each 512-byte block asks the bootloader to write up to 256 bytes of
//! `0xFF` at a target address. Flashing the resulting file wipes the region,
//! e.g. the settings partition holding BLE bonds and Studio keymap edits.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// First magic word ("UF2\n").
pub const MAGIC_START0: u32 = 0x0A32_4655;
/// Second magic word.
pub const MAGIC_START1: u32 = 0x9E5D_5157;
/// Closing magic word.
pub const MAGIC_END: u32 = 0x0AB1_6F30;
/// Flag: the family-id field is present.
pub const FLAG_FAMILY_ID_PRESENT: u32 = 0x0000_2000;
/// Family id of the nRF52840.
pub const NRF52840_FAMILY_ID: u32 = 0xADA5_2840;

/// Size of one encoded block.
pub const BLOCK_SIZE: usize = 512;
/// Size of the data area inside a block.
pub const DATA_AREA_SIZE: usize = 476;
/// Payload bytes written per block.
pub const PAYLOAD_SIZE: u32 = 256;
/// Byte written over the erased region.
pub const ERASED_BYTE: u8 = 0xFF;

/// A half-open flash address range `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashRegion {
    /// First address to erase
    pub start: u32,
    /// One past the last address to erase
    pub end: u32,
}

impl FlashRegion {
    /// ZMK settings partition on the XIAO BLE (`storage_partition`).
    pub const STORAGE: Self = Self {
        start: 0xEC000,
        end: 0xF4000,
    };

    /// S140 SoftDevice, right after the MBR.
    pub const SOFTDEVICE: Self = Self {
        start: 0x1000,
        end: 0x27000,
    };

    /// Creates a region, rejecting empty or inverted ranges.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start >= end {
            anyhow::bail!(
                "Invalid flash region 0x{start:05X}-0x{end:05X}: start must be below end"
            );
        }
        Ok(Self { start, end })
    }

    /// Number of bytes in the region.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// True if the region covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of UF2 blocks needed to cover the region.
    #[must_use]
    pub const fn block_count(&self) -> u32 {
        self.len().div_ceil(PAYLOAD_SIZE)
    }
}

impl fmt::Display for FlashRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:05X} - 0x{:05X}", self.start, self.end)
    }
}

impl FromStr for FlashRegion {
    type Err = anyhow::Error;

    /// Accepts `storage`, `softdevice`, or `START:END` with hex (`0x...`)
    /// or decimal addresses.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "storage" => Ok(Self::STORAGE),
            "softdevice" | "sd" => Ok(Self::SOFTDEVICE),
            other => {
                let (start, end) = other
                    .split_once(':')
                    .context("Expected 'storage', 'softdevice' or START:END")?;
                Self::new(parse_address(start)?, parse_address(end)?)
            }
        }
    }
}

fn parse_address(text: &str) -> Result<u32> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.with_context(|| format!("Invalid flash address '{text}'"))
}

/// Encodes one block. `payload` must fit in the data area.
#[allow(clippy::cast_possible_truncation)]
fn encode_block(address: u32, payload: &[u8], block_no: u32, num_blocks: u32) -> Vec<u8> {
    debug_assert!(payload.len() <= DATA_AREA_SIZE);

    let mut block = Vec::with_capacity(BLOCK_SIZE);
    for word in [
        MAGIC_START0,
        MAGIC_START1,
        FLAG_FAMILY_ID_PRESENT,
        address,
        payload.len() as u32,
        block_no,
        num_blocks,
        NRF52840_FAMILY_ID,
    ] {
        block.extend_from_slice(&word.to_le_bytes());
    }
    block.extend_from_slice(payload);
    block.resize(BLOCK_SIZE - 4, 0);
    block.extend_from_slice(&MAGIC_END.to_le_bytes());
    block
}

/// Builds the full UF2 image that fills `region` with [`ERASED_BYTE`].
#[must_use]
pub fn build_eraser(region: FlashRegion) -> Vec<u8> {
    let num_blocks = region.block_count();
    let mut image = Vec::with_capacity(num_blocks as usize * BLOCK_SIZE);

    for block_no in 0..num_blocks {
        let address = region.start + block_no * PAYLOAD_SIZE;
        let remaining = PAYLOAD_SIZE.min(region.end - address);
        let payload = vec![ERASED_BYTE; remaining as usize];
        image.extend(encode_block(address, &payload, block_no, num_blocks));
    }

    image
}

/// Builds the eraser image for `region` and writes it to `path`.
pub fn write_eraser(region: FlashRegion, path: &Path) -> Result<u32> {
    let image = build_eraser(region);
    fs::write(path, &image)
        .with_context(|| format!("Failed to write UF2 file: {}", path.display()))?;
    Ok(region.block_count())
}
