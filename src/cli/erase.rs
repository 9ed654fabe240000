//! Erase command: UF2 images that wipe a flash region.

use crate::cli::common::{CliError, CliResult};
use crate::firmware::uf2::{write_eraser, FlashRegion, BLOCK_SIZE};
use clap::Args;
use std::path::PathBuf;

/// Write a UF2 file that fills a flash region with 0xFF
#[derive(Debug, Clone, Args)]
pub struct EraseArgs {
    /// Region to erase: `storage`, `softdevice`, or START:END
    #[arg(short, long, value_name = "REGION", default_value = "storage")]
    pub region: String,

    /// Output path for the UF2 file
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,
}

impl EraseArgs {
    /// Execute the erase command
    pub fn execute(&self) -> CliResult<()> {
        let region: FlashRegion = self
            .region
            .parse()
            .map_err(|e| CliError::validation(format!("Invalid region: {e:#}")))?;

        let blocks = write_eraser(region, &self.output)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!("✓ Wrote {}", self.output.display());
        println!("  Region: {region} ({} bytes)", region.len());
        println!("  Blocks: {blocks} ({} bytes)", blocks as usize * BLOCK_SIZE);

        Ok(())
    }
}
