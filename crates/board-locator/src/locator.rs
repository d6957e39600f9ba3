use std::io::Write;

use log::{debug, info};

use crate::error::Result;
use crate::ports::PortEnumerator;
use crate::vendors::VendorTable;

/// A port recognised as a USB-to-UART board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub device: String,
    pub chip: String,
}

/// How located boards are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// One device path per line
    #[default]
    Plain,
    /// `device<TAB>chip` per line
    WithChip,
}

/// Filters the host's serial ports down to known USB-to-UART bridges.
///
/// A single pass over one enumeration: ports keep the order the platform
/// reported them in, nothing is sorted or deduplicated, and a port whose
/// hardware identifier mentions none of the table's vendor IDs is skipped
/// without a word.
#[derive(Clone, Debug, Default)]
pub struct BoardLocator {
    vendors: VendorTable,
}

impl BoardLocator {
    /// Create a locator matching against `vendors`.
    pub fn new(vendors: VendorTable) -> Self {
        Self { vendors }
    }

    /// Enumerate once and keep the ports that match the vendor table.
    pub fn locate<E: PortEnumerator>(&self, enumerator: E) -> Result<Vec<Board>> {
        let ports = enumerator.ports()?;
        debug!(
            "Inspecting {} ports against {} vendor ids",
            ports.len(),
            self.vendors.vendors().len()
        );

        let boards: Vec<Board> = ports
            .into_iter()
            .filter_map(|port| {
                let vendor = self.vendors.matching(&port.hwid)?;
                debug!("{} matched {} ({})", port.device, vendor.chip, port.hwid);
                Some(Board {
                    device: port.device,
                    chip: vendor.chip.clone(),
                })
            })
            .collect();

        info!("Found {} boards", boards.len());
        Ok(boards)
    }

    /// Write `boards` to `out`, one per line.
    pub fn emit<W: Write>(boards: &[Board], out: &mut W, style: OutputStyle) -> Result<()> {
        for board in boards {
            match style {
                OutputStyle::Plain => writeln!(out, "{}", board.device)?,
                OutputStyle::WithChip => writeln!(out, "{}\t{}", board.device, board.chip)?,
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Locate and emit in one go. Nothing is written if enumeration fails.
    pub fn run<E, W>(&self, enumerator: E, out: &mut W, style: OutputStyle) -> Result<usize>
    where
        E: PortEnumerator,
        W: Write,
    {
        let boards = self.locate(enumerator)?;
        Self::emit(&boards, out, style)?;
        Ok(boards.len())
    }
}
