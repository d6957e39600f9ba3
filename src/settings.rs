use std::path::Path;

use anyhow::{bail, Context, Result};
use board_locator::{VendorId, VendorTable};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "BoardDetect.toml";
/// Prefix of environment overrides, e.g. `BOARD_DETECT_VENDORS`.
pub const ENV_PREFIX: &str = "BOARD_DETECT_";

/// Settings for a board-detect run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Vendor IDs that identify a board, checked in order
    pub vendors: Vec<VendorId>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vendors: VendorTable::default().vendors().to_vec(),
        }
    }
}

impl Settings {
    /// Defaults, then the TOML file, then `BOARD_DETECT_*` variables.
    pub fn figment(config: Option<&Path>) -> Result<Figment> {
        let file = match config {
            Some(path) => {
                if !path.is_file() {
                    bail!("config file {} does not exist", path.display());
                }
                Toml::file_exact(path)
            }
            None => Toml::file_exact(DEFAULT_CONFIG_FILE),
        };

        Ok(Figment::from(Serialized::defaults(Settings::default()))
            .merge(file)
            .merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Extract settings from the layered sources of [`Settings::figment`].
    pub fn load(config: Option<&Path>) -> Result<Self> {
        Self::figment(config)?
            .extract()
            .context("invalid board-detect configuration")
    }

    /// Build the normalized vendor table, rejecting empty ids.
    pub fn vendor_table(&self) -> Result<VendorTable> {
        Ok(VendorTable::new(self.vendors.clone())?)
    }

    /// Render the settings as a TOML document.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
