use serde::{Deserialize, Serialize};

use crate::error::{LocatorError, Result};

/// WCH CH340 / CH341 family
/// https://devicehunt.com/view/type/usb/vendor/1A86
pub const CH340: &str = "1a86";
/// Silicon Labs CP210x family
/// https://devicehunt.com/view/type/usb/vendor/10C4
pub const CP210X: &str = "10c4";

/// A vendor ID to look for in a port's hardware identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorId {
    /// Matched case-insensitively anywhere in the hwid
    pub id: String,
    /// Human-readable chip family
    #[serde(default)]
    pub chip: String,
}

impl VendorId {
    pub fn new(id: impl Into<String>, chip: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            chip: chip.into(),
        }
    }

    /// Whether `hwid` mentions this vendor. `hwid` must already be lowercase.
    fn found_in(&self, hwid: &str) -> bool {
        hwid.contains(&self.id)
    }
}

/// Ordered set of vendor matchers. Earlier entries win when a hwid
/// mentions more than one vendor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VendorTable {
    vendors: Vec<VendorId>,
}

impl VendorTable {
    /// Builds a table, lowercasing and trimming every id.
    pub fn new(vendors: Vec<VendorId>) -> Result<Self> {
        let vendors = vendors
            .into_iter()
            .map(|vendor| {
                let id = vendor.id.trim().to_lowercase();
                if id.is_empty() {
                    return Err(LocatorError::Config(format!(
                        "empty vendor id for chip {:?}",
                        vendor.chip
                    )));
                }
                Ok(VendorId { id, chip: vendor.chip })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { vendors })
    }

    /// Returns the first vendor whose id appears in `hwid`, ignoring case.
    pub fn matching(&self, hwid: &str) -> Option<&VendorId> {
        let hwid = hwid.to_lowercase();
        self.vendors.iter().find(|vendor| vendor.found_in(&hwid))
    }

    /// The matchers, in priority order.
    pub fn vendors(&self) -> &[VendorId] {
        &self.vendors
    }

    /// Whether the table has no matchers, in which case no port can match.
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

impl Default for VendorTable {
    fn default() -> Self {
        Self {
            vendors: vec![VendorId::new(CH340, "CH340"), VendorId::new(CP210X, "CP210x")],
        }
    }
}
