//! Locate USB-to-UART boards (CH340, CP210x and friends) among the serial
//! ports attached to this host.

pub mod error;
pub mod locator;
pub mod ports;
pub mod vendors;

pub use error::{LocatorError, Result};
pub use locator::{Board, BoardLocator, OutputStyle};
pub use ports::{PortDescriptor, PortEnumerator, SystemPorts};
pub use vendors::{VendorId, VendorTable};
