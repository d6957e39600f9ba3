use log::debug;
use serialport::{available_ports, SerialPortInfo, SerialPortType};

use crate::error::Result;

/// A serial port as reported by the host at enumeration time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortDescriptor {
    /// Path or name used to open the port (`/dev/ttyUSB0`, `COM3`, ...)
    pub device: String,
    /// Bus metadata, e.g. `USB VID:PID=1A86:7523 SER=0001`
    pub hwid: String,
}

impl PortDescriptor {
    /// Create a descriptor from a device path and its hardware identifier.
    pub fn new(device: impl Into<String>, hwid: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            hwid: hwid.into(),
        }
    }
}

impl From<SerialPortInfo> for PortDescriptor {
    fn from(info: SerialPortInfo) -> Self {
        let hwid = hwid(&info.port_type);
        Self {
            device: info.port_name,
            hwid,
        }
    }
}

/// Renders the hardware identifier of a port in the familiar
/// `USB VID:PID=XXXX:XXXX SER=...` layout.
pub fn hwid(port_type: &SerialPortType) -> String {
    match port_type {
        SerialPortType::UsbPort(usb_info) => {
            let mut hwid = format!("USB VID:PID={:04X}:{:04X}", usb_info.vid, usb_info.pid);
            if let Some(serial) = usb_info.serial_number.as_deref().filter(|s| !s.is_empty()) {
                hwid.push_str(" SER=");
                hwid.push_str(serial);
            }
            hwid
        }
        SerialPortType::PciPort => "PCI".to_string(),
        SerialPortType::BluetoothPort => "BLUETOOTH".to_string(),
        SerialPortType::Unknown => "n/a".to_string(),
    }
}

/// Source of the port list the locator filters.
pub trait PortEnumerator {
    /// Returns the currently attached serial ports, in the order the
    /// platform reports them.
    fn ports(&self) -> Result<Vec<PortDescriptor>>;
}

/// Enumerates the serial ports of this host through `serialport`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemPorts;

impl PortEnumerator for SystemPorts {
    fn ports(&self) -> Result<Vec<PortDescriptor>> {
        let ports = available_ports()?;
        debug!("Platform reported {} serial ports", ports.len());
        Ok(ports.into_iter().map(PortDescriptor::from).collect())
    }
}

impl<T: PortEnumerator + ?Sized> PortEnumerator for &T {
    fn ports(&self) -> Result<Vec<PortDescriptor>> {
        (**self).ports()
    }
}
