// libpn532/src/transport/i2c.rs

//! Linux I2C transport (`/dev/i2c-*`).

use std::io;
use std::path::Path;

use i2cdev::core::I2CDevice;
use i2cdev::linux::{LinuxI2CDevice, LinuxI2CError};

use crate::transport::traits::Transport;

/// I2C transport backed by the kernel i2c-dev interface.
///
/// In I2C mode every read from the chip starts with a ready/status byte
/// ahead of the frame; `read` fetches one extra byte and drops it so the
/// driver sees the bare frame.
pub struct I2cTransport {
    dev: LinuxI2CDevice,
    address: u8,
}

fn to_io(e: LinuxI2CError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e.to_string())
}

impl I2cTransport {
    /// Open the bus device at `path` (e.g. `/dev/i2c-1`) for `address`.
    pub fn open<P: AsRef<Path>>(path: P, address: u8) -> io::Result<Self> {
        let dev = LinuxI2CDevice::new(path, u16::from(address)).map_err(to_io)?;
        log::info!("opened i2c transport at address {:#04x}", address);
        Ok(Self { dev, address })
    }

    fn select(&mut self, address: u8) -> io::Result<()> {
        if address != self.address {
            self.dev
                .set_slave_address(u16::from(address))
                .map_err(to_io)?;
            self.address = address;
        }
        Ok(())
    }
}

impl Transport for I2cTransport {
    fn write(&mut self, address: u8, data: &[u8]) -> io::Result<()> {
        self.select(address)?;
        self.dev.write(data).map_err(to_io)
    }

    fn read(&mut self, address: u8, count: usize) -> io::Result<Vec<u8>> {
        self.select(address)?;
        let mut buf = vec![0u8; count + 1];
        self.dev.read(&mut buf).map_err(to_io)?;
        let ready = buf.remove(0);
        log::trace!("i2c ready byte {:#04x}", ready);
        Ok(buf)
    }
}
