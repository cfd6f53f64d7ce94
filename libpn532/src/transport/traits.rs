// libpn532/src/transport/traits.rs

use std::io;

/// Bus transport: the two-wire bus the chip hangs off. The driver only
/// needs addressed writes and fixed-size reads; both may fail and are
/// never retried by the driver.
pub trait Transport {
    /// Write raw bytes to the device at `address`.
    fn write(&mut self, address: u8, data: &[u8]) -> io::Result<()>;

    /// Read exactly `count` bytes from the device at `address`.
    fn read(&mut self, address: u8, count: usize) -> io::Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, address: u8, data: &[u8]) -> io::Result<()> {
        (**self).write(address, data)
    }

    fn read(&mut self, address: u8, count: usize) -> io::Result<Vec<u8>> {
        (**self).read(address, count)
    }
}
