//! Detect one ISO14443A card and dump the first sector.
//!
//! Usage:
//!   PN532_I2C_DEV=/dev/i2c-1 cargo run -p libpn532 --example read_card --features i2c
//!
//! Set `RUST_LOG=libpn532=debug` to see the frames on the bus.

use anyhow::{Context, bail};
use libpn532::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::var("PN532_I2C_DEV").unwrap_or_else(|_| "/dev/i2c-1".to_string());
    let transport = I2cTransport::open(&path, libpn532::constants::PN532_I2C_ADDRESS)
        .with_context(|| format!("opening {}", path))?;
    let mut dev = Pn532Builder::new().with_transport(transport).build()?;

    let Some(version) = dev.get_version() else {
        bail!("no PN532 answered on {}", path);
    };
    println!("{} (support {:#04x})", version, version.support);

    if dev.configure_secure_access(SamMode::Normal, 0x14, false)? != SamStatus::Configured {
        bail!("SAM configuration failed");
    }

    println!("Waiting for a card...");
    let target = loop {
        if let Some(t) = dev.list_passive_target(BaudRate::Iso14443A106)? {
            break t;
        }
        std::thread::sleep(ms(500));
    };
    println!("UID {} (SAK {:02X?})", target.uid.to_hex(), target.sel_res);

    let mut session = CardSession::new(target, Key::DEFAULT, KeyType::A);
    for block in 0..4u8 {
        match session.read_block(&mut dev, block)? {
            Access::Granted(data) => {
                println!("{:2}: {}  {}", block, data.to_hex(), data.to_ascii_safe())
            }
            Access::Denied(reason) => println!("{:2}: denied ({})", block, reason),
        }
    }
    Ok(())
}
