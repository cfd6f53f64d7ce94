// libpn532/src/device/mod.rs

//! Driver handle, its configuration and the handshake engine.

pub mod builder;
pub mod config;
pub mod handle;
pub mod handshake;
pub mod shared;

pub use builder::Pn532Builder;
pub use config::Pn532Config;
pub use handle::Pn532;
pub use handshake::{Handshake, HandshakeState};
pub use shared::SharedPn532;
