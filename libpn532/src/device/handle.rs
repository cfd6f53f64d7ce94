// libpn532/src/device/handle.rs

use crate::card::{Access, Target, operations};
use crate::device::config::Pn532Config;
use crate::device::handshake::Handshake;
use crate::protocol::{Command, DepOutcome, DepRequest, Response, responses};
use crate::transport::Transport;
use crate::types::{BaudRate, BlockData, FirmwareVersion, Key, KeyType, SamMode, SamStatus};
use crate::{Error, Result};

/// Single-target passive detection.
const MAX_TARGETS: u8 = 1;

/// PN532 driver handle. Owns the bus transport; every operation takes
/// `&mut self`, so one exchange is in flight at a time.
pub struct Pn532 {
    transport: Box<dyn Transport + Send>,
    config: Pn532Config,
}

impl Pn532 {
    pub fn new(transport: Box<dyn Transport + Send>, config: Pn532Config) -> Self {
        Self { transport, config }
    }

    /// Driver with the default configuration.
    pub fn with_transport<T: Transport + Send + 'static>(transport: T) -> Self {
        Self::new(Box::new(transport), Pn532Config::default())
    }

    pub fn config(&self) -> &Pn532Config {
        &self.config
    }

    /// Run one command/ACK/response exchange. No retry: each call is a
    /// single attempt.
    pub fn execute(&mut self, cmd: &Command, expected_len: usize) -> Result<Response> {
        Handshake::new(&mut *self.transport, &self.config).execute(cmd, expected_len)
    }

    /// Write `cmd` and wait for its ACK without reading the response.
    pub(crate) fn send_command(&mut self, cmd: &Command) -> Result<()> {
        Handshake::new(&mut *self.transport, &self.config).send(cmd)
    }

    /// Read the response of a command that was ACKed earlier.
    pub(crate) fn read_response(&mut self, cmd: &Command) -> Result<Response> {
        Handshake::resume(&mut *self.transport, &self.config)
            .receive(cmd.opcode(), cmd.response_len())
    }

    /// Probe the firmware version. Advisory: any failure yields `None`
    /// and is logged.
    pub fn get_version(&mut self) -> Option<FirmwareVersion> {
        let cmd = Command::GetFirmwareVersion;
        let result = self
            .execute(&cmd, cmd.response_len())
            .and_then(|resp| responses::decode_firmware_version(&resp.data));

        match result {
            Ok(version) => {
                log::info!("found {} (support {:#04x})", version, version.support);
                Some(version)
            }
            Err(e) => {
                log::warn!("firmware version unavailable: {}", e);
                None
            }
        }
    }

    /// SAMConfiguration. `ConfigFailed` when the chip answers with a
    /// different response code; bus and framing errors propagate.
    pub fn configure_secure_access(
        &mut self,
        mode: SamMode,
        timeout: u8,
        use_irq: bool,
    ) -> Result<SamStatus> {
        let cmd = Command::SamConfiguration {
            mode,
            timeout,
            use_irq,
        };
        match self.execute(&cmd, cmd.response_len()) {
            Ok(_) => Ok(SamStatus::Configured),
            Err(e @ Error::UnexpectedOpcode { .. }) => {
                log::warn!("SAM configuration rejected: {}", e);
                Ok(SamStatus::ConfigFailed)
            }
            Err(e) => Err(e),
        }
    }

    /// Detect one passive target. `None` when no target (or more than
    /// one) is reported, or when the target section is malformed.
    pub fn list_passive_target(&mut self, baud_rate: BaudRate) -> Result<Option<Target>> {
        let cmd = Command::InListPassiveTarget {
            max_targets: MAX_TARGETS,
            baud_rate,
        };
        let resp = self.execute(&cmd, cmd.response_len())?;

        match responses::decode_in_list_passive_target(&resp.data, baud_rate) {
            Ok(Some(target)) => {
                log::info!("detected {} target {}", baud_rate, target.uid.to_hex());
                Ok(Some(target))
            }
            Ok(None) => {
                log::debug!("no single {} target in range", baud_rate);
                Ok(None)
            }
            Err(e) => {
                log::warn!("discarding malformed target list: {}", e);
                Ok(None)
            }
        }
    }

    /// Mifare authentication of `block` against `target`.
    pub fn authenticate(
        &mut self,
        block: u8,
        target: &Target,
        key: &Key,
        key_type: KeyType,
    ) -> Result<Access<()>> {
        operations::authenticate(self, block, target, key, key_type)
    }

    /// Read one 16-byte Mifare block.
    pub fn read_block(&mut self, block: u8) -> Result<Access<BlockData>> {
        operations::read_block(self, block)
    }

    /// Write one Mifare block. `data` must be exactly 16 bytes; anything
    /// else fails with `InvalidArgument` before the bus is touched.
    pub fn write_block(&mut self, block: u8, data: &[u8]) -> Result<Access<()>> {
        operations::write_block(self, block, data)
    }

    /// InJumpForDEP as one full exchange (active mode, 424 kbps).
    pub fn in_jump_for_dep(&mut self, request: &DepRequest) -> Result<DepOutcome> {
        let cmd = Command::InJumpForDep(request.clone());
        let resp = self.execute(&cmd, cmd.response_len())?;
        responses::decode_jump_for_dep(&resp.data)
    }
}

impl std::fmt::Debug for Pn532 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pn532").field("config", &self.config).finish()
    }
}
