// libpn532/src/card/session.rs

use crate::card::{Access, Target, operations};
use crate::device::Pn532;
use crate::types::{BlockData, Key, KeyType};
use crate::Result;

/// Mifare Classic 1K layout.
pub const DEFAULT_BLOCKS_PER_SECTOR: u8 = 4;

/// Block-level access to one detected card with one key.
///
/// Tracks which sector was last authenticated and re-authenticates before
/// touching a block in any other sector. A denial or error forgets the
/// cached sector, since the card drops its crypto state on failure.
#[derive(Debug, Clone)]
pub struct CardSession {
    target: Target,
    key: Key,
    key_type: KeyType,
    blocks_per_sector: u8,
    authenticated_sector: Option<u8>,
}

impl CardSession {
    pub fn new(target: Target, key: Key, key_type: KeyType) -> Self {
        Self {
            target,
            key,
            key_type,
            blocks_per_sector: DEFAULT_BLOCKS_PER_SECTOR,
            authenticated_sector: None,
        }
    }

    pub fn with_blocks_per_sector(mut self, blocks: u8) -> Self {
        self.blocks_per_sector = blocks.max(1);
        self
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn authenticated_sector(&self) -> Option<u8> {
        self.authenticated_sector
    }

    pub fn invalidate(&mut self) {
        self.authenticated_sector = None;
    }

    fn sector_of(&self, block: u8) -> u8 {
        block / self.blocks_per_sector
    }

    fn ensure_authenticated(&mut self, dev: &mut Pn532, block: u8) -> Result<Access<()>> {
        let sector = self.sector_of(block);
        if self.authenticated_sector == Some(sector) {
            return Ok(Access::Granted(()));
        }
        self.authenticated_sector = None;

        let access = operations::authenticate(dev, block, &self.target, &self.key, self.key_type)?;
        if access.is_granted() {
            log::trace!("sector {} authenticated", sector);
            self.authenticated_sector = Some(sector);
        }
        Ok(access)
    }

    fn track<T>(&mut self, result: Result<Access<T>>) -> Result<Access<T>> {
        if !matches!(result, Ok(Access::Granted(_))) {
            self.invalidate();
        }
        result
    }

    pub fn read_block(&mut self, dev: &mut Pn532, block: u8) -> Result<Access<BlockData>> {
        if let Access::Denied(d) = self.ensure_authenticated(dev, block)? {
            return Ok(Access::Denied(d));
        }
        let result = operations::read_block(dev, block);
        self.track(result)
    }

    pub fn write_block(&mut self, dev: &mut Pn532, block: u8, data: &[u8]) -> Result<Access<()>> {
        // Reject bad input before authenticating.
        let data = BlockData::try_from(data)?;
        if let Access::Denied(d) = self.ensure_authenticated(dev, block)? {
            return Ok(Access::Denied(d));
        }
        let result = operations::write_block(dev, block, data.as_bytes());
        self.track(result)
    }
}
