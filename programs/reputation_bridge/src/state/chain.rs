use anchor_lang::prelude::*;

use crate::errors::BridgeError;

/// Per-chain allow-list entry
/// A missing account means the chain is allowed in neither direction
#[account]
pub struct ChainConfig {
    /// Remote chain identifier
    pub chain_id: u64,

    /// Inbound messages from this chain are accepted
    pub source_allowed: bool,

    /// Outbound messages to this chain are accepted
    pub destination_allowed: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl ChainConfig {
    pub const SIZE: usize = 8   // chain_id
        + 1                     // source_allowed
        + 1                     // destination_allowed
        + 1;                    // bump

    /// Bind a freshly created entry to its chain; existing entries keep their flags
    pub fn register(&mut self, chain_id: u64, local_chain_id: u64, bump: u8) -> Result<()> {
        require!(chain_id > 0, BridgeError::InvalidChainId);
        require!(chain_id != local_chain_id, BridgeError::InvalidChainId);

        if self.chain_id == 0 {
            self.chain_id = chain_id;
            self.bump = bump;
        }
        Ok(())
    }
}
