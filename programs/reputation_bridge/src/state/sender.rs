use anchor_lang::prelude::*;

use crate::constants::MAX_SENDER_SIZE;

/// Allow-list entry keyed by (chain id, sender)
#[account]
pub struct AllowedSender {
    /// Chain the sender lives on
    pub chain_id: u64,

    /// Opaque sender address on that chain
    pub sender: Vec<u8>,

    pub allowed: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl AllowedSender {
    pub const SIZE: usize = 8       // chain_id
        + 4 + MAX_SENDER_SIZE       // sender vec
        + 1                         // allowed
        + 1;                        // bump
}
