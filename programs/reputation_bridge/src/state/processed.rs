use anchor_lang::prelude::*;

use crate::errors::BridgeError;

/// Deduplication marker for one inbound message, keyed by its fingerprint
/// Never closed: once processed, a fingerprint stays processed
#[account]
pub struct ProcessedMessage {
    pub fingerprint: [u8; 32],
    pub source_chain_id: u64,
    pub nonce: u64,
    pub recipient: Pubkey,
    pub amount: u64,
    pub processed_at: i64,
    pub processed: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl ProcessedMessage {
    pub const SIZE: usize = 32  // fingerprint
        + 8                     // source_chain_id
        + 8                     // nonce
        + 32                    // recipient
        + 8                     // amount
        + 8                     // processed_at
        + 1                     // processed
        + 1;                    // bump

    /// Transition Unseen -> Processed
    pub fn mark(
        &mut self,
        fingerprint: [u8; 32],
        source_chain_id: u64,
        nonce: u64,
        recipient: Pubkey,
        amount: u64,
        processed_at: i64,
    ) -> Result<()> {
        require!(!self.processed, BridgeError::DuplicateMessage);

        self.fingerprint = fingerprint;
        self.source_chain_id = source_chain_id;
        self.nonce = nonce;
        self.recipient = recipient;
        self.amount = amount;
        self.processed_at = processed_at;
        self.processed = true;
        Ok(())
    }
}
