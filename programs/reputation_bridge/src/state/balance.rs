use anchor_lang::prelude::*;

use crate::errors::BridgeError;

/// Reputation balance held by one account
#[account]
pub struct ReputationBalance {
    pub owner: Pubkey,
    pub balance: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl ReputationBalance {
    pub const SIZE: usize = 32  // owner
        + 8                     // balance
        + 1;                    // bump

    pub fn credit(&mut self, amount: u64) -> Result<u64> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(BridgeError::MathOverflow)?;
        Ok(self.balance)
    }

    pub fn debit(&mut self, amount: u64) -> Result<u64> {
        require!(self.balance >= amount, BridgeError::InsufficientBalance);
        self.balance -= amount;
        Ok(self.balance)
    }
}
