use anchor_lang::prelude::*;

use crate::constants::CREDIT_PAYLOAD_SIZE;
use crate::errors::BridgeError;

/// Application payload carried by a cross-chain credit message
/// Layout: recipient (32 bytes) || amount (u64 LE)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreditPayload {
    pub recipient: Pubkey,
    pub amount: u64,
}

impl CreditPayload {
    pub fn decode(data: &[u8]) -> Result<Self> {
        require!(
            data.len() == CREDIT_PAYLOAD_SIZE,
            BridgeError::InvalidPayload
        );

        let (recipient, amount) = data.split_at(32);
        let recipient: [u8; 32] = recipient
            .try_into()
            .map_err(|_| error!(BridgeError::InvalidPayload))?;
        let amount: [u8; 8] = amount
            .try_into()
            .map_err(|_| error!(BridgeError::InvalidPayload))?;

        Ok(Self {
            recipient: Pubkey::new_from_array(recipient),
            amount: u64::from_le_bytes(amount),
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(CREDIT_PAYLOAD_SIZE);
        out.extend_from_slice(self.recipient.as_ref());
        out.extend_from_slice(&self.amount.to_le_bytes());
        out
    }
}
