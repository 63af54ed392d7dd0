use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::constants::MAX_SENDER_SIZE;
use crate::errors::BridgeError;

/// Fingerprint of an inbound message, the deduplication key
/// keccak256(source_chain_id LE || len-prefixed sender || nonce LE || len-prefixed payload)
pub fn message_fingerprint(
    source_chain_id: u64,
    sender: &[u8],
    nonce: u64,
    payload: &[u8],
) -> Result<[u8; 32]> {
    require!(!sender.is_empty(), BridgeError::EmptySender);
    require!(sender.len() <= MAX_SENDER_SIZE, BridgeError::SenderTooLong);

    let mut encoded = Vec::with_capacity(8 + 4 + sender.len() + 8 + 4 + payload.len());
    encoded.extend_from_slice(&source_chain_id.to_le_bytes());
    encode_length_prefixed(&mut encoded, sender);
    encoded.extend_from_slice(&nonce.to_le_bytes());
    encode_length_prefixed(&mut encoded, payload);

    Ok(keccak::hash(&encoded).to_bytes())
}

/// Encode data with length prefix (u32 length + data bytes)
fn encode_length_prefixed(buffer: &mut Vec<u8>, data: &[u8]) {
    buffer.extend_from_slice(&(data.len() as u32).to_le_bytes());
    buffer.extend_from_slice(data);
}

/// Recompute the fingerprint and compare it with the one used to derive the marker PDA
pub fn verify_fingerprint(
    expected: &[u8; 32],
    source_chain_id: u64,
    sender: &[u8],
    nonce: u64,
    payload: &[u8],
) -> Result<()> {
    let calculated = message_fingerprint(source_chain_id, sender, nonce, payload)?;
    require!(
        calculated == *expected,
        BridgeError::FingerprintMismatch
    );
    Ok(())
}
