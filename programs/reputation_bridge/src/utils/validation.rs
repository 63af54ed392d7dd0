use anchor_lang::prelude::*;

use crate::constants::MAX_SENDER_SIZE;
use crate::errors::BridgeError;
use crate::state::{AllowedSender, ChainConfig};

/// Deserialize an allow-list PDA if it has been created by this program
/// An address nobody initialized reads as "not allow-listed" rather than an error
pub fn load_optional<T: AccountDeserialize>(info: &AccountInfo) -> Result<Option<T>> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    let mut slice: &[u8] = &data;
    Ok(Some(T::try_deserialize(&mut slice)?))
}

pub fn validate_sender_bytes(sender: &[u8]) -> Result<()> {
    require!(!sender.is_empty(), BridgeError::EmptySender);
    require!(sender.len() <= MAX_SENDER_SIZE, BridgeError::SenderTooLong);
    Ok(())
}

/// Authorize the origin of an inbound message
/// Order: source chain, destination, sender. No state is touched.
pub fn validate_origin(
    source_chain: Option<&ChainConfig>,
    source_chain_id: u64,
    destination: &Pubkey,
    allowed_sender: Option<&AllowedSender>,
    sender: &[u8],
) -> Result<()> {
    let chain_ok = source_chain
        .map(|c| c.chain_id == source_chain_id && c.source_allowed)
        .unwrap_or(false);
    require!(chain_ok, BridgeError::UnauthorizedChain);

    require_keys_eq!(*destination, crate::ID, BridgeError::InvalidDestination);

    let sender_ok = allowed_sender
        .map(|s| s.allowed && s.chain_id == source_chain_id && s.sender.as_slice() == sender)
        .unwrap_or(false);
    require!(sender_ok, BridgeError::UnauthorizedSender);

    Ok(())
}

/// Outbound messages only go to chains allow-listed as destinations
pub fn validate_destination_chain(
    dest_chain: Option<&ChainConfig>,
    dest_chain_id: u64,
) -> Result<()> {
    let chain_ok = dest_chain
        .map(|c| c.chain_id == dest_chain_id && c.destination_allowed)
        .unwrap_or(false);
    require!(chain_ok, BridgeError::UnauthorizedChain);
    Ok(())
}
