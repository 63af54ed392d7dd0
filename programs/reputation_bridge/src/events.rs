use anchor_lang::prelude::*;

/// Event emitted when the bridge config is created
#[event]
pub struct BridgeInitialized {
    pub authority: Pubkey,
    pub local_chain_id: u64,
    pub max_amount_per_message: u64,
    pub daily_limit: u64,
}

/// Event emitted when an inbound message credits a balance
#[event]
pub struct CreditApplied {
    pub fingerprint: [u8; 32],
    pub source_chain_id: u64,
    pub sender: Vec<u8>,
    pub recipient: Pubkey,
    pub amount: u64,
    pub nonce: u64,
    pub day: u64,
}

/// Event emitted when a balance is debited for an outbound message
#[event]
pub struct CreditSendRequested {
    pub nonce: u64,
    pub source_chain_id: u64,
    pub dest_chain_id: u64,
    pub owner: Pubkey,
    pub receiver: Pubkey,
    pub amount: u64,
    pub payload: Vec<u8>,
}

#[event]
pub struct ChainAllowlistUpdated {
    pub chain_id: u64,
    pub source_allowed: bool,
    pub destination_allowed: bool,
}

#[event]
pub struct SenderAllowlistUpdated {
    pub chain_id: u64,
    pub sender: Vec<u8>,
    pub allowed: bool,
}

#[event]
pub struct MaxAmountUpdated {
    pub old_amount: u64,
    pub new_amount: u64,
}

#[event]
pub struct DailyLimitUpdated {
    pub old_limit: u64,
    pub new_limit: u64,
}

/// Event emitted when the pause flag changes
#[event]
pub struct PauseStatusChanged {
    pub paused: bool,
    pub by: Pubkey,
}

#[event]
pub struct OperatorAdded {
    pub operator: Pubkey,
}

#[event]
pub struct OperatorRemoved {
    pub operator: Pubkey,
}

#[event]
pub struct AuthorityTransferred {
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
}
