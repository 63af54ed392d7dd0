use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::BridgeError;
use crate::events::{ChainAllowlistUpdated, SenderAllowlistUpdated};
use crate::state::{AllowedSender, BridgeConfig, ChainConfig};
use crate::utils::validate_sender_bytes;

/// Create or update the allow-list entry for a remote chain
#[derive(Accounts)]
#[instruction(chain_id: u64)]
pub struct SetChainAllowlist<'info> {
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + ChainConfig::SIZE,
        seeds = [
            CHAIN_SEED,
            chain_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub chain_config: Account<'info, ChainConfig>,

    #[account(
        seeds = [BRIDGE_SEED],
        bump = bridge.bump,
        has_one = authority @ BridgeError::Unauthorized
    )]
    pub bridge: Account<'info, BridgeConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> SetChainAllowlist<'info> {
    fn prepare(&mut self, chain_id: u64, bump: u8) -> Result<()> {
        let local_chain_id = self.bridge.local_chain_id;
        self.chain_config.register(chain_id, local_chain_id, bump)
    }
}

pub fn set_source_chain(
    ctx: Context<SetChainAllowlist>,
    chain_id: u64,
    allowed: bool,
) -> Result<()> {
    let bump = ctx.bumps.chain_config;
    let accounts = ctx.accounts;
    accounts.prepare(chain_id, bump)?;
    accounts.chain_config.source_allowed = allowed;
    announce_chain(&accounts.chain_config);
    Ok(())
}

pub fn set_destination_chain(
    ctx: Context<SetChainAllowlist>,
    chain_id: u64,
    allowed: bool,
) -> Result<()> {
    let bump = ctx.bumps.chain_config;
    let accounts = ctx.accounts;
    accounts.prepare(chain_id, bump)?;
    accounts.chain_config.destination_allowed = allowed;
    announce_chain(&accounts.chain_config);
    Ok(())
}

fn announce_chain(chain: &ChainConfig) {
    emit!(ChainAllowlistUpdated {
        chain_id: chain.chain_id,
        source_allowed: chain.source_allowed,
        destination_allowed: chain.destination_allowed,
    });

    msg!(
        "Chain {} allow-list: source={}, destination={}",
        chain.chain_id,
        chain.source_allowed,
        chain.destination_allowed
    );
}

/// Create or update the allow-list entry for a sender on a remote chain
#[derive(Accounts)]
#[instruction(chain_id: u64, sender: Vec<u8>)]
pub struct SetAllowedSender<'info> {
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + AllowedSender::SIZE,
        seeds = [
            SENDER_SEED,
            chain_id.to_le_bytes().as_ref(),
            sender.as_ref()
        ],
        bump
    )]
    pub allowed_sender: Account<'info, AllowedSender>,

    #[account(
        seeds = [BRIDGE_SEED],
        bump = bridge.bump,
        has_one = authority @ BridgeError::Unauthorized
    )]
    pub bridge: Account<'info, BridgeConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn set_allowed_sender(
    ctx: Context<SetAllowedSender>,
    chain_id: u64,
    sender: Vec<u8>,
    allowed: bool,
) -> Result<()> {
    require!(chain_id > 0, BridgeError::InvalidChainId);
    validate_sender_bytes(&sender)?;

    let entry = &mut ctx.accounts.allowed_sender;
    if entry.sender.is_empty() {
        entry.chain_id = chain_id;
        entry.sender = sender.clone();
        entry.bump = ctx.bumps.allowed_sender;
    }
    entry.allowed = allowed;

    emit!(SenderAllowlistUpdated {
        chain_id,
        sender: sender.clone(),
        allowed,
    });

    msg!(
        "Sender {:?} on chain {} allowed={}",
        sender,
        chain_id,
        allowed
    );
    Ok(())
}
