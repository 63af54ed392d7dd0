use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::BridgeError;
use crate::events::BridgeInitialized;
use crate::state::BridgeConfig;

pub fn handler(
    ctx: Context<InitializeBridge>,
    local_chain_id: u64,
    max_amount_per_message: u64,
    daily_limit: u64,
) -> Result<()> {
    require!(local_chain_id > 0, BridgeError::InvalidChainId);
    require!(
        max_amount_per_message > 0 && daily_limit > 0,
        BridgeError::InvalidLimit
    );

    let bridge = &mut ctx.accounts.bridge;
    bridge.authority = ctx.accounts.authority.key();
    bridge.operators = Vec::new();
    bridge.local_chain_id = local_chain_id;
    bridge.max_amount_per_message = max_amount_per_message;
    bridge.daily_limit = daily_limit;
    bridge.paused = false;
    bridge.outbound_nonce = 0;
    bridge.bump = ctx.bumps.bridge;

    emit!(BridgeInitialized {
        authority: bridge.authority,
        local_chain_id,
        max_amount_per_message,
        daily_limit,
    });

    msg!(
        "Bridge initialized: chain={}, max_amount={}, daily_limit={}",
        local_chain_id,
        max_amount_per_message,
        daily_limit
    );
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeBridge<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + BridgeConfig::SIZE,
        seeds = [BRIDGE_SEED],
        bump
    )]
    pub bridge: Account<'info, BridgeConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
