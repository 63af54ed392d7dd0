use anchor_lang::prelude::*;

use crate::constants::BRIDGE_SEED;
use crate::errors::BridgeError;
use crate::events::{OperatorAdded, OperatorRemoved};
use crate::state::BridgeConfig;

/// Manage the operator role on the bridge config
#[derive(Accounts)]
pub struct ManageOperators<'info> {
    #[account(
        mut,
        seeds = [BRIDGE_SEED],
        bump = bridge.bump,
        has_one = authority @ BridgeError::Unauthorized
    )]
    pub bridge: Account<'info, BridgeConfig>,

    pub authority: Signer<'info>,
}

pub fn add_operator(ctx: Context<ManageOperators>, operator: Pubkey) -> Result<()> {
    let bridge = &mut ctx.accounts.bridge;
    bridge.add_operator(operator)?;

    emit!(OperatorAdded { operator });

    msg!(
        "Added operator {} (total operators: {})",
        operator,
        bridge.operators.len()
    );
    Ok(())
}

pub fn remove_operator(ctx: Context<ManageOperators>, operator: Pubkey) -> Result<()> {
    let bridge = &mut ctx.accounts.bridge;
    bridge.remove_operator(&operator)?;

    emit!(OperatorRemoved { operator });

    msg!(
        "Removed operator {} (remaining operators: {})",
        operator,
        bridge.operators.len()
    );
    Ok(())
}
