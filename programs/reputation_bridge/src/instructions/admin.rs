use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::BridgeError;
use crate::events::{AuthorityTransferred, DailyLimitUpdated, MaxAmountUpdated, PauseStatusChanged};
use crate::state::BridgeConfig;

/// Operators may pause; only the admin may unpause
pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts.bridge.set_paused(&caller, paused)?;

    emit!(PauseStatusChanged { paused, by: caller });

    msg!("Bridge {} by {}", if paused { "paused" } else { "unpaused" }, caller);
    Ok(())
}

pub fn set_max_amount(ctx: Context<UpdateConfig>, amount: u64) -> Result<()> {
    let old_amount = ctx.accounts.bridge.set_max_amount(amount)?;

    emit!(MaxAmountUpdated {
        old_amount,
        new_amount: amount,
    });

    msg!("Per-message ceiling updated from {} to {}", old_amount, amount);
    Ok(())
}

pub fn set_daily_limit(ctx: Context<UpdateConfig>, limit: u64) -> Result<()> {
    let old_limit = ctx.accounts.bridge.set_daily_limit(limit)?;

    emit!(DailyLimitUpdated {
        old_limit,
        new_limit: limit,
    });

    msg!("Daily ceiling updated from {} to {}", old_limit, limit);
    Ok(())
}

pub fn transfer_authority(ctx: Context<UpdateConfig>, new_authority: Pubkey) -> Result<()> {
    let old_authority = ctx.accounts.bridge.transfer_authority(new_authority)?;

    emit!(AuthorityTransferred {
        old_authority,
        new_authority,
    });

    msg!("Authority transferred from {} to {}", old_authority, new_authority);
    Ok(())
}

#[derive(Accounts)]
pub struct SetPaused<'info> {
    #[account(
        mut,
        seeds = [BRIDGE_SEED],
        bump = bridge.bump
    )]
    pub bridge: Account<'info, BridgeConfig>,

    pub caller: Signer<'info>,
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [BRIDGE_SEED],
        bump = bridge.bump,
        has_one = authority @ BridgeError::Unauthorized
    )]
    pub bridge: Account<'info, BridgeConfig>,

    pub authority: Signer<'info>,
}
