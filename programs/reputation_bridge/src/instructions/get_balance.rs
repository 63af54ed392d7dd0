use anchor_lang::prelude::*;

use crate::constants::BALANCE_SEED;
use crate::state::ReputationBalance;
use crate::utils::load_optional;

/// An account that was never credited has no balance PDA and reads as zero
pub fn balance_of(balance: &AccountInfo) -> Result<u64> {
    Ok(load_optional::<ReputationBalance>(balance)?
        .map(|entry| entry.balance)
        .unwrap_or(0))
}

pub fn handler(ctx: Context<GetBalance>) -> Result<u64> {
    balance_of(&ctx.accounts.balance)
}

#[derive(Accounts)]
pub struct GetBalance<'info> {
    /// CHECK: balance PDA of `owner`, possibly never created.
    /// Address is pinned by seeds; contents are read through `load_optional`.
    #[account(
        seeds = [
            BALANCE_SEED,
            owner.key().as_ref()
        ],
        bump
    )]
    pub balance: UncheckedAccount<'info>,

    /// CHECK: any account's balance may be read
    pub owner: UncheckedAccount<'info>,
}
