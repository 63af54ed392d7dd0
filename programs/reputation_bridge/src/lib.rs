// Anchor macros emit cfgs the toolchain does not know about
#![allow(unexpected_cfgs)]
// Every instruction module exposes a `handler`
#![allow(ambiguous_glob_reexports)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("3Hfx1vwihgZ5nNAcqbrA884YSW8T3rjowiievhUZfYZg");

/// Reputation Bridge Program
///
/// Idempotent cross-chain credit applier: inbound messages from allow-listed
/// chains and senders credit reputation balances at most once per fingerprint,
/// bounded by per-message and per-day ceilings.
#[program]
pub mod reputation_bridge {
    use super::*;

    /// Create the bridge config; the caller becomes the admin authority
    pub fn initialize_bridge(
        ctx: Context<InitializeBridge>,
        local_chain_id: u64,
        max_amount_per_message: u64,
        daily_limit: u64,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, local_chain_id, max_amount_per_message, daily_limit)
    }

    /// Apply an inbound cross-chain credit (operator only)
    pub fn receive_credit(
        ctx: Context<ReceiveCredit>,
        source_chain_id: u64,
        sender: Vec<u8>,
        destination: Pubkey,
        nonce: u64,
        payload: Vec<u8>,
        fingerprint: [u8; 32],
        day: u64,
    ) -> Result<()> {
        instructions::receive_credit::handler(
            ctx,
            source_chain_id,
            sender,
            destination,
            nonce,
            payload,
            fingerprint,
            day,
        )
    }

    /// Debit the caller's balance and request a credit on another chain
    pub fn send_credit(
        ctx: Context<SendCredit>,
        dest_chain_id: u64,
        receiver: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::send_credit::handler(ctx, dest_chain_id, receiver, amount)
    }

    /// Read an account's reputation balance
    pub fn get_balance(ctx: Context<GetBalance>) -> Result<u64> {
        instructions::get_balance::handler(ctx)
    }

    /// Allow or disallow inbound messages from a chain (admin only)
    pub fn set_source_chain(
        ctx: Context<SetChainAllowlist>,
        chain_id: u64,
        allowed: bool,
    ) -> Result<()> {
        instructions::allowlist::set_source_chain(ctx, chain_id, allowed)
    }

    /// Allow or disallow outbound messages to a chain (admin only)
    pub fn set_destination_chain(
        ctx: Context<SetChainAllowlist>,
        chain_id: u64,
        allowed: bool,
    ) -> Result<()> {
        instructions::allowlist::set_destination_chain(ctx, chain_id, allowed)
    }

    /// Allow or disallow a sender on a source chain (admin only)
    pub fn set_allowed_sender(
        ctx: Context<SetAllowedSender>,
        chain_id: u64,
        sender: Vec<u8>,
        allowed: bool,
    ) -> Result<()> {
        instructions::allowlist::set_allowed_sender(ctx, chain_id, sender, allowed)
    }

    /// Update the per-message ceiling (admin only)
    pub fn set_max_amount(ctx: Context<UpdateConfig>, amount: u64) -> Result<()> {
        instructions::admin::set_max_amount(ctx, amount)
    }

    /// Update the per-account daily ceiling (admin only)
    pub fn set_daily_limit(ctx: Context<UpdateConfig>, limit: u64) -> Result<()> {
        instructions::admin::set_daily_limit(ctx, limit)
    }

    /// Pause (operator) or unpause (admin) balance mutations
    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        instructions::admin::set_paused(ctx, paused)
    }

    /// Hand the admin role to another account
    pub fn transfer_authority(ctx: Context<UpdateConfig>, new_authority: Pubkey) -> Result<()> {
        instructions::admin::transfer_authority(ctx, new_authority)
    }

    /// Grant the operator role (admin only)
    pub fn add_operator(ctx: Context<ManageOperators>, operator: Pubkey) -> Result<()> {
        instructions::operators::add_operator(ctx, operator)
    }

    /// Revoke the operator role (admin only)
    pub fn remove_operator(ctx: Context<ManageOperators>, operator: Pubkey) -> Result<()> {
        instructions::operators::remove_operator(ctx, operator)
    }
}
