use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::BridgeError;
use crate::events::CreditSendRequested;
use crate::state::{BridgeConfig, ChainConfig, ReputationBalance};
use crate::utils::{load_optional, validate_destination_chain, CreditPayload};

/// Outbound request produced by a successful send
#[derive(Debug, PartialEq, Eq)]
pub struct OutboundCredit {
    pub nonce: u64,
    pub payload: Vec<u8>,
    pub remaining: u64,
}

/// paused -> destination chain -> amount -> balance -> nonce
///
/// Every check runs before the first write, so a failed send leaves the
/// balance and the nonce counter untouched.
pub fn apply_send(
    bridge: &mut BridgeConfig,
    dest_chain: Option<&ChainConfig>,
    dest_chain_id: u64,
    balance: &mut ReputationBalance,
    receiver: Pubkey,
    amount: u64,
) -> Result<OutboundCredit> {
    bridge.require_not_paused()?;
    validate_destination_chain(dest_chain, dest_chain_id)?;
    bridge.check_amount(amount)?;
    require!(balance.balance >= amount, BridgeError::InsufficientBalance);
    require!(
        bridge.outbound_nonce < u64::MAX,
        BridgeError::MathOverflow
    );

    let remaining = balance.debit(amount)?;
    let nonce = bridge.next_outbound_nonce()?;

    Ok(OutboundCredit {
        nonce,
        payload: CreditPayload {
            recipient: receiver,
            amount,
        }
        .encode(),
        remaining,
    })
}

/// Debit the owner's balance and request delivery to a remote chain
pub fn handler(
    ctx: Context<SendCredit>,
    dest_chain_id: u64,
    receiver: Pubkey,
    amount: u64,
) -> Result<()> {
    let accounts = ctx.accounts;
    let dest_chain = load_optional::<ChainConfig>(&accounts.dest_chain)?;

    let outbound = apply_send(
        &mut accounts.bridge,
        dest_chain.as_ref(),
        dest_chain_id,
        &mut accounts.owner_balance,
        receiver,
        amount,
    )?;

    // Emit event for off-chain relaying
    emit!(CreditSendRequested {
        nonce: outbound.nonce,
        source_chain_id: accounts.bridge.local_chain_id,
        dest_chain_id,
        owner: accounts.owner.key(),
        receiver,
        amount,
        payload: outbound.payload,
    });

    msg!(
        "Credit send requested: nonce={}, dest_chain={}, amount={}, remaining={}",
        outbound.nonce,
        dest_chain_id,
        amount,
        outbound.remaining
    );
    Ok(())
}

#[derive(Accounts)]
#[instruction(dest_chain_id: u64)]
pub struct SendCredit<'info> {
    #[account(
        mut,
        seeds = [BRIDGE_SEED],
        bump = bridge.bump
    )]
    pub bridge: Account<'info, BridgeConfig>,

    /// CHECK: allow-list entry for the destination chain, possibly never created.
    /// Address is pinned by seeds; contents are read through `load_optional`.
    #[account(
        seeds = [
            CHAIN_SEED,
            dest_chain_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub dest_chain: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [
            BALANCE_SEED,
            owner.key().as_ref()
        ],
        bump = owner_balance.bump,
        has_one = owner
    )]
    pub owner_balance: Account<'info, ReputationBalance>,

    pub owner: Signer<'info>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error_code;

    const DEST: u64 = 42;

    struct Outbox {
        bridge: BridgeConfig,
        chain: ChainConfig,
        balance: ReputationBalance,
        receiver: Pubkey,
    }

    impl Outbox {
        fn new() -> Self {
            let owner = Pubkey::new_unique();
            Self {
                bridge: BridgeConfig {
                    authority: Pubkey::new_unique(),
                    operators: Vec::new(),
                    local_chain_id: 1,
                    max_amount_per_message: 100,
                    daily_limit: 100,
                    paused: false,
                    outbound_nonce: 0,
                    bump: 0,
                },
                chain: ChainConfig {
                    chain_id: DEST,
                    source_allowed: false,
                    destination_allowed: true,
                    bump: 0,
                },
                balance: ReputationBalance {
                    owner,
                    balance: 80,
                    bump: 0,
                },
                receiver: Pubkey::new_unique(),
            }
        }

        fn send(&mut self, amount: u64) -> Result<OutboundCredit> {
            apply_send(
                &mut self.bridge,
                Some(&self.chain),
                DEST,
                &mut self.balance,
                self.receiver,
                amount,
            )
        }

        fn assert_untouched(&self) {
            assert_eq!(self.balance.balance, 80);
            assert_eq!(self.bridge.outbound_nonce, 0);
        }
    }

    #[test]
    fn debits_and_assigns_sequential_nonces() {
        let mut outbox = Outbox::new();

        let first = outbox.send(30).unwrap();
        assert_eq!(first.nonce, 0);
        assert_eq!(first.remaining, 50);
        assert_eq!(
            first.payload,
            CreditPayload {
                recipient: outbox.receiver,
                amount: 30,
            }
            .encode()
        );

        let second = outbox.send(50).unwrap();
        assert_eq!(second.nonce, 1);
        assert_eq!(second.remaining, 0);
        assert_eq!(outbox.bridge.outbound_nonce, 2);
    }

    #[test]
    fn pause_checked_first() {
        let mut outbox = Outbox::new();
        outbox.bridge.paused = true;
        outbox.chain.destination_allowed = false;

        let err = outbox.send(0).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::BridgePaused));
        outbox.assert_untouched();
    }

    #[test]
    fn destination_checked_before_amount() {
        let mut outbox = Outbox::new();
        outbox.chain.destination_allowed = false;

        let err = outbox.send(0).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::UnauthorizedChain));
        outbox.assert_untouched();

        let mut outbox = Outbox::new();
        let err = apply_send(
            &mut outbox.bridge,
            None,
            DEST,
            &mut outbox.balance,
            outbox.receiver,
            10,
        )
        .unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::UnauthorizedChain));
        outbox.assert_untouched();
    }

    #[test]
    fn amount_checked_before_balance() {
        let mut outbox = Outbox::new();

        let err = outbox.send(0).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::ZeroAmount));

        // above both the ceiling and the balance
        let err = outbox.send(101).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::ExceedsMaxAmount));
        outbox.assert_untouched();
    }

    #[test]
    fn insufficient_balance_leaves_nonce_alone() {
        let mut outbox = Outbox::new();

        let err = outbox.send(81).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::InsufficientBalance));
        outbox.assert_untouched();
    }

    #[test]
    fn exhausted_nonce_leaves_balance_alone() {
        let mut outbox = Outbox::new();
        outbox.bridge.outbound_nonce = u64::MAX;

        let err = outbox.send(10).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::MathOverflow));
        assert_eq!(outbox.balance.balance, 80);
        assert_eq!(outbox.bridge.outbound_nonce, u64::MAX);
    }
}
