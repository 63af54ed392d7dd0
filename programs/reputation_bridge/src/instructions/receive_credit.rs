use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::BridgeError;
use crate::events::CreditApplied;
use crate::state::{
    day_bucket, AllowedSender, BridgeConfig, ChainConfig, DailyCredit, ProcessedMessage,
    ReputationBalance,
};
use crate::utils::{
    load_optional, validate_origin, validate_sender_bytes, verify_fingerprint, CreditPayload,
};

/// Inbound message as delivered by the relayer
pub struct InboundMessage<'a> {
    pub source_chain_id: u64,
    pub sender: &'a [u8],
    pub destination: Pubkey,
    pub nonce: u64,
    pub payload: &'a [u8],
    pub fingerprint: [u8; 32],
}

/// Accounts mutated by a successful credit
pub struct CreditLedger<'a> {
    pub marker: &'a mut ProcessedMessage,
    pub daily: &'a mut DailyCredit,
    pub balance: &'a mut ReputationBalance,
}

#[derive(Debug, PartialEq, Eq)]
pub struct AppliedCredit {
    pub recipient: Pubkey,
    pub amount: u64,
    pub daily_total: u64,
    pub balance: u64,
}

/// validate -> dedupe -> rate-limit -> mutate
///
/// Every check runs before the first write, so an error leaves the ledger untouched.
pub fn apply_credit(
    bridge: &BridgeConfig,
    source_chain: Option<&ChainConfig>,
    allowed_sender: Option<&AllowedSender>,
    message: &InboundMessage,
    recipient: &Pubkey,
    day: u64,
    now: i64,
    ledger: CreditLedger,
) -> Result<AppliedCredit> {
    validate_sender_bytes(message.sender)?;
    validate_origin(
        source_chain,
        message.source_chain_id,
        &message.destination,
        allowed_sender,
        message.sender,
    )?;
    verify_fingerprint(
        &message.fingerprint,
        message.source_chain_id,
        message.sender,
        message.nonce,
        message.payload,
    )?;

    let credit = CreditPayload::decode(message.payload)?;
    require_keys_eq!(credit.recipient, *recipient, BridgeError::RecipientMismatch);
    bridge.check_amount(credit.amount)?;
    require_eq!(day, day_bucket(now), BridgeError::InvalidDayBucket);

    require!(!ledger.marker.processed, BridgeError::DuplicateMessage);
    ledger.daily.projected(credit.amount, bridge.daily_limit)?;
    ledger
        .balance
        .balance
        .checked_add(credit.amount)
        .ok_or(BridgeError::MathOverflow)?;

    ledger.marker.mark(
        message.fingerprint,
        message.source_chain_id,
        message.nonce,
        credit.recipient,
        credit.amount,
        now,
    )?;
    let daily_total = ledger.daily.record(credit.amount, bridge.daily_limit)?;
    let balance = ledger.balance.credit(credit.amount)?;

    Ok(AppliedCredit {
        recipient: credit.recipient,
        amount: credit.amount,
        daily_total,
        balance,
    })
}

/// Apply an inbound cross-chain credit
pub fn handler(
    ctx: Context<ReceiveCredit>,
    source_chain_id: u64,
    sender: Vec<u8>,
    destination: Pubkey,
    nonce: u64,
    payload: Vec<u8>,
    fingerprint: [u8; 32],
    day: u64,
) -> Result<()> {
    let accounts = ctx.accounts;
    let bumps = ctx.bumps;

    accounts.bridge.authorize_delivery(&accounts.relayer.key())?;

    let source_chain = load_optional::<ChainConfig>(&accounts.source_chain)?;
    let allowed_sender = load_optional::<AllowedSender>(&accounts.allowed_sender)?;
    let recipient = accounts.recipient.key();

    // Freshly created PDAs come back zeroed
    if accounts.processed_message.fingerprint == [0u8; 32] {
        accounts.processed_message.bump = bumps.processed_message;
    }
    if accounts.daily_credit.account == Pubkey::default() {
        accounts.daily_credit.account = recipient;
        accounts.daily_credit.day = day;
        accounts.daily_credit.bump = bumps.daily_credit;
    }
    if accounts.recipient_balance.owner == Pubkey::default() {
        accounts.recipient_balance.owner = recipient;
        accounts.recipient_balance.bump = bumps.recipient_balance;
    }

    let message = InboundMessage {
        source_chain_id,
        sender: &sender,
        destination,
        nonce,
        payload: &payload,
        fingerprint,
    };
    let applied = apply_credit(
        &accounts.bridge,
        source_chain.as_ref(),
        allowed_sender.as_ref(),
        &message,
        &recipient,
        day,
        Clock::get()?.unix_timestamp,
        CreditLedger {
            marker: &mut accounts.processed_message,
            daily: &mut accounts.daily_credit,
            balance: &mut accounts.recipient_balance,
        },
    )?;

    emit!(CreditApplied {
        fingerprint,
        source_chain_id,
        sender,
        recipient: applied.recipient,
        amount: applied.amount,
        nonce,
        day,
    });

    msg!(
        "Credit applied: chain={}, nonce={}, recipient={}, amount={}, day_total={}, balance={}",
        source_chain_id,
        nonce,
        applied.recipient,
        applied.amount,
        applied.daily_total,
        applied.balance
    );
    Ok(())
}

#[derive(Accounts)]
#[instruction(
    source_chain_id: u64,
    sender: Vec<u8>,
    destination: Pubkey,
    nonce: u64,
    payload: Vec<u8>,
    fingerprint: [u8; 32],
    day: u64
)]
pub struct ReceiveCredit<'info> {
    #[account(
        seeds = [BRIDGE_SEED],
        bump = bridge.bump
    )]
    pub bridge: Account<'info, BridgeConfig>,

    /// CHECK: allow-list entry for the source chain, possibly never created.
    /// Address is pinned by seeds; contents are read through `load_optional`.
    #[account(
        seeds = [
            CHAIN_SEED,
            source_chain_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub source_chain: UncheckedAccount<'info>,

    /// CHECK: allow-list entry for (chain, sender), possibly never created.
    /// Address is pinned by seeds; contents are read through `load_optional`.
    #[account(
        seeds = [
            SENDER_SEED,
            source_chain_id.to_le_bytes().as_ref(),
            sender.as_ref()
        ],
        bump
    )]
    pub allowed_sender: UncheckedAccount<'info>,

    /// Never closed, so a fingerprint cannot be replayed after rent reclaim
    #[account(
        init_if_needed,
        payer = relayer,
        space = 8 + ProcessedMessage::SIZE,
        seeds = [
            PROCESSED_SEED,
            fingerprint.as_ref()
        ],
        bump
    )]
    pub processed_message: Account<'info, ProcessedMessage>,

    #[account(
        init_if_needed,
        payer = relayer,
        space = 8 + DailyCredit::SIZE,
        seeds = [
            DAILY_SEED,
            recipient.key().as_ref(),
            day.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub daily_credit: Account<'info, DailyCredit>,

    #[account(
        init_if_needed,
        payer = relayer,
        space = 8 + ReputationBalance::SIZE,
        seeds = [
            BALANCE_SEED,
            recipient.key().as_ref()
        ],
        bump
    )]
    pub recipient_balance: Account<'info, ReputationBalance>,

    /// CHECK: only used as a seed; must equal the payload recipient
    pub recipient: UncheckedAccount<'info>,

    #[account(mut)]
    pub relayer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
