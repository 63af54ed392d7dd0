use anchor_lang::prelude::*;

#[error_code]
pub enum BridgeError {
    #[msg("Bridge is paused")]
    BridgePaused,

    #[msg("Caller lacks the required role")]
    Unauthorized,

    #[msg("Chain is not allow-listed")]
    UnauthorizedChain,

    #[msg("Sender is not allow-listed for the source chain")]
    UnauthorizedSender,

    #[msg("Destination does not match this program")]
    InvalidDestination,

    #[msg("Message has already been processed")]
    DuplicateMessage,

    #[msg("Amount exceeds the per-message ceiling")]
    ExceedsMaxAmount,

    #[msg("Amount would exceed the daily ceiling")]
    DailyLimitExceeded,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Limit must be greater than zero")]
    InvalidLimit,

    #[msg("Empty sender address")]
    EmptySender,

    #[msg("Sender address too long")]
    SenderTooLong,

    #[msg("Payload is not a valid credit encoding")]
    InvalidPayload,

    #[msg("Fingerprint does not match message contents")]
    FingerprintMismatch,

    #[msg("Recipient account does not match payload")]
    RecipientMismatch,

    #[msg("Day bucket does not match the current day")]
    InvalidDayBucket,

    #[msg("Insufficient reputation balance")]
    InsufficientBalance,

    #[msg("Invalid chain ID")]
    InvalidChainId,

    #[msg("Operator already registered")]
    DuplicateOperator,

    #[msg("Operator not found")]
    OperatorNotFound,

    #[msg("Too many operators")]
    TooManyOperators,

    #[msg("Arithmetic overflow")]
    MathOverflow,

    #[msg("Authority cannot be the default key")]
    InvalidAuthority,
}
