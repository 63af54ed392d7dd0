/// PDA seeds for the reputation bridge accounts
pub const BRIDGE_SEED: &[u8] = b"bridge";
pub const CHAIN_SEED: &[u8] = b"chain";
pub const SENDER_SEED: &[u8] = b"sender";
pub const PROCESSED_SEED: &[u8] = b"processed";
pub const DAILY_SEED: &[u8] = b"daily";
pub const BALANCE_SEED: &[u8] = b"balance";

/// Sender bytes are used directly as a PDA seed, which caps them at 32 bytes
pub const MAX_SENDER_SIZE: usize = 32;

/// Borsh layout of `CreditPayload`: 32-byte recipient + u64 amount
pub const CREDIT_PAYLOAD_SIZE: usize = 32 + 8;

/// Length of one rate-limit bucket
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Operator role constants
pub const MAX_OPERATORS: usize = 10;
