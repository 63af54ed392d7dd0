pub mod admin;
pub mod allowlist;
pub mod get_balance;
pub mod initialize;
pub mod operators;
pub mod receive_credit;
pub mod send_credit;

pub use admin::*;
pub use allowlist::*;
pub use get_balance::*;
pub use initialize::*;
pub use operators::*;
pub use receive_credit::*;
pub use send_credit::*;
