pub mod balance;
pub mod bridge;
pub mod chain;
pub mod daily;
pub mod processed;
pub mod sender;

pub use balance::*;
pub use bridge::*;
pub use chain::*;
pub use daily::*;
pub use processed::*;
pub use sender::*;
