pub mod hash;
pub mod payload;
pub mod validation;

pub use hash::*;
pub use payload::*;
pub use validation::*;

/// Anchor error code number, for comparing failures in unit tests
#[cfg(test)]
pub(crate) fn error_code(err: anchor_lang::error::Error) -> u32 {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
        anchor_lang::error::Error::ProgramError(_) => u32::MAX,
    }
}
