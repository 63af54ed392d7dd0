use anchor_lang::prelude::*;

use crate::constants::SECONDS_PER_DAY;
use crate::errors::BridgeError;

/// Cumulative credit of one account within one day bucket
/// Reset happens by moving to a new bucket key, never by zeroing
#[account]
pub struct DailyCredit {
    pub account: Pubkey,
    pub day: u64,
    pub amount: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl DailyCredit {
    pub const SIZE: usize = 32  // account
        + 8                     // day
        + 8                     // amount
        + 1;                    // bump

    /// Cumulative total after adding `amount`, without recording it
    pub fn projected(&self, amount: u64, limit: u64) -> Result<u64> {
        let total = self
            .amount
            .checked_add(amount)
            .ok_or(BridgeError::MathOverflow)?;
        require!(total <= limit, BridgeError::DailyLimitExceeded);
        Ok(total)
    }

    /// Add `amount` to the bucket if the total stays within `limit`
    /// Returns the new cumulative total
    pub fn record(&mut self, amount: u64, limit: u64) -> Result<u64> {
        let total = self.projected(amount, limit)?;
        self.amount = total;
        Ok(total)
    }
}

/// Day bucket for a unix timestamp
pub fn day_bucket(unix_timestamp: i64) -> u64 {
    unix_timestamp.div_euclid(SECONDS_PER_DAY).max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error_code;

    fn bucket(day: u64) -> DailyCredit {
        DailyCredit {
            account: Pubkey::new_unique(),
            day,
            amount: 0,
            bump: 0,
        }
    }

    #[test]
    fn accumulates_up_to_limit() {
        let mut credit = bucket(19_000);
        assert_eq!(credit.record(60, 100).unwrap(), 60);
        assert_eq!(credit.record(40, 100).unwrap(), 100);

        let err = credit.record(1, 100).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::DailyLimitExceeded));
        assert_eq!(credit.amount, 100);
    }

    #[test]
    fn rejected_credit_leaves_total_unchanged() {
        let mut credit = bucket(19_000);
        credit.record(60, 100).unwrap();
        let err = credit.record(50, 100).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::DailyLimitExceeded));
        assert_eq!(credit.amount, 60);
    }

    #[test]
    fn overflow_is_reported() {
        let mut credit = bucket(1);
        credit.amount = u64::MAX;
        let err = credit.record(1, u64::MAX).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::MathOverflow));
    }

    #[test]
    fn day_bucket_boundaries() {
        assert_eq!(day_bucket(0), 0);
        assert_eq!(day_bucket(SECONDS_PER_DAY - 1), 0);
        assert_eq!(day_bucket(SECONDS_PER_DAY), 1);
        assert_eq!(day_bucket(1_700_000_000), 19_675);
        assert_eq!(day_bucket(-5), 0);
    }
}
