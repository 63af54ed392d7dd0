use anchor_lang::prelude::*;

use crate::constants::MAX_OPERATORS;
use crate::errors::BridgeError;

/// Main bridge account storing configuration, roles and the pause flag
#[account]
pub struct BridgeConfig {
    /// Admin authority that can modify bridge settings
    pub authority: Pubkey,

    /// Accounts allowed to deliver inbound messages and pause the bridge
    pub operators: Vec<Pubkey>,

    /// Chain identifier of the chain this program runs on
    pub local_chain_id: u64,

    /// Ceiling for a single credit, inbound or outbound
    pub max_amount_per_message: u64,

    /// Ceiling for the cumulative credit of one account in one day
    pub daily_limit: u64,

    /// Emergency stop for balance mutations
    pub paused: bool,

    /// Next nonce assigned to an outbound message
    pub outbound_nonce: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl BridgeConfig {
    /// Space without the 8-byte discriminator
    pub const SIZE: usize = 32         // authority
        + 4 + (32 * MAX_OPERATORS)     // operators vec
        + 8                            // local_chain_id
        + 8                            // max_amount_per_message
        + 8                            // daily_limit
        + 1                            // paused
        + 8                            // outbound_nonce
        + 1;                           // bump

    pub fn has_role(&self, key: &Pubkey, role: Role) -> bool {
        match role {
            Role::Admin => self.authority == *key,
            Role::Operator => self.authority == *key || self.operators.contains(key),
        }
    }

    pub fn require_role(&self, key: &Pubkey, role: Role) -> Result<()> {
        require!(self.has_role(key, role), BridgeError::Unauthorized);
        Ok(())
    }

    pub fn require_not_paused(&self) -> Result<()> {
        require!(!self.paused, BridgeError::BridgePaused);
        Ok(())
    }

    /// Check an amount against the per-message ceiling
    pub fn check_amount(&self, amount: u64) -> Result<()> {
        require!(amount > 0, BridgeError::ZeroAmount);
        require!(
            amount <= self.max_amount_per_message,
            BridgeError::ExceedsMaxAmount
        );
        Ok(())
    }

    pub fn add_operator(&mut self, operator: Pubkey) -> Result<()> {
        require!(
            !self.operators.contains(&operator),
            BridgeError::DuplicateOperator
        );
        require!(
            self.operators.len() < MAX_OPERATORS,
            BridgeError::TooManyOperators
        );
        self.operators.push(operator);
        Ok(())
    }

    pub fn remove_operator(&mut self, operator: &Pubkey) -> Result<()> {
        let position = self
            .operators
            .iter()
            .position(|o| o == operator)
            .ok_or(BridgeError::OperatorNotFound)?;
        self.operators.remove(position);
        Ok(())
    }

    /// Gate for inbound delivery: the pause flag first, then the operator role
    pub fn authorize_delivery(&self, relayer: &Pubkey) -> Result<()> {
        self.require_not_paused()?;
        self.require_role(relayer, Role::Operator)
    }

    /// Operators may pause; only the admin may unpause
    pub fn set_paused(&mut self, caller: &Pubkey, paused: bool) -> Result<()> {
        let required = if paused { Role::Operator } else { Role::Admin };
        self.require_role(caller, required)?;
        self.paused = paused;
        Ok(())
    }

    /// Returns the previous ceiling
    pub fn set_max_amount(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, BridgeError::InvalidLimit);
        Ok(std::mem::replace(&mut self.max_amount_per_message, amount))
    }

    /// Returns the previous ceiling
    pub fn set_daily_limit(&mut self, limit: u64) -> Result<u64> {
        require!(limit > 0, BridgeError::InvalidLimit);
        Ok(std::mem::replace(&mut self.daily_limit, limit))
    }

    /// Returns the previous authority
    pub fn transfer_authority(&mut self, new_authority: Pubkey) -> Result<Pubkey> {
        require_keys_neq!(new_authority, Pubkey::default(), BridgeError::InvalidAuthority);
        Ok(std::mem::replace(&mut self.authority, new_authority))
    }

    /// Hand out the next outbound nonce
    pub fn next_outbound_nonce(&mut self) -> Result<u64> {
        let nonce = self.outbound_nonce;
        self.outbound_nonce = nonce.checked_add(1).ok_or(BridgeError::MathOverflow)?;
        Ok(nonce)
    }
}

/// Capabilities checked by privileged instructions
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    /// Configuration, allow-lists, unpause and operator management
    Admin,
    /// Message delivery and pause
    Operator,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error_code;

    fn config(authority: Pubkey) -> BridgeConfig {
        BridgeConfig {
            authority,
            operators: Vec::new(),
            local_chain_id: 1,
            max_amount_per_message: 100,
            daily_limit: 100,
            paused: false,
            outbound_nonce: 0,
            bump: 255,
        }
    }

    #[test]
    fn admin_holds_operator_capability() {
        let admin = Pubkey::new_unique();
        let cfg = config(admin);
        assert!(cfg.has_role(&admin, Role::Admin));
        assert!(cfg.has_role(&admin, Role::Operator));
    }

    #[test]
    fn operator_is_not_admin() {
        let mut cfg = config(Pubkey::new_unique());
        let operator = Pubkey::new_unique();
        cfg.add_operator(operator).unwrap();

        assert!(cfg.has_role(&operator, Role::Operator));
        let err = cfg.require_role(&operator, Role::Admin).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::Unauthorized));
    }

    #[test]
    fn stranger_has_no_role() {
        let cfg = config(Pubkey::new_unique());
        let stranger = Pubkey::new_unique();
        assert!(!cfg.has_role(&stranger, Role::Operator));
        assert!(!cfg.has_role(&stranger, Role::Admin));
    }

    #[test]
    fn operator_set_is_bounded_and_unique() {
        let mut cfg = config(Pubkey::new_unique());
        let first = Pubkey::new_unique();
        cfg.add_operator(first).unwrap();

        let err = cfg.add_operator(first).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::DuplicateOperator));

        for _ in 1..MAX_OPERATORS {
            cfg.add_operator(Pubkey::new_unique()).unwrap();
        }
        let err = cfg.add_operator(Pubkey::new_unique()).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::TooManyOperators));
    }

    #[test]
    fn removing_unknown_operator_fails() {
        let mut cfg = config(Pubkey::new_unique());
        let operator = Pubkey::new_unique();
        cfg.add_operator(operator).unwrap();
        cfg.remove_operator(&operator).unwrap();
        assert!(!cfg.has_role(&operator, Role::Operator));

        let err = cfg.remove_operator(&operator).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::OperatorNotFound));
    }

    #[test]
    fn amount_bounds() {
        let cfg = config(Pubkey::new_unique());
        cfg.check_amount(1).unwrap();
        cfg.check_amount(100).unwrap();

        let err = cfg.check_amount(0).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::ZeroAmount));
        let err = cfg.check_amount(101).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::ExceedsMaxAmount));
    }

    #[test]
    fn paused_bridge_rejects() {
        let mut cfg = config(Pubkey::new_unique());
        cfg.require_not_paused().unwrap();
        cfg.paused = true;
        let err = cfg.require_not_paused().unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::BridgePaused));
    }

    #[test]
    fn outbound_nonce_increments() {
        let mut cfg = config(Pubkey::new_unique());
        assert_eq!(cfg.next_outbound_nonce().unwrap(), 0);
        assert_eq!(cfg.next_outbound_nonce().unwrap(), 1);
        assert_eq!(cfg.outbound_nonce, 2);
    }

    #[test]
    fn operator_pauses_admin_unpauses() {
        let admin = Pubkey::new_unique();
        let mut cfg = config(admin);
        let operator = Pubkey::new_unique();
        cfg.add_operator(operator).unwrap();

        cfg.set_paused(&operator, true).unwrap();
        assert!(cfg.paused);

        let err = cfg.set_paused(&operator, false).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::Unauthorized));
        assert!(cfg.paused);

        cfg.set_paused(&admin, false).unwrap();
        assert!(!cfg.paused);
    }

    #[test]
    fn stranger_cannot_pause() {
        let mut cfg = config(Pubkey::new_unique());
        let err = cfg.set_paused(&Pubkey::new_unique(), true).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::Unauthorized));
        assert!(!cfg.paused);
    }

    #[test]
    fn delivery_checks_pause_before_role() {
        let mut cfg = config(Pubkey::new_unique());
        let operator = Pubkey::new_unique();
        cfg.add_operator(operator).unwrap();
        cfg.authorize_delivery(&operator).unwrap();

        let stranger = Pubkey::new_unique();
        let err = cfg.authorize_delivery(&stranger).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::Unauthorized));

        cfg.paused = true;
        let err = cfg.authorize_delivery(&stranger).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::BridgePaused));
        let err = cfg.authorize_delivery(&operator).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::BridgePaused));
    }

    #[test]
    fn zero_limits_rejected() {
        let mut cfg = config(Pubkey::new_unique());

        let err = cfg.set_max_amount(0).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::InvalidLimit));
        let err = cfg.set_daily_limit(0).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::InvalidLimit));
        assert_eq!(cfg.max_amount_per_message, 100);
        assert_eq!(cfg.daily_limit, 100);

        assert_eq!(cfg.set_max_amount(50).unwrap(), 100);
        assert_eq!(cfg.set_daily_limit(500).unwrap(), 100);
        assert_eq!(cfg.max_amount_per_message, 50);
        assert_eq!(cfg.daily_limit, 500);
    }

    #[test]
    fn authority_cannot_go_to_default_key() {
        let admin = Pubkey::new_unique();
        let mut cfg = config(admin);

        let err = cfg.transfer_authority(Pubkey::default()).unwrap_err();
        assert_eq!(error_code(err), u32::from(BridgeError::InvalidAuthority));
        assert_eq!(cfg.authority, admin);

        let next = Pubkey::new_unique();
        assert_eq!(cfg.transfer_authority(next).unwrap(), admin);
        assert!(cfg.has_role(&next, Role::Admin));
        assert!(!cfg.has_role(&admin, Role::Admin));
    }
}
