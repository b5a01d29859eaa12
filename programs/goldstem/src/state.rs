use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

/// Splitter state (one per deployment, PDA of `unique_id`)
#[account(zero_copy(unsafe))]
#[repr(C)]
pub struct Goldstem {
    /// Account allowed to reconfigure wallets and sweep the balance
    pub owner: Pubkey,
    /// Proposed owner for two-step transfer (default = no pending transfer)
    pub pending_owner: Pubkey,
    /// Receives `fruit_share` percent of every payment
    pub fruit_wallet: Pubkey,
    /// Receives the remainder of every payment
    pub branches_wallet: Pubkey,
    /// Seed enabling multiple splitters per program
    pub unique_id: Pubkey,
    /// Lifetime lamports split through `receive`
    pub total_received: u64,
    /// Lifetime lamports swept through `withdraw`
    pub total_withdrawn: u64,
    /// Schema version for future upgrades
    pub version: u8,
    /// Bump seed for PDA derivation (stored for CU optimization)
    pub bump: u8,
    pub fruit_share: u8,
    pub branches_share: u8,
    pub _padding: [u8; 4],
}

impl Goldstem {
    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }

    /// Stores `candidate` as the next owner and returns the proposal it displaced
    /// (default key when nothing was pending). Proposing the default key cancels.
    pub fn propose_owner(&mut self, candidate: Pubkey) -> Pubkey {
        std::mem::replace(&mut self.pending_owner, candidate)
    }

    /// Hands ownership to `claimant` and returns the previous owner
    pub fn claim_ownership(&mut self, claimant: &Pubkey) -> Result<Pubkey> {
        require!(
            self.pending_owner != Pubkey::default(),
            ErrorCode::NoPendingTransfer
        );
        require_keys_eq!(self.pending_owner, *claimant, ErrorCode::Unauthorized);

        self.pending_owner = Pubkey::default();
        Ok(std::mem::replace(&mut self.owner, *claimant))
    }
}

// Goldstem: See constants.rs for full breakdown = 192
// 192 - 8 (discriminator added by Anchor)
const _: () = assert!(std::mem::size_of::<Goldstem>() == 184);
