use anchor_lang::prelude::*;

#[event]
pub struct GoldstemCreated {
    pub goldstem: Pubkey,
    pub owner: Pubkey,
    pub fruit_wallet: Pubkey,
    pub branches_wallet: Pubkey,
    pub fruit_share: u8,
    pub branches_share: u8,
    pub timestamp: i64,
}

#[event]
pub struct FundsSplit {
    pub goldstem: Pubkey,
    pub from: Pubkey,
    pub amount: u64,
    pub fruit_amount: u64,
    pub branches_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct WalletsUpdated {
    pub goldstem: Pubkey,
    pub owner: Pubkey,
    pub old_fruit_wallet: Pubkey,
    pub old_branches_wallet: Pubkey,
    pub new_fruit_wallet: Pubkey,
    pub new_branches_wallet: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct Withdrawn {
    pub goldstem: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct OwnershipTransferProposed {
    pub goldstem: Pubkey,
    pub owner: Pubkey,
    pub pending_owner: Pubkey,
    /// Proposal overwritten by this call (default if none was pending)
    pub replaced_pending_owner: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct OwnershipTransferAccepted {
    pub goldstem: Pubkey,
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}
