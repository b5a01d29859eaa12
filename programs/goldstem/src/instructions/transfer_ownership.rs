use anchor_lang::prelude::*;

use crate::{errors::ErrorCode, events::OwnershipTransferProposed, state::Goldstem};

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(
        mut,
        seeds = [b"goldstem", goldstem.load()?.unique_id.as_ref()],
        bump = goldstem.load()?.bump,
        constraint = goldstem.load()?.is_owner(&owner.key()) @ ErrorCode::Unauthorized
    )]
    pub goldstem: AccountLoader<'info, Goldstem>,

    pub owner: Signer<'info>,
}

/// Nominates `candidate` as next owner; the current owner stays in control
/// until the candidate signs `accept_ownership`. A default key withdraws
/// any open nomination.
pub fn handler(ctx: Context<TransferOwnership>, candidate: Pubkey) -> Result<()> {
    let replaced = ctx.accounts.goldstem.load_mut()?.propose_owner(candidate);

    #[cfg(feature = "verbose")]
    msg!("Nominated {} (replacing {})", candidate, replaced);

    emit!(OwnershipTransferProposed {
        goldstem: ctx.accounts.goldstem.key(),
        owner: ctx.accounts.owner.key(),
        pending_owner: candidate,
        replaced_pending_owner: replaced,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
