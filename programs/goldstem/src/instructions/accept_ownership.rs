use anchor_lang::prelude::*;

use crate::{events::OwnershipTransferAccepted, state::Goldstem};

#[derive(Accounts)]
pub struct AcceptOwnership<'info> {
    #[account(
        mut,
        seeds = [b"goldstem", goldstem.load()?.unique_id.as_ref()],
        bump = goldstem.load()?.bump,
    )]
    pub goldstem: AccountLoader<'info, Goldstem>,

    /// Must match the nominated owner
    pub new_owner: Signer<'info>,
}

pub fn handler(ctx: Context<AcceptOwnership>) -> Result<()> {
    let claimant = ctx.accounts.new_owner.key();
    let old_owner = ctx.accounts.goldstem.load_mut()?.claim_ownership(&claimant)?;

    emit!(OwnershipTransferAccepted {
        goldstem: ctx.accounts.goldstem.key(),
        old_owner,
        new_owner: claimant,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
