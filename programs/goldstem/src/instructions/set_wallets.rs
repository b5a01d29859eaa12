use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCode,
    events::WalletsUpdated,
    state::Goldstem,
    utils::validate_wallets,
};

#[derive(Accounts)]
pub struct SetWallets<'info> {
    #[account(
        mut,
        seeds = [b"goldstem", goldstem.load()?.unique_id.as_ref()],
        bump = goldstem.load()?.bump,
        constraint = goldstem.load()?.is_owner(&owner.key()) @ ErrorCode::Unauthorized
    )]
    pub goldstem: AccountLoader<'info, Goldstem>,

    pub owner: Signer<'info>,
}

/// Replaces both destination wallets (both-or-neither)
/// Only callable by owner
pub fn handler(
    ctx: Context<SetWallets>,
    new_fruit_wallet: Pubkey,
    new_branches_wallet: Pubkey,
) -> Result<()> {
    validate_wallets(&new_fruit_wallet, &new_branches_wallet)?;

    let goldstem = &mut ctx.accounts.goldstem.load_mut()?;
    let old_fruit_wallet = goldstem.fruit_wallet;
    let old_branches_wallet = goldstem.branches_wallet;

    goldstem.fruit_wallet = new_fruit_wallet;
    goldstem.branches_wallet = new_branches_wallet;

    emit!(WalletsUpdated {
        goldstem: ctx.accounts.goldstem.key(),
        owner: ctx.accounts.owner.key(),
        old_fruit_wallet,
        old_branches_wallet,
        new_fruit_wallet,
        new_branches_wallet,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
