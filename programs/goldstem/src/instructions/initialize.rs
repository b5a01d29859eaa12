use anchor_lang::prelude::*;

use crate::{
    constants::{BRANCHES_SHARE, FRUIT_SHARE, GOLDSTEM_SIZE, GOLDSTEM_VERSION},
    events::GoldstemCreated,
    state::Goldstem,
    utils::validate_wallets,
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = GOLDSTEM_SIZE,
        seeds = [b"goldstem", unique_id.key().as_ref()],
        bump
    )]
    pub goldstem: AccountLoader<'info, Goldstem>,

    /// CHECK: Used only as PDA seed for uniqueness
    pub unique_id: AccountInfo<'info>,

    /// Becomes the owner and pays rent for the goldstem account
    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates a splitter with the fixed 20/80 shares
pub fn handler(
    ctx: Context<Initialize>,
    fruit_wallet: Pubkey,
    branches_wallet: Pubkey,
) -> Result<()> {
    validate_wallets(&fruit_wallet, &branches_wallet)?;

    let goldstem = &mut ctx.accounts.goldstem.load_init()?;

    goldstem.version = GOLDSTEM_VERSION;
    goldstem.owner = ctx.accounts.owner.key();
    goldstem.pending_owner = Pubkey::default(); // No pending transfer initially
    goldstem.fruit_wallet = fruit_wallet;
    goldstem.branches_wallet = branches_wallet;
    goldstem.unique_id = ctx.accounts.unique_id.key();
    goldstem.total_received = 0;
    goldstem.total_withdrawn = 0;
    goldstem.bump = ctx.bumps.goldstem;
    goldstem.fruit_share = FRUIT_SHARE;
    goldstem.branches_share = BRANCHES_SHARE;

    emit!(GoldstemCreated {
        goldstem: ctx.accounts.goldstem.key(),
        owner: ctx.accounts.owner.key(),
        fruit_wallet,
        branches_wallet,
        fruit_share: FRUIT_SHARE,
        branches_share: BRANCHES_SHARE,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
