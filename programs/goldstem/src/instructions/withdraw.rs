use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCode,
    events::Withdrawn,
    state::Goldstem,
    utils::{move_lamports, sweepable_lamports},
};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [b"goldstem", goldstem.load()?.unique_id.as_ref()],
        bump = goldstem.load()?.bump,
        constraint = goldstem.load()?.is_owner(&owner.key()) @ ErrorCode::Unauthorized
    )]
    pub goldstem: AccountLoader<'info, Goldstem>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

/// Sweeps everything above rent exemption to the owner
/// Succeeds with amount 0 when there is nothing to sweep
pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    let goldstem_info = ctx.accounts.goldstem.to_account_info();
    let rent_exempt_minimum = Rent::get()?.minimum_balance(goldstem_info.data_len());
    let amount = sweepable_lamports(goldstem_info.lamports(), rent_exempt_minimum);

    if amount > 0 {
        move_lamports(&goldstem_info, &ctx.accounts.owner.to_account_info(), amount)?;

        let mut goldstem = ctx.accounts.goldstem.load_mut()?;
        goldstem.total_withdrawn = goldstem
            .total_withdrawn
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
    }

    #[cfg(feature = "verbose")]
    msg!("Withdrew {} lamports to owner", amount);

    emit!(Withdrawn {
        goldstem: ctx.accounts.goldstem.key(),
        owner: ctx.accounts.owner.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
