use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCode,
    events::FundsSplit,
    state::Goldstem,
    utils::{send_lamports, split_amount},
};

#[derive(Accounts)]
pub struct Receive<'info> {
    #[account(
        mut,
        seeds = [b"goldstem", goldstem.load()?.unique_id.as_ref()],
        bump = goldstem.load()?.bump
    )]
    pub goldstem: AccountLoader<'info, Goldstem>,

    /// Payer of the split; lamports move straight from here to both wallets
    #[account(mut)]
    pub sender: Signer<'info>,

    /// CHECK: Validated against stored fruit_wallet; only receives lamports
    #[account(
        mut,
        constraint = fruit_wallet.key() == goldstem.load()?.fruit_wallet @ ErrorCode::InvalidWallet
    )]
    pub fruit_wallet: AccountInfo<'info>,

    /// CHECK: Validated against stored branches_wallet; only receives lamports
    #[account(
        mut,
        constraint = branches_wallet.key()
            == goldstem.load()?.branches_wallet @ ErrorCode::InvalidWallet
    )]
    pub branches_wallet: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

/// Splits a payment between the fruit and branches wallets
/// Permissionless - any signer can pay
pub fn handler(ctx: Context<Receive>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::ZeroAmount);

    let fruit_share = ctx.accounts.goldstem.load()?.fruit_share;

    // Floor on the fruit side, remainder to branches: the two always sum to amount
    let (fruit_amount, branches_amount) =
        split_amount(amount, fruit_share).ok_or(ErrorCode::MathOverflow)?;

    // Skip zero-amount transfers (tiny payments round the fruit side to 0)
    if fruit_amount > 0 {
        send_lamports(
            &ctx.accounts.sender,
            &ctx.accounts.fruit_wallet,
            &ctx.accounts.system_program,
            fruit_amount,
        )?;
    }

    if branches_amount > 0 {
        send_lamports(
            &ctx.accounts.sender,
            &ctx.accounts.branches_wallet,
            &ctx.accounts.system_program,
            branches_amount,
        )?;
    }

    {
        let mut goldstem = ctx.accounts.goldstem.load_mut()?;
        goldstem.total_received = goldstem
            .total_received
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
    }

    #[cfg(feature = "verbose")]
    msg!(
        "Split {} lamports: {} to fruit, {} to branches",
        amount,
        fruit_amount,
        branches_amount
    );

    emit!(FundsSplit {
        goldstem: ctx.accounts.goldstem.key(),
        from: ctx.accounts.sender.key(),
        amount,
        fruit_amount,
        branches_amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
