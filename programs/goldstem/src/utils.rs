use anchor_lang::{
    prelude::*,
    system_program::{self, Transfer},
};

use crate::{
    constants::SHARE_DENOMINATOR,
    errors::ErrorCode,
};

/// Split `amount` into (fruit, branches)
/// Fruit side is floored, branches side takes the remainder so nothing is lost
/// Returns None on overflow or a share above 100
pub fn split_amount(amount: u64, fruit_share: u8) -> Option<(u64, u64)> {
    let fruit: u64 = (amount as u128)
        .checked_mul(fruit_share as u128)?
        .checked_div(SHARE_DENOMINATOR as u128)?
        .try_into()
        .ok()?;
    let branches = amount.checked_sub(fruit)?;
    Some((fruit, branches))
}

/// Lamports that can leave an account without dropping it below rent exemption
pub fn sweepable_lamports(balance: u64, rent_exempt_minimum: u64) -> u64 {
    balance.saturating_sub(rent_exempt_minimum)
}

/// Validates wallet pair for initialize / set_wallets
pub fn validate_wallets(fruit_wallet: &Pubkey, branches_wallet: &Pubkey) -> Result<()> {
    require!(*fruit_wallet != Pubkey::default(), ErrorCode::ZeroAddress);
    require!(*branches_wallet != Pubkey::default(), ErrorCode::ZeroAddress);
    Ok(())
}

/// Rejects a credit that would leave the destination below rent exemption
/// Checked against the live balance right before each credit
pub fn accepts_credit(balance: u64, amount: u64, rent_exempt_minimum: u64) -> Result<()> {
    let post_balance = balance.checked_add(amount).ok_or(ErrorCode::MathOverflow)?;
    require!(post_balance >= rent_exempt_minimum, ErrorCode::TransferRejected);
    Ok(())
}

/// Moves lamports from a signing system account via System Program CPI
/// Fails the whole instruction if the destination cannot accept them
pub fn send_lamports<'info>(
    from: &Signer<'info>,
    to: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    let rent_exempt_minimum = Rent::get()?.minimum_balance(to.data_len());
    accepts_credit(to.lamports(), amount, rent_exempt_minimum)?;

    let cpi_accounts = Transfer {
        from: from.to_account_info(),
        to: to.clone(),
    };
    let cpi_ctx = CpiContext::new(system_program.to_account_info(), cpi_accounts);
    system_program::transfer(cpi_ctx, amount)
}

/// Moves lamports out of a program-owned account by direct debit
pub fn move_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    let from_balance = from
        .lamports()
        .checked_sub(amount)
        .ok_or(ErrorCode::MathUnderflow)?;
    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;

    **from.try_borrow_mut_lamports()? = from_balance;
    **to.try_borrow_mut_lamports()? = to_balance;

    Ok(())
}
