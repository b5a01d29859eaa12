use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
mod utils;

use instructions::*;

declare_id!("EuCzd9gjJhZLZhfoPzVxQRo7C9jfhjhJpUoA47xCGanX");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Goldstem",
    project_url: "https://aurumorchard.xyz",
    contacts: "email:dev@aurumorchard.xyz,link:https://github.com/aurum-orchard/goldstem/security",
    policy: "https://github.com/aurum-orchard/goldstem/blob/main/SECURITY.md",
    source_code: "https://github.com/aurum-orchard/goldstem",
    source_release: "v0.1.0"
}

#[program]
pub mod goldstem {
    use super::*;

    /// Creates a splitter owned by the signer
    /// Shares are fixed at 20% fruit / 80% branches
    pub fn initialize(
        ctx: Context<Initialize>,
        fruit_wallet: Pubkey,
        branches_wallet: Pubkey,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, fruit_wallet, branches_wallet)
    }

    /// Pays `amount` lamports, split between fruit and branches wallets
    /// Permissionless - anyone can pay
    pub fn receive(ctx: Context<Receive>, amount: u64) -> Result<()> {
        instructions::receive::handler(ctx, amount)
    }

    /// Replaces both destination wallets
    /// Only callable by owner
    pub fn set_wallets(
        ctx: Context<SetWallets>,
        new_fruit_wallet: Pubkey,
        new_branches_wallet: Pubkey,
    ) -> Result<()> {
        instructions::set_wallets::handler(ctx, new_fruit_wallet, new_branches_wallet)
    }

    /// Sweeps the splitter's surplus balance to the owner
    /// Only callable by owner
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::handler(ctx)
    }

    /// Proposes ownership transfer to a new address (two-step pattern)
    /// Only callable by owner
    /// New owner must call accept_ownership to complete
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::handler(ctx, new_owner)
    }

    /// Accepts a pending ownership transfer
    /// Only callable by the pending owner
    pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
        instructions::accept_ownership::handler(ctx)
    }
}
