//! Instruction builders for Mollusk tests
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

/// Program ID - must match lib.rs
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("EuCzd9gjJhZLZhfoPzVxQRo7C9jfhjhJpUoA47xCGanX");

// Anchor discriminators (first 8 bytes of sha256("global:function_name"))
pub const DISCRIMINATOR_INITIALIZE: [u8; 8] = [0xaf, 0xaf, 0x6d, 0x1f, 0x0d, 0x98, 0x9b, 0xed];
pub const DISCRIMINATOR_RECEIVE: [u8; 8] = [0x56, 0x11, 0xff, 0xab, 0x11, 0x11, 0xbb, 0xdb];
pub const DISCRIMINATOR_SET_WALLETS: [u8; 8] = [0xf9, 0x18, 0xb7, 0xfa, 0x4a, 0xb8, 0xfa, 0xbb];
pub const DISCRIMINATOR_WITHDRAW: [u8; 8] = [0xb7, 0x12, 0x46, 0x9c, 0x94, 0x6d, 0xa1, 0x22];
pub const DISCRIMINATOR_TRANSFER_OWNERSHIP: [u8; 8] =
    [0x41, 0xb1, 0xd7, 0x49, 0x35, 0x2d, 0x63, 0x2f];
pub const DISCRIMINATOR_ACCEPT_OWNERSHIP: [u8; 8] =
    [0xac, 0x17, 0x2b, 0x0d, 0xee, 0xd5, 0x55, 0x96];

/// Derive goldstem PDA
pub fn derive_goldstem(unique_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"goldstem", unique_id.as_ref()], &PROGRAM_ID)
}

/// Build initialize instruction
///
/// Accounts:
/// 0. goldstem (writable) - PDA to initialize
/// 1. unique_id
/// 2. owner (writable, signer)
/// 3. system_program
pub fn build_initialize(
    goldstem: Pubkey,
    unique_id: Pubkey,
    owner: Pubkey,
    fruit_wallet: Pubkey,
    branches_wallet: Pubkey,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 32 + 32);
    data.extend_from_slice(&DISCRIMINATOR_INITIALIZE);
    data.extend_from_slice(&fruit_wallet.to_bytes());
    data.extend_from_slice(&branches_wallet.to_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(goldstem, false),
            AccountMeta::new_readonly(unique_id, false),
            AccountMeta::new(owner, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

/// Build receive instruction
///
/// Accounts:
/// 0. goldstem (writable)
/// 1. sender (writable, signer)
/// 2. fruit_wallet (writable)
/// 3. branches_wallet (writable)
/// 4. system_program
pub fn build_receive(
    goldstem: Pubkey,
    sender: Pubkey,
    fruit_wallet: Pubkey,
    branches_wallet: Pubkey,
    amount: u64,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 8);
    data.extend_from_slice(&DISCRIMINATOR_RECEIVE);
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(goldstem, false),
            AccountMeta::new(sender, true),
            AccountMeta::new(fruit_wallet, false),
            AccountMeta::new(branches_wallet, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

/// Build set_wallets instruction
///
/// Accounts:
/// 0. goldstem (writable)
/// 1. owner (signer)
pub fn build_set_wallets(
    goldstem: Pubkey,
    owner: Pubkey,
    new_fruit_wallet: Pubkey,
    new_branches_wallet: Pubkey,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 32 + 32);
    data.extend_from_slice(&DISCRIMINATOR_SET_WALLETS);
    data.extend_from_slice(&new_fruit_wallet.to_bytes());
    data.extend_from_slice(&new_branches_wallet.to_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(goldstem, false),
            AccountMeta::new_readonly(owner, true),
        ],
        data,
    }
}

/// Build withdraw instruction
///
/// Accounts:
/// 0. goldstem (writable)
/// 1. owner (writable, signer)
pub fn build_withdraw(goldstem: Pubkey, owner: Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(goldstem, false),
            AccountMeta::new(owner, true),
        ],
        data: DISCRIMINATOR_WITHDRAW.to_vec(),
    }
}

/// Build transfer_ownership instruction
///
/// Accounts:
/// 0. goldstem (writable)
/// 1. owner (signer)
pub fn build_transfer_ownership(goldstem: Pubkey, owner: Pubkey, new_owner: Pubkey) -> Instruction {
    let mut data = Vec::with_capacity(8 + 32);
    data.extend_from_slice(&DISCRIMINATOR_TRANSFER_OWNERSHIP);
    data.extend_from_slice(&new_owner.to_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(goldstem, false),
            AccountMeta::new_readonly(owner, true),
        ],
        data,
    }
}

/// Build accept_ownership instruction
///
/// Accounts:
/// 0. goldstem (writable)
/// 1. new_owner (signer)
pub fn build_accept_ownership(goldstem: Pubkey, new_owner: Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(goldstem, false),
            AccountMeta::new_readonly(new_owner, true),
        ],
        data: DISCRIMINATOR_ACCEPT_OWNERSHIP.to_vec(),
    }
}
