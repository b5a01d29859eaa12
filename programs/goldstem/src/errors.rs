use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Wallet address cannot be zero")]
    ZeroAddress,

    #[msg("Wallet account does not match configuration")]
    InvalidWallet,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Destination would be left below rent exemption")]
    TransferRejected,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Math underflow")]
    MathUnderflow,

    #[msg("No pending ownership transfer")]
    NoPendingTransfer,
}
