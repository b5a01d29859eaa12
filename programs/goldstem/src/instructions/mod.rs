#![allow(ambiguous_glob_reexports)]

pub mod accept_ownership;
pub mod initialize;
pub mod receive;
pub mod set_wallets;
pub mod transfer_ownership;
pub mod withdraw;

pub use accept_ownership::*;
pub use initialize::*;
pub use receive::*;
pub use set_wallets::*;
pub use transfer_ownership::*;
pub use withdraw::*;
