// Split configuration
pub const FRUIT_SHARE: u8 = 20;       // 20%
pub const BRANCHES_SHARE: u8 = 80;    // 80%, absorbs rounding
pub const SHARE_DENOMINATOR: u8 = 100;

const _: () = assert!(FRUIT_SHARE as u16 + BRANCHES_SHARE as u16 == SHARE_DENOMINATOR as u16);

// Account schema
pub const GOLDSTEM_VERSION: u8 = 1;

// Goldstem size calculation:
// - discriminator: 8
// - owner: 32
// - pending_owner: 32
// - fruit_wallet: 32
// - branches_wallet: 32
// - unique_id: 32
// - total_received: 8
// - total_withdrawn: 8
// - version: 1
// - bump: 1
// - fruit_share: 1
// - branches_share: 1
// - padding for 8-byte alignment: 4
// Total: 8 + 160 + 16 + 4 + 4 = 192
pub const GOLDSTEM_SIZE: usize = 192;
