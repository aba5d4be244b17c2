/// Fixed-point scale applied to per-share rates
pub const PRECISION: u128 = 1_000_000;

/// Smallest deposit accepted by `create_distribution`
pub const MIN_DIVIDEND_AMOUNT: i128 = 1_000_000;

/// Maximum number of distinct share ledger entries
pub const MAX_HOLDERS: u32 = 10_000;

// Storage TTLs, in ledgers (~5s each)
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280; // ~1 day
pub const INSTANCE_BUMP_AMOUNT: u32 = 518_400; // ~30 days
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 120_960; // ~7 days
pub const PERSISTENT_BUMP_AMOUNT: u32 = 1_051_200; // ~60 days
