use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is not the administrator of an admin-only operation
    Unauthorized = 3,
    /// Lifecycle gate is closed
    Paused = 4,
    InvalidAmount = 5,

    // Share ledger errors
    InsufficientBalance = 6,
    /// A positive share balance or total was required
    InvalidShares = 7,
    HolderLimitReached = 8,

    // Distribution / claim errors
    /// Entitlement truncated to zero
    NoDividends = 9,
    AlreadyClaimed = 10,
    /// Unknown id, or the distribution is no longer active
    DistributionNotFound = 11,
    DistributionClosed = 12,
    AssetTransferFailed = 13,

    // Arithmetic errors
    DivisionByZero = 14,
    ArithmeticOverflow = 15,

    /// Paying the claim would push `total_claimed` past the deposit
    DistributionExhausted = 16,
}
