use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum DistributionStatus {
    Active = 0,
    Completed = 1,
}

/// One dividend deposit converted into a fixed per-share rate
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Distribution {
    pub id: u64,
    pub total_amount: i128,
    /// Payout per share, scaled by `PRECISION`. Fixed at creation.
    pub per_share_rate: u128,
    /// Ledger sequence at creation
    pub created_at: u32,
    pub creator: Address,
    pub total_claimed: i128,
    pub status: DistributionStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Claim {
    pub amount_claimed: i128,
    pub claimed_at: u32,
    pub claimed: bool,
}

/// Cumulative claim statistics for one shareholder
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ShareholderHistory {
    pub total_received: i128,
    pub last_claim_at: u32,
    pub participation_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LifecycleState {
    pub paused: bool,
    pub next_distribution_id: u64,
    pub total_distributed: i128,
    /// Distinct share ledger entries ever created
    pub holder_count: u32,
}

impl Default for LifecycleState {
    fn default() -> Self {
        Self {
            paused: false,
            next_distribution_id: 1,
            total_distributed: 0,
            holder_count: 0,
        }
    }
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,                   // administrator identity
    Token,                   // dividend asset
    Lifecycle,               // LifecycleState
    TotalShares,             // u128
    Balance(Address),        // owner -> u128
    Distribution(u64),       // id -> Distribution
    Claim(u64, Address),     // id, owner -> Claim
    History(Address),        // owner -> ShareholderHistory
}
