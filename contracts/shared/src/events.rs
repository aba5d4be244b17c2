use soroban_sdk::{symbol_short, Symbol};

// Lifecycle events
pub const POOL_INITIALIZED: Symbol = symbol_short!("init");
pub const CONTRACT_PAUSED: Symbol = symbol_short!("paused");
pub const CONTRACT_UNPAUSED: Symbol = symbol_short!("unpaused");
pub const ADMIN_CHANGED: Symbol = symbol_short!("adm_set");

// Share ledger events
pub const SHARES_ISSUED: Symbol = symbol_short!("issue");
pub const SHARES_TRANSFERRED: Symbol = symbol_short!("transfer");

// Dividend events
pub const DIVIDEND_DISTRIBUTED: Symbol = symbol_short!("div_dist");
pub const DIVIDEND_CLAIMED: Symbol = symbol_short!("div_claim");
pub const DISTRIBUTION_CLOSED: Symbol = symbol_short!("dist_cls");
