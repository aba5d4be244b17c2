use shared::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use shared::errors::Error;
use soroban_sdk::{Address, Env};

use crate::types::{Claim, DataKey, Distribution, LifecycleState, ShareholderHistory};

/// Keep the contract instance (config, counters, total shares) alive
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ==================== Configuration ====================

/// Check if the pool has been initialized
pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

/// Store the administrator
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

/// Retrieve the administrator
pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

/// Store the dividend token
pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

/// Retrieve the dividend token
pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

// ==================== Lifecycle ====================

/// Store the lifecycle counters and pause flag
pub fn set_lifecycle(env: &Env, state: &LifecycleState) {
    env.storage().instance().set(&DataKey::Lifecycle, state);
}

/// Retrieve the lifecycle counters and pause flag
pub fn get_lifecycle(env: &Env) -> Result<LifecycleState, Error> {
    env.storage()
        .instance()
        .get::<DataKey, LifecycleState>(&DataKey::Lifecycle)
        .ok_or(Error::NotInitialized)
}

/// Whether the lifecycle gate is closed
pub fn is_paused(env: &Env) -> bool {
    get_lifecycle(env).map(|s| s.paused).unwrap_or(false)
}

// ==================== Share ledger ====================

/// Store the total issued shares
pub fn set_total_shares(env: &Env, total: u128) {
    env.storage().instance().set(&DataKey::TotalShares, &total);
}

/// Retrieve the total issued shares, 0 before any issuance
pub fn get_total_shares(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get::<DataKey, u128>(&DataKey::TotalShares)
        .unwrap_or(0)
}

/// Whether the owner has a ledger entry, even a zero one
pub fn has_balance(env: &Env, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Balance(owner.clone()))
}

/// Store an owner's share balance
pub fn set_balance(env: &Env, owner: &Address, balance: u128) {
    let key = DataKey::Balance(owner.clone());
    env.storage().persistent().set(&key, &balance);
    bump_persistent(env, &key);
}

/// Defaults to 0 for unknown owners
pub fn get_balance(env: &Env, owner: &Address) -> u128 {
    env.storage()
        .persistent()
        .get::<DataKey, u128>(&DataKey::Balance(owner.clone()))
        .unwrap_or(0)
}

// ==================== Distributions ====================

/// Store a distribution record
pub fn set_distribution(env: &Env, distribution: &Distribution) {
    let key = DataKey::Distribution(distribution.id);
    env.storage().persistent().set(&key, distribution);
    bump_persistent(env, &key);
}

/// Retrieve a distribution record
pub fn get_distribution(env: &Env, id: u64) -> Result<Distribution, Error> {
    env.storage()
        .persistent()
        .get::<DataKey, Distribution>(&DataKey::Distribution(id))
        .ok_or(Error::DistributionNotFound)
}

// ==================== Claims ====================

/// Record a paid claim
pub fn set_claim(env: &Env, id: u64, owner: &Address, claim: &Claim) {
    let key = DataKey::Claim(id, owner.clone());
    env.storage().persistent().set(&key, claim);
    bump_persistent(env, &key);
}

/// Retrieve the claim for (distribution, owner)
pub fn get_claim(env: &Env, id: u64, owner: &Address) -> Option<Claim> {
    env.storage()
        .persistent()
        .get::<DataKey, Claim>(&DataKey::Claim(id, owner.clone()))
}

/// Check if (distribution, owner) has already been paid
pub fn has_claim(env: &Env, id: u64, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Claim(id, owner.clone()))
}

// ==================== History ====================

/// Store an owner's claim history
pub fn set_history(env: &Env, owner: &Address, history: &ShareholderHistory) {
    let key = DataKey::History(owner.clone());
    env.storage().persistent().set(&key, history);
    bump_persistent(env, &key);
}

/// Retrieve an owner's claim history
pub fn get_history(env: &Env, owner: &Address) -> Option<ShareholderHistory> {
    env.storage()
        .persistent()
        .get::<DataKey, ShareholderHistory>(&DataKey::History(owner.clone()))
}
