use shared::errors::Error;
use soroban_sdk::{Address, Env};

use crate::storage::{get_admin, has_admin, is_paused};

pub fn require_initialized(env: &Env) -> Result<(), Error> {
    if has_admin(env) {
        Ok(())
    } else {
        Err(Error::NotInitialized)
    }
}

/// Check that `caller` is the configured administrator, then require its signature.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    let admin = get_admin(env)?;
    if admin != *caller {
        return Err(Error::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

/// The lifecycle gate. Read-only lookups never call this.
pub fn require_not_paused(env: &Env) -> Result<(), Error> {
    if is_paused(env) {
        Err(Error::Paused)
    } else {
        Ok(())
    }
}

pub fn require_positive_shares(amount: u128) -> Result<(), Error> {
    if amount == 0 {
        Err(Error::InvalidAmount)
    } else {
        Ok(())
    }
}
