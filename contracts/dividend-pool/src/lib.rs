#![no_std]

use shared::{
    constants::{MAX_HOLDERS, MIN_DIVIDEND_AMOUNT, PRECISION},
    errors::Error,
    events::*,
    math::{proportional_amount, rate_for_total, to_amount, to_unsigned},
};
use soroban_sdk::{contract, contractimpl, contractmeta, log, token::TokenClient, Address, Env};

mod storage;
mod types;
mod validation;


pub use crate::types::{
    Claim, Distribution, DistributionStatus, LifecycleState, ShareholderHistory,
};

use storage::*;
use validation::*;

contractmeta!(key = "name", val = "Dividend Pool Contract");

#[contract]
pub struct DividendPool;

#[contractimpl]
impl DividendPool {
    /// Initialize the pool with its administrator and dividend asset
    ///
    /// # Arguments
    /// * `admin` - Identity allowed to issue shares, deposit dividends and pause
    /// * `token` - Token contract the dividends are paid in
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        set_admin(&env, &admin);
        set_token(&env, &token);
        set_lifecycle(&env, &LifecycleState::default());
        set_total_shares(&env, 0);
        bump_instance(&env);

        env.events().publish((POOL_INITIALIZED,), (admin, token));

        Ok(())
    }

    /// Hand the administrator role to another identity. Both must sign.
    pub fn set_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        require_admin(&env, &caller)?;
        new_admin.require_auth();

        set_admin(&env, &new_admin);
        bump_instance(&env);

        env.events().publish((ADMIN_CHANGED,), (caller, new_admin));

        Ok(())
    }

    /// Flip the lifecycle gate, returning the new `paused` value
    pub fn toggle_pause(env: Env, caller: Address) -> Result<bool, Error> {
        require_admin(&env, &caller)?;

        let mut state = get_lifecycle(&env)?;
        state.paused = !state.paused;
        set_lifecycle(&env, &state);
        bump_instance(&env);

        let topic = if state.paused {
            CONTRACT_PAUSED
        } else {
            CONTRACT_UNPAUSED
        };
        env.events()
            .publish((topic,), (caller, env.ledger().sequence()));

        Ok(state.paused)
    }

    // ==================== Share ledger ====================

    /// Issue new shares to `recipient`
    ///
    /// # Arguments
    /// * `caller` - Must be the administrator
    /// * `recipient` - Receives the shares; an entry is created if absent
    /// * `amount` - Number of shares, must be positive
    pub fn issue(env: Env, caller: Address, recipient: Address, amount: u128) -> Result<(), Error> {
        require_admin(&env, &caller)?;
        require_not_paused(&env)?;
        require_positive_shares(amount)?;

        let mut state = get_lifecycle(&env)?;
        Self::open_entry(&env, &mut state, &recipient)?;

        let balance = get_balance(&env, &recipient)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        let total = get_total_shares(&env)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        set_balance(&env, &recipient, balance);
        set_total_shares(&env, total);
        set_lifecycle(&env, &state);
        bump_instance(&env);

        env.events().publish((SHARES_ISSUED, recipient), (amount, total));

        Ok(())
    }

    /// Move shares between two holders. `total_shares` is unchanged.
    ///
    /// # Arguments
    /// * `from` - Current holder, must sign
    /// * `to` - New holder
    /// * `amount` - Number of shares, must be positive and covered by `from`'s balance
    pub fn transfer(env: Env, from: Address, to: Address, amount: u128) -> Result<(), Error> {
        require_initialized(&env)?;
        from.require_auth();
        require_not_paused(&env)?;
        require_positive_shares(amount)?;

        let from_balance = get_balance(&env, &from);
        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }

        if from != to {
            let mut state = get_lifecycle(&env)?;
            Self::open_entry(&env, &mut state, &to)?;

            let to_balance = get_balance(&env, &to)
                .checked_add(amount)
                .ok_or(Error::ArithmeticOverflow)?;

            set_balance(&env, &from, from_balance - amount);
            set_balance(&env, &to, to_balance);
            set_lifecycle(&env, &state);
        }
        bump_instance(&env);

        env.events()
            .publish((SHARES_TRANSFERRED, from, to), amount);

        Ok(())
    }

    /// Share balance of `owner`, 0 when unknown
    pub fn balance_of(env: Env, owner: Address) -> u128 {
        get_balance(&env, &owner)
    }

    pub fn total_shares(env: Env) -> u128 {
        get_total_shares(&env)
    }

    // ==================== Distributions ====================

    /// Deposit `amount` of the dividend asset and open a new distribution
    ///
    /// The per-share rate is computed once, against the share total at this instant.
    /// Returns the id of the new distribution.
    ///
    /// # Arguments
    /// * `caller` - Must be the administrator; the deposit is pulled from this identity
    /// * `amount` - Deposit, at least `MIN_DIVIDEND_AMOUNT`
    pub fn create_distribution(env: Env, caller: Address, amount: i128) -> Result<u64, Error> {
        require_admin(&env, &caller)?;
        require_not_paused(&env)?;

        if amount < MIN_DIVIDEND_AMOUNT {
            return Err(Error::InvalidAmount);
        }

        let total_shares = get_total_shares(&env);
        if total_shares == 0 {
            return Err(Error::InvalidShares);
        }

        let per_share_rate =
            rate_for_total(&env, to_unsigned(amount)?, total_shares, PRECISION)?;

        let mut state = get_lifecycle(&env)?;
        let id = state.next_distribution_id;
        state.next_distribution_id = id.checked_add(1).ok_or(Error::ArithmeticOverflow)?;
        state.total_distributed = state
            .total_distributed
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        let token = get_token(&env)?;
        move_asset(&env, &token, &caller, &env.current_contract_address(), amount)?;

        let distribution = Distribution {
            id,
            total_amount: amount,
            per_share_rate,
            created_at: env.ledger().sequence(),
            creator: caller,
            total_claimed: 0,
            status: DistributionStatus::Active,
        };

        set_distribution(&env, &distribution);
        set_lifecycle(&env, &state);
        bump_instance(&env);

        log!(&env, "distribution {} opened at rate {}", id, per_share_rate);
        env.events().publish((DIVIDEND_DISTRIBUTED,), (id, amount));

        Ok(id)
    }

    pub fn get_distribution(env: Env, distribution_id: u64) -> Result<Distribution, Error> {
        get_distribution(&env, distribution_id)
    }

    /// Part of the deposit still held for the distribution, dust included.
    /// 0 once the distribution is closed and the remainder swept.
    pub fn unclaimed(env: Env, distribution_id: u64) -> Result<i128, Error> {
        let distribution = get_distribution(&env, distribution_id)?;
        if distribution.status == DistributionStatus::Completed {
            return Ok(0);
        }
        distribution
            .total_amount
            .checked_sub(distribution.total_claimed)
            .ok_or(Error::ArithmeticOverflow)
    }

    /// Close an active distribution and return its unclaimed remainder to the administrator
    ///
    /// Further claims against the distribution fail with `DistributionNotFound`.
    /// Returns the amount swept back.
    pub fn close_distribution(
        env: Env,
        caller: Address,
        distribution_id: u64,
    ) -> Result<i128, Error> {
        require_admin(&env, &caller)?;
        require_not_paused(&env)?;

        let mut distribution = get_distribution(&env, distribution_id)?;
        if distribution.status != DistributionStatus::Active {
            return Err(Error::DistributionClosed);
        }

        let remainder = distribution
            .total_amount
            .checked_sub(distribution.total_claimed)
            .ok_or(Error::ArithmeticOverflow)?;

        if remainder > 0 {
            let token = get_token(&env)?;
            move_asset(&env, &token, &env.current_contract_address(), &caller, remainder)?;
        }

        distribution.status = DistributionStatus::Completed;
        set_distribution(&env, &distribution);
        bump_instance(&env);

        env.events()
            .publish((DISTRIBUTION_CLOSED,), (distribution_id, remainder));

        Ok(remainder)
    }

    // ==================== Claims ====================

    /// Pay `claimant` their dividend for one distribution
    ///
    /// The entitlement uses the claimant's share balance at claim time, not at the time the
    /// distribution was created. Shares bought after a deposit earn against it; shares sold
    /// before claiming forfeit it.
    ///
    /// # Arguments
    /// * `distribution_id` - Active distribution to claim against
    /// * `claimant` - Holder being paid, must sign
    pub fn claim(env: Env, distribution_id: u64, claimant: Address) -> Result<i128, Error> {
        require_initialized(&env)?;
        claimant.require_auth();
        require_not_paused(&env)?;

        let mut distribution = Self::active_distribution(&env, distribution_id)?;

        let balance = get_balance(&env, &claimant);
        if balance == 0 {
            return Err(Error::InvalidShares);
        }

        if has_claim(&env, distribution_id, &claimant) {
            return Err(Error::AlreadyClaimed);
        }

        let amount = entitlement(&env, balance, distribution.per_share_rate)?;

        let total_claimed = distribution
            .total_claimed
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        if total_claimed > distribution.total_amount {
            return Err(Error::DistributionExhausted);
        }

        let now = env.ledger().sequence();
        let mut history = get_history(&env, &claimant).unwrap_or_default();
        history.total_received = history
            .total_received
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        history.last_claim_at = now;
        history.participation_count = history
            .participation_count
            .checked_add(1)
            .ok_or(Error::ArithmeticOverflow)?;

        let token = get_token(&env)?;
        move_asset(&env, &token, &env.current_contract_address(), &claimant, amount)?;

        distribution.total_claimed = total_claimed;
        set_distribution(&env, &distribution);
        set_claim(
            &env,
            distribution_id,
            &claimant,
            &Claim {
                amount_claimed: amount,
                claimed_at: now,
                claimed: true,
            },
        );
        set_history(&env, &claimant, &history);
        bump_instance(&env);

        env.events()
            .publish((DIVIDEND_CLAIMED, claimant), (distribution_id, amount));

        Ok(amount)
    }

    /// What `claim` would pay `owner` right now; 0 when it would fail
    pub fn claimable(env: Env, distribution_id: u64, owner: Address) -> i128 {
        let Ok(distribution) = Self::active_distribution(&env, distribution_id) else {
            return 0;
        };
        if has_claim(&env, distribution_id, &owner) {
            return 0;
        }
        let balance = get_balance(&env, &owner);
        let Ok(amount) = entitlement(&env, balance, distribution.per_share_rate) else {
            return 0;
        };
        match distribution.total_claimed.checked_add(amount) {
            Some(total) if total <= distribution.total_amount => amount,
            _ => 0,
        }
    }

    pub fn get_claim(env: Env, distribution_id: u64, owner: Address) -> Option<Claim> {
        get_claim(&env, distribution_id, &owner)
    }

    pub fn has_claimed(env: Env, distribution_id: u64, owner: Address) -> bool {
        has_claim(&env, distribution_id, &owner)
    }

    pub fn get_history(env: Env, owner: Address) -> Option<ShareholderHistory> {
        get_history(&env, &owner)
    }

    // ==================== Aggregates ====================

    pub fn get_lifecycle_state(env: Env) -> Result<LifecycleState, Error> {
        get_lifecycle(&env)
    }

    pub fn get_is_paused(env: Env) -> bool {
        is_paused(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        get_admin(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        get_token(&env)
    }
}

impl DividendPool {
    fn active_distribution(env: &Env, distribution_id: u64) -> Result<Distribution, Error> {
        let distribution = get_distribution(env, distribution_id)?;
        if distribution.status != DistributionStatus::Active {
            return Err(Error::DistributionNotFound);
        }
        Ok(distribution)
    }

    /// Count a new ledger entry for `owner` against `MAX_HOLDERS`
    fn open_entry(env: &Env, state: &mut LifecycleState, owner: &Address) -> Result<(), Error> {
        if has_balance(env, owner) {
            return Ok(());
        }
        if state.holder_count >= MAX_HOLDERS {
            return Err(Error::HolderLimitReached);
        }
        state.holder_count += 1;
        Ok(())
    }
}

/// Dividend owed on `balance` shares at `rate`, failing when it truncates to zero
fn entitlement(env: &Env, balance: u128, rate: u128) -> Result<i128, Error> {
    if balance == 0 {
        return Err(Error::InvalidShares);
    }
    let amount = to_amount(proportional_amount(env, balance, rate, PRECISION)?)?;
    if amount == 0 {
        return Err(Error::NoDividends);
    }
    Ok(amount)
}

/// Move dividend asset through the token contract. A rejected transfer fails the whole call.
fn move_asset(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let token_client = TokenClient::new(env, token);
    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::AssetTransferFailed),
    }
}
