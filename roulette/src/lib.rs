#![no_std]

mod error;
mod events;
mod interfaces;
mod ledger;
mod outcome;
mod settlement;
mod storage;

pub use error::RouletteError;
pub use interfaces::{EntropyClient, EntropyConsumerClient, SwapRouterClient};
pub use storage::{EngineConfig, OutcomeTier, PendingWager, SpinOutcome, TierBounds};

use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env};
use storage::{
    DataKey, BPS_DENOMINATOR, BUMP_AMOUNT, BUMP_THRESHOLD, MIN_EXPIRY_LEDGERS,
};

/// Roulette Settlement Contract
///
/// A wager is a fixed stake plus a user seed. The engine buys a random value
/// from an entropy provider and settles the wager when the provider calls
/// back with it.
///
/// Key features:
/// - Each wager is keyed by the provider's sequence number and settles once
/// - Final number = keccak256(user_seed || provider_random) mod 100 + 1
/// - Tiers: stake kept, stake swapped into asset A or B, or 2x stake paid out
/// - Owner sweeps the treasury and can refund wagers the provider never answered
#[contract]
pub struct Roulette;

#[contractimpl]
impl Roulette {
    /// Constructor: delegates to initialize() for the actual setup logic.
    pub fn __constructor(env: Env, owner: Address, config: EngineConfig) {
        Self::initialize(env, owner, config).expect("initialization failed");
    }

    /// Initialize the engine with its owner and configuration.
    ///
    /// # Arguments
    /// * `owner` - Address that can withdraw the treasury and refund stuck wagers
    /// * `config` - Collaborator addresses, stake amount and tier bounds
    pub fn initialize(env: Env, owner: Address, config: EngineConfig) -> Result<(), RouletteError> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(RouletteError::AlreadyInitialized);
        }

        if config.stake_amount <= 0 {
            return Err(RouletteError::InvalidAmount);
        }
        if config.max_slippage_bps as i128 > BPS_DENOMINATOR {
            return Err(RouletteError::InvalidAmount);
        }
        if config.expiry_ledgers < MIN_EXPIRY_LEDGERS {
            return Err(RouletteError::InvalidAmount);
        }
        outcome::validate_tiers(&config.tiers)?;

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Config, &config);
        Self::extend_instance(&env);

        Ok(())
    }

    /// Current entropy fee, read live from the provider.
    pub fn get_fee(env: Env) -> Result<i128, RouletteError> {
        let config = Self::config(&env)?;
        Self::entropy_fee(&env, &config)
    }

    /// Place a wager.
    ///
    /// # Arguments
    /// * `requester` - Player funding the wager (must authorize)
    /// * `user_seed` - Player's 32-byte random contribution
    /// * `payment` - Native token attached; at least fee + stake, excess is kept
    ///
    /// # Returns
    /// Sequence number the settlement callback will carry
    pub fn spin(
        env: Env,
        requester: Address,
        user_seed: BytesN<32>,
        payment: i128,
    ) -> Result<u64, RouletteError> {
        let config = Self::config(&env)?;

        let fee = Self::entropy_fee(&env, &config)?;
        let required = fee
            .checked_add(config.stake_amount)
            .ok_or(RouletteError::Overflow)?;
        if payment < required {
            return Err(RouletteError::WrongPaymentAmount);
        }

        requester.require_auth();

        let engine = env.current_contract_address();
        let token_client = token::Client::new(&env, &config.native_token);
        token_client.transfer(&requester, &engine, &payment);
        if fee > 0 {
            token_client.transfer(&engine, &config.entropy, &fee);
        }

        let entropy = EntropyClient::new(&env, &config.entropy);
        let sequence_number = entropy.request_with_callback(&engine, &user_seed);

        ledger::insert(
            &env,
            &PendingWager {
                sequence_number,
                requester: requester.clone(),
                user_seed: user_seed.clone(),
                stake_amount: config.stake_amount,
                requested_at: env.ledger().sequence(),
            },
        )?;

        Self::extend_instance(&env);
        events::wager_accepted(&env, &requester, sequence_number, &user_seed);

        Ok(sequence_number)
    }

    /// Entropy callback: settle the wager registered under `sequence_number`.
    ///
    /// # Arguments
    /// * `provider` - Must be the configured entropy provider (must authorize)
    /// * `sequence_number` - Number returned by `spin`
    /// * `random_value` - Provider's revealed random value
    pub fn settle(
        env: Env,
        provider: Address,
        sequence_number: u64,
        random_value: BytesN<32>,
    ) -> Result<SpinOutcome, RouletteError> {
        let config = Self::config(&env)?;
        if provider != config.entropy {
            return Err(RouletteError::UnauthorizedCallback);
        }
        provider.require_auth();

        // Removed before any payout; a failed payout rolls the removal back.
        let wager = ledger::take(&env, sequence_number)?;

        let final_number = outcome::final_number(&env, &wager.user_seed, &random_value);
        let tier = outcome::classify(final_number, &config.tiers);
        log!(&env, "settling wager", sequence_number, final_number);

        let payout = settlement::execute(&env, &config, &wager, tier, final_number)?;

        Ok(SpinOutcome {
            final_number,
            tier,
            payout,
        })
    }

    /// Sweep the whole native balance to the owner (owner only).
    ///
    /// # Returns
    /// Amount withdrawn
    pub fn withdraw_treasury(env: Env, owner: Address) -> Result<i128, RouletteError> {
        let config = Self::config(&env)?;
        Self::require_owner(&env, &owner)?;
        owner.require_auth();

        let engine = env.current_contract_address();
        let token_client = token::Client::new(&env, &config.native_token);
        let balance = token_client.balance(&engine);
        if balance > 0 {
            token_client.transfer(&engine, &owner, &balance);
        }

        events::withdrawn(&env, &owner, balance);
        Ok(balance)
    }

    /// Add native tokens to the treasury that backs double wins.
    pub fn fund_treasury(env: Env, from: Address, amount: i128) -> Result<(), RouletteError> {
        let config = Self::config(&env)?;
        if amount <= 0 {
            return Err(RouletteError::InvalidAmount);
        }

        from.require_auth();

        let token_client = token::Client::new(&env, &config.native_token);
        token_client.transfer(&from, &env.current_contract_address(), &amount);

        events::funded(&env, &from, amount);
        Ok(())
    }

    /// Return the stake of a wager the provider never answered (owner only).
    ///
    /// Allowed once `expiry_ledgers` ledgers have closed since the wager was
    /// accepted. The entropy fee is not recovered.
    ///
    /// # Returns
    /// Amount refunded to the requester
    pub fn refund_expired(
        env: Env,
        owner: Address,
        sequence_number: u64,
    ) -> Result<i128, RouletteError> {
        let config = Self::config(&env)?;
        Self::require_owner(&env, &owner)?;
        owner.require_auth();

        let pending = ledger::get(&env, sequence_number)
            .ok_or(RouletteError::UnknownOrSettledRequest)?;
        let expires_at = pending
            .requested_at
            .checked_add(config.expiry_ledgers)
            .ok_or(RouletteError::Overflow)?;
        if env.ledger().sequence() < expires_at {
            return Err(RouletteError::WagerNotExpired);
        }

        let wager = ledger::take(&env, sequence_number)?;

        let engine = env.current_contract_address();
        let token_client = token::Client::new(&env, &config.native_token);
        if token_client.balance(&engine) < wager.stake_amount {
            return Err(RouletteError::InsufficientTreasury);
        }
        token_client.transfer(&engine, &wager.requester, &wager.stake_amount);

        events::refunded(&env, &wager.requester, sequence_number, wager.stake_amount);
        Ok(wager.stake_amount)
    }

    /// Hand ownership to `new_owner` (owner only).
    pub fn transfer_ownership(
        env: Env,
        owner: Address,
        new_owner: Address,
    ) -> Result<(), RouletteError> {
        Self::require_initialized(&env)?;
        Self::require_owner(&env, &owner)?;
        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &new_owner);

        events::owner_changed(&env, &owner, &new_owner);
        Ok(())
    }

    /// Recompute the final number and tier for a pair of random values.
    ///
    /// Lets anyone verify a settlement from the `spin` event seed and the
    /// provider's revealed value.
    pub fn compute_outcome(
        env: Env,
        user_seed: BytesN<32>,
        random_value: BytesN<32>,
    ) -> Result<(u32, OutcomeTier), RouletteError> {
        let config = Self::config(&env)?;
        let final_number = outcome::final_number(&env, &user_seed, &random_value);
        Ok((final_number, outcome::classify(final_number, &config.tiers)))
    }

    /// Get a wager that is still waiting for its callback. Also extends the
    /// wager's storage TTL.
    pub fn get_pending(env: Env, sequence_number: u64) -> Option<PendingWager> {
        ledger::get(&env, sequence_number)
    }

    /// Native token balance held by the engine.
    pub fn treasury_balance(env: Env) -> Result<i128, RouletteError> {
        let config = Self::config(&env)?;
        let token_client = token::Client::new(&env, &config.native_token);
        Ok(token_client.balance(&env.current_contract_address()))
    }

    /// Get the full engine configuration.
    pub fn get_config(env: Env) -> Result<EngineConfig, RouletteError> {
        Self::config(&env)
    }

    /// Get the fixed stake per wager.
    pub fn get_stake_amount(env: Env) -> Result<i128, RouletteError> {
        Ok(Self::config(&env)?.stake_amount)
    }

    /// Get the owner address.
    pub fn get_owner(env: Env) -> Result<Address, RouletteError> {
        Self::require_initialized(&env)?;
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(RouletteError::StorageCorrupted)
    }

    /// Get the entropy provider address.
    pub fn get_entropy(env: Env) -> Result<Address, RouletteError> {
        Ok(Self::config(&env)?.entropy)
    }

    /// Get the swap router address.
    pub fn get_swap_router(env: Env) -> Result<Address, RouletteError> {
        Ok(Self::config(&env)?.swap_router)
    }

    pub fn get_native_token(env: Env) -> Result<Address, RouletteError> {
        Ok(Self::config(&env)?.native_token)
    }

    pub fn get_asset_a(env: Env) -> Result<Address, RouletteError> {
        Ok(Self::config(&env)?.asset_a)
    }

    pub fn get_asset_b(env: Env) -> Result<Address, RouletteError> {
        Ok(Self::config(&env)?.asset_b)
    }

    pub fn get_tier_bounds(env: Env) -> Result<TierBounds, RouletteError> {
        Ok(Self::config(&env)?.tiers)
    }

    // --- Internal helpers ---

    fn require_initialized(env: &Env) -> Result<(), RouletteError> {
        if !env.storage().instance().has(&DataKey::Config) {
            return Err(RouletteError::NotInitialized);
        }
        Ok(())
    }

    fn config(env: &Env) -> Result<EngineConfig, RouletteError> {
        Self::require_initialized(env)?;
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(RouletteError::StorageCorrupted)
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), RouletteError> {
        let owner: Address = env
            .storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(RouletteError::StorageCorrupted)?;
        if *caller != owner {
            return Err(RouletteError::Unauthorized);
        }
        Ok(())
    }

    fn extend_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
    }

    fn entropy_fee(env: &Env, config: &EngineConfig) -> Result<i128, RouletteError> {
        let fee = EntropyClient::new(env, &config.entropy).get_fee();
        if fee < 0 {
            return Err(RouletteError::InvalidAmount);
        }
        Ok(fee)
    }
}
