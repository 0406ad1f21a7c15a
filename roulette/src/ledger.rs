//! Pending wagers keyed by entropy sequence number.
//!
//! An entry exists from `spin` until the wager is settled or refunded;
//! `take` removes it before the caller acts on it.

use soroban_sdk::Env;

use crate::error::RouletteError;
use crate::storage::{DataKey, PendingWager, BUMP_AMOUNT, BUMP_THRESHOLD};

pub fn insert(env: &Env, wager: &PendingWager) -> Result<(), RouletteError> {
    let key = DataKey::Pending(wager.sequence_number);
    if env.storage().persistent().has(&key) {
        return Err(RouletteError::DuplicateSequence);
    }
    env.storage().persistent().set(&key, wager);
    env.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_AMOUNT);
    Ok(())
}

/// Read a pending wager and push its TTL out again. An entry that was
/// already archived has to be restored before it can be read.
pub fn get(env: &Env, sequence_number: u64) -> Option<PendingWager> {
    let key = DataKey::Pending(sequence_number);
    let wager: Option<PendingWager> = env.storage().persistent().get(&key);
    if wager.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, BUMP_THRESHOLD, BUMP_AMOUNT);
    }
    wager
}

/// Remove and return the wager; a second call for the same number fails.
pub fn take(env: &Env, sequence_number: u64) -> Result<PendingWager, RouletteError> {
    let key = DataKey::Pending(sequence_number);
    let wager: PendingWager = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(RouletteError::UnknownOrSettledRequest)?;
    env.storage().persistent().remove(&key);
    Ok(wager)
}
