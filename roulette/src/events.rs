//! Event publishing. Topics are `(name, account)`; the account is the
//! requester for wager events and the owner/funder for treasury events.

use soroban_sdk::{symbol_short, Address, BytesN, Env, Symbol};

pub const WAGER_ACCEPTED: Symbol = symbol_short!("spin");
pub const LOST: Symbol = symbol_short!("lost");
pub const SWAP: Symbol = symbol_short!("swap");
pub const DOUBLE_WIN: Symbol = symbol_short!("doublewin");
pub const REFUNDED: Symbol = symbol_short!("refund");
pub const FUNDED: Symbol = symbol_short!("funded");
pub const WITHDRAWN: Symbol = symbol_short!("withdrawn");
pub const OWNER_CHANGED: Symbol = symbol_short!("owner");

pub fn wager_accepted(
    env: &Env,
    requester: &Address,
    sequence_number: u64,
    user_seed: &BytesN<32>,
) {
    env.events().publish(
        (WAGER_ACCEPTED, requester.clone()),
        (sequence_number, user_seed.clone()),
    );
}

pub fn lost(env: &Env, requester: &Address, sequence_number: u64, final_number: u32) {
    env.events()
        .publish((LOST, requester.clone()), (sequence_number, final_number));
}

pub fn swap(
    env: &Env,
    requester: &Address,
    sequence_number: u64,
    final_number: u32,
    target_asset: &Address,
    amount_out: i128,
) {
    env.events().publish(
        (SWAP, requester.clone()),
        (sequence_number, final_number, target_asset.clone(), amount_out),
    );
}

pub fn double_win(
    env: &Env,
    requester: &Address,
    sequence_number: u64,
    final_number: u32,
    amount: i128,
) {
    env.events().publish(
        (DOUBLE_WIN, requester.clone()),
        (sequence_number, final_number, amount),
    );
}

pub fn refunded(env: &Env, requester: &Address, sequence_number: u64, amount: i128) {
    env.events()
        .publish((REFUNDED, requester.clone()), (sequence_number, amount));
}

pub fn funded(env: &Env, from: &Address, amount: i128) {
    env.events().publish((FUNDED, from.clone()), amount);
}

pub fn withdrawn(env: &Env, owner: &Address, amount: i128) {
    env.events().publish((WITHDRAWN, owner.clone()), amount);
}

pub fn owner_changed(env: &Env, old_owner: &Address, new_owner: &Address) {
    env.events()
        .publish((OWNER_CHANGED, old_owner.clone()), new_owner.clone());
}
