//! Interfaces of the external collaborators.

use soroban_sdk::{contractclient, Address, BytesN, Env};

use crate::storage::SpinOutcome;

/// Entropy provider consumed by the engine.
#[allow(dead_code)]
#[contractclient(name = "EntropyClient")]
pub trait Entropy {
    /// Current fee, in the native token, for one randomness request.
    fn get_fee(env: Env) -> i128;

    /// Register a request; the provider later calls `settle` on `requester`
    /// with the returned sequence number.
    fn request_with_callback(env: Env, requester: Address, user_seed: BytesN<32>) -> u64;
}

/// Callback the entropy provider invokes once its random value is revealed.
#[allow(dead_code)]
#[contractclient(name = "EntropyConsumerClient")]
pub trait EntropyConsumer {
    fn settle(
        env: Env,
        provider: Address,
        sequence_number: u64,
        random_value: BytesN<32>,
    ) -> SpinOutcome;
}

/// Swap facility used for the asset tiers.
#[allow(dead_code, clippy::too_many_arguments)]
#[contractclient(name = "SwapRouterClient")]
pub trait SwapRouter {
    fn get_amount_out(env: Env, token_in: Address, token_out: Address, amount_in: i128) -> i128;

    /// Pulls `amount_in` of `token_in` from `sender` and sends at least
    /// `min_out` of `token_out` to `to`, or fails.
    fn swap_exact_in(
        env: Env,
        sender: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        min_out: i128,
        to: Address,
        deadline: u64,
    ) -> i128;
}
