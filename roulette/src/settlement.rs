//! Executes the payout for a classified wager.

use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::{log, symbol_short, token, vec, Address, Env, IntoVal};

use crate::error::RouletteError;
use crate::events;
use crate::interfaces::SwapRouterClient;
use crate::storage::{
    EngineConfig, OutcomeTier, PendingWager, BPS_DENOMINATOR, SWAP_DEADLINE_SECS,
};

/// Pay out `wager` according to `tier`. Returns the amount delivered to the
/// requester (0 for a loss).
pub fn execute(
    env: &Env,
    config: &EngineConfig,
    wager: &PendingWager,
    tier: OutcomeTier,
    final_number: u32,
) -> Result<i128, RouletteError> {
    match tier {
        OutcomeTier::Lost => {
            events::lost(env, &wager.requester, wager.sequence_number, final_number);
            Ok(0)
        }
        OutcomeTier::SwapToAssetA => {
            swap_and_forward(env, config, wager, &config.asset_a, final_number)
        }
        OutcomeTier::SwapToAssetB => {
            swap_and_forward(env, config, wager, &config.asset_b, final_number)
        }
        OutcomeTier::DoubleWin => double_payout(env, config, wager, final_number),
    }
}

/// Lowest output accepted for a quote, given the slippage tolerance.
pub fn min_acceptable_out(quoted: i128, max_slippage_bps: u32) -> Result<i128, RouletteError> {
    let keep_bps = BPS_DENOMINATOR
        .checked_sub(max_slippage_bps as i128)
        .ok_or(RouletteError::Overflow)?;
    quoted
        .checked_mul(keep_bps)
        .ok_or(RouletteError::Overflow)?
        .checked_div(BPS_DENOMINATOR)
        .ok_or(RouletteError::Overflow)
}

fn swap_and_forward(
    env: &Env,
    config: &EngineConfig,
    wager: &PendingWager,
    target: &Address,
    final_number: u32,
) -> Result<i128, RouletteError> {
    let router = SwapRouterClient::new(env, &config.swap_router);
    let amount_in = wager.stake_amount;

    let quoted = match router.try_get_amount_out(&config.native_token, target, &amount_in) {
        Ok(Ok(quoted)) => quoted,
        _ => {
            log!(env, "router quote failed", wager.sequence_number);
            return Err(RouletteError::SwapFailed);
        }
    };
    let min_out = min_acceptable_out(quoted, config.max_slippage_bps)?;
    if min_out <= 0 {
        log!(env, "router quote too small", wager.sequence_number, quoted);
        return Err(RouletteError::SwapFailed);
    }

    let deadline = env
        .ledger()
        .timestamp()
        .checked_add(SWAP_DEADLINE_SECS)
        .ok_or(RouletteError::Overflow)?;

    // The router pulls exactly the stake from this contract, nothing more.
    let engine = env.current_contract_address();
    env.authorize_as_current_contract(vec![
        env,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: config.native_token.clone(),
                fn_name: symbol_short!("transfer"),
                args: (engine.clone(), config.swap_router.clone(), amount_in).into_val(env),
            },
            sub_invocations: vec![env],
        }),
    ]);

    let amount_out = match router.try_swap_exact_in(
        &engine,
        &config.native_token,
        target,
        &amount_in,
        &min_out,
        &wager.requester,
        &deadline,
    ) {
        Ok(Ok(amount_out)) => amount_out,
        _ => {
            log!(env, "router swap failed", wager.sequence_number, min_out);
            return Err(RouletteError::SwapFailed);
        }
    };
    if amount_out < min_out {
        return Err(RouletteError::SwapFailed);
    }

    events::swap(
        env,
        &wager.requester,
        wager.sequence_number,
        final_number,
        target,
        amount_out,
    );
    Ok(amount_out)
}

fn double_payout(
    env: &Env,
    config: &EngineConfig,
    wager: &PendingWager,
    final_number: u32,
) -> Result<i128, RouletteError> {
    let payout = wager
        .stake_amount
        .checked_mul(2)
        .ok_or(RouletteError::Overflow)?;

    let token_client = token::Client::new(env, &config.native_token);
    let engine = env.current_contract_address();
    if token_client.balance(&engine) < payout {
        log!(env, "treasury cannot cover double win", wager.sequence_number, payout);
        return Err(RouletteError::InsufficientTreasury);
    }
    token_client.transfer(&engine, &wager.requester, &payout);

    events::double_win(env, &wager.requester, wager.sequence_number, final_number, payout);
    Ok(payout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_acceptable_out() {
        assert_eq!(min_acceptable_out(10_000, 0), Ok(10_000));
        assert_eq!(min_acceptable_out(10_000, 100), Ok(9_900));
        assert_eq!(min_acceptable_out(10_000, 10_000), Ok(0));
        // Truncates toward zero
        assert_eq!(min_acceptable_out(99, 50), Ok(98));
    }

    #[test]
    fn test_min_acceptable_out_overflow() {
        assert_eq!(
            min_acceptable_out(i128::MAX, 100),
            Err(RouletteError::Overflow)
        );
    }
}
