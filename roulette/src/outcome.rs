//! Outcome derivation and tier classification.
//!
//! The final number depends only on the two random inputs:
//!
//! - digest = keccak256(user_seed || provider_random)
//! - final  = (digest as big-endian u256) mod 100 + 1
//!
//! Tier intervals are inclusive and contiguous over [1, 100]:
//! [1, lost_max], [lost_max+1, swap_a_max], [swap_a_max+1, swap_b_max],
//! [swap_b_max+1, 100].

use soroban_sdk::{Bytes, BytesN, Env};

use crate::error::RouletteError;
use crate::storage::{OutcomeTier, TierBounds, OUTCOME_RANGE};

/// Hash the user seed and the provider value into a single 32-byte digest.
pub fn mix(env: &Env, user_seed: &BytesN<32>, provider_random: &BytesN<32>) -> BytesN<32> {
    let mut preimage = Bytes::from_array(env, &user_seed.to_array());
    preimage.extend_from_array(&provider_random.to_array());
    env.crypto().keccak256(&preimage).into()
}

/// Reduce a 32-byte big-endian integer into [1, OUTCOME_RANGE].
///
/// Horner's scheme keeps the accumulator below 256 * OUTCOME_RANGE,
/// so no wide arithmetic is needed.
pub fn reduce(digest: &[u8; 32]) -> u32 {
    let remainder = digest
        .iter()
        .fold(0u32, |acc, byte| (acc * 256 + *byte as u32) % OUTCOME_RANGE);
    remainder + 1
}

pub fn final_number(env: &Env, user_seed: &BytesN<32>, provider_random: &BytesN<32>) -> u32 {
    reduce(&mix(env, user_seed, provider_random).to_array())
}

pub fn classify(final_number: u32, tiers: &TierBounds) -> OutcomeTier {
    if final_number <= tiers.lost_max {
        OutcomeTier::Lost
    } else if final_number <= tiers.swap_a_max {
        OutcomeTier::SwapToAssetA
    } else if final_number <= tiers.swap_b_max {
        OutcomeTier::SwapToAssetB
    } else {
        OutcomeTier::DoubleWin
    }
}

/// Every tier must own at least one number in [1, OUTCOME_RANGE].
pub fn validate_tiers(tiers: &TierBounds) -> Result<(), RouletteError> {
    let ordered = tiers.lost_max >= 1
        && tiers.lost_max < tiers.swap_a_max
        && tiers.swap_a_max < tiers.swap_b_max
        && tiers.swap_b_max < OUTCOME_RANGE;
    if !ordered {
        return Err(RouletteError::InvalidTierBounds);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIERS: TierBounds = TierBounds {
        lost_max: 20,
        swap_a_max: 70,
        swap_b_max: 95,
    };

    fn digest_ending_with(tail: &[u8]) -> [u8; 32] {
        let mut digest = [0u8; 32];
        digest[32 - tail.len()..].copy_from_slice(tail);
        digest
    }

    #[test]
    fn test_reduce_small_values() {
        assert_eq!(reduce(&[0u8; 32]), 1);
        assert_eq!(reduce(&digest_ending_with(&[99])), 100);
        assert_eq!(reduce(&digest_ending_with(&[100])), 1);
        // 256 mod 100 = 56
        assert_eq!(reduce(&digest_ending_with(&[1, 0])), 57);
    }

    #[test]
    fn test_reduce_full_width() {
        // (2^256 - 1) mod 100 = 35
        assert_eq!(reduce(&[0xff; 32]), 36);
        // 2^255 mod 100 = 68
        let mut high_bit = [0u8; 32];
        high_bit[0] = 0x80;
        assert_eq!(reduce(&high_bit), 69);
    }

    #[test]
    fn test_final_number_is_deterministic_and_bounded() {
        let env = Env::default();
        let seed = BytesN::from_array(&env, &[7u8; 32]);

        for i in 0u8..50 {
            let provider = BytesN::from_array(&env, &[i; 32]);
            let first = final_number(&env, &seed, &provider);
            let second = final_number(&env, &seed, &provider);
            assert_eq!(first, second);
            assert!((1..=OUTCOME_RANGE).contains(&first));
        }
    }

    #[test]
    fn test_mix_depends_on_both_inputs() {
        let env = Env::default();
        let a = BytesN::from_array(&env, &[1u8; 32]);
        let b = BytesN::from_array(&env, &[2u8; 32]);

        assert_ne!(mix(&env, &a, &b), mix(&env, &b, &a));
        assert_ne!(mix(&env, &a, &a), mix(&env, &a, &b));
    }

    #[test]
    fn test_classify_sample_points() {
        assert_eq!(classify(2, &TIERS), OutcomeTier::Lost);
        assert_eq!(classify(21, &TIERS), OutcomeTier::SwapToAssetA);
        assert_eq!(classify(71, &TIERS), OutcomeTier::SwapToAssetB);
        assert_eq!(classify(96, &TIERS), OutcomeTier::DoubleWin);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(1, &TIERS), OutcomeTier::Lost);
        assert_eq!(classify(20, &TIERS), OutcomeTier::Lost);
        assert_eq!(classify(70, &TIERS), OutcomeTier::SwapToAssetA);
        assert_eq!(classify(95, &TIERS), OutcomeTier::SwapToAssetB);
        assert_eq!(classify(100, &TIERS), OutcomeTier::DoubleWin);
    }

    #[test]
    fn test_validate_tiers() {
        assert_eq!(validate_tiers(&TIERS), Ok(()));

        let narrowest = TierBounds {
            lost_max: 1,
            swap_a_max: 2,
            swap_b_max: 99,
        };
        assert_eq!(validate_tiers(&narrowest), Ok(()));

        let empty_lost = TierBounds {
            lost_max: 0,
            ..TIERS
        };
        assert_eq!(
            validate_tiers(&empty_lost),
            Err(RouletteError::InvalidTierBounds)
        );

        let overlapping = TierBounds {
            swap_a_max: 20,
            ..TIERS
        };
        assert_eq!(
            validate_tiers(&overlapping),
            Err(RouletteError::InvalidTierBounds)
        );

        let no_double_win = TierBounds {
            swap_b_max: 100,
            ..TIERS
        };
        assert_eq!(
            validate_tiers(&no_double_win),
            Err(RouletteError::InvalidTierBounds)
        );
    }
}
