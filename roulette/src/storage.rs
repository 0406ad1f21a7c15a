use soroban_sdk::{contracttype, Address, BytesN};

/// Storage keys for the contract.
///
/// `Owner` and `Config` live in instance storage; every `Pending` entry is
/// its own persistent ledger entry.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Owner address (treasury and refund admin)
    Owner,
    /// Immutable engine configuration
    Config,
    /// Wager awaiting its entropy callback: Pending(sequence_number)
    Pending(u64),
}

/// Engine configuration, fixed at construction.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct EngineConfig {
    /// Entropy provider contract (fee quote, randomness request, callback sender)
    pub entropy: Address,
    /// Swap router used for the asset tiers
    pub swap_router: Address,
    /// Settlement token: stakes, fees and double payouts are in this asset
    pub native_token: Address,
    /// Target asset of the SwapToAssetA tier (e.g. a stable asset)
    pub asset_a: Address,
    /// Target asset of the SwapToAssetB tier (e.g. a volatile asset)
    pub asset_b: Address,
    /// Stake taken from every wager (scaled by 10^7)
    pub stake_amount: i128,
    /// Outcome interval boundaries
    pub tiers: TierBounds,
    /// Tolerated shortfall against the router quote, in basis points
    pub max_slippage_bps: u32,
    /// Ledgers after which an unanswered wager may be refunded
    pub expiry_ledgers: u32,
}

/// Inclusive upper bounds of the first three outcome intervals over [1, 100].
/// Everything above `swap_b_max` is a double win.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TierBounds {
    pub lost_max: u32,
    pub swap_a_max: u32,
    pub swap_b_max: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum OutcomeTier {
    Lost,
    SwapToAssetA,
    SwapToAssetB,
    DoubleWin,
}

/// A wager waiting for its entropy callback.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PendingWager {
    pub sequence_number: u64,
    /// Funded the wager; sole recipient of any payout
    pub requester: Address,
    pub user_seed: BytesN<32>,
    pub stake_amount: i128,
    /// Ledger sequence at which the wager was accepted
    pub requested_at: u32,
}

/// Receipt returned by a settlement callback.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SpinOutcome {
    pub final_number: u32,
    pub tier: OutcomeTier,
    /// 0 when lost, swap output for the asset tiers, 2x stake for a double win
    pub payout: i128,
}

/// Final outcome numbers are drawn from [1, OUTCOME_RANGE].
pub const OUTCOME_RANGE: u32 = 100;

/// Basis points denominator (100% = 10000 bp).
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Shortest refund timeout accepted at construction (~5 minutes at 5s/ledger).
pub const MIN_EXPIRY_LEDGERS: u32 = 60;

/// Seconds a swap may wait before the router must reject it.
pub const SWAP_DEADLINE_SECS: u64 = 300;

/// Storage TTL (~30 days at 5s/ledger), extended whenever a wager is written or read.
pub const DAY_IN_LEDGERS: u32 = 17_280;
pub const BUMP_THRESHOLD: u32 = 14 * DAY_IN_LEDGERS;
pub const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
