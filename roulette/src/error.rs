use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RouletteError {
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,
    /// Attached payment is below entropy fee + stake
    WrongPaymentAmount = 3,
    /// Settlement callback not sent by the configured entropy provider
    UnauthorizedCallback = 4,
    /// No pending wager for this sequence number (unknown or already settled)
    UnknownOrSettledRequest = 5,
    /// Swap router rejected the swap (liquidity, slippage, deadline)
    SwapFailed = 6,
    /// Engine balance cannot cover the payout
    InsufficientTreasury = 7,
    /// Only the owner can perform this action
    Unauthorized = 8,
    /// Tier bounds must be strictly increasing within [1, 99]
    InvalidTierBounds = 9,
    /// Amount, fee or basis points out of range
    InvalidAmount = 10,
    /// Arithmetic overflow
    Overflow = 11,
    /// Critical storage data missing (contract state corrupted)
    StorageCorrupted = 12,
    /// Wager has not been pending long enough to be refunded
    WagerNotExpired = 13,
    /// Entropy provider issued a sequence number that is still pending
    DuplicateSequence = 14,
}
