//! Tick bounds and alignment.

/// Lowest tick a concentrated-liquidity pool can reach.
pub const MIN_TICK: i32 = -887_272;
/// Highest tick a concentrated-liquidity pool can reach.
pub const MAX_TICK: i32 = 887_272;

/// Returns true if the tick lies within `[MIN_TICK, MAX_TICK]`.
pub fn is_in_bounds(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

/// Returns true if the tick is a multiple of the spacing.
///
/// A non-positive spacing aligns nothing.
pub fn is_aligned(tick: i32, spacing: i32) -> bool {
    spacing > 0 && tick % spacing == 0
}
