//! Tick Grid Arithmetic
//!
//! Rounding of prices onto the exchange tick grid and the spread policy that
//! keeps a two-sided quote tradable.
//!
//! Only [`floor_to_tick`] and [`ceil_to_tick`] are used when emitting quotes:
//! a bid never rounds up past its theoretical value and an ask never rounds
//! down past its theoretical value.

/// Tolerance used when checking grid alignment
pub const GRID_TOLERANCE: f64 = 1e-9;

/// Round to the nearest multiple of `tick` (halves away from zero)
///
/// Diagnostics only; quotes go through floor/ceil.
#[inline]
pub fn round_to_tick(x: f64, tick: f64) -> f64 {
    (x / tick).round() * tick
}

/// Largest multiple of `tick` that is <= `x`
#[inline]
pub fn floor_to_tick(x: f64, tick: f64) -> f64 {
    (x / tick).floor() * tick
}

/// Smallest multiple of `tick` that is >= `x`
#[inline]
pub fn ceil_to_tick(x: f64, tick: f64) -> f64 {
    (x / tick).ceil() * tick
}

/// Whether `x` sits on the tick grid within [`GRID_TOLERANCE`]
pub fn is_on_grid(x: f64, tick: f64) -> bool {
    let units = x / tick;
    (units - units.round()).abs() < GRID_TOLERANCE
}

/// Spread width measured in whole ticks
#[inline]
pub fn spread_in_ticks(bid: f64, ask: f64, tick: f64) -> i64 {
    ((ask - bid) / tick).round() as i64
}

/// Re-center a quote symmetrically around `mid` at `width_ticks` wide.
///
/// Each side is rounded outward independently, so the result can be wider
/// than requested but never narrower.
fn recenter(mid: f64, tick: f64, width_ticks: u32) -> (f64, f64) {
    let half = f64::from(width_ticks) * tick / 2.0;
    (floor_to_tick(mid - half, tick), ceil_to_tick(mid + half, tick))
}

/// Normalize a bid/ask pair so that it is on-grid and uncrossed.
///
/// Steps, in order:
/// 1. A crossed or locked pair is reset to one tick either side of `mid`.
/// 2. A spread under `max(1, min_spread_ticks)` is re-centered at the minimum width.
/// 3. A spread over `max_spread_ticks` (when set) is re-centered at the maximum width.
/// 4. Both sides are snapped onto the grid (bid down, ask up).
/// 5. If the pair is still not strictly ordered, ask becomes `bid + tick`.
///
/// The output always satisfies `bid < ask`. It can sit one tick outside the
/// max width when grid rounding and the max constraint disagree; that
/// tolerance is accepted rather than clamped further.
pub fn enforce_spread(
    bid: f64,
    ask: f64,
    mid: f64,
    tick: f64,
    min_spread_ticks: u32,
    max_spread_ticks: Option<u32>,
) -> (f64, f64) {
    let (mut bid, mut ask) = (bid, ask);

    if ask <= bid {
        bid = floor_to_tick(mid - tick, tick);
        ask = ceil_to_tick(mid + tick, tick);
    }

    let min_ticks = min_spread_ticks.max(1);
    if spread_in_ticks(bid, ask, tick) < i64::from(min_ticks) {
        (bid, ask) = recenter(mid, tick, min_ticks);
    }

    if let Some(max_ticks) = max_spread_ticks {
        if spread_in_ticks(bid, ask, tick) > i64::from(max_ticks) {
            (bid, ask) = recenter(mid, tick, max_ticks);
        }
    }

    bid = floor_to_tick(bid, tick);
    ask = ceil_to_tick(ask, tick);

    if ask <= bid {
        ask = bid + tick;
    }

    (bid, ask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TICK: f64 = 0.01;

    #[test]
    fn test_floor_and_ceil_bracket_value() {
        let x = 100.234;
        let lo = floor_to_tick(x, TICK);
        let hi = ceil_to_tick(x, TICK);

        assert!(lo <= x && x <= hi);
        assert_abs_diff_eq!(lo, 100.23, epsilon = 1e-9);
        assert_abs_diff_eq!(hi, 100.24, epsilon = 1e-9);
        assert!(is_on_grid(lo, TICK));
        assert!(is_on_grid(hi, TICK));
    }

    #[test]
    fn test_round_to_tick_nearest() {
        assert_abs_diff_eq!(round_to_tick(100.234, TICK), 100.23, epsilon = 1e-9);
        assert_abs_diff_eq!(round_to_tick(100.236, TICK), 100.24, epsilon = 1e-9);
        assert_abs_diff_eq!(round_to_tick(-0.236, TICK), -0.24, epsilon = 1e-9);
    }

    #[test]
    fn test_coarse_tick() {
        assert_abs_diff_eq!(floor_to_tick(17.0, 5.0), 15.0);
        assert_abs_diff_eq!(ceil_to_tick(17.0, 5.0), 20.0);
        assert_abs_diff_eq!(floor_to_tick(-17.0, 5.0), -20.0);
    }

    #[test]
    fn test_crossed_pair_is_reset_around_mid() {
        let (bid, ask) = enforce_spread(101.0, 99.0, 100.0, TICK, 1, None);

        assert!(bid < ask);
        assert!(spread_in_ticks(bid, ask, TICK) >= 1);
        assert!(bid < 100.0 && ask > 100.0);
        assert!(is_on_grid(bid, TICK));
        assert!(is_on_grid(ask, TICK));
    }

    #[test]
    fn test_locked_pair_is_uncrossed() {
        let (bid, ask) = enforce_spread(100.0, 100.0, 100.0, TICK, 1, None);
        assert!(bid < ask);
    }

    #[test]
    fn test_min_spread_widens() {
        let (bid, ask) = enforce_spread(99.99, 100.01, 100.0, TICK, 10, None);

        assert!(spread_in_ticks(bid, ask, TICK) >= 10);
        assert!(bid < 100.0 && ask > 100.0);
    }

    #[test]
    fn test_max_spread_narrows() {
        let (bid, ask) = enforce_spread(99.0, 101.0, 100.0, TICK, 1, Some(4));

        let width = spread_in_ticks(bid, ask, TICK);
        assert!(width >= 4 && width <= 5, "width {width}");
        assert!(bid < ask);
    }

    #[test]
    fn test_wide_spread_untouched_without_max() {
        let (bid, ask) = enforce_spread(99.0, 101.0, 100.0, TICK, 1, None);

        assert_abs_diff_eq!(bid, 99.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ask, 101.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_min_treated_as_one() {
        let (bid, ask) = enforce_spread(100.0, 100.0, 100.0, TICK, 0, None);
        assert!(spread_in_ticks(bid, ask, TICK) >= 1);
    }

    #[test]
    fn test_negative_mid_still_ordered() {
        let (bid, ask) = enforce_spread(-5.0, -6.0, -5.5, TICK, 2, Some(3));

        assert!(bid < ask);
        assert!(is_on_grid(bid, TICK));
        assert!(is_on_grid(ask, TICK));
    }
}
