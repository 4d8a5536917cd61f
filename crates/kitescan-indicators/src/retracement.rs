//! Fibonacci retracement levels.

use kitescan_core::types::FibLevels;

/// Fibonacci retracement over a whole price window.
///
/// Levels are interpolated linearly between the window minimum and
/// maximum at the fixed ratios 0, 23.6, 38.2, 50, 61.8 and 100 percent,
/// measured down from the high.
#[derive(Debug, Clone, Copy, Default)]
pub struct FibonacciRetracement;

impl FibonacciRetracement {
    /// Compute the retracement levels.
    ///
    /// Returns `None` on an empty window. A single price yields all six
    /// levels collapsed onto that price.
    pub fn levels(prices: &[f64]) -> Option<FibLevels> {
        if prices.is_empty() {
            return None;
        }

        let max = prices.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min = prices.iter().cloned().fold(f64::INFINITY, f64::min);
        let diff = max - min;

        Some(FibLevels {
            high: max,
            r236: max - 0.236 * diff,
            r382: max - 0.382 * diff,
            r500: max - 0.5 * diff,
            r618: max - 0.618 * diff,
            low: min,
        })
    }
}
