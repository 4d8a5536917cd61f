//! Momentum indicators.

use kitescan_core::traits::Indicator;

/// Relative Strength Index (RSI), simple-moving-average variant.
///
/// Gains and losses are averaged with a rolling simple mean over the
/// period, not Wilder's exponential smoothing, so values react faster
/// than the classic RSI despite carrying the traditional name.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// The common period is 14.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    /// Rolling simple mean over full windows only.
    fn rolling_mean(values: &[f64], period: usize) -> Vec<f64> {
        if values.len() < period {
            return vec![];
        }
        let period_f64 = period as f64;
        values
            .windows(period)
            .map(|w| w.iter().sum::<f64>() / period_f64)
            .collect()
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() <= self.period {
            return vec![];
        }

        // Split price changes into gains and losses
        let mut gains = Vec::with_capacity(data.len() - 1);
        let mut losses = Vec::with_capacity(data.len() - 1);

        for i in 1..data.len() {
            let change = data[i] - data[i - 1];
            if change > 0.0 {
                gains.push(change);
                losses.push(0.0);
            } else {
                gains.push(0.0);
                losses.push(-change);
            }
        }

        let avg_gains = Self::rolling_mean(&gains, self.period);
        let avg_losses = Self::rolling_mean(&losses, self.period);

        avg_gains
            .iter()
            .zip(avg_losses.iter())
            .map(|(&gain, &loss)| {
                if gain == 0.0 && loss == 0.0 {
                    50.0 // Undefined on a flat window, use midpoint
                } else if loss == 0.0 {
                    100.0
                } else {
                    100.0 - (100.0 / (1.0 + gain / loss))
                }
            })
            .collect()
    }

    fn period(&self) -> usize {
        self.period + 1 // Need period+1 data points for period deltas
    }

    fn name(&self) -> &str {
        "RSI"
    }
}
