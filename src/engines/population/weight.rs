use crate::types::WeightMode;
use serde::{Deserialize, Serialize};

/// Prediction history of a robot, fed by the scoring side
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeStats {
    pub total: u64,
    pub correct: u64,
    pub incorrect: u64,
    pub gains: f64,
    pub losses: f64,
}

impl OutcomeStats {
    /// Positive profit counts as a correct prediction, negative as incorrect.
    /// A flat outcome only advances the total.
    pub fn record(&mut self, profit: f64) {
        self.total += 1;
        if profit > 0.0 {
            self.correct += 1;
            self.gains += profit;
        } else if profit < 0.0 {
            self.incorrect += 1;
            self.losses += -profit;
        }
    }
}

/// Turns outcome history into earned weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightCalculator {
    mode: WeightMode,
    exponent: f64,
}

impl WeightCalculator {
    pub fn new(mode: WeightMode, exponent: f64) -> Self {
        Self { mode, exponent }
    }

    pub fn set_weight_mode(&mut self, mode: WeightMode) {
        self.mode = mode;
    }

    pub fn set_weight_exponent(&mut self, exponent: f64) {
        self.exponent = exponent;
    }

    pub fn mode(&self) -> WeightMode {
        self.mode
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    pub fn calculate(&self, stats: &OutcomeStats) -> f64 {
        let raw = match self.mode {
            WeightMode::WinCount => stats.correct as f64 - stats.incorrect as f64,
            WeightMode::WinRate => {
                if stats.total == 0 {
                    0.0
                } else {
                    2.0 * stats.correct as f64 / stats.total as f64 - 1.0
                }
            }
            WeightMode::ProfitCount => stats.gains - stats.losses,
            WeightMode::ProfitFactor => {
                if stats.losses > 0.0 {
                    stats.gains / stats.losses - 1.0
                } else {
                    stats.gains
                }
            }
        };
        // sign-preserving power
        raw.signum() * raw.abs().powf(self.exponent)
    }
}

impl Default for WeightCalculator {
    fn default() -> Self {
        Self::new(WeightMode::WinCount, 1.0)
    }
}
