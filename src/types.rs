use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a robot inside a population, allocated on first save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RobotName(pub u64);

impl fmt::Display for RobotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "robot-{}", self.0)
    }
}

/// Pool a breeding candidate belongs to, by the sign of its weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    NonNegative, // weight >= 0
    Negative,    // weight < 0
}

impl Polarity {
    pub fn matches(self, weight: f64) -> bool {
        match self {
            Polarity::NonNegative => weight >= 0.0,
            Polarity::Negative => weight < 0.0,
        }
    }
}

impl From<bool> for Polarity {
    fn from(direction: bool) -> Self {
        if direction {
            Polarity::NonNegative
        } else {
            Polarity::Negative
        }
    }
}

/// How a child's starting weight is derived from its parents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InheritedWeightMode {
    Parents,
    Ancestors,
    AncestorsLog,
}

/// How earned weight is derived from a robot's outcome history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightMode {
    WinCount,
    WinRate,
    ProfitCount,
    ProfitFactor,
}

/// Set of input data columns a robot's instructions may read.
///
/// Backed by a 64-bit mask, so at most 64 columns are addressable. A mask is
/// never empty: every constructor keeps at least one column allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnAccess {
    bits: u64,
    columns: usize,
}

impl ColumnAccess {
    pub const MAX_COLUMNS: usize = 64;

    /// Every column readable
    pub fn all(columns: usize) -> Self {
        let columns = columns.clamp(1, Self::MAX_COLUMNS);
        Self {
            bits: Self::full_mask(columns),
            columns,
        }
    }

    /// Only the listed columns readable; out-of-range entries are ignored
    pub fn from_columns(columns: usize, allowed: &[usize]) -> Self {
        let columns = columns.clamp(1, Self::MAX_COLUMNS);
        let mut bits = allowed
            .iter()
            .filter(|&&c| c < columns)
            .fold(0u64, |acc, &c| acc | (1u64 << c));
        if bits == 0 {
            bits = 1;
        }
        Self { bits, columns }
    }

    /// Each column independently allowed with probability 1/2
    pub fn random<R: Rng + ?Sized>(columns: usize, rng: &mut R) -> Self {
        let columns = columns.clamp(1, Self::MAX_COLUMNS);
        let mut bits = 0u64;
        for column in 0..columns {
            if rng.gen_bool(0.5) {
                bits |= 1u64 << column;
            }
        }
        if bits == 0 {
            bits = 1u64 << rng.gen_range(0..columns);
        }
        Self { bits, columns }
    }

    pub fn union(&self, other: &ColumnAccess) -> Self {
        Self {
            bits: self.bits | other.bits,
            columns: self.columns.max(other.columns),
        }
    }

    pub fn allows(&self, column: usize) -> bool {
        column < self.columns && self.bits & (1u64 << column) != 0
    }

    pub fn allowed(&self) -> Vec<usize> {
        (0..self.columns).filter(|&c| self.allows(c)).collect()
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    fn full_mask(columns: usize) -> u64 {
        if columns >= Self::MAX_COLUMNS {
            u64::MAX
        } else {
            (1u64 << columns) - 1
        }
    }
}
