//! Breeding engine for populations of small trading-signal programs ("robots").
//!
//! Each pass injects random robots for diversity, breeds children from
//! score-weighted parents drawn from one weight-sign pool at a time, and tops
//! the population up to its desired size.

pub mod config;
pub mod engines;
pub mod error;
pub mod instructions;
pub mod types;

pub use engines::generation::{BreedingReport, Mutator, RobotBreeder, SimpleBreeder, SimpleMutator};
pub use engines::population::{InMemoryPopulation, Population, Robot, RobotInfo};
pub use error::{BreederError, Result};
