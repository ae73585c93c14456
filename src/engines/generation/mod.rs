pub mod breeder;
pub mod crossover;
pub mod inheritance;
pub mod mutator;
pub mod sampler;
pub mod synthesizer;

pub use breeder::{BreedingReport, RobotBreeder, SimpleBreeder};
pub use mutator::{Mutator, SimpleMutator};
