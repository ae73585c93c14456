pub mod generation;
pub mod population;
