pub mod traits;
pub mod breeder;
pub mod mutator;
pub mod population;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use breeder::BreederSettings;
pub use mutator::MutatorSettings;
pub use population::PopulationSettings;
pub use traits::ConfigSection;
