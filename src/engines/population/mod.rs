pub mod column_access;
pub mod robot;
pub mod robot_info;
pub mod store;
pub mod weight;

pub use column_access::{ColumnAccessMergeStrategy, SimpleColumnAccessMergeStrategy};
pub use robot::Robot;
pub use robot_info::RobotInfo;
pub use store::{InMemoryPopulation, Population};
pub use weight::{OutcomeStats, WeightCalculator};
