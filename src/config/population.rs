use super::traits::ConfigSection;
use crate::error::BreederError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationSettings {
    pub desired_size: usize,
}

impl Default for PopulationSettings {
    fn default() -> Self {
        Self { desired_size: 5000 }
    }
}

impl ConfigSection for PopulationSettings {
    fn section_name() -> &'static str {
        "population"
    }

    fn validate(&self) -> Result<(), BreederError> {
        if self.desired_size == 0 {
            return Err(BreederError::Configuration(
                "Desired population size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
