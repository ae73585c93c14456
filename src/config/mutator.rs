use super::traits::{check_probability, ConfigSection};
use crate::error::BreederError;
use serde::{Deserialize, Serialize};

/// Per-instruction probabilities applied while copying parent programs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutatorSettings {
    pub instruction_mutation_probability: f64,
    pub new_instruction_probability: f64,
    pub skip_instruction_probability: f64,
}

impl MutatorSettings {
    /// Plain splice: no skips, insertions or mutations
    pub fn disabled() -> Self {
        Self {
            instruction_mutation_probability: 0.0,
            new_instruction_probability: 0.0,
            skip_instruction_probability: 0.0,
        }
    }
}

impl Default for MutatorSettings {
    fn default() -> Self {
        Self {
            instruction_mutation_probability: 0.01,
            new_instruction_probability: 0.01,
            skip_instruction_probability: 0.01,
        }
    }
}

impl ConfigSection for MutatorSettings {
    fn section_name() -> &'static str {
        "mutator"
    }

    fn validate(&self) -> Result<(), BreederError> {
        check_probability(
            "instruction_mutation_probability",
            self.instruction_mutation_probability,
        )?;
        check_probability("new_instruction_probability", self.new_instruction_probability)?;
        check_probability("skip_instruction_probability", self.skip_instruction_probability)?;
        Ok(())
    }
}
