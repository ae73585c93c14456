use super::traits::{check_probability, ConfigSection};
use crate::error::BreederError;
use crate::types::{ColumnAccess, InheritedWeightMode, WeightMode};
use serde::{Deserialize, Serialize};

/// Settings read by the breeder for a whole breeding pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreederSettings {
    /// Fraction of the desired population injected as random robots every pass
    pub random_robots: f64,
    pub minimum_outcomes_to_allow_breeding: u64,
    pub minimum_outcomes_between_breeding: u64,
    pub inherited_weight_percent: f64,
    pub inherited_weight_mode: InheritedWeightMode,
    pub minimum_robot_instructions: usize,
    pub maximum_robot_instructions: usize,
    pub minimum_robot_variables: usize,
    pub maximum_robot_variables: usize,
    pub weight_mode: WeightMode,
    pub weight_exponent: f64,
    /// 0 draws from entropy and allows parallel random fills
    pub random_seed: u64,
    /// Width of the column-access mask handed to new robots
    pub data_columns: usize,
}

impl Default for BreederSettings {
    fn default() -> Self {
        Self {
            random_robots: 0.02,
            minimum_outcomes_to_allow_breeding: 50,
            minimum_outcomes_between_breeding: 50,
            inherited_weight_percent: 0.0,
            inherited_weight_mode: InheritedWeightMode::Parents,
            minimum_robot_instructions: 16,
            maximum_robot_instructions: 1024,
            minimum_robot_variables: 2,
            maximum_robot_variables: 8,
            weight_mode: WeightMode::WinCount,
            weight_exponent: 1.0,
            random_seed: 0,
            data_columns: 5,
        }
    }
}

impl ConfigSection for BreederSettings {
    fn section_name() -> &'static str {
        "breeder"
    }

    fn validate(&self) -> Result<(), BreederError> {
        check_probability("random_robots", self.random_robots)?;
        if self.minimum_robot_instructions > self.maximum_robot_instructions {
            return Err(BreederError::Configuration(format!(
                "Minimum robot instructions ({}) exceeds maximum ({})",
                self.minimum_robot_instructions, self.maximum_robot_instructions
            )));
        }
        if self.minimum_robot_variables == 0 {
            return Err(BreederError::Configuration(
                "Robots need at least one variable".to_string(),
            ));
        }
        if self.minimum_robot_variables > self.maximum_robot_variables {
            return Err(BreederError::Configuration(format!(
                "Minimum robot variables ({}) exceeds maximum ({})",
                self.minimum_robot_variables, self.maximum_robot_variables
            )));
        }
        if self.data_columns == 0 || self.data_columns > ColumnAccess::MAX_COLUMNS {
            return Err(BreederError::Configuration(format!(
                "Data columns must be between 1 and {}",
                ColumnAccess::MAX_COLUMNS
            )));
        }
        if !self.weight_exponent.is_finite() || self.weight_exponent <= 0.0 {
            return Err(BreederError::Configuration(
                "Weight exponent must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(BreederSettings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_instruction_range() {
        let settings = BreederSettings {
            minimum_robot_instructions: 10,
            maximum_robot_instructions: 5,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(BreederError::Configuration(_))
        ));
    }

    #[test]
    fn test_zero_width_instruction_range_is_allowed() {
        let settings = BreederSettings {
            minimum_robot_instructions: 8,
            maximum_robot_instructions: 8,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_random_fraction_above_one() {
        let settings = BreederSettings {
            random_robots: 1.5,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
