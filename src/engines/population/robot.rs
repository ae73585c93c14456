use super::weight::{OutcomeStats, WeightCalculator};
use crate::config::BreederSettings;
use crate::instructions::InstructionList;
use crate::types::{ColumnAccess, RobotName};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One evolved individual: a program plus its fitness bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    name: Option<RobotName>,
    column_access: ColumnAccess,
    main: InstructionList,
    earned_weight: f64,
    inherited_weight: f64,
    children: u32,
    outcomes: OutcomeStats,
    outcomes_at_last_child: u64,
}

impl Robot {
    /// Unnamed robot with a random column access and an empty program
    pub fn create_empty<R: Rng + ?Sized>(settings: &BreederSettings, rng: &mut R) -> Self {
        let column_access = ColumnAccess::random(settings.data_columns, rng);
        let main = InstructionList::create(
            rng,
            settings.minimum_robot_variables,
            settings.maximum_robot_variables,
        );
        Self::with_program(column_access, main)
    }

    pub fn with_program(column_access: ColumnAccess, main: InstructionList) -> Self {
        Self {
            name: None,
            column_access,
            main,
            earned_weight: 0.0,
            inherited_weight: 0.0,
            children: 0,
            outcomes: OutcomeStats::default(),
            outcomes_at_last_child: 0,
        }
    }

    pub fn name(&self) -> Option<RobotName> {
        self.name
    }

    pub(crate) fn set_name(&mut self, name: RobotName) {
        self.name = Some(name);
    }

    pub fn column_access(&self) -> &ColumnAccess {
        &self.column_access
    }

    pub fn set_column_access(&mut self, column_access: ColumnAccess) {
        self.column_access = column_access;
    }

    pub fn main_function(&self) -> &InstructionList {
        &self.main
    }

    pub fn main_function_mut(&mut self) -> &mut InstructionList {
        &mut self.main
    }

    pub fn set_main_instruction_list(&mut self, main: InstructionList) {
        self.main = main;
    }

    pub fn earned_weight(&self) -> f64 {
        self.earned_weight
    }

    pub fn set_earned_weight(&mut self, weight: f64) {
        self.earned_weight = weight;
    }

    pub fn inherited_weight(&self) -> f64 {
        self.inherited_weight
    }

    pub fn set_inherited_weight(&mut self, weight: f64) {
        self.inherited_weight = weight;
    }

    /// Earned plus inherited
    pub fn weight(&self) -> f64 {
        self.earned_weight + self.inherited_weight
    }

    pub fn children(&self) -> u32 {
        self.children
    }

    /// Count one more child and restart the breeding gap from the current outcome count
    pub fn increase_children(&mut self) {
        self.children += 1;
        self.outcomes_at_last_child = self.outcomes.total;
    }

    pub fn outcomes(&self) -> &OutcomeStats {
        &self.outcomes
    }

    pub fn total_outcomes(&self) -> u64 {
        self.outcomes.total
    }

    pub fn outcomes_at_last_child(&self) -> u64 {
        self.outcomes_at_last_child
    }

    pub fn record_outcome(&mut self, profit: f64, calculator: &WeightCalculator) {
        self.outcomes.record(profit);
        self.earned_weight = calculator.calculate(&self.outcomes);
    }
}
