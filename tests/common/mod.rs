#![allow(dead_code)]

use robobreed::config::BreederSettings;
use robobreed::engines::generation::Mutator;
use robobreed::engines::population::{InMemoryPopulation, Population, Robot};
use robobreed::instructions::{Instruction, InstructionList};
use robobreed::types::{ColumnAccess, RobotName};
use std::collections::VecDeque;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Mutator whose draws are queued up front; falls back to fixed values when a queue runs dry
pub struct ScriptedMutator {
    pub ints: VecDeque<u32>,
    pub doubles: VecDeque<f64>,
    pub default_int: u32,
    pub default_double: f64,
    pub skip: bool,
    pub insert: bool,
    pub mutate: bool,
    pub access: ColumnAccess,
}

impl ScriptedMutator {
    pub fn new() -> Self {
        Self {
            ints: VecDeque::new(),
            doubles: VecDeque::new(),
            default_int: 0,
            default_double: 0.0,
            skip: false,
            insert: false,
            mutate: false,
            access: ColumnAccess::all(1),
        }
    }

    pub fn with_ints(mut self, ints: &[u32]) -> Self {
        self.ints.extend(ints.iter().copied());
        self
    }

    pub fn with_doubles(mut self, doubles: &[f64]) -> Self {
        self.doubles.extend(doubles.iter().copied());
        self
    }
}

impl Mutator for ScriptedMutator {
    fn next_int(&mut self) -> u32 {
        self.ints.pop_front().unwrap_or(self.default_int)
    }

    fn next_double(&mut self) -> f64 {
        self.doubles.pop_front().unwrap_or(self.default_double)
    }

    fn seed(&self) -> u64 {
        1
    }

    fn skip_next_instruction(&mut self) -> bool {
        self.skip
    }

    fn allow_new_instruction(&mut self) -> bool {
        self.insert
    }

    fn allow_instruction_mutation(&mut self) -> bool {
        self.mutate
    }

    fn set_column_access(&mut self, access: ColumnAccess) {
        self.access = access;
    }

    fn allowed_column(&mut self) -> usize {
        self.access.allowed()[0]
    }

    fn fork(&self, _seed: u64) -> Self {
        Self {
            ints: self.ints.clone(),
            doubles: self.doubles.clone(),
            ..Self::new()
        }
    }
}

/// Program of `Signal` instructions numbered by `variables`
pub fn signals(variables: &[u32]) -> InstructionList {
    InstructionList::from_instructions(
        variables
            .iter()
            .map(|&variable| Instruction::Signal { variable })
            .collect(),
        2,
    )
}

pub fn robot_with_weights(earned: f64, inherited: f64) -> Robot {
    let mut robot = Robot::with_program(ColumnAccess::all(4), signals(&[1, 2, 3]));
    robot.set_earned_weight(earned);
    robot.set_inherited_weight(inherited);
    robot
}

/// Save one robot per earned weight and return their names in order
pub fn seed_parents(population: &InMemoryPopulation, weights: &[f64]) -> Vec<RobotName> {
    weights
        .iter()
        .map(|&weight| population.save_robot(robot_with_weights(weight, 0.0)))
        .collect()
}

/// Settings where every saved robot is parent-eligible and runs are reproducible
pub fn open_settings(seed: u64) -> BreederSettings {
    BreederSettings {
        random_robots: 0.0,
        minimum_outcomes_to_allow_breeding: 0,
        minimum_outcomes_between_breeding: 0,
        minimum_robot_instructions: 2,
        maximum_robot_instructions: 10,
        random_seed: seed,
        ..Default::default()
    }
}
