use super::instruction::Instruction;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Ordered program body of a robot.
///
/// Reads past the last stored instruction yield [`Instruction::Terminate`], so
/// positional copies can run over a closed range that ends one past the tail.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InstructionList {
    instructions: Vec<Instruction>,
    variable_count: usize,
}

impl InstructionList {
    /// Empty list with a variable count drawn from `[min_variables, max_variables]`
    pub fn create<R: Rng + ?Sized>(rng: &mut R, min_variables: usize, max_variables: usize) -> Self {
        let variable_count = if max_variables > min_variables {
            rng.gen_range(min_variables..=max_variables)
        } else {
            min_variables
        };
        Self::with_variables(variable_count)
    }

    pub fn with_variables(variable_count: usize) -> Self {
        Self {
            instructions: Vec::new(),
            variable_count,
        }
    }

    pub fn from_instructions(instructions: Vec<Instruction>, variable_count: usize) -> Self {
        Self {
            instructions,
            variable_count,
        }
    }

    pub fn add_instruction(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn get(&self, index: usize) -> Instruction {
        self.instructions
            .get(index)
            .copied()
            .unwrap_or(Instruction::Terminate)
    }

    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }

    pub fn as_slice(&self) -> &[Instruction] {
        &self.instructions
    }
}
