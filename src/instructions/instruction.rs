use crate::engines::generation::mutator::Mutator;
use serde::{Deserialize, Serialize};

/// Size of the variable index space. Indexes are resolved modulo the owning
/// list's variable count when a program runs.
pub const VARIABLE_SPACE: u32 = 32;

/// Farthest bar back a `LoadColumn` may look
pub const MAX_OFFSET: u32 = 256;

/// Magnitude bound for freshly drawn constants
pub const CONSTANT_RANGE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Min,
    Max,
}

impl ArithmeticOp {
    const ALL: [ArithmeticOp; 6] = [
        ArithmeticOp::Add,
        ArithmeticOp::Subtract,
        ArithmeticOp::Multiply,
        ArithmeticOp::Divide,
        ArithmeticOp::Min,
        ArithmeticOp::Max,
    ];

    fn pick(roll: u32) -> Self {
        Self::ALL[roll as usize % Self::ALL.len()]
    }
}

/// A single program element of a robot.
///
/// The breeding engine never executes instructions; it only draws, copies and
/// mutates them. `Terminate` marks the logical end of a program and is never
/// produced by [`Instruction::random`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    Terminate,
    LoadColumn {
        column: usize,
        offset: u32,
        variable: u32,
    },
    LoadConstant {
        value: f64,
        variable: u32,
    },
    Arithmetic {
        op: ArithmeticOp,
        source: u32,
        target: u32,
    },
    JumpIfGreater {
        left: u32,
        right: u32,
        skip: u32,
    },
    Signal {
        variable: u32,
    },
}

impl Instruction {
    const RANDOM_KINDS: u32 = 5;

    /// Draw a non-terminating instruction with every operand random.
    /// Column operands come from the mutator's current column access.
    pub fn random<M: Mutator + ?Sized>(mutator: &mut M) -> Self {
        match mutator.next_int() % Self::RANDOM_KINDS {
            0 => Instruction::LoadColumn {
                column: mutator.allowed_column(),
                offset: mutator.next_int() % MAX_OFFSET,
                variable: draw_variable(mutator),
            },
            1 => Instruction::LoadConstant {
                value: draw_constant(mutator),
                variable: draw_variable(mutator),
            },
            2 => Instruction::Arithmetic {
                op: ArithmeticOp::pick(mutator.next_int()),
                source: draw_variable(mutator),
                target: draw_variable(mutator),
            },
            3 => Instruction::JumpIfGreater {
                left: draw_variable(mutator),
                right: draw_variable(mutator),
                skip: 1 + mutator.next_int() % 4,
            },
            _ => Instruction::Signal {
                variable: draw_variable(mutator),
            },
        }
    }

    /// One mutation pass: re-draw a single operand
    pub fn mutate<M: Mutator + ?Sized>(&mut self, mutator: &mut M) {
        match self {
            Instruction::Terminate => {}
            Instruction::LoadColumn {
                column,
                offset,
                variable,
            } => match mutator.next_int() % 3 {
                0 => *column = mutator.allowed_column(),
                1 => *offset = mutator.next_int() % MAX_OFFSET,
                _ => *variable = draw_variable(mutator),
            },
            Instruction::LoadConstant { value, variable } => match mutator.next_int() % 2 {
                0 => {
                    let scale = value.abs() + 1.0;
                    *value += (mutator.next_double() - 0.5) * scale;
                }
                _ => *variable = draw_variable(mutator),
            },
            Instruction::Arithmetic { op, source, target } => match mutator.next_int() % 3 {
                0 => *op = ArithmeticOp::pick(mutator.next_int()),
                1 => *source = draw_variable(mutator),
                _ => *target = draw_variable(mutator),
            },
            Instruction::JumpIfGreater { left, right, skip } => match mutator.next_int() % 3 {
                0 => *left = draw_variable(mutator),
                1 => *right = draw_variable(mutator),
                _ => *skip = 1 + mutator.next_int() % 4,
            },
            Instruction::Signal { variable } => *variable = draw_variable(mutator),
        }
    }

    pub fn is_terminate(&self) -> bool {
        matches!(self, Instruction::Terminate)
    }

    /// Column read by this instruction, if any
    pub fn column(&self) -> Option<usize> {
        match self {
            Instruction::LoadColumn { column, .. } => Some(*column),
            _ => None,
        }
    }
}

fn draw_variable<M: Mutator + ?Sized>(mutator: &mut M) -> u32 {
    mutator.next_int() % VARIABLE_SPACE
}

fn draw_constant<M: Mutator + ?Sized>(mutator: &mut M) -> f64 {
    (mutator.next_double() * 2.0 - 1.0) * CONSTANT_RANGE
}
