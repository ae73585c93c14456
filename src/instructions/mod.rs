pub mod instruction;
pub mod list;

pub use instruction::{ArithmeticOp, Instruction};
pub use list::InstructionList;
