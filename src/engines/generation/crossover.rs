//! Breakpoint splice of two parent programs.
//!
//! The child is a prefix of the first parent followed by a suffix of the
//! second, cut at independent points. Nothing keeps the child length near the
//! parents' lengths, so program size drifts across generations.

use super::mutator::Mutator;
use crate::config::BreederSettings;
use crate::instructions::{Instruction, InstructionList};
use rand::Rng;

pub fn blend<M, R>(
    first: &InstructionList,
    second: &InstructionList,
    settings: &BreederSettings,
    mutator: &mut M,
    rng: &mut R,
) -> InstructionList
where
    M: Mutator + ?Sized,
    R: Rng + ?Sized,
{
    let mut child = InstructionList::create(
        rng,
        settings.minimum_robot_variables,
        settings.maximum_robot_variables,
    );
    let break1 = break_point(first, mutator);
    let break2 = break_point(second, mutator);
    copy_block(&mut child, first, 0, break1, mutator);
    copy_block(&mut child, second, break2, second.instruction_count(), mutator);
    child
}

/// Index in `[0, len)`, or 0 for an empty list
pub fn break_point<M: Mutator + ?Sized>(list: &InstructionList, mutator: &mut M) -> usize {
    let size = list.instruction_count();
    if size == 0 {
        0
    } else {
        mutator.next_int() as usize % size
    }
}

/// Copy the closed range `[start, stop]`, stopping at the first terminator.
///
/// # Panics
///
/// If `start > stop`.
pub fn copy_block<M: Mutator + ?Sized>(
    destination: &mut InstructionList,
    source: &InstructionList,
    start: usize,
    stop: usize,
    mutator: &mut M,
) {
    assert!(start <= stop, "start > stop {} {}", start, stop);
    for index in start..=stop {
        let instruction = source.get(index);
        if instruction.is_terminate() {
            break;
        }
        add_instruction(instruction, destination, mutator);
    }
}

// skip, insert and mutate are independent draws
fn add_instruction<M: Mutator + ?Sized>(
    mut instruction: Instruction,
    destination: &mut InstructionList,
    mutator: &mut M,
) {
    if mutator.skip_next_instruction() {
        return;
    }
    if mutator.allow_new_instruction() {
        destination.add_instruction(mutator.random_instruction());
    }
    if mutator.allow_instruction_mutation() {
        instruction.mutate(mutator);
    }
    destination.add_instruction(instruction);
}
