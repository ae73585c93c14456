use super::mutator::Mutator;
use crate::config::BreederSettings;
use crate::engines::population::{Population, Robot};
use crate::types::RobotName;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Fills smaller than this always run sequentially
pub const PARALLEL_FILL_THRESHOLD: usize = 32;

/// Instruction count drawn from `[minimum, maximum)`, or the minimum when the range is empty
pub fn instruction_count<M: Mutator + ?Sized>(settings: &BreederSettings, mutator: &mut M) -> usize {
    let width = settings
        .maximum_robot_instructions
        .saturating_sub(settings.minimum_robot_instructions);
    if width == 0 {
        return settings.minimum_robot_instructions;
    }
    settings.minimum_robot_instructions + mutator.next_int() as usize % width
}

/// Brand-new random robot. Every instruction gets one mutation pass at birth.
pub fn synthesize<M, R>(settings: &BreederSettings, mutator: &mut M, rng: &mut R) -> Robot
where
    M: Mutator + ?Sized,
    R: Rng + ?Sized,
{
    let mut robot = Robot::create_empty(settings, rng);
    mutator.set_column_access(*robot.column_access());

    let count = instruction_count(settings, mutator);
    let main = robot.main_function_mut();
    for _ in 0..count {
        let mut instruction = mutator.random_instruction();
        instruction.mutate(mutator);
        main.add_instruction(instruction);
    }
    robot
}

pub fn create_new_robot<P, M, R>(
    settings: &BreederSettings,
    population: &P,
    mutator: &mut M,
    rng: &mut R,
) -> RobotName
where
    P: Population + ?Sized,
    M: Mutator + ?Sized,
    R: Rng + ?Sized,
{
    population.save_robot(synthesize(settings, mutator, rng))
}

/// Add `count` random robots to the population.
///
/// Small fills and seeded runs go one robot at a time, in order. Otherwise the
/// work is split across rayon tasks; each task owns a forked mutator and its
/// own generator, both seeded from `rng`, so no random state crosses threads.
pub fn fill_with_robots<P, M>(
    count: usize,
    settings: &BreederSettings,
    population: &P,
    mutator: &mut M,
    rng: &mut StdRng,
) where
    P: Population + ?Sized,
    M: Mutator,
{
    if count < PARALLEL_FILL_THRESHOLD || settings.random_seed != 0 {
        for _ in 0..count {
            create_new_robot(settings, population, mutator, rng);
        }
        return;
    }

    let tasks: Vec<(usize, M, StdRng)> = partition(count, rayon::current_num_threads())
        .into_iter()
        .map(|share| {
            let worker_mutator = mutator.fork(rng.gen());
            let worker_rng = StdRng::seed_from_u64(rng.gen());
            (share, worker_mutator, worker_rng)
        })
        .collect();
    info!("Filling {} random robots across {} tasks", count, tasks.len());

    tasks
        .into_par_iter()
        .for_each(|(share, mut worker_mutator, mut worker_rng)| {
            for _ in 0..share {
                create_new_robot(settings, population, &mut worker_mutator, &mut worker_rng);
            }
        });
}

/// Split `count` into at most `workers` non-empty shares
fn partition(count: usize, workers: usize) -> Vec<usize> {
    let workers = workers.clamp(1, count.max(1));
    let base = count / workers;
    let remainder = count % workers;
    (0..workers)
        .map(|i| base + usize::from(i < remainder))
        .filter(|&share| share > 0)
        .collect()
}
