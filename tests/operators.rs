mod common;

use common::{robot_with_weights, signals, ScriptedMutator};
use robobreed::config::{BreederSettings, MutatorSettings};
use robobreed::engines::generation::{crossover, inheritance, sampler, SimpleMutator};
use robobreed::engines::population::RobotInfo;
use robobreed::instructions::{Instruction, InstructionList};
use robobreed::types::{InheritedWeightMode, Polarity, RobotName};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn info(name: u64, weight: f64) -> RobotInfo {
    RobotInfo::new(RobotName(name), weight, 100, 0)
}

#[test]
fn test_sample_walks_cumulative_scores() {
    // scores 1, 2, 3: total 6
    let cases = [(0.0, 1), (0.5, 2), (0.99, 3)];
    for (roll, expected) in cases {
        let mut candidates = vec![info(1, 1.0), info(2, 2.0), info(3, 3.0)];
        let mut mutator = ScriptedMutator::new().with_doubles(&[roll]);
        let picked = sampler::sample(&mut candidates, Polarity::NonNegative, &mut mutator).unwrap();
        assert_eq!(picked.name(), RobotName(expected), "roll {}", roll);
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|c| c.name() != picked.name()));
    }
}

#[test]
fn test_sample_zero_total_takes_first_pool_member() {
    let mut candidates = vec![info(1, -2.0), info(2, 0.0), info(3, 0.0)];
    let mut mutator = ScriptedMutator::new().with_doubles(&[0.73]);
    let picked = sampler::sample(&mut candidates, Polarity::NonNegative, &mut mutator).unwrap();
    assert_eq!(picked.name(), RobotName(2));
    assert_eq!(
        candidates.iter().map(RobotInfo::name).collect::<Vec<_>>(),
        vec![RobotName(1), RobotName(3)]
    );
}

#[test]
fn test_sample_falls_back_to_last_pool_member() {
    let mut candidates = vec![info(1, -1.0), info(2, -2.0), info(3, 5.0)];
    // target beyond the pool total
    let mut mutator = ScriptedMutator::new().with_doubles(&[1.5]);
    let picked = sampler::sample(&mut candidates, Polarity::Negative, &mut mutator).unwrap();
    assert_eq!(picked.name(), RobotName(2));
}

#[test]
fn test_sample_never_crosses_pools() {
    let mut mutator = SimpleMutator::new(MutatorSettings::default(), 31);
    for round in 0..50u64 {
        let mut candidates: Vec<RobotInfo> = (0..12)
            .map(|n| info(round * 100 + n, if n % 3 == 0 { -(n as f64) - 1.0 } else { n as f64 }))
            .collect();
        let negatives = candidates.iter().filter(|c| c.weight() < 0.0).count();
        let mut drawn = 0;
        while let Some(picked) = sampler::sample(&mut candidates, Polarity::Negative, &mut mutator) {
            assert!(picked.weight() < 0.0);
            drawn += 1;
        }
        assert_eq!(drawn, negatives);
        assert!(candidates.iter().all(|c| c.weight() >= 0.0));
    }
}

#[test]
fn test_splice_is_prefix_plus_suffix() {
    let settings = BreederSettings::default();
    let first = signals(&[10, 11, 12, 13]);
    let second = signals(&[20, 21]);
    let mut rng = StdRng::seed_from_u64(4);

    for break1 in 0..4u32 {
        for break2 in 0..2u32 {
            let mut mutator = ScriptedMutator::new().with_ints(&[break1, break2]);
            let child = crossover::blend(&first, &second, &settings, &mut mutator, &mut rng);

            let b1 = break1 as usize;
            let b2 = break2 as usize;
            let mut expected: Vec<Instruction> = first.as_slice()[..=b1].to_vec();
            expected.extend_from_slice(&second.as_slice()[b2..]);
            assert_eq!(child.as_slice(), expected.as_slice(), "breaks {} {}", b1, b2);
            assert_eq!(child.instruction_count(), (b1 + 1) + (2 - b2));
        }
    }
}

#[test]
fn test_splice_lengths_with_random_breaks() {
    let settings = BreederSettings::default();
    let first = signals(&[10, 11, 12, 13]);
    let second = signals(&[20, 21]);
    let mut mutator = SimpleMutator::new(MutatorSettings::disabled(), 9);
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..200 {
        let child = crossover::blend(&first, &second, &settings, &mut mutator, &mut rng);
        assert!((2..=6).contains(&child.instruction_count()));
        assert_eq!(child.get(0), Instruction::Signal { variable: 10 });
        assert_eq!(
            child.get(child.instruction_count() - 1),
            Instruction::Signal { variable: 21 }
        );
        assert!((settings.minimum_robot_variables..=settings.maximum_robot_variables)
            .contains(&child.variable_count()));
    }
}

#[test]
fn test_splice_stops_at_terminator() {
    let settings = BreederSettings::default();
    let first = InstructionList::from_instructions(
        vec![
            Instruction::Signal { variable: 0 },
            Instruction::Signal { variable: 1 },
            Instruction::Terminate,
            Instruction::Signal { variable: 3 },
            Instruction::Signal { variable: 4 },
        ],
        2,
    );
    let second = InstructionList::from_instructions(
        vec![
            Instruction::Signal { variable: 10 },
            Instruction::Terminate,
            Instruction::Signal { variable: 12 },
        ],
        2,
    );
    let mut mutator = ScriptedMutator::new().with_ints(&[4, 0]);
    let mut rng = StdRng::seed_from_u64(1);
    let child = crossover::blend(&first, &second, &settings, &mut mutator, &mut rng);
    assert_eq!(
        child.as_slice(),
        &[
            Instruction::Signal { variable: 0 },
            Instruction::Signal { variable: 1 },
            Instruction::Signal { variable: 10 },
        ]
    );
}

#[test]
fn test_splice_of_empty_parents() {
    let settings = BreederSettings::default();
    let mut mutator = ScriptedMutator::new();
    let mut rng = StdRng::seed_from_u64(1);
    let child = crossover::blend(
        &InstructionList::default(),
        &InstructionList::default(),
        &settings,
        &mut mutator,
        &mut rng,
    );
    assert!(child.is_empty());
}

#[test]
fn test_inherited_weight_modes() {
    let first = robot_with_weights(2.0, 1.0);
    let second = robot_with_weights(4.0, 3.0);

    let parents = inheritance::inherited_weight(&first, &second, InheritedWeightMode::Parents, 0.5);
    assert_eq!(parents, 1.5);

    let ancestors =
        inheritance::inherited_weight(&first, &second, InheritedWeightMode::Ancestors, 0.5);
    assert_eq!(ancestors, 2.0 + 1.5);

    let log = inheritance::inherited_weight(&first, &second, InheritedWeightMode::AncestorsLog, 0.5);
    assert_eq!(log, 2.5);
}

#[test]
fn test_no_inheritance_without_percent() {
    let first = robot_with_weights(2.0, 1.0);
    let second = robot_with_weights(4.0, 3.0);
    for mode in [
        InheritedWeightMode::Parents,
        InheritedWeightMode::Ancestors,
        InheritedWeightMode::AncestorsLog,
    ] {
        assert_eq!(inheritance::inherited_weight(&first, &second, mode, 0.0), 0.0);
        assert_eq!(inheritance::inherited_weight(&first, &second, mode, -0.3), 0.0);
    }
}
