use crate::config::{AppConfig, BreederSettings};
use crate::engines::generation::{
    crossover, inheritance,
    mutator::{Mutator, SimpleMutator},
    sampler, synthesizer,
};
use crate::engines::population::{
    ColumnAccessMergeStrategy, Population, Robot, RobotInfo, SimpleColumnAccessMergeStrategy,
    WeightCalculator,
};
use crate::error::{BreederError, Result};
use crate::types::Polarity;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Keeps the breeder's stream apart from a mutator built with the same seed
const BREEDER_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;

/// Robots added by each step of one breeding pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreedingReport {
    pub required_random: usize,
    pub bred: usize,
    pub optional_random: usize,
    pub total: usize,
}

pub trait RobotBreeder {
    /// Replenish `population` up to its desired size. A full population is left untouched.
    fn breed_population<P: Population + ?Sized>(
        &mut self,
        population: &P,
        infos: &[RobotInfo],
    ) -> Result<BreedingReport>;
}

pub struct SimpleBreeder<M: Mutator = SimpleMutator> {
    settings: BreederSettings,
    mutator: M,
    rng: StdRng,
    weight_calculator: WeightCalculator,
    merge_strategy: Box<dyn ColumnAccessMergeStrategy>,
}

impl SimpleBreeder<SimpleMutator> {
    pub fn from_config(config: &AppConfig) -> Self {
        let mutator = SimpleMutator::new(config.mutator.clone(), config.breeder.random_seed);
        Self::new(config.breeder.clone(), mutator)
    }
}

impl<M: Mutator> SimpleBreeder<M> {
    pub fn new(settings: BreederSettings, mutator: M) -> Self {
        let weight_calculator = WeightCalculator::new(settings.weight_mode, settings.weight_exponent);
        Self {
            rng: breeder_rng(settings.random_seed),
            settings,
            mutator,
            weight_calculator,
            merge_strategy: Box::new(SimpleColumnAccessMergeStrategy),
        }
    }

    pub fn with_merge_strategy<S>(mut self, strategy: S) -> Self
    where
        S: ColumnAccessMergeStrategy + 'static,
    {
        self.merge_strategy = Box::new(strategy);
        self
    }

    /// Swap settings and mutator between passes; reseeds the breeder's generator
    pub fn set_settings(&mut self, settings: BreederSettings, mutator: M) {
        self.rng = breeder_rng(settings.random_seed);
        self.weight_calculator.set_weight_mode(settings.weight_mode);
        self.weight_calculator.set_weight_exponent(settings.weight_exponent);
        self.settings = settings;
        self.mutator = mutator;
    }

    pub fn settings(&self) -> &BreederSettings {
        &self.settings
    }

    /// Calculator configured from the settings, for the scoring side
    pub fn weight_calculator(&self) -> WeightCalculator {
        self.weight_calculator
    }

    pub fn mutator(&self) -> &M {
        &self.mutator
    }

    fn add_required_random_robots<P: Population + ?Sized>(&mut self, population: &P) {
        if self.settings.random_robots > 0.0 {
            let count =
                (self.settings.random_robots * population.desired_size() as f64).round() as usize;
            self.fill_with_robots(count, population);
        }
    }

    fn add_optional_random_robots<P: Population + ?Sized>(&mut self, population: &P) {
        let count = population.desired_size().saturating_sub(population.size());
        if count > 0 {
            self.fill_with_robots(count, population);
        }
    }

    fn fill_with_robots<P: Population + ?Sized>(&mut self, count: usize, population: &P) {
        synthesizer::fill_with_robots(
            count,
            &self.settings,
            population,
            &mut self.mutator,
            &mut self.rng,
        );
    }

    fn breed_population_from_parents<P: Population + ?Sized>(
        &mut self,
        population: &P,
        infos: &[RobotInfo],
    ) -> Result<()> {
        let mut candidates: Vec<RobotInfo> = infos
            .iter()
            .filter(|info| {
                info.can_be_parent(
                    self.settings.minimum_outcomes_to_allow_breeding,
                    self.settings.minimum_outcomes_between_breeding,
                )
            })
            .cloned()
            .collect();
        candidates.sort_by(|a, b| a.score().total_cmp(&b.score()));

        while population.has_space_to_breed() {
            // both parents come from the same pool
            let polarity = Polarity::from(self.rng.gen::<bool>());
            let parent1 = self.possible_parent(population, &mut candidates, polarity)?;
            let parent2 = self.possible_parent(population, &mut candidates, polarity)?;
            let (mut parent1, mut parent2) = match (parent1, parent2) {
                (Some(parent1), Some(parent2)) => (parent1, parent2),
                _ => break,
            };

            let child = self.make_child(&parent1, &parent2);
            let child_name = population.save_robot(child);
            parent1.increase_children();
            let parent1_name = population.save_robot(parent1);
            parent2.increase_children();
            let parent2_name = population.save_robot(parent2);
            trace!(
                "{} bred from {} and {} ({:?} pool)",
                child_name,
                parent1_name,
                parent2_name,
                polarity
            );
        }
        Ok(())
    }

    fn possible_parent<P: Population + ?Sized>(
        &mut self,
        population: &P,
        candidates: &mut Vec<RobotInfo>,
        polarity: Polarity,
    ) -> Result<Option<Robot>> {
        match sampler::sample(candidates, polarity, &mut self.mutator) {
            Some(info) => population
                .get_robot(info.name())
                .map(Some)
                .ok_or(BreederError::MissingRobot(info.name())),
            None => Ok(None),
        }
    }

    fn make_child(&mut self, parent1: &Robot, parent2: &Robot) -> Robot {
        let mut child = Robot::create_empty(&self.settings, &mut self.rng);
        child.set_inherited_weight(inheritance::inherited_weight(
            parent1,
            parent2,
            self.settings.inherited_weight_mode,
            self.settings.inherited_weight_percent,
        ));
        child.set_column_access(
            self.merge_strategy
                .merge(parent1.column_access(), parent2.column_access()),
        );
        self.mutator.set_column_access(*child.column_access());
        let main = crossover::blend(
            parent1.main_function(),
            parent2.main_function(),
            &self.settings,
            &mut self.mutator,
            &mut self.rng,
        );
        child.set_main_instruction_list(main);
        child
    }
}

impl<M: Mutator> RobotBreeder for SimpleBreeder<M> {
    fn breed_population<P: Population + ?Sized>(
        &mut self,
        population: &P,
        infos: &[RobotInfo],
    ) -> Result<BreedingReport> {
        let mut report = BreedingReport {
            total: population.size(),
            ..Default::default()
        };
        if !population.has_space_to_breed() {
            return Ok(report);
        }

        let mut before = population.size();
        self.add_required_random_robots(population);
        let mut after = population.size();
        report.required_random = after.saturating_sub(before);
        debug!("requiredRandomRobots={}", report.required_random);

        before = after;
        self.breed_population_from_parents(population, infos)?;
        after = population.size();
        report.bred = after.saturating_sub(before);
        debug!("bredRobots={}", report.bred);

        before = after;
        self.add_optional_random_robots(population);
        after = population.size();
        report.optional_random = after.saturating_sub(before);
        debug!("optionalRandomRobots={}", report.optional_random);

        report.total = after;
        debug!("totalRobots={}", report.total);
        Ok(report)
    }
}

fn breeder_rng(seed: u64) -> StdRng {
    if seed == 0 {
        StdRng::from_entropy()
    } else {
        StdRng::seed_from_u64(seed ^ BREEDER_STREAM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MutatorSettings;
    use crate::engines::population::InMemoryPopulation;

    fn settings() -> BreederSettings {
        BreederSettings {
            random_robots: 0.0,
            minimum_outcomes_to_allow_breeding: 0,
            minimum_outcomes_between_breeding: 0,
            minimum_robot_instructions: 4,
            maximum_robot_instructions: 12,
            random_seed: 99,
            ..Default::default()
        }
    }

    fn breeder() -> SimpleBreeder {
        SimpleBreeder::new(settings(), SimpleMutator::new(MutatorSettings::default(), 99))
    }

    #[test]
    fn test_empty_population_fills_with_random_robots() {
        let population = InMemoryPopulation::new(20);
        let report = breeder().breed_population(&population, &[]).unwrap();
        assert_eq!(report.required_random, 0);
        assert_eq!(report.bred, 0);
        assert_eq!(report.optional_random, 20);
        assert_eq!(report.total, 20);
        assert_eq!(population.size(), 20);
    }

    #[test]
    fn test_unknown_candidate_is_reported() {
        let population = InMemoryPopulation::new(5);
        // one ghost per pool, so whichever pool is drawn resolves a missing name
        let ghosts = vec![
            RobotInfo::new(crate::types::RobotName(404), 1.0, 100, 0),
            RobotInfo::new(crate::types::RobotName(405), -1.0, 100, 0),
        ];
        let outcome = breeder().breed_population(&population, &ghosts);
        assert!(matches!(outcome, Err(BreederError::MissingRobot(_))));
    }

    #[test]
    fn test_same_seed_reproduces_population() {
        let first = InMemoryPopulation::new(40);
        let second = InMemoryPopulation::new(40);
        breeder().breed_population(&first, &[]).unwrap();
        breeder().breed_population(&second, &[]).unwrap();

        for name in first.names() {
            assert_eq!(first.get_robot(name), second.get_robot(name));
        }
    }
}
