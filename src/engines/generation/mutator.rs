use crate::config::MutatorSettings;
use crate::instructions::Instruction;
use crate::types::ColumnAccess;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source and mutation knobs consumed by the breeder.
///
/// Implementations are not shared between threads. Parallel work gets its own
/// replica through [`Mutator::fork`].
pub trait Mutator: Send {
    fn next_int(&mut self) -> u32;

    /// Uniform draw in `[0, 1)`
    fn next_double(&mut self) -> f64;

    /// Seed this mutator was created with; 0 means entropy-seeded
    fn seed(&self) -> u64;

    fn skip_next_instruction(&mut self) -> bool;
    fn allow_new_instruction(&mut self) -> bool;
    fn allow_instruction_mutation(&mut self) -> bool;

    /// Restrict column operands of drawn and mutated instructions
    fn set_column_access(&mut self, access: ColumnAccess);

    /// A column permitted by the current access
    fn allowed_column(&mut self) -> usize;

    /// Independent replica with the same knobs, seeded with `seed`
    fn fork(&self, seed: u64) -> Self
    where
        Self: Sized;

    fn random_instruction(&mut self) -> Instruction {
        Instruction::random(self)
    }
}

pub struct SimpleMutator {
    settings: MutatorSettings,
    rng: StdRng,
    seed: u64,
    allowed_columns: Vec<usize>,
}

impl SimpleMutator {
    pub fn new(settings: MutatorSettings, seed: u64) -> Self {
        let rng = if seed == 0 {
            StdRng::from_entropy()
        } else {
            StdRng::seed_from_u64(seed)
        };
        Self {
            settings,
            rng,
            seed,
            allowed_columns: vec![0],
        }
    }

    pub fn settings(&self) -> &MutatorSettings {
        &self.settings
    }

    fn happens(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }
}

impl Mutator for SimpleMutator {
    fn next_int(&mut self) -> u32 {
        self.rng.gen()
    }

    fn next_double(&mut self) -> f64 {
        self.rng.gen()
    }

    fn seed(&self) -> u64 {
        self.seed
    }

    fn skip_next_instruction(&mut self) -> bool {
        self.happens(self.settings.skip_instruction_probability)
    }

    fn allow_new_instruction(&mut self) -> bool {
        self.happens(self.settings.new_instruction_probability)
    }

    fn allow_instruction_mutation(&mut self) -> bool {
        self.happens(self.settings.instruction_mutation_probability)
    }

    fn set_column_access(&mut self, access: ColumnAccess) {
        self.allowed_columns = access.allowed();
        if self.allowed_columns.is_empty() {
            self.allowed_columns.push(0);
        }
    }

    fn allowed_column(&mut self) -> usize {
        let index = self.rng.gen_range(0..self.allowed_columns.len());
        self.allowed_columns[index]
    }

    fn fork(&self, seed: u64) -> Self {
        let mut forked = SimpleMutator::new(self.settings.clone(), seed);
        forked.allowed_columns = self.allowed_columns.clone();
        forked
    }
}
