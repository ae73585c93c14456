use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use robobreed::config::ConfigManager;
use robobreed::{InMemoryPopulation, Population, RobotBreeder, SimpleBreeder};

const GENERATIONS: usize = 5;
const OUTCOMES_PER_GENERATION: usize = 20;
const EVICTED_FRACTION: f64 = 0.3;

fn main() -> Result<()> {
    env_logger::init();

    let manager = ConfigManager::new();
    if let Some(path) = std::env::args().nth(1) {
        manager
            .load_from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path))?;
    }
    let config = manager.get();

    let population = InMemoryPopulation::new(config.population.desired_size);
    let mut breeder = SimpleBreeder::from_config(&config);
    let calculator = breeder.weight_calculator();
    // stand-in for scoring robots against market data
    let mut market = match config.breeder.random_seed {
        0 => StdRng::from_entropy(),
        seed => StdRng::seed_from_u64(seed),
    };

    for generation in 1..=GENERATIONS {
        let report = breeder.breed_population(&population, &population.robot_infos())?;

        for name in population.names() {
            let Some(mut robot) = population.get_robot(name) else {
                continue;
            };
            for _ in 0..OUTCOMES_PER_GENERATION {
                robot.record_outcome(market.gen_range(-1.0..1.0), &calculator);
            }
            population.save_robot(robot);
        }

        let mut infos = population.robot_infos();
        infos.sort_by(|a, b| a.score().total_cmp(&b.score()));
        let evicted = (infos.len() as f64 * EVICTED_FRACTION) as usize;
        for info in &infos[..evicted] {
            population.remove_robot(info.name());
        }
        let best = infos.last().map(|info| info.score()).unwrap_or(0.0);

        println!(
            "generation {}: required {} / bred {} / optional {} -> {} robots, evicted {}, best score {:.3}",
            generation,
            report.required_random,
            report.bred,
            report.optional_random,
            report.total,
            evicted,
            best
        );
    }

    Ok(())
}
