//! Runs MOSA-EA on one of the built-in objectives.
//!
//! ```text
//! cargo run --release --example mosa_ea -- -n 100 -f 1 -l 500 -m 60 -j
//! ```
//!
//! Flags: `-n` problem size, `-f` objective id (1 OneMax, 2 LeadingOnes),
//! `-A` growth factor, `-p` rate increase probability, `-c` minimum rate
//! parameter, `-l` population size, `-m` parent pool size, `-e` evaluation
//! budget, `-s` seed, `-j` parallel evaluation and mutation.

use std::{env, process, str::FromStr};

use log::warn;
use mosa::{
  config::Config,
  objective::{Objective, ObjectiveKind},
  operator::ParBatch,
  optimizer::{mosa_ea::MosaEa, GenerationReport, Optimizer, Outcome, Termination},
};

struct Args {
  config: Config,
  objective_id: u32,
  seed: Option<u64>,
  parallel: bool,
}

fn value<T: FromStr>(flag: &str, raw: Option<String>) -> Result<T, String> {
  let raw = raw.ok_or_else(|| format!("missing value for {flag}"))?;
  raw
    .parse()
    .map_err(|_| format!("invalid value for {flag}: {raw}"))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
  let mut config = Config::default();
  let mut objective_id = 1;
  let mut seed = None;
  let mut parallel = false;
  while let Some(flag) = args.next() {
    match flag.as_str() {
      "-n" => config.problem_size = value(&flag, args.next())?,
      "-f" => objective_id = value(&flag, args.next())?,
      "-A" => config.growth_factor = value(&flag, args.next())?,
      "-p" => config.increase_probability = value(&flag, args.next())?,
      "-c" => config.min_rate_param = value(&flag, args.next())?,
      "-l" => config.population_size = value(&flag, args.next())?,
      "-m" => config.parent_pool_size = value(&flag, args.next())?,
      "-e" => config.max_evaluations = value(&flag, args.next())?,
      "-s" => seed = Some(value(&flag, args.next())?),
      "-j" => parallel = true,
      _ => return Err(format!("unknown flag {flag}")),
    }
  }
  Ok(Args {
    config,
    objective_id,
    seed,
    parallel,
  })
}

fn print_report(report: &GenerationReport) {
  println!(
    "Gen' {} (Evaluation: {}) : Best Fitness: {}, its mutation para': {}",
    report.generation,
    report.evaluations,
    report.best_fitness,
    report.best_mutation_param
  );
}

fn run(args: Args) -> mosa::Result<Outcome> {
  let objective = ObjectiveKind::from_id(args.objective_id, args.config.problem_size)?;
  println!(
    "{} with n={}, target fitness {}",
    objective.name(),
    args.config.problem_size,
    objective.target_fitness()
  );

  if args.parallel {
    let builder = MosaEa::builder()
      .config(args.config)
      .evaluator(objective.par_batch())
      .parallel_mutation(true)
      .observer(print_report);
    match args.seed {
      Some(seed) => builder.seed(seed).build().optimize(),
      None => builder.build().optimize(),
    }
  } else {
    let builder = MosaEa::builder()
      .config(args.config)
      .evaluator(objective)
      .observer(print_report);
    match args.seed {
      Some(seed) => builder.seed(seed).build().optimize(),
      None => builder.build().optimize(),
    }
  }
}

fn main() {
  env_logger::init();

  let args = match parse_args(env::args().skip(1)) {
    Ok(args) => args,
    Err(message) => {
      eprintln!("{message}");
      process::exit(1);
    }
  };
  let outcome = match run(args) {
    Ok(outcome) => outcome,
    Err(e) => {
      eprintln!("{e}");
      process::exit(1);
    }
  };

  if outcome.termination == Termination::BudgetExhausted {
    warn!(
      "evaluation budget exhausted after {} generations, best fitness {}",
      outcome.generations, outcome.best_fitness
    );
  }
  println!("Total Running Time: {:?}", outcome.elapsed);
  println!(
    "Running Time Per Generation: {:?}",
    outcome.time_per_generation()
  );
}
