//! Raw generator output for compatibility debugging.

use clap::{Args, ValueEnum};
use colored::Colorize;
use seedling::{Algorithm, Prng};

/// Print raw draws from a seeded generator.
#[derive(Args)]
pub struct PrngCommand {
    /// Generator family.
    #[arg(short, long, default_value = "legacy")]
    algorithm: Algorithm,

    /// Seed string.
    #[arg(short, long)]
    seed: String,

    /// Number of draws.
    #[arg(short = 'n', long, default_value = "5")]
    count: usize,

    /// Output kind.
    #[arg(short, long, value_enum, default_value = "float")]
    kind: DrawKind,
}

#[derive(Clone, Copy, ValueEnum)]
enum DrawKind {
    /// Main stream in [0, 1).
    Float,
    /// Signed 32-bit integers.
    Int32,
    /// 32-bit precision floats.
    Quick,
    /// 53-bit precision floats.
    Double,
}

impl PrngCommand {
    /// Execute the prng command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let mut rng = self.algorithm.seed(&self.seed);
        let draws: Vec<String> = (0..self.count)
            .map(|_| match self.kind {
                DrawKind::Float => rng.next_f64().to_string(),
                DrawKind::Int32 => rng.int32().to_string(),
                DrawKind::Quick => rng.quick().to_string(),
                DrawKind::Double => rng.double().to_string(),
            })
            .collect();
        print_draws(self.algorithm, &draws);
        Ok(())
    }
}

#[rustfmt::skip]
fn print_draws(algorithm: Algorithm, draws: &[String]) {
    println!();
    println!("      {}  {} ({})", "Algorithm".cyan().bold(), algorithm, algorithm.generator_name());
    for (i, draw) in draws.iter().enumerate() {
        println!("      {}  {}", format!("[{i:>7}]").dimmed(), draw);
    }
    println!();
}
