use anyhow::Result;
use clap::Parser;
use prim_maze::GenerateArgs;
use rand::{rngs::StdRng, SeedableRng};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = GenerateArgs::parse();
    let generator = args.maze.generator()?;
    let seed = args.maze.seed_or_random();
    let grid = generator.generate(&mut StdRng::seed_from_u64(seed))?;
    eprintln!("Generated {0}x{0} maze with seed {1}.", grid.side_len(), seed);
    print!("{}", grid);

    Ok(())
}
