use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, warn};
use prim_maze::{Grid, Screen, ScreenSettings, SolveArgs};
use rand::{rngs::StdRng, SeedableRng};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = SolveArgs::parse();

    let grid = if let Some(input_path) = &args.input {
        prim_maze::read_grid(input_path).with_context(|| {
            format!(
                "Failed to read maze from given file({}).",
                input_path.display()
            )
        })?
    } else {
        let generator = args.maze.generator()?;
        let seed = args.maze.seed_or_random();
        println!("Generate {0}x{0} maze with seed {1}.", generator.side_len(), seed);
        generator.generate(&mut StdRng::seed_from_u64(seed))?
    };

    let directions = prim_maze::find_directions(&grid)
        .context("Failed to find a path from start to goal.")?;
    println!(
        "It takes {} moves from {} to {}: {}",
        directions.len(),
        grid.start_position(),
        grid.winning_position(),
        prim_maze::format_directions(&directions)
    );
    check_shortest(&grid, directions.len());

    if args.no_render {
        print!("{}", grid.overlay(&directions)?);
    } else {
        let mut screen = Screen::new(ScreenSettings {
            initial_delay: Duration::from_millis(args.initial_delay_ms),
            step_delay: Duration::from_millis(args.step_delay_ms),
        });
        screen
            .plot_directions(&grid, &directions)
            .context("Failed to plot directions in terminal.")?;
    }

    Ok(())
}

fn check_shortest(grid: &Grid, moves_n: usize) {
    match grid.min_steps_n(&grid.start_position(), grid.winning_position()) {
        Some(min_steps_n) if min_steps_n == moves_n => {
            debug!("Path length matches breadth-first search({}).", min_steps_n)
        }
        Some(min_steps_n) => warn!(
            "Path takes {} moves, but breadth-first search finds {}.",
            moves_n, min_steps_n
        ),
        None => warn!("Breadth-first search finds no path to the goal."),
    }
}
