use std::{
    error,
    fmt::Display,
    fs,
    io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Parser};

pub mod grid;
pub mod maze;
pub mod pathfinder;
pub mod queue;
pub mod screen;

pub use grid::{Cell, Direction, Grid, PathOverlay, Position, Zone};
pub use maze::{Carving, MazeGenerator, CELL_LENGTH, MAZE_LENGTH};
pub use pathfinder::{find_directions, PositionAndPath};
pub use queue::MinPriorityQueue;
pub use screen::{Screen, ScreenSettings};

#[derive(Debug)]
pub enum Error {
    // Invalid arguments
    NonIntegerPriority(f64),
    InvalidDirectionChar(char),
    InvalidCellChar(char),
    InvalidMazeSize(usize),
    InvalidCellLength(usize, usize), // (maze length, cell length)
    EmptyGrid,
    InconsistentRow(usize, usize), // (expect column count, this column count)
    NotSquareGrid(usize, usize),   // (row count, column count)
    CellCountMismatch(usize, usize), // (given cell count, expect cell count)
    InvalidCellSize(usize, usize),   // (cell width, cell height) in rendering units
    NoStartPosition,
    MultipleStartPosition(Position, Position),
    MisplacedStartPosition(Position, Position), // (expect position, given position)
    NoGoalPosition,
    MultipleGoalPosition(Position, Position),
    // Domain errors
    OutOfBounds(Position, usize), // (position, side length)
    WallOrigin(Position),
    IllegalMove(Position, Direction),
    // Empty structures
    EmptyQueue,
    SearchExhausted(usize), // Count of expanded nodes
    // Terminal
    TerminalError(io::Error),
    NotEnoughTerminalSpace(u16, u16, usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NonIntegerPriority(p) => {
                write!(f, "Priority({}) must be an integer-valued number.", p)
            }
            Error::InvalidDirectionChar(c) => write!(
                f,
                "Invalid character({}) for direction, expect 'u', 'd', 'l' or 'r'.",
                c
            ),
            Error::InvalidCellChar(c) => write!(f, "Invalid character({}) for maze cell.", c),
            Error::InvalidMazeSize(n) => {
                write!(f, "Maze needs at least 2 cells on each side, given {}.", n)
            }
            Error::InvalidCellLength(maze_len, cell_len) => write!(
                f,
                "Cell length({}) must be positive and divide maze length({}).",
                cell_len, maze_len
            ),
            Error::EmptyGrid => write!(f, "No rows in given maze text."),
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::NotSquareGrid(row_n, col_n) => write!(
                f,
                "Maze must be square, given {} row(s) x {} column(s).",
                row_n, col_n
            ),
            Error::CellCountMismatch(cell_n, expect_cell_n) => write!(
                f,
                "Expect {} cell(s) for a square maze, given {}.",
                expect_cell_n, cell_n
            ),
            Error::InvalidCellSize(cell_w, cell_h) => write!(
                f,
                "Cell size({} x {}) must be positive in both dimensions.",
                cell_w, cell_h
            ),
            Error::NoStartPosition => write!(f, "No start position in maze."),
            Error::MultipleStartPosition(last_pos, pos) => write!(
                f,
                "Expect only one start position, given two({}, {}).",
                last_pos, pos
            ),
            Error::MisplacedStartPosition(expect_pos, pos) => write!(
                f,
                "Start position must be the bottom-left cell {}, given {}.",
                expect_pos, pos
            ),
            Error::NoGoalPosition => write!(f, "No goal position in maze."),
            Error::MultipleGoalPosition(last_pos, pos) => write!(
                f,
                "Expect only one goal position, given two({}, {}).",
                last_pos, pos
            ),
            Error::OutOfBounds(pos, side_len) => write!(
                f,
                "Position {} is out of the {}x{} maze.",
                pos, side_len, side_len
            ),
            Error::WallOrigin(pos) => {
                write!(f, "Position {} points to a wall, no moves possible.", pos)
            }
            Error::IllegalMove(pos, dir) => {
                write!(f, "Direction({}) is not a legal move from {}.", dir, pos)
            }
            Error::EmptyQueue => write!(f, "Cannot dequeue from an empty queue."),
            Error::SearchExhausted(expanded_n) => write!(
                f,
                "Fringe became empty after expanding {} node(s) without reaching the goal.",
                expanded_n
            ),
            Error::TerminalError(ioe) => write!(
                f,
                "Failed to control terminal(stdout), get error({})",
                ioe
            ),
            Error::NotEnoughTerminalSpace(real_row_n, real_col_n, expect_row_n, expect_col_n) => {
                write!(
                    f,
                    "Terminal({} x {}) hasn't enough space to render, expect {} rows x {} columns",
                    real_row_n, real_col_n, expect_row_n, expect_col_n
                )
            }
        }
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::TerminalError(value)
    }
}

#[derive(Debug, Args)]
pub struct MazeArgs {
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, default_value_t = MAZE_LENGTH)]
    pub maze_length: usize,
    #[arg(long, default_value_t = CELL_LENGTH)]
    pub cell_length: usize,
}

impl MazeArgs {
    pub fn generator(&self) -> Result<MazeGenerator, Error> {
        MazeGenerator::from_lengths(self.maze_length, self.cell_length)
    }

    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub maze: MazeArgs,
}

#[derive(Debug, Parser)]
pub struct SolveArgs {
    #[command(flatten)]
    pub maze: MazeArgs,
    #[arg(long)]
    pub input: Option<PathBuf>,
    #[arg(long)]
    pub no_render: bool,
    #[arg(long, default_value_t = 500)]
    pub initial_delay_ms: u64,
    #[arg(long, default_value_t = 30)]
    pub step_delay_ms: u64,
}

pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let grid = Grid::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse maze in given file({}).",
            path.as_ref().display()
        )
    })?;

    Ok(grid)
}

pub fn format_directions(directions: &[Direction]) -> String {
    directions.iter().map(|dir| dir.to_char()).collect()
}
