use log::{debug, trace};
use rand::Rng;

use crate::{
    grid::{Cell, Direction, Grid, Position},
    Error,
};

// Lengths in rendering pixels, the maze is square and cells are square.
pub const MAZE_LENGTH: usize = 800;
pub const CELL_LENGTH: usize = 40;

const MAX_OPEN_NEIGHBOR_N: usize = 2;

#[derive(Debug, Clone)]
pub struct Carving {
    grid: Grid,
    carve_order: Vec<Position>,
}

impl Carving {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    // Start first, then every hall cell in the order it was opened.
    pub fn carve_order(&self) -> &[Position] {
        &self.carve_order
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeGenerator {
    side_len: usize,
}

impl Default for MazeGenerator {
    fn default() -> Self {
        Self {
            side_len: MAZE_LENGTH / CELL_LENGTH,
        }
    }
}

impl MazeGenerator {
    pub fn new(side_len: usize) -> Result<Self, Error> {
        if side_len < 2 {
            return Err(Error::InvalidMazeSize(side_len));
        }

        Ok(Self { side_len })
    }

    pub fn from_lengths(maze_len: usize, cell_len: usize) -> Result<Self, Error> {
        if cell_len == 0 || maze_len % cell_len != 0 {
            return Err(Error::InvalidCellLength(maze_len, cell_len));
        }

        Self::new(maze_len / cell_len)
    }

    pub fn side_len(&self) -> usize {
        self.side_len
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, Error> {
        self.carve(rng).map(Carving::into_grid)
    }

    pub fn carve<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Carving, Error> {
        let mut halls = HallMap::new(self.side_len, rng);
        let start_pos = Position::new(self.side_len - 1, 0);
        halls.open(&start_pos);
        let mut carve_order = vec![start_pos];

        while let Some(next_pos) = halls.next_hall() {
            trace!("Carve hall at {}.", next_pos);
            halls.open(&next_pos);
            carve_order.push(next_pos);
        }
        debug!(
            "Carved {} hall cell(s) in {}x{} maze.",
            carve_order.len(),
            self.side_len,
            self.side_len
        );

        let goal_pos = halls.farthest_hall_from(&start_pos);
        debug!("Place goal at {}, the farthest hall from start.", goal_pos);
        let mut cells = halls.into_cells();
        cells[goal_pos.r() * self.side_len + goal_pos.c()] = Cell::Goal;
        cells[start_pos.r() * self.side_len + start_pos.c()] = Cell::Start;

        Ok(Carving {
            grid: Grid::new(self.side_len, cells)?,
            carve_order,
        })
    }
}

struct HallMap {
    cells: Vec<Cell>,
    weights: Vec<f64>,
    side_len: usize,
}

impl HallMap {
    fn new<R: Rng + ?Sized>(side_len: usize, rng: &mut R) -> Self {
        let cell_n = side_len * side_len;
        Self {
            cells: vec![Cell::Wall; cell_n],
            weights: (0..cell_n).map(|_| rng.random::<f64>()).collect(),
            side_len,
        }
    }

    fn open(&mut self, pos: &Position) {
        let ind = self.pos_to_ind(pos);
        self.cells[ind] = Cell::Open;
    }

    fn is_open(&self, pos: &Position) -> bool {
        self.is_inside(pos) && self.cells[self.pos_to_ind(pos)] == Cell::Open
    }

    fn is_wall(&self, pos: &Position) -> bool {
        self.is_inside(pos) && self.cells[self.pos_to_ind(pos)] == Cell::Wall
    }

    fn weight(&self, pos: &Position) -> f64 {
        self.weights[self.pos_to_ind(pos)]
    }

    // Walls crosswise next to a hall, in row-major order of the halls.
    fn frontier(&self) -> Vec<Position> {
        let mut frontier: Vec<Position> = Vec::new();
        for pos in self.positions().filter(|pos| self.is_open(pos)) {
            for wall_pos in Direction::all_dirs()
                .iter()
                .flat_map(|dir| pos.neighbor(*dir))
                .filter(|next_pos| self.is_wall(next_pos))
            {
                if !frontier.contains(&wall_pos) {
                    frontier.push(wall_pos);
                }
            }
        }

        frontier
    }

    fn next_hall(&self) -> Option<Position> {
        let mut candidates = self.frontier();
        while !candidates.is_empty() {
            let mut lowest_ind = 0;
            for (ind, pos) in candidates.iter().enumerate().skip(1) {
                if self.weight(pos) < self.weight(&candidates[lowest_ind]) {
                    lowest_ind = ind;
                }
            }

            if self.open_neighbor_n(&candidates[lowest_ind]) <= MAX_OPEN_NEIGHBOR_N {
                return Some(candidates[lowest_ind]);
            }

            let last_len = candidates.len();
            candidates.remove(lowest_ind);
            assert!(candidates.len() < last_len);
        }

        None
    }

    // Counts halls among all eight surrounding cells.
    fn open_neighbor_n(&self, pos: &Position) -> usize {
        let (r, c) = (pos.r() as isize, pos.c() as isize);
        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| {
                let nr = usize::try_from(r + dr).ok()?;
                let nc = usize::try_from(c + dc).ok()?;
                Some(Position::new(nr, nc))
            })
            .filter(|next_pos| self.is_open(next_pos))
            .count()
    }

    fn farthest_hall_from(&self, from: &Position) -> Position {
        let mut greatest_pos = *from;
        let mut greatest_dist = 0.0;
        for pos in self.positions().filter(|pos| self.is_open(pos)) {
            let dist = from.euclidean_dist(&pos);
            if dist > greatest_dist {
                greatest_pos = pos;
                greatest_dist = dist;
            }
        }

        greatest_pos
    }

    fn positions(&self) -> impl Iterator<Item = Position> {
        let side_len = self.side_len;
        (0..side_len).flat_map(move |r| (0..side_len).map(move |c| Position::new(r, c)))
    }

    fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    fn is_inside(&self, pos: &Position) -> bool {
        pos.r() < self.side_len && pos.c() < self.side_len
    }

    fn pos_to_ind(&self, pos: &Position) -> usize {
        debug_assert!(self.is_inside(pos));
        pos.r() * self.side_len + pos.c()
    }
}
