use std::{
    collections::{HashMap, HashSet, LinkedList},
    fmt::Display,
};

use once_cell::sync::Lazy;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Wall,
    Goal,
    Start,
}

static CELL_CHAR_MAP: Lazy<HashMap<Cell, char>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(Cell::Open, '.');
    m.insert(Cell::Wall, '#');
    m.insert(Cell::Goal, 'G');
    m.insert(Cell::Start, 'S');

    m
});

impl TryFrom<char> for Cell {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        CELL_CHAR_MAP
            .iter()
            .find(|(_, c)| **c == value)
            .map(|(cell, _)| *cell)
            .ok_or(Error::InvalidCellChar(value))
    }
}

impl Cell {
    pub fn to_char(&self) -> char {
        CELL_CHAR_MAP[self]
    }

    pub fn is_passable(&self) -> bool {
        *self != Cell::Wall
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    // Neighbors are always visited in this order, search results depend on it.
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];

        &ALL_DIRECTIONS
    }

    pub fn to_char(&self) -> char {
        match self {
            Direction::Up => 'u',
            Direction::Down => 'd',
            Direction::Left => 'l',
            Direction::Right => 'r',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'u' => Ok(Direction::Up),
            'd' => Ok(Direction::Down),
            'l' => Ok(Direction::Left),
            'r' => Ok(Direction::Right),
            other => Err(Error::InvalidDirectionChar(other)),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }

    // Only guards against underflow, callers check the upper bounds.
    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::Down => Some(Self::new(self.r + 1, self.c)),
            Direction::Left if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            Direction::Right => Some(Self::new(self.r, self.c + 1)),
            _ => None,
        }
    }

    pub fn manhattan_dist(&self, other: &Position) -> usize {
        self.r.abs_diff(other.r) + self.c.abs_diff(other.c)
    }

    pub fn euclidean_dist(&self, other: &Position) -> f64 {
        let dr = self.r.abs_diff(other.r) as f64;
        let dc = self.c.abs_diff(other.c) as f64;
        dr.hypot(dc)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl Zone {
    pub fn of_cell(pos: &Position, cell_w: usize, cell_h: usize) -> Result<Self, Error> {
        if cell_w == 0 || cell_h == 0 {
            return Err(Error::InvalidCellSize(cell_w, cell_h));
        }

        Ok(Self {
            left: pos.c * cell_w,
            top: pos.r * cell_h,
            right: (pos.c + 1) * cell_w - 1,
            bottom: (pos.r + 1) * cell_h - 1,
        })
    }

    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }

    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    side_len: usize,
    winning_pos: Position,
}

impl Grid {
    // Cells are row-major, the start must already be marked.
    pub fn new(side_len: usize, cells: Vec<Cell>) -> Result<Self, Error> {
        if side_len == 0 || cells.is_empty() {
            return Err(Error::EmptyGrid);
        }
        if cells.len() != side_len * side_len {
            return Err(Error::CellCountMismatch(cells.len(), side_len * side_len));
        }

        let expect_start_pos = Position::new(side_len - 1, 0);
        let mut start_pos: Option<Position> = None;
        let mut goal_pos: Option<Position> = None;
        for (ind, cell) in cells.iter().enumerate() {
            let pos = Position::new(ind / side_len, ind % side_len);
            match cell {
                Cell::Start => {
                    if let Some(last_pos) = start_pos {
                        return Err(Error::MultipleStartPosition(last_pos, pos));
                    }
                    if pos != expect_start_pos {
                        return Err(Error::MisplacedStartPosition(expect_start_pos, pos));
                    }
                    start_pos = Some(pos);
                }
                Cell::Goal => {
                    if let Some(last_pos) = goal_pos {
                        return Err(Error::MultipleGoalPosition(last_pos, pos));
                    }
                    goal_pos = Some(pos);
                }
                Cell::Open | Cell::Wall => (),
            }
        }
        if start_pos.is_none() {
            return Err(Error::NoStartPosition);
        }
        let Some(winning_pos) = goal_pos else {
            return Err(Error::NoGoalPosition);
        };

        Ok(Self {
            cells,
            side_len,
            winning_pos,
        })
    }

    pub fn side_len(&self) -> usize {
        self.side_len
    }

    pub fn start_position(&self) -> Position {
        Position::new(self.side_len - 1, 0)
    }

    pub fn winning_position(&self) -> &Position {
        &self.winning_pos
    }

    pub fn cell(&self, pos: &Position) -> Option<Cell> {
        self.pos_to_ind(pos).map(|ind| self.cells[ind])
    }

    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(ind, cell)| (self.ind_to_pos(ind), *cell))
    }

    pub fn legal_moves(&self, pos: &Position) -> Result<Vec<Direction>, Error> {
        let cell = self.checked_cell(pos)?;
        if cell == Cell::Wall {
            return Err(Error::WallOrigin(*pos));
        }

        Ok(Direction::all_dirs()
            .iter()
            .copied()
            .filter(|dir| {
                pos.neighbor(*dir)
                    .and_then(|next_pos| self.cell(&next_pos))
                    .is_some_and(|cell| cell.is_passable())
            })
            .collect())
    }

    pub fn next_space(&self, pos: &Position, dir: Direction) -> Result<Position, Error> {
        if !self.legal_moves(pos)?.contains(&dir) {
            return Err(Error::IllegalMove(*pos, dir));
        }

        pos.neighbor(dir).ok_or(Error::IllegalMove(*pos, dir))
    }

    pub fn is_winning_position(&self, pos: &Position) -> Result<bool, Error> {
        Ok(self.checked_cell(pos)? == Cell::Goal)
    }

    // Positions visited when following the directions from the start, start included.
    pub fn walk(&self, directions: &[Direction]) -> Result<Vec<Position>, Error> {
        let mut positions = Vec::with_capacity(directions.len() + 1);
        let mut cur_pos = self.start_position();
        positions.push(cur_pos);
        for dir in directions {
            cur_pos = self.next_space(&cur_pos, *dir)?;
            positions.push(cur_pos);
        }

        Ok(positions)
    }

    pub fn min_steps_n(&self, from: &Position, to: &Position) -> Option<usize> {
        if !self.cell(from).is_some_and(|cell| cell.is_passable())
            || !self.cell(to).is_some_and(|cell| cell.is_passable())
        {
            return None;
        }

        let mut search_positions = LinkedList::from([(0, *from)]);
        let mut searched_positions = HashSet::from([*from]);
        while let Some((cur_steps_n, cur_pos)) = search_positions.pop_front() {
            if cur_pos == *to {
                return Some(cur_steps_n);
            }

            for next_pos in Direction::all_dirs()
                .iter()
                .flat_map(|dir| cur_pos.neighbor(*dir))
                .filter(|pos| self.cell(pos).is_some_and(|cell| cell.is_passable()))
            {
                if searched_positions.insert(next_pos) {
                    search_positions.push_back((cur_steps_n + 1, next_pos));
                }
            }
        }

        None
    }

    pub fn wall_zones(&self, cell_w: usize, cell_h: usize) -> Result<Vec<Zone>, Error> {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Wall)
            .map(|(pos, _)| Zone::of_cell(&pos, cell_w, cell_h))
            .collect()
    }

    pub fn goal_zone(&self, cell_w: usize, cell_h: usize) -> Result<Zone, Error> {
        Zone::of_cell(&self.winning_pos, cell_w, cell_h)
    }

    pub fn cell_center(&self, pos: &Position, cell_w: usize, cell_h: usize) -> (usize, usize) {
        (pos.c * cell_w + cell_w / 2, pos.r * cell_h + cell_h / 2)
    }

    pub fn overlay(&self, directions: &[Direction]) -> Result<PathOverlay<'_>, Error> {
        let path_positions = self.walk(directions)?.into_iter().collect();

        Ok(PathOverlay {
            grid: self,
            path_positions,
        })
    }

    fn checked_cell(&self, pos: &Position) -> Result<Cell, Error> {
        self.cell(pos).ok_or(Error::OutOfBounds(*pos, self.side_len))
    }

    fn ind_to_pos(&self, ind: usize) -> Position {
        debug_assert!(ind < self.cells.len());
        Position::new(ind / self.side_len, ind % self.side_len)
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if pos.r < self.side_len && pos.c < self.side_len {
            Some(pos.r * self.side_len + pos.c)
        } else {
            None
        }
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.side_len) {
            let line = row.iter().map(|cell| cell.to_char()).collect::<String>();
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}

impl TryFrom<&str> for Grid {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut cells = Vec::new();
        let mut row_n = 0;
        let mut col_n = None;
        for line in value.lines().map(|l| l.trim_end()).filter(|l| !l.is_empty()) {
            let this_col_n = line.chars().count();
            let expect_col_n = *col_n.get_or_insert(this_col_n);
            if expect_col_n != this_col_n {
                return Err(Error::InconsistentRow(expect_col_n, this_col_n));
            }

            for c in line.chars() {
                cells.push(Cell::try_from(c)?);
            }
            row_n += 1;
        }

        let Some(col_n) = col_n else {
            return Err(Error::EmptyGrid);
        };
        if row_n != col_n {
            return Err(Error::NotSquareGrid(row_n, col_n));
        }

        Grid::new(col_n, cells)
    }
}

pub struct PathOverlay<'a> {
    grid: &'a Grid,
    path_positions: HashSet<Position>,
}

impl Display for PathOverlay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.grid.side_len {
            let line = (0..self.grid.side_len)
                .map(|c| {
                    let pos = Position::new(r, c);
                    match self.grid.cell(&pos) {
                        Some(Cell::Open) if self.path_positions.contains(&pos) => 'o',
                        Some(cell) => cell.to_char(),
                        None => ' ',
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}
