use std::collections::HashSet;

use log::debug;

use crate::{
    grid::{Direction, Grid, Position},
    queue::MinPriorityQueue,
    Error,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionAndPath {
    pos: Position,
    path: Vec<Direction>,
    f: usize,
}

impl PositionAndPath {
    pub fn new(pos: Position, path: Vec<Direction>, grid: &Grid) -> Self {
        let g = path.len();
        let h = pos.manhattan_dist(grid.winning_position());
        Self { pos, path, f: g + h }
    }

    pub fn pos(&self) -> &Position {
        &self.pos
    }

    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    pub fn f(&self) -> usize {
        self.f
    }

    fn advance(&self, next_pos: Position, dir: Direction, grid: &Grid) -> Self {
        let mut next_path = Vec::with_capacity(self.path.len() + 1);
        next_path.extend_from_slice(&self.path);
        next_path.push(dir);
        Self::new(next_pos, next_path, grid)
    }

    fn into_path(self) -> Vec<Direction> {
        self.path
    }
}

// A* with unit move cost and Manhattan heuristic. Positions are marked visited
// when first discovered, which only holds up while every move costs the same.
pub fn find_directions(grid: &Grid) -> Result<Vec<Direction>, Error> {
    let start_pos = grid.start_position();
    let init_state = PositionAndPath::new(start_pos, Vec::new(), grid);
    let mut fringe = MinPriorityQueue::new();
    let init_f = init_state.f() as i64;
    fringe.enqueue(init_state, init_f);
    let mut visited_positions = HashSet::from([start_pos]);
    let mut expanded_n = 0;

    while !fringe.is_empty() {
        let cur_state = fringe.dequeue()?;
        expanded_n += 1;

        for dir in grid.legal_moves(cur_state.pos())? {
            let next_pos = grid.next_space(cur_state.pos(), dir)?;
            if visited_positions.contains(&next_pos) {
                continue;
            }

            if grid.is_winning_position(&next_pos)? {
                debug!(
                    "Reach goal {} after expanding {} node(s).",
                    next_pos, expanded_n
                );
                let mut path = cur_state.into_path();
                path.push(dir);
                return Ok(path);
            }

            visited_positions.insert(next_pos);
            let next_state = cur_state.advance(next_pos, dir, grid);
            let next_f = next_state.f() as i64;
            fringe.enqueue(next_state, next_f);
        }
    }

    Err(Error::SearchExhausted(expanded_n))
}
