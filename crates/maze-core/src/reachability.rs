use crate::{Cell, Direction, Grid, Position};
use std::collections::VecDeque;

/// Breadth-first reachability check from `Start` to `Goal`.
///
/// Walls are blocked; `Open`, `Start`, and `Goal` are passable. The goal
/// test runs when a cell is dequeued. A grid missing either marker is
/// reported unreachable. Deterministic: the same grid always yields the
/// same answer.
pub fn is_reachable(grid: &Grid) -> bool {
    let Some(start) = grid.find(Cell::Start) else {
        return false;
    };
    let Some(goal) = grid.find(Cell::Goal) else {
        return false;
    };

    let mut visited = vec![false; grid.rows() * grid.cols()];
    let mut frontier = VecDeque::new();
    visited[start.row * grid.cols() + start.col] = true;
    frontier.push_back(start);

    while let Some(pos) = frontier.pop_front() {
        if pos == goal {
            return true;
        }
        for dir in Direction::ALL {
            let Some(next) = grid.neighbor(pos, dir) else {
                continue;
            };
            let slot = &mut visited[next.row * grid.cols() + next.col];
            if !*slot && grid.is_passable(next) {
                *slot = true;
                frontier.push_back(next);
            }
        }
    }

    false
}
