use super::path::Path;
use crate::maze::{Grid, GridCell, Maze};

/// Neighbour order tried from every cell: west, south, east, north.
const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// One level of the depth-first walk.
struct Frame {
    coord: (u16, u16),
    /// Index into `DIRECTIONS` of the next neighbour to try
    next_dir: usize,
}

/// Depth-first search from `start` to the goal marker, one grid step at a time.
///
/// Visited cells are tracked in a separate mask, so the maze is left untouched. A dead end stays
/// visited after backtracking; in a perfect maze it can never lead to the goal.
/// Returns `None` when no goal is reachable.
pub fn solve_dfs(maze: &Maze, start: (u16, u16)) -> Option<Path> {
    let grid = maze.grid();
    match grid.get(start) {
        None | Some(GridCell::Wall) => return None,
        Some(GridCell::Goal) => return Some(Path::from_end_to_start(vec![start])),
        Some(GridCell::Passage) => {}
    }

    let mut visited = Grid::new(grid.width(), grid.height(), false);
    visited[start] = true;
    let mut stack = vec![Frame {
        coord: start,
        next_dir: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(&(dx, dy)) = DIRECTIONS.get(frame.next_dir) else {
            // Every direction failed, so this cell is a dead end
            stack.pop();
            continue;
        };
        frame.next_dir += 1;

        let (nx, ny) = (frame.coord.0 as i32 + dx, frame.coord.1 as i32 + dy);
        if !grid.contains(nx, ny) {
            continue;
        }
        let next = (nx as u16, ny as u16);
        match grid[next] {
            GridCell::Wall => continue,
            _ if visited[next] => continue,
            GridCell::Goal => {
                // The stack holds the chain from the start, deepest frame last
                let points = std::iter::once(next)
                    .chain(stack.iter().rev().map(|frame| frame.coord))
                    .collect();
                return Some(Path::from_end_to_start(points));
            }
            GridCell::Passage => {
                visited[next] = true;
                stack.push(Frame {
                    coord: next,
                    next_dir: 0,
                });
            }
        }
    }

    None
}
