pub mod dfs;
pub mod path;

pub use dfs::solve_dfs;
pub use path::{Direction, Path, follow_directions, to_directions};

use crate::{
    error::{MazeError, Result},
    maze::Maze,
};

/// Searches `maze` for a path from `start` to its goal marker.
///
/// Fails if the maze does not hold exactly one goal. `Ok(None)` means the goal cannot be
/// reached from `start`, including a start on a wall or outside the grid.
pub fn find_path(maze: &Maze, start: (u16, u16)) -> Result<Option<Path>> {
    match maze.goals().count() {
        0 => return Err(MazeError::MissingGoal),
        1 => {}
        count => return Err(MazeError::MultipleGoals { count }),
    }

    let path = solve_dfs(maze, start);
    match &path {
        Some(path) => tracing::debug!(
            "[dfs] path of {} cells from {:?} to {:?}",
            path.len(),
            start,
            path.end()
        ),
        None => tracing::warn!("[dfs] no path from {:?} to the goal", start),
    }
    Ok(path)
}
