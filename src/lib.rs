pub mod app;
pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use error::{MazeError, Result};
pub use generators::generate_maze;
pub use maze::{GridCell, Maze};
pub use solvers::{Path, find_path, to_directions};
