pub mod cell;
pub mod grid;

use std::{collections::VecDeque, fmt};

pub use cell::{GridCell, Tile};
pub use grid::Grid;

use crate::error::{MazeError, Result};

/// A rectangular maze of `width x height` rooms stored in doubled coordinates.
///
/// The backing grid is `(2 * width + 1)` columns by `(2 * height + 1)` rows. Room `(col, row)`
/// lives at grid coordinate `(2 * col + 1, 2 * row + 1)`; the joint between two adjacent rooms
/// is the grid cell halfway between their centers.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    grid: Grid<GridCell>,
    width: u8,
    height: u8,
}

impl Maze {
    /// The room every search starts from.
    pub const START: (u16, u16) = (1, 1);

    /// Creates a maze with every room open and every joint walled.
    pub fn new(width: u8, height: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        // n cells in each dimension -> n + 1 walls -> 2n + 1 total
        let grid_width = width as u16 * 2 + 1;
        let grid_height = height as u16 * 2 + 1;
        let mut grid = Grid::new(grid_width, grid_height, GridCell::Wall);
        (0..height as u16).for_each(|row| {
            (0..width as u16).for_each(|col| {
                grid[(col * 2 + 1, row * 2 + 1)] = GridCell::Passage;
            });
        });
        Ok(Maze {
            grid,
            width,
            height,
        })
    }

    /// Returns the width of the maze in rooms.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Returns the height of the maze in rooms.
    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn room_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn grid(&self) -> &Grid<GridCell> {
        &self.grid
    }

    /// Grid coordinate of the center of logical cell `cell` (row-major index).
    pub fn room_coord(&self, cell: usize) -> (u16, u16) {
        let width = self.width as usize;
        ((cell % width * 2 + 1) as u16, (cell / width * 2 + 1) as u16)
    }

    pub fn is_room(&self, coord: (u16, u16)) -> bool {
        coord.0 % 2 == 1
            && coord.1 % 2 == 1
            && coord.0 < self.grid.width()
            && coord.1 < self.grid.height()
    }

    /// Opens the joint between two adjacent logical cells.
    pub fn open_joint_between(&mut self, a: usize, b: usize) {
        let (x1, y1) = self.room_coord(a);
        let (x2, y2) = self.room_coord(b);
        self.grid[((x1 + x2) / 2, (y1 + y2) / 2)] = GridCell::Passage;
    }

    /// The bottom-right room, where the goal goes unless told otherwise.
    pub fn default_goal(&self) -> (u16, u16) {
        (self.grid.width() - 2, self.grid.height() - 2)
    }

    /// Moves the goal marker to the room at `coord`, clearing any previous marker.
    pub fn set_goal(&mut self, coord: (u16, u16)) -> Result<()> {
        if !self.is_room(coord) {
            return Err(MazeError::OutOfBounds {
                x: coord.0,
                y: coord.1,
                width: self.grid.width(),
                height: self.grid.height(),
            });
        }
        self.move_goal(coord);
        Ok(())
    }

    /// Moves the goal marker to the bottom-right room.
    pub fn place_default_goal(&mut self) {
        self.move_goal(self.default_goal());
    }

    fn move_goal(&mut self, coord: (u16, u16)) {
        let previous = self.goals().collect::<Vec<_>>();
        for goal in previous {
            self.grid[goal] = GridCell::Passage;
        }
        self.grid[coord] = GridCell::Goal;
    }

    /// Coordinates of every goal marker in the grid.
    pub fn goals(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.grid
            .iter()
            .filter(|(_, cell)| **cell == GridCell::Goal)
            .map(|(coord, _)| coord)
    }

    /// Number of joints that have been opened into passages.
    pub fn open_joint_count(&self) -> usize {
        self.grid
            .iter()
            .filter(|&((x, y), cell)| (x % 2 == 0) != (y % 2 == 0) && cell.is_open())
            .count()
    }

    /// Counts the rooms reachable from `from` by walking over open cells.
    pub fn reachable_rooms(&self, from: (u16, u16)) -> usize {
        if !self.grid.get(from).is_some_and(|cell| cell.is_open()) {
            return 0;
        }
        let mut seen = Grid::new(self.grid.width(), self.grid.height(), false);
        let mut queue = VecDeque::from([from]);
        seen[from] = true;
        let mut rooms = 0;
        while let Some((x, y)) = queue.pop_front() {
            if self.is_room((x, y)) {
                rooms += 1;
            }
            for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                let (nx, ny) = (x as i32 + dx, y as i32 + dy);
                if !self.grid.contains(nx, ny) {
                    continue;
                }
                let next = (nx as u16, ny as u16);
                if !seen[next] && self.grid[next].is_open() {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
        rooms
    }

    /// Parses the character form produced by `Display`: `#` walls, ` ` passages, `E` the goal.
    pub fn from_text(text: &str) -> Result<Self> {
        let rows = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let grid_height = rows.len();
        let grid_width = rows.first().map_or(0, |row| row.len());
        let well_formed = grid_height >= 3
            && grid_width >= 3
            && grid_height % 2 == 1
            && grid_width % 2 == 1
            && rows.iter().all(|row| row.len() == grid_width);
        if !well_formed {
            return Err(MazeError::MalformedText);
        }
        let (width, height) = ((grid_width - 1) / 2, (grid_height - 1) / 2);
        if width > u8::MAX as usize || height > u8::MAX as usize {
            return Err(MazeError::MalformedText);
        }

        let mut maze = Maze::new(width as u8, height as u8)?;
        for (y, row) in rows.iter().enumerate() {
            for (x, &ch) in row.iter().enumerate() {
                let cell = GridCell::from_char(ch).ok_or(MazeError::InvalidChar { ch, x, y })?;
                maze.grid[(x as u16, y as u16)] = cell;
            }
        }
        Ok(maze)
    }
}

impl std::ops::Index<(u16, u16)> for Maze {
    type Output = GridCell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.grid[index]
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_maze_layout() {
        let maze = Maze::new(3, 2).unwrap();
        assert_eq!(maze.grid().width(), 7);
        assert_eq!(maze.grid().height(), 5);
        for ((x, y), cell) in maze.grid().iter() {
            let expected = if x % 2 == 1 && y % 2 == 1 {
                GridCell::Passage
            } else {
                GridCell::Wall
            };
            assert_eq!(*cell, expected, "cell at ({}, {})", x, y);
        }
        assert_eq!(maze.open_joint_count(), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Maze::new(0, 4),
            Err(MazeError::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
        assert!(Maze::new(4, 0).is_err());
    }

    #[test]
    fn test_room_coord() {
        let maze = Maze::new(4, 3).unwrap();
        assert_eq!(maze.room_coord(0), (1, 1));
        assert_eq!(maze.room_coord(3), (7, 1));
        assert_eq!(maze.room_coord(4), (1, 3));
        assert_eq!(maze.room_coord(11), (7, 5));
    }

    #[test]
    fn test_open_joint_between() {
        let mut maze = Maze::new(2, 2).unwrap();
        // Horizontal neighbours: cells 0 and 1
        maze.open_joint_between(0, 1);
        assert_eq!(maze[(2, 1)], GridCell::Passage);
        // Vertical neighbours: cells 1 and 3, order does not matter
        maze.open_joint_between(3, 1);
        assert_eq!(maze[(3, 2)], GridCell::Passage);
        assert_eq!(maze.open_joint_count(), 2);
    }

    #[test]
    fn test_goal_placement() {
        let mut maze = Maze::new(3, 3).unwrap();
        assert_eq!(maze.default_goal(), (5, 5));
        maze.place_default_goal();
        assert_eq!(maze.goals().collect::<Vec<_>>(), vec![(5, 5)]);

        // Moving the goal leaves exactly one marker
        maze.set_goal((3, 1)).unwrap();
        assert_eq!(maze.goals().collect::<Vec<_>>(), vec![(3, 1)]);
        assert_eq!(maze[(5, 5)], GridCell::Passage);
        maze.place_default_goal();
        assert_eq!(maze.goals().collect::<Vec<_>>(), vec![(5, 5)]);

        // Joints and out of range coordinates are not rooms
        assert!(maze.set_goal((2, 1)).is_err());
        assert!(maze.set_goal((7, 1)).is_err());
    }

    #[test]
    fn test_reachable_rooms() {
        let mut maze = Maze::new(3, 1).unwrap();
        assert_eq!(maze.reachable_rooms(Maze::START), 1);
        maze.open_joint_between(0, 1);
        assert_eq!(maze.reachable_rooms(Maze::START), 2);
        maze.open_joint_between(1, 2);
        assert_eq!(maze.reachable_rooms(Maze::START), 3);
        assert_eq!(maze.reachable_rooms((0, 0)), 0);
    }

    #[test]
    fn test_text_round_trip() {
        let text = "\
#####
#   #
### #
#E  #
#####
";
        let maze = Maze::from_text(text).unwrap();
        assert_eq!((maze.width(), maze.height()), (2, 2));
        assert_eq!(maze[(1, 3)], GridCell::Goal);
        assert_eq!(maze.to_string(), text);
    }

    #[test]
    fn test_malformed_text() {
        assert_eq!(Maze::from_text(""), Err(MazeError::MalformedText));
        assert_eq!(Maze::from_text("###\n# #\n##\n"), Err(MazeError::MalformedText));
        assert_eq!(Maze::from_text("####\n#  #\n####\n"), Err(MazeError::MalformedText));
        assert_eq!(
            Maze::from_text("###\n#v#\n###\n"),
            Err(MazeError::InvalidChar { ch: 'v', x: 1, y: 1 })
        );
    }
}
