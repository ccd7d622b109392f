use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: u8, height: u8 },

    #[error("coordinate ({x}, {y}) is not a room of the {width}x{height} grid")]
    OutOfBounds { x: u16, y: u16, width: u16, height: u16 },

    #[error("no goal marker found in the maze")]
    MissingGoal,

    #[error("expected exactly one goal marker, found {count}")]
    MultipleGoals { count: usize },

    #[error("unexpected character {ch:?} at ({x}, {y})")]
    InvalidChar { ch: char, x: usize, y: usize },

    #[error("maze text must be a non-empty rectangle with odd dimensions of at least 3")]
    MalformedText,
}

pub type Result<T> = std::result::Result<T, MazeError>;
