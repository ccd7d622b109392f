use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// A single cell of the doubled-coordinate grid.
///
/// Rooms sit at odd/odd coordinates, joints at coordinates with exactly one even
/// component, and the remaining even/even cells are always walls.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    #[default]
    Wall,
    /// An open room or an opened joint between two rooms.
    Passage,
    /// The end marker the path search is looking for.
    Goal,
}

impl GridCell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    pub const WALL_CHAR: char = '#';
    pub const PASSAGE_CHAR: char = ' ';
    pub const GOAL_CHAR: char = 'E';

    pub fn is_open(self) -> bool {
        !matches!(self, GridCell::Wall)
    }

    pub fn to_char(self) -> char {
        match self {
            GridCell::Wall => Self::WALL_CHAR,
            GridCell::Passage => Self::PASSAGE_CHAR,
            GridCell::Goal => Self::GOAL_CHAR,
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            Self::WALL_CHAR => Some(GridCell::Wall),
            Self::PASSAGE_CHAR => Some(GridCell::Passage),
            Self::GOAL_CHAR => Some(GridCell::Goal),
            _ => None,
        }
    }
}

/// What a renderer should draw at a grid coordinate, after overlaying start and path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
    Start,
    Goal,
    Route,
}

impl Tile {
    pub fn styled(self) -> StyledContent<&'static str> {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Open => "  ".with(Color::Reset),
            Tile::Start => "🟩".with(Color::Green),
            Tile::Goal => "🟥".with(Color::Red),
            Tile::Route => "🟦".with(Color::Blue),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                GridCell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        styled_symbol
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.styled())
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
