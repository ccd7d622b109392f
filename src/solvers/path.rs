use std::fmt;

/// Compass direction of a single grid step. North is toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Direction of the step from `from` to `to`, judged by sign only.
    /// A horizontal component wins over a vertical one; identical points give `None`.
    pub fn between(from: (u16, u16), to: (u16, u16)) -> Option<Direction> {
        let dx = to.0 as i32 - from.0 as i32;
        let dy = to.1 as i32 - from.1 as i32;
        match (dx.signum(), dy.signum()) {
            (1, _) => Some(Direction::East),
            (-1, _) => Some(Direction::West),
            (0, 1) => Some(Direction::South),
            (0, -1) => Some(Direction::North),
            _ => None,
        }
    }

    /// Unit `(dx, dy)` offset in grid space.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }

    pub fn from_letter(letter: char) -> Option<Direction> {
        match letter {
            'N' => Some(Direction::North),
            'S' => Some(Direction::South),
            'E' => Some(Direction::East),
            'W' => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Grid coordinates on the way from the goal back to the start.
///
/// Points are stored in the order the search discovers them on success: the goal first and the
/// start last. Consecutive points are one grid step apart, so joints are included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    points: Vec<(u16, u16)>,
}

impl Path {
    pub fn from_end_to_start(points: Vec<(u16, u16)>) -> Self {
        Path { points }
    }

    /// Points from the goal back to the start.
    pub fn points(&self) -> &[(u16, u16)] {
        &self.points
    }

    /// Points from the start to the goal.
    pub fn traversal(&self) -> impl DoubleEndedIterator<Item = (u16, u16)> + '_ {
        self.points.iter().rev().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Option<(u16, u16)> {
        self.points.last().copied()
    }

    pub fn end(&self) -> Option<(u16, u16)> {
        self.points.first().copied()
    }

    /// Steps taken from start to goal.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.points
            .windows(2)
            .rev()
            .filter_map(|pair| Direction::between(pair[1], pair[0]))
    }
}

/// Formats `path` as a string of `N`, `S`, `E`, `W`, one letter per step from start to goal.
pub fn to_directions(path: &Path) -> String {
    path.directions().map(Direction::letter).collect()
}

/// Replays `directions` as unit steps from `start`.
/// Returns `None` on an unknown letter or a step that leaves the non-negative quadrant.
pub fn follow_directions(start: (u16, u16), directions: &str) -> Option<(u16, u16)> {
    directions.chars().try_fold(start, |(x, y), letter| {
        let (dx, dy) = Direction::from_letter(letter)?.offset();
        let x = u16::try_from(x as i32 + dx).ok()?;
        let y = u16::try_from(y as i32 + dy).ok()?;
        Some((x, y))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_between() {
        assert_eq!(Direction::between((1, 1), (2, 1)), Some(Direction::East));
        assert_eq!(Direction::between((2, 1), (1, 1)), Some(Direction::West));
        assert_eq!(Direction::between((1, 1), (1, 2)), Some(Direction::South));
        assert_eq!(Direction::between((1, 2), (1, 1)), Some(Direction::North));
        // Magnitude is ignored
        assert_eq!(Direction::between((1, 1), (3, 1)), Some(Direction::East));
        assert_eq!(Direction::between((1, 1), (1, 1)), None);
    }

    #[test]
    fn test_letters() {
        for dir in [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ] {
            assert_eq!(Direction::from_letter(dir.letter()), Some(dir));
            assert_eq!(dir.to_string(), dir.letter().to_string());
        }
        assert_eq!(Direction::from_letter('x'), None);
    }

    #[test]
    fn test_to_directions_reads_start_to_end() {
        // Stored goal first: (3, 3) <- (3, 2) <- (3, 1) <- (2, 1) <- (1, 1)
        let path = Path::from_end_to_start(vec![(3, 3), (3, 2), (3, 1), (2, 1), (1, 1)]);
        assert_eq!(path.start(), Some((1, 1)));
        assert_eq!(path.end(), Some((3, 3)));
        assert_eq!(to_directions(&path), "EESS");
        assert_eq!(
            path.traversal().collect::<Vec<_>>(),
            vec![(1, 1), (2, 1), (3, 1), (3, 2), (3, 3)]
        );
    }

    #[test]
    fn test_single_point_path_has_no_directions() {
        let path = Path::from_end_to_start(vec![(1, 1)]);
        assert_eq!(to_directions(&path), "");
        assert_eq!(to_directions(&Path::default()), "");
    }

    #[test]
    fn test_follow_directions() {
        assert_eq!(follow_directions((1, 1), "EESS"), Some((3, 3)));
        assert_eq!(follow_directions((1, 1), ""), Some((1, 1)));
        assert_eq!(follow_directions((1, 1), "WNN"), None);
        assert_eq!(follow_directions((1, 1), "EX"), None);
    }

    #[test]
    fn test_empty_path() {
        let path = Path::default();
        assert!(path.is_empty());
        assert_eq!(path.start(), None);
        assert_eq!(path.end(), None);
        assert_eq!(path.traversal().count(), 0);
    }
}
