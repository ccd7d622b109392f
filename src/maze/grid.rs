/// Row-major 2D storage addressed by `(x, y)`, where `x` is the column and `y` the row.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    data: Box<[T]>,
    width: u16,
    height: u16,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: u16, height: u16, value: T) -> Self {
        let data = vec![value; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }
}

impl<T> Grid<T> {
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Signed bounds check, so callers can probe `x - 1` without underflow games.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    pub fn get(&self, coord: (u16, u16)) -> Option<&T> {
        if coord.0 < self.width && coord.1 < self.height {
            Some(&self.data[self.ravel_index(coord.0, coord.1)])
        } else {
            None
        }
    }

    /// Iterates over `((x, y), &cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((u16, u16), &T)> {
        let width = self.width as usize;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, cell)| (((i % width) as u16, (i / width) as u16), cell))
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.width.max(1) as usize)
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }
}

impl<T> std::ops::Index<(u16, u16)> for Grid<T> {
    type Output = T;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl<T> std::ops::IndexMut<(u16, u16)> for Grid<T> {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(5, 3, 0u8);
        grid[(4, 2)] = 7;
        assert_eq!(grid[(4, 2)], 7);
        assert_eq!(grid.get((4, 2)), Some(&7));
        assert_eq!(grid.get((5, 2)), None);
        assert_eq!(grid.get((4, 3)), None);
    }

    #[test]
    fn test_contains() {
        let grid = Grid::new(3, 3, false);
        assert!(grid.contains(0, 0));
        assert!(grid.contains(2, 2));
        assert!(!grid.contains(-1, 0));
        assert!(!grid.contains(0, 3));
    }

    #[test]
    fn test_iter_is_row_major() {
        let mut grid = Grid::new(2, 2, 0);
        grid[(1, 0)] = 1;
        grid[(0, 1)] = 2;
        let coords = grid.iter().map(|(c, &v)| (c, v)).collect::<Vec<_>>();
        assert_eq!(
            coords,
            vec![((0, 0), 0), ((1, 0), 1), ((0, 1), 2), ((1, 1), 0)]
        );
        assert_eq!(grid.rows().count(), 2);
    }
}
