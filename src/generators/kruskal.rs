use rand::{Rng, seq::SliceRandom};

use super::union_find::UnionFind;
use crate::{error::Result, maze::Maze};

/// Candidate passage between two adjacent logical cells (row-major indices).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub src: usize,
    pub dest: usize,
}

/// Lists every in-bounds neighbour pair, visiting up, right, down, left from each cell.
///
/// Each internal edge shows up twice, once from each endpoint. Both copies are kept, which
/// gives every edge two chances to land early in the shuffle.
pub fn enumerate_edges(width: u8, height: u8) -> Vec<Edge> {
    let (width, height) = (width as usize, height as usize);
    (0..height)
        .flat_map(|row| (0..width).map(move |col| (row, col)))
        .flat_map(|(row, col)| {
            let src = row * width + col;
            [
                (row > 0).then(|| src - width),
                (col + 1 < width).then(|| src + 1),
                (row + 1 < height).then(|| src + width),
                (col > 0).then(|| src - 1),
            ]
            .into_iter()
            .flatten()
            .map(move |dest| Edge { src, dest })
        })
        .collect()
}

/// Kruskal's algorithm with the edge order decided by `order`.
///
/// `order` receives the full edge list and may permute it in place; the edges are then
/// processed front to back. Any permutation yields a perfect maze.
pub fn kruskal_with_order<F>(width: u8, height: u8, order: F) -> Result<Maze>
where
    F: FnOnce(&mut [Edge]),
{
    let mut maze = Maze::new(width, height)?;

    let mut edges = enumerate_edges(width, height);
    order(&mut edges);

    let mut uf = UnionFind::new(maze.room_count());
    let mut opened = 0;
    for edge in &edges {
        // If cells are not yet connected, remove the wall between them
        if uf.union(edge.src, edge.dest) {
            maze.open_joint_between(edge.src, edge.dest);
            opened += 1;
        }
    }
    tracing::debug!(
        "[kruskal] {}x{} maze: {} candidate edges, {} joints opened",
        width,
        height,
        edges.len(),
        opened
    );

    Ok(maze)
}

/// Randomized Kruskal: shuffle the edges uniformly with `rng`, then join.
pub fn randomized_kruskal<R: Rng + ?Sized>(width: u8, height: u8, rng: &mut R) -> Result<Maze> {
    kruskal_with_order(width, height, |edges| edges.shuffle(rng))
}
