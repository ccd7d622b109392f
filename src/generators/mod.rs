use rand::{SeedableRng, rngs::StdRng};

pub mod kruskal;
pub mod union_find;

pub use kruskal::{Edge, enumerate_edges, kruskal_with_order, randomized_kruskal};
pub use union_find::UnionFind;

use crate::{error::Result, maze::Maze};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a perfect `width x height` maze. No goal marker is placed.
pub fn generate_maze(width: u8, height: u8, seed: Option<u64>) -> Result<Maze> {
    let mut rng = get_rng(seed);
    randomized_kruskal(width, height, &mut rng)
}
