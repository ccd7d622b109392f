use std::time::Instant;

use mazepath::{Maze, find_path, generate_maze};

/// Generates and solves the largest maze a number of times and reports the timings.
fn main() {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(1);

    let (width, height) = (u8::MAX, u8::MAX);
    let mut generate_total = std::time::Duration::ZERO;
    let mut solve_total = std::time::Duration::ZERO;
    for i in 0..num_iters {
        let started = Instant::now();
        let mut maze = match generate_maze(width, height, Some(i as u64)) {
            Ok(maze) => maze,
            Err(e) => {
                eprintln!("{}", e);
                return;
            }
        };
        generate_total += started.elapsed();
        maze.place_default_goal();

        let started = Instant::now();
        let path = find_path(&maze, Maze::START);
        solve_total += started.elapsed();
        if !matches!(path, Ok(Some(_))) {
            eprintln!("Iteration {}: no path found", i);
        }
    }
    println!(
        "{} iterations of {}x{}: generate {:?}/iter, solve {:?}/iter",
        num_iters,
        width,
        height,
        generate_total / num_iters.max(1) as u32,
        solve_total / num_iters.max(1) as u32
    );
}
