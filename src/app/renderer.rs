use std::io::Write;

use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};
use unicode_truncate::UnicodeTruncateStr;

use crate::{
    app::Session,
    maze::{Grid, GridCell, Maze, Tile},
    solvers::Path,
};

/// Rows above the maze: controls and the path directions.
pub const NUM_STATUS_ROWS: u16 = 2;

const CONTROLS: &str = "r: new maze  p: show path  +/-: width  ]/[: height  Esc: exit";

/// Marks the cells of `path` on a grid shaped like the maze.
fn route_mask(maze: &Maze, path: Option<&Path>) -> Grid<bool> {
    let grid = maze.grid();
    let mut mask = Grid::new(grid.width(), grid.height(), false);
    if let Some(path) = path {
        path.traversal().for_each(|coord| mask[coord] = true);
    }
    mask
}

/// What to draw at `coord`. Start and goal stay visible on top of the route.
fn tile_at(maze: &Maze, route: &Grid<bool>, coord: (u16, u16)) -> Tile {
    match maze[coord] {
        _ if coord == Maze::START => Tile::Start,
        GridCell::Goal => Tile::Goal,
        _ if route[coord] => Tile::Route,
        GridCell::Wall => Tile::Wall,
        GridCell::Passage => Tile::Open,
    }
}

/// The status line shown above the maze, cut to `max_width` columns.
pub fn status_line(session: &Session, max_width: u16) -> String {
    let status = match session.path() {
        Some(_) => format!("Path: {}", session.directions()),
        None if session.searched() => "No path found.".to_string(),
        None => format!(
            "Width: {}  Height: {}",
            session.next_width(),
            session.next_height()
        ),
    };
    let (truncated, _) = status.unicode_truncate(max_width as usize);
    truncated.to_string()
}

/// Whether a terminal of the given size can show the whole maze plus the status rows.
pub fn fits(maze: &Maze, term_width: u16, term_height: u16) -> bool {
    let grid = maze.grid();
    term_width as u32 >= grid.width() as u32 * GridCell::CELL_WIDTH as u32
        && term_height as u32 >= grid.height() as u32 + NUM_STATUS_ROWS as u32
}

/// Draws the session's maze, start, goal and path, with the status rows on top.
pub fn draw<W: Write>(
    out: &mut W,
    session: &Session,
    term_width: u16,
    term_height: u16,
) -> std::io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    let maze = session.maze();
    if !fits(maze, term_width, term_height) {
        let grid = maze.grid();
        let msg = format!(
            "Terminal size is too small ({}x{}) for the grid dimensions ({}x{}) to display. \
Please resize the terminal or shrink the maze.\r\n",
            term_width,
            term_height,
            grid.width(),
            grid.height()
        );
        queue!(
            out,
            style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold)),
            style::PrintStyledContent(CONTROLS.with(Color::Cyan)),
        )?;
        return out.flush();
    }

    let (controls, _) = CONTROLS.unicode_truncate(term_width as usize);
    queue!(
        out,
        style::PrintStyledContent(controls.with(Color::Cyan)),
        cursor::MoveTo(0, 1),
        style::PrintStyledContent(
            status_line(session, term_width)
                .with(Color::Green)
                .attribute(Attribute::Bold)
        ),
    )?;

    let route = route_mask(maze, session.path());
    for (y, row) in maze.grid().rows().enumerate() {
        queue!(out, cursor::MoveTo(0, y as u16 + NUM_STATUS_ROWS))?;
        for x in 0..row.len() {
            queue!(out, style::Print(tile_at(maze, &route, (x as u16, y as u16))))?;
        }
    }
    out.flush()
}

/// Plain rendering for non-interactive output: one styled tile per cell, one row per line.
pub fn render_tiles(maze: &Maze, path: Option<&Path>) -> String {
    let route = route_mask(maze, path);
    let mut text = String::new();
    for (y, row) in maze.grid().rows().enumerate() {
        for x in 0..row.len() {
            text.push_str(&tile_at(maze, &route, (x as u16, y as u16)).to_string());
        }
        text.push('\n');
    }
    text
}
