pub mod renderer;

use std::io::{Stdout, Write};

use crossterm::{
    ExecutableCommand, cursor,
    event::{self, KeyCode},
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};
use rand::rngs::StdRng;

use crate::{
    config::Config,
    error::Result,
    generators::{get_rng, randomized_kruskal},
    maze::Maze,
    solvers::{Path, find_path, to_directions},
};

/// The maze currently on screen and the last path found in it.
///
/// Regenerating builds a brand-new maze and swaps it in; a search only ever borrows the
/// current maze.
pub struct Session {
    maze: Maze,
    path: Option<Path>,
    directions: String,
    /// Whether a search has run on the current maze
    searched: bool,
    /// Dimensions the next regeneration will use
    next_width: u8,
    next_height: u8,
    rng: StdRng,
}

impl Session {
    /// Starts a session on a fresh maze. Every maze of the session is drawn from one generator,
    /// seeded with `seed` when given and from OS entropy otherwise.
    pub fn with_seed(width: u8, height: u8, seed: Option<u64>) -> Result<Self> {
        let mut rng = get_rng(seed);
        let maze = Self::build(width, height, &mut rng)?;
        Ok(Session {
            maze,
            path: None,
            directions: String::new(),
            searched: false,
            next_width: width,
            next_height: height,
            rng,
        })
    }

    fn build(width: u8, height: u8, rng: &mut StdRng) -> Result<Maze> {
        let mut maze = randomized_kruskal(width, height, rng)?;
        maze.place_default_goal();
        Ok(maze)
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// Directions of the last path found, empty if there is none.
    pub fn directions(&self) -> &str {
        &self.directions
    }

    pub fn searched(&self) -> bool {
        self.searched
    }

    pub fn next_width(&self) -> u8 {
        self.next_width
    }

    pub fn next_height(&self) -> u8 {
        self.next_height
    }

    /// Changes the width used by the next regeneration, staying within 1..=255.
    pub fn adjust_width(&mut self, delta: i16) {
        self.next_width = (self.next_width as i16 + delta).clamp(1, u8::MAX as i16) as u8;
    }

    /// Changes the height used by the next regeneration, staying within 1..=255.
    pub fn adjust_height(&mut self, delta: i16) {
        self.next_height = (self.next_height as i16 + delta).clamp(1, u8::MAX as i16) as u8;
    }

    /// Replaces the maze with a fresh one of the pending dimensions and forgets the old path.
    pub fn regenerate(&mut self) -> Result<()> {
        let maze = Self::build(self.next_width, self.next_height, &mut self.rng)?;
        self.maze = maze;
        self.path = None;
        self.directions.clear();
        self.searched = false;
        tracing::info!(
            "[session] regenerated a {}x{} maze",
            self.next_width,
            self.next_height
        );
        Ok(())
    }

    /// Searches the current maze from the start room and keeps the result.
    pub fn show_path(&mut self) -> Result<Option<&Path>> {
        let path = find_path(&self.maze, Maze::START)?;
        self.directions = path.as_ref().map(to_directions).unwrap_or_default();
        self.path = path;
        self.searched = true;
        tracing::info!("[session] show path: {} steps", self.directions.len());
        Ok(self.path.as_ref())
    }
}

/// Set a panic hook to restore terminal state on panic
/// This ensures that the terminal is not left in raw mode or alternate screen on panic
fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Ignore any errors as we are already failing
        let _ = restore_terminal(&mut std::io::stdout());
        hook(panic_info);
    }));
}

/// Setup terminal in raw mode and enter alternate screen
/// Also sets a panic hook to restore terminal on panic
pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
    terminal::enable_raw_mode()?;
    set_panic_hook();
    queue!(
        stdout,
        terminal::EnterAlternateScreen,
        terminal::Clear(ClearType::All),
        cursor::Hide,
        cursor::MoveTo(0, 0)
    )?;
    stdout.flush()?;
    Ok(())
}

/// Restore terminal to original state
/// Leave alternate screen and disable raw mode
pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
    queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
    stdout.flush()?;
    terminal::disable_raw_mode()?;
    Ok(())
}

/// What a key press asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UserAction {
    Regenerate,
    ShowPath,
    Resize { width: i16, height: i16 },
    Exit,
}

fn action_for_key(code: KeyCode) -> Option<UserAction> {
    match code {
        KeyCode::Char('r') | KeyCode::Char('g') => Some(UserAction::Regenerate),
        KeyCode::Char('p') | KeyCode::Enter => Some(UserAction::ShowPath),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(UserAction::Resize {
            width: 1,
            height: 0,
        }),
        KeyCode::Char('-') => Some(UserAction::Resize {
            width: -1,
            height: 0,
        }),
        KeyCode::Char(']') => Some(UserAction::Resize {
            width: 0,
            height: 1,
        }),
        KeyCode::Char('[') => Some(UserAction::Resize {
            width: 0,
            height: -1,
        }),
        KeyCode::Esc | KeyCode::Char('q') => Some(UserAction::Exit),
        _ => None,
    }
}

/// Interactive loop: draw, wait for a key, apply it, repeat until Esc.
pub fn run(stdout: &mut Stdout, config: &Config) -> std::io::Result<()> {
    let mut session = match Session::with_seed(config.width, config.height, config.seed) {
        Ok(session) => session,
        Err(e) => {
            stdout.execute(style::PrintStyledContent(
                format!("{}\r\n", e).with(Color::Red).attribute(Attribute::Bold),
            ))?;
            return Ok(());
        }
    };
    tracing::info!("Started main app loop");

    loop {
        let (term_width, term_height) = terminal::size()?;
        renderer::draw(stdout, &session, term_width, term_height)?;

        let action = match event::read()? {
            event::Event::Key(key_event) if key_event.kind == event::KeyEventKind::Press => {
                action_for_key(key_event.code)
            }
            // Redraw at the new size on the next iteration
            event::Event::Resize(_, _) => continue,
            _ => None,
        };
        let Some(action) = action else {
            continue;
        };
        tracing::debug!("[app loop] {:?}", action);

        let result = match action {
            UserAction::Regenerate => session.regenerate(),
            UserAction::ShowPath => session.show_path().map(|_| ()),
            UserAction::Resize { width, height } => {
                session.adjust_width(width);
                session.adjust_height(height);
                Ok(())
            }
            UserAction::Exit => break,
        };
        if let Err(e) = result {
            tracing::error!("[app loop] {}", e);
        }
    }

    tracing::info!("Exiting main app loop");
    Ok(())
}

/// One-shot mode: generate and solve one maze, then lay out the directions and the maze as text.
pub fn render_once(config: &Config) -> Result<String> {
    let mut session = Session::with_seed(config.width, config.height, config.seed)?;
    session.show_path()?;
    let status = match session.path() {
        Some(_) => format!("Path: {}", session.directions()),
        None => "No path found.".to_string(),
    };
    Ok(format!(
        "{}\n{}",
        status,
        renderer::render_tiles(session.maze(), session.path())
    ))
}

/// Writes the one-shot rendering to `out`. Maze errors surface as `io::Error` so the process
/// exits with a failure status.
pub fn print_once<W: Write>(out: &mut W, config: &Config) -> std::io::Result<()> {
    let text = render_once(config).map_err(std::io::Error::other)?;
    write!(out, "{}", text)?;
    out.flush()
}
