use clap::Parser;
use mazepath::{app, config::Config};
use tracing_appender::non_blocking::WorkerGuard;

/// Log to a file, since stdout belongs to the maze view.
fn init_logging(config: &Config) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(&config.log_dir, &config.log_file);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(config.log_level)
        .init();
    guard
}

fn main() -> std::io::Result<()> {
    let config = Config::parse();
    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = init_logging(&config);
    tracing::info!("Starting with {:?}", config);

    if config.print {
        return app::print_once(&mut std::io::stdout(), &config);
    }

    let mut stdout = std::io::stdout();
    app::setup_terminal(&mut stdout)?;
    let result = app::run(&mut stdout, &config);
    app::restore_terminal(&mut stdout)?;
    result
}
