use std::path::PathBuf;

use clap::Parser;

/// Generate a perfect maze with randomized Kruskal and walk it with depth-first search
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Maze width in rooms
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(1..))]
    pub width: u8,

    /// Maze height in rooms
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(1..))]
    pub height: u8,

    /// Random seed; every regeneration draws from the same seeded generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print one maze with its path and directions, then exit
    #[arg(long)]
    pub print: bool,

    /// Directory for the log file
    #[arg(long, default_value = ".")]
    pub log_dir: PathBuf,

    /// Log file name
    #[arg(long, default_value = "mazepath.log")]
    pub log_file: String,

    /// Maximum log level
    #[arg(long, default_value_t = tracing::Level::INFO)]
    pub log_level: tracing::Level,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["mazepath"]).unwrap();
        assert_eq!((config.width, config.height), (30, 30));
        assert_eq!(config.seed, None);
        assert!(!config.print);
        assert_eq!(config.log_file, "mazepath.log");
        assert_eq!(config.log_level, tracing::Level::INFO);
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "mazepath",
            "--width",
            "12",
            "--height",
            "7",
            "--seed",
            "99",
            "--print",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!((config.width, config.height), (12, 7));
        assert_eq!(config.seed, Some(99));
        assert!(config.print);
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_rejects_zero_and_oversized_dimensions() {
        assert!(Config::try_parse_from(["mazepath", "--width", "0"]).is_err());
        assert!(Config::try_parse_from(["mazepath", "--height", "256"]).is_err());
    }
}
