//! Command-line configuration and logging setup.

use std::{fs::File, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::{OptionExt as _, Result, WrapErr as _};
use env_logger::{Builder, Env, Target};
use log::info;

use crate::sampling::CellScale;

/// Command-line options of the game.
///
/// This structure is parsed by `clap` from the process arguments. Every option has a default, so
/// running the game without arguments opens the main menu with a random seed.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Seed for the maze generator. A random seed is drawn, and logged, when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Difficulty tier to start right away, skipping the menus (1 easy, 2 medium, 3 hard; any
    /// other value gives a 10x10 maze).
    #[arg(long, allow_negative_numbers = true)]
    pub tier: Option<i32>,
    /// Width of a maze cell, in terminal columns.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..))]
    pub cell_width: u16,
    /// Height of a maze cell, in terminal rows.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub cell_height: u16,
    /// File receiving the logs. Nothing is logged without it, since the game owns the terminal.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            tier: None,
            cell_width: CellScale::TERMINAL.width(),
            cell_height: CellScale::TERMINAL.height(),
            log_file: None,
            log_level: "info".to_owned(),
        }
    }
}

impl Config {
    /// Returns the size of a maze cell on screen.
    ///
    /// # Errors
    ///
    /// This function returns an error if the configured width or height is zero.
    pub fn cell_scale(&self) -> Result<CellScale> {
        CellScale::new(self.cell_width, self.cell_height)
            .ok_or_eyre("cell width and height must both be at least 1")
    }

    /// Installs the global logger if a log file was given.
    ///
    /// The filter comes from `RUST_LOG` and falls back to [`Config::log_level`]. Without a log file
    /// no logger is installed and every log statement is a no-op.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - The log file cannot be created
    /// - A global logger is already installed
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };

        let file = File::create(path)
            .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
        Builder::from_env(Env::default().default_filter_or(self.log_level.as_str()))
            .target(Target::Pipe(Box::new(file)))
            .try_init()
            .wrap_err("failed to install logger")?;

        info!("logging to {}", path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config = Config::try_parse_from(["cursor-maze"]).expect("no arguments should parse");

        assert_eq!(config.seed, None);
        assert_eq!(config.tier, None);
        assert_eq!((config.cell_width, config.cell_height), (2, 1));
        assert_eq!(config.log_file, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_all_options() {
        let config = Config::try_parse_from([
            "cursor-maze",
            "--seed",
            "42",
            "--tier",
            "-3",
            "--cell-width",
            "3",
            "--cell-height",
            "2",
            "--log-file",
            "game.log",
            "--log-level",
            "debug",
        ])
        .expect("all options should parse");

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.tier, Some(-3));
        assert_eq!((config.cell_width, config.cell_height), (3, 2));
        assert_eq!(config.log_file, Some(PathBuf::from("game.log")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_parse_rejects_zero_cell_size() {
        let result = Config::try_parse_from(["cursor-maze", "--cell-width", "0"]);

        assert!(result.is_err(), "a zero cell width should be rejected");
    }

    #[test]
    fn test_cell_scale() {
        let config = Config::default();
        let scale = config.cell_scale().expect("default scale should be valid");

        assert_eq!(scale, CellScale::TERMINAL);

        let broken = Config {
            cell_height: 0,
            ..Config::default()
        };
        assert!(broken.cell_scale().is_err());
    }

    #[test]
    fn test_init_logging_without_file_is_noop() {
        assert!(Config::default().init_logging().is_ok());
    }
}
