//! This crate contains the source code for the binary for the game cursor-maze.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::io::stdout;

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use cursor_maze::{App, Config};
use ratatui::crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};

fn main() -> Result<()> {
    install()?;

    let config = Config::parse();
    config.init_logging()?;

    let mut terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture, EnableFocusChange)?;
    let result = App::new(&config).and_then(|mut app| app.run(&mut terminal));
    execute!(stdout(), DisableMouseCapture, DisableFocusChange)?;
    ratatui::restore();

    result
}
