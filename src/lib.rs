//! A terminal maze game for pointer coordination exercises.
//!
//! The player steers the mouse pointer from the top-left cell of a random maze to the goal in the
//! bottom-right corner without touching a wall or leaving the board. The crate is split into a
//! small, UI-independent core and a terminal front end:
//!
//! - [`maze`] generates random perfect mazes from an injected random source.
//! - [`round`] holds the win/loss state machine fed by pointer samples.
//! - [`sampling`] maps raw pointer positions to maze cells.
//! - [`grid`] is the cell storage shared by all of the above.
//!
//! [`App`] drives the core from a Ratatui interface, configured through [`Config`].

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod config;
mod events;
pub mod grid;
pub mod maze;
pub mod round;
pub mod sampling;
mod types;
mod ui;

pub use app::App;
pub use config::Config;
