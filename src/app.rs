//! Core application state and round lifecycle for the maze game.

use color_eyre::eyre::Result;
use log::info;
use rand::{rngs::StdRng, Rng as _, SeedableRng as _};
use ratatui::DefaultTerminal;

use crate::{
    config::Config,
    events,
    maze::size_for_tier,
    round::{GameState, Round},
    sampling::{CellScale, PlaySurface},
    types::{MainMenuItem, Outcome, Screen},
    ui,
};

/// Application state container for the maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field holds the current screen of the game. It is used to determine which screen to
    /// render and what actions to take based on user input.
    pub(crate) screen: Screen,
    /// Round being played, if any.
    ///
    /// This field holds the maze and the win/loss state of the current round. It is [`None`] while
    /// the user is in the menus; pointer samples are only forwarded while it is set.
    pub(crate) round: Option<Round>,
    /// Whether the current round accepts pointer samples yet.
    ///
    /// A round only starts listening once the pointer has been placed on the start cell, so that
    /// wherever the pointer happens to be when the maze appears does not count against the player.
    pub(crate) armed: bool,
    /// Board placement during the last redraw.
    ///
    /// This field holds where the maze was drawn on the terminal, which is what maps mouse
    /// positions to maze cells. It is [`None`] until the maze has been drawn at least once, or when
    /// the terminal is too small to hold it.
    pub(crate) surface: Option<PlaySurface>,
    /// Size of one maze cell on screen.
    pub(crate) scale: CellScale,
    /// Random source for every generated maze.
    rng: StdRng,
}

impl App {
    /// Creates the application from the command-line configuration.
    ///
    /// The random source is seeded from [`Config::seed`] or, when absent, from a freshly drawn seed
    /// which is logged so the session can be replayed. If [`Config::tier`] is set, a round at that
    /// tier is started right away.
    ///
    /// # Errors
    ///
    /// This function may return errors if the configured cell size is invalid.
    pub fn new(config: &Config) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        info!("maze seed: {seed}");

        let mut app = Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::StartGame),
            round: None,
            armed: false,
            surface: None,
            scale: config.cell_scale()?,
            rng: StdRng::seed_from_u64(seed),
        };

        if let Some(tier) = config.tier {
            app.start_round(tier)?;
        }

        Ok(app)
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Starts a new round at the given difficulty tier and switches to the in-game screen.
    ///
    /// Any previous round is dropped. The new round waits for the pointer to reach the start cell
    /// before it reacts to samples.
    ///
    /// # Errors
    ///
    /// This function may return errors if the maze cannot be generated.
    pub(crate) fn start_round(&mut self, tier: i32) -> Result<()> {
        let size = size_for_tier(tier);
        info!("starting tier {tier} round");

        self.round = Some(Round::start(size, &mut self.rng)?);
        self.armed = false;
        self.surface = None;
        self.screen = Screen::InGame;

        Ok(())
    }

    /// Drops the current round and goes back to the main menu.
    pub(crate) fn leave_round(&mut self) {
        self.round = None;
        self.armed = false;
        self.surface = None;
        self.screen = Screen::MainMenu(MainMenuItem::StartGame);
    }

    /// Shows the outcome dialog matching a terminal state.
    ///
    /// `Lost` is reported as `left_board` when the pointer left the board and as a wall hit
    /// otherwise. Non-terminal states leave the screen untouched.
    pub(crate) fn conclude(&mut self, state: GameState, left_board: bool) {
        let outcome = match state {
            GameState::Playing => return,
            GameState::Won => Outcome::Won,
            GameState::Lost if left_board => Outcome::LeftBoard,
            GameState::Lost => Outcome::HitWall,
        };

        info!("round over: {outcome:?}");
        self.screen = Screen::Outcome(outcome);
    }
}
