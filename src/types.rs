//! Type definitions and enums for the application screens and navigation.

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen of the game.
    ///
    /// This variant represents the main menu screen with the currently highlighted item.
    MainMenu(MainMenuItem),
    /// Difficulty selection screen.
    ///
    /// This variant represents the menu shown after choosing to start a game, with the currently
    /// highlighted difficulty.
    DifficultyMenu(Difficulty),
    /// Screen describing the purpose of the game.
    About,
    /// In-game maze screen.
    ///
    /// This variant represents the screen where the maze is displayed and the pointer samples are
    /// fed into the current round.
    InGame,
    /// Dialog shown over the maze once a round is over.
    Outcome(Outcome),
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which items
/// can the user select in the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Start Game" menu option.
    StartGame,
    /// "About" menu option.
    About,
    /// "Quit" menu option.
    Quit,
}

impl MainMenuItem {
    /// Returns the item below this one, staying on the last item.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::StartGame => Self::About,
            Self::About | Self::Quit => Self::Quit,
        }
    }

    /// Returns the item above this one, staying on the first item.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::Quit => Self::About,
            Self::About | Self::StartGame => Self::StartGame,
        }
    }
}

/// Difficulty levels offered in the difficulty menu.
///
/// Each level corresponds to one of the tiers understood by [`crate::maze::size_for_tier`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Difficulty {
    /// Tier 1, a 15x15 maze.
    Easy,
    /// Tier 2, a 25x25 maze.
    Medium,
    /// Tier 3, a 35x35 maze.
    Hard,
}

impl Difficulty {
    /// Returns the tier number handed to the maze generator.
    pub(crate) const fn tier(self) -> i32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Returns the label shown in the difficulty menu.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Returns the level below this one, staying on the last level.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium | Self::Hard => Self::Hard,
        }
    }

    /// Returns the level above this one, staying on the first level.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::Hard => Self::Medium,
            Self::Medium | Self::Easy => Self::Easy,
        }
    }
}

/// How a finished round ended.
///
/// [`crate::round::GameState`] only tells a win from a loss; the dialog also tells the player
/// why they lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The pointer reached the goal.
    Won,
    /// The pointer touched a wall.
    HitWall,
    /// The pointer left the board.
    LeftBoard,
}

impl Outcome {
    /// Returns the title of the outcome dialog.
    pub(crate) const fn title(self) -> &'static str {
        match self {
            Self::Won => "Victory",
            Self::HitWall | Self::LeftBoard => "Game over",
        }
    }

    /// Returns the message of the outcome dialog.
    pub(crate) const fn message(self) -> &'static str {
        match self {
            Self::Won => "Congratulations, you reached the goal!",
            Self::HitWall => "You touched a wall!",
            Self::LeftBoard => "You left the board!",
        }
    }
}

/// Generic menu type configuration.
///
/// This enumeration holds the different specifics particular to each generic menu type in the
/// application's interface. Generic here means they share enough features to be considered worth
/// joining together part of their functionality.
pub(crate) enum MenuType {
    /// Main menu configuration.
    MainMenu(u8),
    /// Difficulty menu configuration.
    DifficultyMenu(u8),
}

impl MenuType {
    /// Returns the string representation of the menu type.
    ///
    /// This function provides the display name for each menu variant, used as the title in the
    /// menu's border when rendering the interface.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::MainMenu(_) => "Main Menu",
            Self::DifficultyMenu(_) => "Difficulty",
        }
    }

    /// Returns the numeric value stored by the menu type variant.
    ///
    /// This function provides access to the number of menu items for layout calculations, allowing
    /// the UI to properly size the menu containers.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::MainMenu(value) | Self::DifficultyMenu(value) => *value,
        }
    }
}
