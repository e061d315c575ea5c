//! Event handling functions for user input and round updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use log::{debug, info};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseEvent, MouseEventKind};

use crate::{
    maze::Maze,
    sampling::PointerCell,
    types::{Difficulty, MainMenuItem, Screen},
    App,
};

/// Polls for a terminal event and dispatches it.
///
/// This function waits a short while for input so the UI keeps redrawing, then hands the event,
/// if any, to [`handle_event`].
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        handle_event(app, &event::read()?)?;
    }

    Ok(())
}

/// Dispatches a single terminal event.
///
/// Key presses drive the menus, mouse movement drives the round and a focus loss counts as the
/// pointer leaving the board.
pub(crate) fn handle_event(app: &mut App, event: &Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
            KeyCode::Char('q') => app.exit = true,
            KeyCode::Char('j') => handle_j_events(app),
            KeyCode::Char('k') => handle_k_events(app),
            KeyCode::Char('l') => handle_l_events(app)?,
            KeyCode::Char('h') => handle_h_events(app),
            _ => {}
        },
        Event::Mouse(mouse) => handle_mouse_event(app, *mouse),
        Event::FocusLost => pointer_left(app),
        _ => {}
    }

    Ok(())
}

/// Handles 'j' key press events for downward navigation.
pub(crate) fn handle_j_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(item) => app.screen = Screen::MainMenu(item.next()),
        Screen::DifficultyMenu(level) => app.screen = Screen::DifficultyMenu(level.next()),
        _ => {}
    }
}

/// Handles 'k' key press events for upward navigation.
pub(crate) fn handle_k_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(item) => app.screen = Screen::MainMenu(item.previous()),
        Screen::DifficultyMenu(level) => app.screen = Screen::DifficultyMenu(level.previous()),
        _ => {}
    }
}

/// Handles 'l' key press events for selection and forward navigation.
///
/// This function processes the 'l' key press which is used for selecting menu items and moving
/// forward in the application flow. Selecting a difficulty starts a round; on the outcome dialog
/// it acknowledges the result and returns to the main menu.
pub(crate) fn handle_l_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) => {
            app.screen = Screen::DifficultyMenu(Difficulty::Easy);
        }
        Screen::MainMenu(MainMenuItem::About) => {
            app.screen = Screen::About;
        }
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.exit = true;
        }
        Screen::DifficultyMenu(level) => {
            app.start_round(level.tier())?;
        }
        Screen::About => {
            app.screen = Screen::MainMenu(MainMenuItem::About);
        }
        Screen::Outcome(_) => {
            app.leave_round();
        }
        Screen::InGame => {}
    }

    Ok(())
}

/// Handles 'h' key press events for backward navigation.
///
/// This function processes the 'h' key press which is used for moving back or returning to
/// previous screens. Pressing it during a round abandons the round.
pub(crate) fn handle_h_events(app: &mut App) {
    match app.screen {
        Screen::DifficultyMenu(_) => {
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        Screen::About => {
            app.screen = Screen::MainMenu(MainMenuItem::About);
        }
        Screen::InGame => {
            info!("round abandoned");
            app.leave_round();
        }
        Screen::Outcome(_) => {
            app.leave_round();
        }
        Screen::MainMenu(_) => {}
    }
}

/// Handles pointer movement while a round is on screen.
///
/// Positions off the board count as the pointer leaving it, and so does any movement while the
/// board is hidden because the terminal is too small. Until the round is armed, positions on
/// the board are only checked for the start cell, which arms the round.
pub(crate) fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if !matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
        return;
    }
    if app.screen != Screen::InGame {
        return;
    }
    // No placement means the board is hidden, so the pointer cannot be on it.
    let Some(surface) = app.surface else {
        pointer_left(app);
        return;
    };

    let (x, y) = (i64::from(mouse.column), i64::from(mouse.row));
    if !surface.contains(x, y) {
        pointer_left(app);
        return;
    }

    let cell = surface.sample(x, y);
    if !app.armed {
        if cell == PointerCell::from(Maze::START) {
            debug!("pointer reached the start cell, round armed");
            app.armed = true;
        }
        return;
    }

    let Some(round) = app.round.as_mut() else {
        return;
    };
    let state = round.pointer_moved(cell);
    app.conclude(state, false);
}

/// Reports the pointer leaving the board to an armed round.
fn pointer_left(app: &mut App) {
    if app.screen != Screen::InGame || !app.armed {
        return;
    }
    let Some(round) = app.round.as_mut() else {
        return;
    };

    let state = round.pointer_exited();
    app.conclude(state, true);
}
