//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
    Frame,
};

use crate::{
    grid::{Cell, Coord},
    maze::Maze,
    round::Round,
    sampling::{CellScale, PlaySurface},
    types::{Difficulty, MainMenuItem, MenuType, Outcome, Screen},
    App,
};

/// Text of the about screen.
const ABOUT_TEXT: &str = "\
This game is meant for people living with neurological conditions such as cerebral palsy, the \
after-effects of a stroke or nerve damage in the arm, and for older people getting used to a \
mouse. Steering the pointer through the maze while watching the screen trains hand-eye \
coordination.

Once the maze appears, place the pointer on the blue start cell. Then follow the corridors to the \
red goal. Touching a wall or leaving the board ends the round.";

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &mut App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item),
        Screen::DifficultyMenu(level) => difficulty_menu(frame, level),
        Screen::About => about(frame),
        Screen::InGame => in_game(app, frame)?,
        Screen::Outcome(outcome) => outcome_dialog(app, frame, outcome)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the generic layout structure for the main and difficulty menus.
///
/// This function creates the common layout and block structure used by both menus. The generic
/// part includes the centered positioning and border styling, while the specific menu content is
/// handled by the caller using the [`MenuType`] parameter.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, menu: MenuType) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(u16::from(menu.value() + 2))])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); menu.value().into()]).split(inner_space)
}

/// Renders menu entries into the rows laid out by [`init_menu`], highlighting the selected one.
pub(crate) fn menu_entries(frame: &mut Frame, rows: &[Rect], entries: &[(&str, bool)]) {
    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (row, (label, selected)) in rows.iter().zip(entries) {
        let style = if *selected {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::styled(*label, style).centered(), *row);
    }
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Start Game", "About", and "Quit". It
/// highlights the currently selected option.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::MainMenu(3));

    menu_entries(
        frame,
        &inner_layout,
        &[
            ("Start Game", item == MainMenuItem::StartGame),
            ("About", item == MainMenuItem::About),
            ("Quit", item == MainMenuItem::Quit),
        ],
    );
}

/// Renders the difficulty selection menu.
pub(crate) fn difficulty_menu(frame: &mut Frame, level: Difficulty) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::DifficultyMenu(3));

    let entries = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        .map(|entry| (entry.label(), entry == level));
    menu_entries(frame, &inner_layout, &entries);
}

/// Renders the screen describing who the game is for and how to play it.
pub(crate) fn about(frame: &mut Frame) {
    clear(frame);

    let [area] = Layout::vertical([Constraint::Length(12)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [area] = Layout::horizontal([Constraint::Max(72)])
        .flex(Flex::Center)
        .areas(area);

    let block = Block::bordered()
        .title("About")
        .title_bottom("(h) return")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    frame.render_widget(
        Paragraph::new(ABOUT_TEXT)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

/// Renders the in-game screen with the maze of the current round.
///
/// This function centers the board on the screen and records where it was placed in
/// [`App::surface`] so that mouse positions can be mapped back to maze cells. When the terminal is
/// too small for the board, a notice is drawn instead and no placement is recorded.
///
/// # Errors
///
/// This function may return errors if no round is running or if the board dimensions do not fit
/// terminal coordinates.
pub(crate) fn in_game(app: &mut App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let round = app.round.as_ref().ok_or_eyre("no round to draw")?;
    let size = u16::try_from(round.maze().size())?;
    let board_width = size
        .checked_mul(app.scale.width())
        .ok_or_eyre("board width does not fit the terminal")?;
    let board_height = size
        .checked_mul(app.scale.height())
        .ok_or_eyre("board height does not fit the terminal")?;

    let [content, footer] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(frame.area());

    let status = if app.armed {
        "Reach the red goal without touching a wall"
    } else {
        "Place the pointer on the blue start cell"
    };
    let footer_block = Block::bordered()
        .title("(h) return to menu")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    frame.render_widget(
        Paragraph::new(status)
            .alignment(Alignment::Center)
            .block(footer_block),
        footer,
    );

    if content.width < board_width || content.height < board_height {
        let notice = format!("Enlarge the terminal to at least {board_width}x{board_height} cells");
        let [line] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(content);
        frame.render_widget(Line::styled(notice, Color::Green).centered(), line);
        app.surface = None;

        return Ok(());
    }

    let [board] = Layout::vertical([Constraint::Length(board_height)])
        .flex(Flex::Center)
        .areas(content);
    let [board] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(board);

    frame.render_widget(
        MazeView {
            round,
            armed: app.armed,
            scale: app.scale,
        },
        board,
    );

    app.surface = Some(PlaySurface::new(
        board.x.into(),
        board.y.into(),
        round.maze().size(),
        app.scale,
    ));

    Ok(())
}

/// Renders the finished round with the outcome dialog on top of it.
///
/// # Errors
///
/// This function may return errors from rendering the maze underneath.
pub(crate) fn outcome_dialog(app: &mut App, frame: &mut Frame, outcome: Outcome) -> Result<()> {
    in_game(app, frame)?;

    let [area] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [area] = Layout::horizontal([Constraint::Length(44)])
        .flex(Flex::Center)
        .areas(area);

    let block = Block::bordered()
        .title(outcome.title())
        .title_bottom("(l) back to menu")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(outcome.message())
            .alignment(Alignment::Center)
            .block(block),
        area,
    );

    Ok(())
}

/// Widget drawing the maze of a round, one block of terminal cells per maze cell.
struct MazeView<'a> {
    /// Round whose maze is drawn.
    round: &'a Round,
    /// Whether the round already listens to the pointer; the start cell is highlighted until then.
    armed: bool,
    /// Terminal cells per maze cell.
    scale: CellScale,
}

impl MazeView<'_> {
    /// Returns the color of a maze cell.
    fn color(&self, coord: Coord, cell: Cell) -> Color {
        if coord == self.round.maze().goal() {
            Color::Red
        } else if coord == Maze::START && !self.armed {
            Color::Blue
        } else {
            match cell {
                Cell::Wall => Color::Green,
                Cell::Passage => Color::Black,
            }
        }
    }

    /// Returns the top-left terminal position of a maze cell drawn in `area`.
    fn origin(&self, area: Rect, coord: Coord) -> Option<(u16, u16)> {
        let col = u16::try_from(coord.col).ok()?;
        let row = u16::try_from(coord.row).ok()?;
        let x = area.x.checked_add(col.checked_mul(self.scale.width())?)?;
        let y = area.y.checked_add(row.checked_mul(self.scale.height())?)?;

        Some((x, y))
    }
}

impl Widget for MazeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (row, cells) in self.round.maze().grid().rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let coord = Coord::new(row, col);
                let Some((x, y)) = self.origin(area, coord) else {
                    continue;
                };
                let color = self.color(coord, *cell);

                for dy in 0..self.scale.height() {
                    for dx in 0..self.scale.width() {
                        let (Some(target_x), Some(target_y)) =
                            (x.checked_add(dx), y.checked_add(dy))
                        else {
                            continue;
                        };
                        if target_x >= area.right() || target_y >= area.bottom() {
                            continue;
                        }
                        if let Some(target) = buf.cell_mut((target_x, target_y)) {
                            let _ = target.set_symbol(" ").set_bg(color);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{round::GameState, sampling::PointerCell, Config};

    /// Creates a minimal test app for UI testing.
    fn create_test_app() -> App {
        let config = Config {
            seed: Some(21),
            ..Config::default()
        };

        App::new(&config).expect("test config should be valid")
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Counts the terminal cells painted with the given background.
    fn count_background(terminal: &Terminal<TestBackend>, color: Color) -> usize {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| cell.bg == color)
            .count()
    }

    #[test]
    fn test_draw_main_menu() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal(80, 24);

        for item in [MainMenuItem::StartGame, MainMenuItem::About, MainMenuItem::Quit] {
            app.screen = Screen::MainMenu(item);
            let result = terminal.draw(|frame| {
                draw(&mut app, frame).expect("drawing should succeed in test");
            });

            assert!(result.is_ok(), "drawing main menu should succeed");
        }
    }

    #[test]
    fn test_draw_difficulty_menu() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal(80, 24);
        app.screen = Screen::DifficultyMenu(Difficulty::Hard);

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing difficulty menu should succeed");
    }

    #[test]
    fn test_draw_about() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal(80, 24);
        app.screen = Screen::About;

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing about screen should succeed");
    }

    #[test]
    fn test_init_menu_rows() {
        let mut terminal = create_test_terminal(80, 24);

        let result = terminal.draw(|frame| {
            let layout = init_menu(frame, MenuType::MainMenu(3));
            assert_eq!(layout.len(), 3, "main menu should have 3 items");
        });

        assert!(result.is_ok(), "initializing main menu should succeed");
    }

    #[test]
    fn test_in_game_records_surface() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal(80, 24);
        app.start_round(1).expect("round should start");

        let _ = terminal
            .draw(|frame| {
                draw(&mut app, frame).expect("in-game should render successfully");
            })
            .expect("terminal drawing should succeed");

        let surface = app.surface.expect("board should fit an 80x24 terminal");
        assert!(surface.contains(40, 10), "the middle of the screen is on the board");
        assert!(!surface.contains(0, 0), "the corner of the screen is off the board");
        assert_eq!(count_background(&terminal, Color::Red), 2, "goal is one cell");
        assert_eq!(count_background(&terminal, Color::Blue), 2, "start is one cell");
    }

    #[test]
    fn test_in_game_surface_maps_goal() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal(80, 24);
        app.start_round(1).expect("round should start");

        let _ = terminal
            .draw(|frame| {
                draw(&mut app, frame).expect("in-game should render successfully");
            })
            .expect("terminal drawing should succeed");

        let surface = app.surface.expect("board should fit an 80x24 terminal");
        let buffer = terminal.backend().buffer();
        let goal_position = buffer
            .content()
            .iter()
            .position(|cell| cell.bg == Color::Red)
            .expect("goal should be painted");
        let (x, y) = buffer.pos_of(goal_position);

        assert_eq!(
            surface.sample(x.into(), y.into()),
            PointerCell::new(14, 14),
            "the painted goal should map back to the goal cell"
        );
    }

    #[test]
    fn test_start_highlight_goes_away_once_armed() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal(80, 24);
        app.start_round(1).expect("round should start");
        app.armed = true;

        let _ = terminal
            .draw(|frame| {
                draw(&mut app, frame).expect("in-game should render successfully");
            })
            .expect("terminal drawing should succeed");

        assert_eq!(count_background(&terminal, Color::Blue), 0);
    }

    #[test]
    fn test_in_game_too_small_terminal() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal(40, 20);
        app.start_round(3).expect("round should start");

        let _ = terminal
            .draw(|frame| {
                draw(&mut app, frame).expect("notice should render successfully");
            })
            .expect("terminal drawing should succeed");

        assert!(app.surface.is_none(), "no board means no pointer mapping");
        assert_eq!(count_background(&terminal, Color::Red), 0);
    }

    #[test]
    fn test_in_game_without_round_fails() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal(80, 24);
        app.screen = Screen::InGame;

        let result = terminal.draw(|frame| {
            assert!(
                in_game(&mut app, frame).is_err(),
                "in-game should fail without a round"
            );
        });

        assert!(
            result.is_ok(),
            "terminal drawing should succeed even if in_game fails"
        );
    }

    #[test]
    fn test_draw_outcome_dialog() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal(80, 24);
        app.start_round(1).expect("round should start");
        let state = app
            .round
            .as_mut()
            .map(Round::pointer_exited)
            .expect("round should be running");
        app.conclude(state, true);
        assert_eq!(state, GameState::Lost);

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("outcome should render successfully");
        });

        assert!(result.is_ok(), "drawing the outcome dialog should succeed");
        assert_eq!(app.screen, Screen::Outcome(Outcome::LeftBoard));
    }
}
