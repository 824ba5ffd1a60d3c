use crate::config::AppConfig;
use crate::game::{GameOutcome, GameState, Player, COLS};
use crate::ui::name_entry::NameEntryForm;
use crate::ui::{game_view, name_entry};
use crossterm::event::{self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;

/// The shell's view of where a game session stands. `Won` and `Draw` are
/// terminal: leaving `GameOver` always constructs a fresh `GameState`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    NameEntry(NameEntryForm),
    Playing,
    GameOver(GameOutcome),
}

pub struct App {
    phase: Phase,
    game: GameState,
    names: [String; 2],
    selected_column: usize,
    message: Option<String>,
    board_area: Rect,
    poll_interval: Duration,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            phase: Phase::NameEntry(NameEntryForm::new(
                config.players.player_one.clone(),
                config.players.player_two.clone(),
            )),
            game: GameState::new(),
            names: [String::new(), String::new()],
            selected_column: COLS / 2,
            message: None,
            board_area: Rect::default(),
            poll_interval: Duration::from_millis(config.ui.poll_interval_ms),
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Keep the win/draw announcement up until the player leaves it
        if !matches!(self.phase, Phase::GameOver(_)) {
            self.message = None;
        }

        match &mut self.phase {
            Phase::NameEntry(form) => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab | KeyCode::Up | KeyCode::Down => form.focus_next(),
                KeyCode::Backspace => form.pop_char(),
                KeyCode::Enter => match form.submit() {
                    Some(names) => {
                        self.names = names;
                        self.start_game();
                    }
                    None => {
                        self.message =
                            Some("Please enter names for both players.".to_string());
                    }
                },
                KeyCode::Char(c) => form.push_char(c),
                _ => {}
            },
            Phase::Playing => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Left => {
                    if self.selected_column > 0 {
                        self.selected_column -= 1;
                    }
                }
                KeyCode::Right => {
                    if self.selected_column < COLS - 1 {
                        self.selected_column += 1;
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.play_column(self.selected_column);
                }
                _ => {}
            },
            Phase::GameOver(_) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => self.reset(),
                _ => {}
            },
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match &self.phase {
            Phase::Playing => {
                if let Some(col) = game_view::column_at(self.board_area, mouse.column) {
                    self.message = None;
                    self.selected_column = col;
                    self.play_column(col);
                }
            }
            Phase::GameOver(_) => self.reset(),
            Phase::NameEntry(_) => {}
        }
    }

    fn start_game(&mut self) {
        self.game = GameState::new();
        self.selected_column = COLS / 2;
        self.message = None;
        self.phase = Phase::Playing;
    }

    /// Back to the name form with a fresh game; previous names stay filled
    /// in so a rematch only takes an Enter.
    fn reset(&mut self) {
        self.phase = Phase::NameEntry(NameEntryForm::new(
            self.names[0].clone(),
            self.names[1].clone(),
        ));
        self.game = GameState::new();
        self.message = None;
    }

    /// One full turn: validity check, drop, win check at the landing
    /// coordinate, then draw check, then hand over the turn.
    fn play_column(&mut self, col: usize) {
        if !self.game.is_valid_move(col) {
            self.message = Some("Column is full. Choose another one.".to_string());
            return;
        }

        match self.game.drop_piece(col) {
            Ok((row, col)) => {
                if self.game.check_winner(row, col) {
                    let winner = self.game.active_player();
                    self.message = Some(format!(
                        "{} wins! Press Enter to play again.",
                        self.name_of(winner)
                    ));
                    self.phase = Phase::GameOver(GameOutcome::Winner(winner));
                } else if self.game.is_full() {
                    self.message = Some("It's a draw! Press Enter to play again.".to_string());
                    self.phase = Phase::GameOver(GameOutcome::Draw);
                } else {
                    self.game.switch_active_player();
                }
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    fn name_of(&self, player: Player) -> &str {
        let name = match player {
            Player::One => &self.names[0],
            Player::Two => &self.names[1],
        };
        if name.is_empty() {
            player.label()
        } else {
            name
        }
    }

    fn render(&mut self, frame: &mut ratatui::Frame) {
        match &self.phase {
            Phase::NameEntry(form) => name_entry::render(frame, form, &self.message),
            Phase::Playing => {
                self.board_area = game_view::render(
                    frame,
                    &self.game,
                    &self.names,
                    self.selected_column,
                    &self.message,
                    None,
                );
            }
            Phase::GameOver(outcome) => {
                let outcome = *outcome;
                self.board_area = game_view::render(
                    frame,
                    &self.game,
                    &self.names,
                    self.selected_column,
                    &self.message,
                    Some(outcome),
                );
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_in_play() -> App {
        let mut app = App::default();
        app.names = ["Alice".into(), "Bob".into()];
        app.phase = Phase::Playing;
        app
    }

    #[test]
    fn test_enter_with_blank_names_stays_on_form() {
        let mut app = App::default();
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        assert!(matches!(app.phase, Phase::NameEntry(_)));
        assert_eq!(
            app.message.as_deref(),
            Some("Please enter names for both players.")
        );
    }

    #[test]
    fn test_typed_names_start_the_game() {
        let mut app = App::default();
        app.handle_key(KeyEvent::from(KeyCode::Char('A')));
        app.handle_key(KeyEvent::from(KeyCode::Tab));
        app.handle_key(KeyEvent::from(KeyCode::Char('B')));
        app.handle_key(KeyEvent::from(KeyCode::Enter));

        assert_eq!(app.phase, Phase::Playing);
        assert_eq!(app.names, ["A".to_string(), "B".to_string()]);
        assert_eq!(app.game.active_player(), Player::One);
    }

    #[test]
    fn test_win_moves_to_game_over() {
        let mut app = app_in_play();

        // Player one builds a bottom-row line while player two stacks col 6
        for col in 0..3 {
            app.play_column(col);
            app.play_column(6);
        }
        app.play_column(3);

        assert_eq!(app.phase, Phase::GameOver(GameOutcome::Winner(Player::One)));
        assert_eq!(
            app.message.as_deref(),
            Some("Alice wins! Press Enter to play again.")
        );
    }

    #[test]
    fn test_full_column_is_refused_with_warning() {
        let mut app = app_in_play();
        for _ in 0..6 {
            app.play_column(0);
        }
        let active_before = app.game.active_player();

        app.play_column(0);

        assert_eq!(app.phase, Phase::Playing);
        assert_eq!(app.game.active_player(), active_before);
        assert_eq!(
            app.message.as_deref(),
            Some("Column is full. Choose another one.")
        );
    }

    #[test]
    fn test_reset_returns_to_prefilled_form() {
        let mut app = app_in_play();
        app.play_column(2);
        app.phase = Phase::GameOver(GameOutcome::Draw);

        app.handle_key(KeyEvent::from(KeyCode::Enter));

        match &app.phase {
            Phase::NameEntry(form) => {
                assert_eq!(form.submit(), Some(["Alice".into(), "Bob".into()]));
            }
            other => panic!("expected name entry, got {other:?}"),
        }
        assert_eq!(app.game, GameState::new());
    }

    #[test]
    fn test_click_drops_in_clicked_column() {
        let mut app = app_in_play();
        app.board_area = Rect::new(0, 0, 26, 10);

        // x=12 falls in the band of column 3
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 5,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });

        assert_eq!(app.selected_column, 3);
        assert_eq!(
            app.game.board().get(5, 3),
            crate::game::Cell::One
        );
        assert_eq!(app.game.active_player(), Player::Two);
    }

    #[test]
    fn test_click_outside_grid_is_ignored() {
        let mut app = app_in_play();
        app.board_area = Rect::new(0, 0, 26, 10);

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 25,
            row: 5,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });

        assert_eq!(app.game, GameState::new());
    }
}
