//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use rewind_tictactoe::{GameHistory, Jump, MoveOutcome, Position};
use tracing::{debug, instrument, warn};

use crate::input::{digit_position, move_focus};
use crate::ui::HitMap;

/// What the event loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Nothing visible changed.
    Ignore,
    /// State changed; draw again.
    Redraw,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Holds the game history and the view state around it. The history is
/// only changed through [`GameHistory::apply_move`] and
/// [`GameHistory::jump_to`].
#[derive(Debug)]
pub struct App {
    history: GameHistory,
    focus: Position,
    selected: usize,
    show_hints: bool,
    hit_map: HitMap,
}

impl App {
    /// Creates a new application with an empty game.
    #[instrument]
    pub fn new(show_hints: bool) -> Self {
        Self {
            history: GameHistory::new(),
            focus: Position::Center,
            selected: 0,
            show_hints,
            hit_map: HitMap::default(),
        }
    }

    /// The game history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// The focused board square.
    pub fn focus(&self) -> Position {
        self.focus
    }

    /// The selected row in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether empty squares show their key number.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Stores the clickable regions from the latest draw.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        // crossterm reports releases too on some platforms.
        if key.kind != KeyEventKind::Press {
            return AppAction::Ignore;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => AppAction::Quit,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                let focus = move_focus(self.focus, key.code);
                if focus == self.focus {
                    return AppAction::Ignore;
                }
                self.focus = focus;
                AppAction::Redraw
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.focus),
            KeyCode::Char(c) if c.is_ascii_digit() => match digit_position(c) {
                Some(pos) => {
                    self.focus = pos;
                    self.play(pos)
                }
                None => AppAction::Ignore,
            },
            KeyCode::Char('[') => {
                let jump = self.history.step_back();
                self.follow(jump)
            }
            KeyCode::Char(']') => {
                let jump = self.history.step_forward();
                self.follow(jump)
            }
            KeyCode::Home => self.jump(0),
            KeyCode::End => {
                let jump = self.history.jump_to_latest();
                self.follow(Some(jump))
            }
            KeyCode::Char('j') | KeyCode::PageDown => {
                if self.selected + 1 < self.history.len() {
                    self.selected += 1;
                    AppAction::Redraw
                } else {
                    AppAction::Ignore
                }
            }
            KeyCode::Char('k') | KeyCode::PageUp => {
                if self.selected > 0 {
                    self.selected -= 1;
                    AppAction::Redraw
                } else {
                    AppAction::Ignore
                }
            }
            KeyCode::Char('g') => self.jump(self.selected),
            _ => AppAction::Ignore,
        }
    }

    /// Handles a mouse event. Left clicks play squares or jump in history.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> AppAction {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return AppAction::Ignore;
        }

        if let Some(pos) = self.hit_map.cell_at(mouse.column, mouse.row) {
            self.focus = pos;
            return self.play(pos);
        }

        if let Some(index) = self.hit_map.move_at(mouse.column, mouse.row) {
            return self.jump(index);
        }

        AppAction::Ignore
    }

    /// Forwards a move to the history.
    fn play(&mut self, pos: Position) -> AppAction {
        match self.history.apply_move(pos) {
            MoveOutcome::Placed(placement) => {
                debug!(?placement, "Move applied to UI state");
                self.selected = self.history.cursor();
                AppAction::Redraw
            }
            MoveOutcome::Rejected(reason) => {
                debug!(%reason, "Move ignored");
                AppAction::Ignore
            }
        }
    }

    /// Forwards a jump to the history.
    fn jump(&mut self, index: usize) -> AppAction {
        match self.history.jump_to(index) {
            Ok(jump) => self.follow(Some(jump)),
            Err(e) => {
                warn!(error = %e, "Jump rejected");
                AppAction::Ignore
            }
        }
    }

    /// Syncs the move list selection after a cursor change.
    fn follow(&mut self, jump: Option<Jump>) -> AppAction {
        match jump {
            Some(jump) if jump.changed() => {
                self.selected = self.history.cursor();
                AppAction::Redraw
            }
            _ => AppAction::Ignore,
        }
    }
}
