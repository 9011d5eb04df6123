use crate::theme::{Theme, ThemeKind};
use crossterm::event::{KeyCode, KeyEvent};
use maze_core::{Direction, MazeError, MoveOutcome, Phase, Session};

/// Ticks to linger on the win banner before the next maze appears
/// (~1 second at the 50 ms tick rate)
pub const TRANSITION_TICKS: u32 = 20;

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// The main application state
pub struct App {
    /// Current game session
    pub session: Session,
    /// Color theme
    pub theme: Theme,
    /// Which theme is active (for cycling)
    theme_kind: ThemeKind,
    /// Transient status message
    pub message: Option<String>,
    /// Ticks the message stays visible
    message_timer: u32,
    /// Countdown between reaching the goal and the next maze
    transition_timer: u32,
}

impl App {
    pub fn new(session: Session, theme_kind: ThemeKind) -> Self {
        Self {
            session,
            theme: theme_kind.theme(),
            theme_kind,
            message: None,
            message_timer: 0,
            transition_timer: 0,
        }
    }

    /// Whether the win banner is showing
    pub fn transitioning(&self) -> bool {
        self.session.phase() == Phase::Transitioning
    }

    fn set_message(&mut self, text: impl Into<String>) {
        self.message = Some(text.into());
        self.message_timer = 40;
    }

    /// Handle a key press.
    ///
    /// Generation errors bubble up so the host can tear the terminal down
    /// before reporting them.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<AppAction, MazeError> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(AppAction::Quit),
            KeyCode::Up | KeyCode::Char('k') => self.try_move(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => self.try_move(Direction::Down),
            KeyCode::Left | KeyCode::Char('h') => self.try_move(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => self.try_move(Direction::Right),
            KeyCode::Char('n') => {
                self.session.regenerate()?;
                self.transition_timer = 0;
                self.set_message("New maze");
            }
            KeyCode::Char('t') => {
                self.theme_kind = self.theme_kind.next();
                self.theme = self.theme_kind.theme();
            }
            _ => {}
        }
        Ok(AppAction::Continue)
    }

    fn try_move(&mut self, dir: Direction) {
        if let MoveOutcome::GoalReached = self.session.try_move(dir) {
            self.transition_timer = TRANSITION_TICKS;
        }
    }

    /// Advance timers; fires the level change once the win pause elapses
    pub fn tick(&mut self) -> Result<(), MazeError> {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }

        if self.session.phase() == Phase::Transitioning {
            if self.transition_timer > 0 {
                self.transition_timer -= 1;
            } else {
                self.session.advance_level()?;
            }
        }
        Ok(())
    }
}
