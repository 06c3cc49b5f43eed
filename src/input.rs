//! Key dispatch for the game screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use trash_toss::game::TossInput;

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Forward to the game.
    Game(TossInput),
    Quit,
    /// Key release or repeat; nothing to do.
    Ignore,
}

/// Map a key press to a game action.
pub fn map_key(key: KeyEvent) -> InputResult {
    // Terminals with the kitty protocol also report releases and repeats;
    // a held arrow must not throw the whole batch
    if key.kind != KeyEventKind::Press {
        return InputResult::Ignore;
    }

    match key.code {
        KeyCode::Left => InputResult::Game(TossInput::ThrowRecycle),
        KeyCode::Right => InputResult::Game(TossInput::ThrowNonRecycle),
        KeyCode::Enter | KeyCode::Char(' ') => InputResult::Game(TossInput::Confirm),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputResult::Quit,
        _ => InputResult::Game(TossInput::Other),
    }
}
