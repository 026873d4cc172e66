use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A keypress, decoded.  Steering recognizes only the four arrow keys, as
/// the original game did; the other commands exist for the menus.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Next,
    Prev,
    S,
    Q,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Enter) => Some(Command::Enter),
            (KeyModifiers::NONE, KeyCode::Char(' ')) => Some(Command::Space),
            (_, KeyCode::Tab) => Some(Command::Next),
            (_, KeyCode::BackTab) => Some(Command::Prev),
            (KeyModifiers::NONE, KeyCode::Char('s')) => Some(Command::S),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Q),
            _ => None,
        }
    }
}
