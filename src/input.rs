use crate::game::{Direction, Status};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key press, normalized
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Esc,
    Home,
    End,
    Louder,
    Quieter,
    Digit(char),
    M,
    Q,
    R,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (m, _) if !normal_modifiers.contains(m) => None,
            (_, KeyCode::Char('w' | 'k' | 'W' | 'K') | KeyCode::Up) => Some(Command::Up),
            (_, KeyCode::Char('s' | 'j' | 'S' | 'J') | KeyCode::Down) => Some(Command::Down),
            (_, KeyCode::Char('a' | 'h' | 'A' | 'H') | KeyCode::Left) => Some(Command::Left),
            (_, KeyCode::Char('d' | 'l' | 'D' | 'L') | KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Enter) => Some(Command::Enter),
            (_, KeyCode::Char(' ')) => Some(Command::Space),
            (_, KeyCode::Esc) => Some(Command::Esc),
            (_, KeyCode::Home) => Some(Command::Home),
            (_, KeyCode::End) => Some(Command::End),
            (_, KeyCode::Char('+' | '=')) => Some(Command::Louder),
            (_, KeyCode::Char('-' | '_')) => Some(Command::Quieter),
            (_, KeyCode::Char(c @ '0'..='9')) => Some(Command::Digit(c)),
            (_, KeyCode::Char('m' | 'M')) => Some(Command::M),
            (_, KeyCode::Char('q' | 'Q')) => Some(Command::Q),
            (_, KeyCode::Char('r' | 'R')) => Some(Command::R),
            _ => None,
        }
    }
}

/// What a key press asks the game to do
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Action {
    Turn(Direction),
    TogglePause,
    Restart,
    Menu,
    ToggleMute,
    Louder,
    Quieter,
    Quit,
}

impl Action {
    /// Map a command to an action according to the status of the game.
    ///
    /// Only the actions that make sense on every screen (quitting & audio
    /// controls) are returned for [`Status::Menu`]; the menu screen handles
    /// everything else itself.
    pub(crate) fn for_command(cmd: Command, status: Status) -> Option<Action> {
        match (status, cmd) {
            (_, Command::Quit | Command::Q) => Some(Action::Quit),
            (_, Command::M) => Some(Action::ToggleMute),
            (_, Command::Louder) => Some(Action::Louder),
            (_, Command::Quieter) => Some(Action::Quieter),
            (Status::Menu, _) => None,
            (Status::GameOver, Command::Space | Command::Enter | Command::R) => {
                Some(Action::Restart)
            }
            (Status::GameOver, Command::Esc) => Some(Action::Menu),
            (Status::GameOver, _) => None,
            (_, Command::Up) => Some(Action::Turn(Direction::Up)),
            (_, Command::Down) => Some(Action::Turn(Direction::Down)),
            (_, Command::Left) => Some(Action::Turn(Direction::Left)),
            (_, Command::Right) => Some(Action::Turn(Direction::Right)),
            (_, Command::Space) => Some(Action::TogglePause),
            (_, Command::R) => Some(Action::Restart),
            (_, Command::Esc) => Some(Action::Menu),
            _ => None,
        }
    }
}
