use crossterm::event::{KeyCode, KeyModifiers};
use garden_core::{Action, Direction};

/// What a key press asks of the front-end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Quit,
    Act(Action),
}

/// One help entry: the keys as shown to the user and what they do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyHelp {
    pub keys: &'static str,
    pub desc: &'static str,
}

const fn help(keys: &'static str, desc: &'static str) -> KeyHelp {
    KeyHelp { keys, desc }
}

pub const QUIT: KeyHelp = help("q", "quit");
pub const TOGGLE: KeyHelp = help("space", "auto/manual");
pub const SCENE: KeyHelp = help("tab", "next scene");
pub const FORMATION: KeyHelp = help("f", "next formation");
pub const MOOD: KeyHelp = help("m", "next mood");
pub const ADD: KeyHelp = help("+", "add muse");
pub const REMOVE: KeyHelp = help("-", "trim muse");
pub const FREQ_UP: KeyHelp = help("'", "freq +");
pub const FREQ_DOWN: KeyHelp = help(";", "freq -");
pub const DAMP_UP: KeyHelp = help(".", "damping +");
pub const DAMP_DOWN: KeyHelp = help(",", "damping -");
pub const NORTH: KeyHelp = help("↑/k", "drift north");
pub const SOUTH: KeyHelp = help("↓/j", "drift south");
pub const WEST: KeyHelp = help("←/h", "drift west");
pub const EAST: KeyHelp = help("→/l", "drift east");
pub const HELP: KeyHelp = help("?", "toggle help");

/// Bindings listed in the one-line footer hint.
pub const SHORT_HELP: [KeyHelp; 7] = [TOGGLE, SCENE, FORMATION, MOOD, ADD, REMOVE, HELP];

/// Column groups for the full help box.
pub const FULL_HELP: [[KeyHelp; 4]; 4] = [
    [TOGGLE, SCENE, FORMATION, MOOD],
    [FREQ_UP, FREQ_DOWN, DAMP_UP, DAMP_DOWN],
    [NORTH, SOUTH, WEST, EAST],
    [ADD, REMOVE, HELP, QUIT],
];

/// Map a key press to a command. Unbound keys return `None`.
#[inline]
pub fn command_for_key(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyCommand> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(KeyCommand::Quit),
            _ => None,
        };
    }
    let action = match code {
        KeyCode::Char('q') => return Some(KeyCommand::Quit),
        KeyCode::Char(' ') => Action::ToggleMode,
        KeyCode::Tab => Action::CycleScene,
        KeyCode::Char('f') => Action::CycleFormation,
        KeyCode::Char('m') => Action::CycleTheme,
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('a') => Action::AddFollower,
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Char('d') => Action::RemoveFollower,
        KeyCode::Char('\'') | KeyCode::Char(']') => Action::FrequencyUp,
        KeyCode::Char(';') | KeyCode::Char('[') => Action::FrequencyDown,
        KeyCode::Char('.') | KeyCode::Char('>') => Action::DampingUp,
        KeyCode::Char(',') | KeyCode::Char('<') => Action::DampingDown,
        KeyCode::Up | KeyCode::Char('k') => Action::Nudge(Direction::North),
        KeyCode::Down | KeyCode::Char('j') => Action::Nudge(Direction::South),
        KeyCode::Left | KeyCode::Char('h') => Action::Nudge(Direction::West),
        KeyCode::Right | KeyCode::Char('l') => Action::Nudge(Direction::East),
        KeyCode::Char('?') | KeyCode::Char('/') => Action::ToggleHelp,
        _ => return None,
    };
    Some(KeyCommand::Act(action))
}
