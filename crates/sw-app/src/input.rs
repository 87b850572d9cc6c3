//! Keyboard contract of the input collaborator.

/// Keys the engine reacts to; everything else stays with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
}

/// Session command derived from a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddEntry(String),
    Spin,
    DismissResult,
}

/// Map a key event to a session command.
///
/// While a result is shown, escape dismisses it. While composing a new
/// entry, plain enter adds the composed text and ctrl+enter spins
/// instead. Blank composed text still maps to `AddEntry`; the store
/// ignores it downstream.
pub fn map_key(event: KeyEvent, composing: &str, result_shown: bool) -> Option<Command> {
    match (event.key, event.ctrl) {
        (Key::Escape, _) if result_shown => Some(Command::DismissResult),
        (Key::Escape, _) => None,
        (Key::Enter, true) => Some(Command::Spin),
        (Key::Enter, false) => Some(Command::AddEntry(composing.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, ctrl: bool) -> KeyEvent {
        KeyEvent { key, ctrl }
    }

    #[test]
    fn escape_dismisses_only_while_result_is_shown() {
        assert_eq!(
            map_key(key(Key::Escape, false), "", true),
            Some(Command::DismissResult)
        );
        assert_eq!(map_key(key(Key::Escape, false), "", false), None);
    }

    #[test]
    fn plain_enter_adds_the_composed_entry() {
        assert_eq!(
            map_key(key(Key::Enter, false), "Diya", false),
            Some(Command::AddEntry("Diya".to_string()))
        );
    }

    #[test]
    fn ctrl_enter_spins_instead_of_adding() {
        assert_eq!(map_key(key(Key::Enter, true), "Diya", false), Some(Command::Spin));
    }
}
