use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Start,
    Pause,
    Steering,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c'))
            | (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('l') | KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char('s')) => Some(Command::Start),
            (_, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Char('p' | ' ')) => {
                Some(Command::Pause)
            }
            (KeyModifiers::NONE, KeyCode::Char('i')) => Some(Command::Steering),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Left.into(), Some(Command::Left))]
    #[case(KeyCode::Char('h').into(), Some(Command::Left))]
    #[case(KeyCode::Up.into(), Some(Command::Up))]
    #[case(KeyCode::Right.into(), Some(Command::Right))]
    #[case(KeyCode::Down.into(), Some(Command::Down))]
    #[case(KeyCode::Enter.into(), Some(Command::Start))]
    #[case(KeyCode::Char('s').into(), Some(Command::Start))]
    #[case(KeyCode::Char('p').into(), Some(Command::Pause))]
    #[case(KeyCode::Char(' ').into(), Some(Command::Pause))]
    #[case(KeyCode::Esc.into(), Some(Command::Pause))]
    #[case(KeyCode::Char('i').into(), Some(Command::Steering))]
    #[case(KeyCode::Char('q').into(), Some(Command::Quit))]
    #[case(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Command::Quit))]
    #[case(KeyCode::Char('c').into(), None)]
    #[case(KeyCode::Char('x').into(), None)]
    #[case(KeyEvent::new(KeyCode::Left, KeyModifiers::ALT), None)]
    fn test_from_key_event(#[case] ev: KeyEvent, #[case] cmd: Option<Command>) {
        assert_eq!(Command::from_key_event(ev), cmd);
    }
}
