use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::domain::palette::Palette;

/// What the user asked for, independent of the key that was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    RegenerateAll,
    SwitchPalette(Palette),
    SetMountainCount(usize),
    ToggleClouds,
    Quit,
}

/// Maps a key press to an intent. Releases and unbound or modified keys (Ctrl-C aside) map to
/// nothing.
#[must_use]
pub fn intent_for_key(key: KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'c'))
    {
        return Some(Intent::Quit);
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Char(ch) => intent_for_char(ch.to_ascii_lowercase()),
        _ => None,
    }
}

fn intent_for_char(ch: char) -> Option<Intent> {
    match ch {
        ' ' => Some(Intent::RegenerateAll),
        'n' => Some(Intent::SwitchPalette(Palette::Nord)),
        'e' => Some(Intent::SwitchPalette(Palette::Everforest)),
        'd' => Some(Intent::SwitchPalette(Palette::Classic)),
        'r' => Some(Intent::SwitchPalette(Palette::Random)),
        'c' => Some(Intent::ToggleClouds),
        'q' => Some(Intent::Quit),
        '0' => Some(Intent::SetMountainCount(10)),
        '1'..='9' => ch
            .to_digit(10)
            .and_then(|d| usize::try_from(d).ok())
            .map(Intent::SetMountainCount),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_set_the_mountain_count() {
        assert_eq!(
            intent_for_key(press(KeyCode::Char('1'))),
            Some(Intent::SetMountainCount(1))
        );
        assert_eq!(
            intent_for_key(press(KeyCode::Char('9'))),
            Some(Intent::SetMountainCount(9))
        );
        assert_eq!(
            intent_for_key(press(KeyCode::Char('0'))),
            Some(Intent::SetMountainCount(10))
        );
    }

    #[test]
    fn palette_keys_ignore_case() {
        assert_eq!(
            intent_for_key(press(KeyCode::Char('N'))),
            Some(Intent::SwitchPalette(Palette::Nord))
        );
        assert_eq!(
            intent_for_key(press(KeyCode::Char('e'))),
            Some(Intent::SwitchPalette(Palette::Everforest))
        );
        assert_eq!(
            intent_for_key(press(KeyCode::Char('r'))),
            Some(Intent::SwitchPalette(Palette::Random))
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(intent_for_key(press(KeyCode::Esc)), Some(Intent::Quit));
        assert_eq!(intent_for_key(press(KeyCode::Char('q'))), Some(Intent::Quit));
        assert_eq!(
            intent_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Intent::Quit)
        );
    }

    #[test]
    fn modified_and_unbound_keys_are_ignored() {
        assert_eq!(
            intent_for_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::ALT)),
            None
        );
        assert_eq!(intent_for_key(press(KeyCode::Char('x'))), None);
        assert_eq!(intent_for_key(press(KeyCode::Enter)), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = press(KeyCode::Char(' '));
        assert_eq!(intent_for_key(key), Some(Intent::RegenerateAll));
        key.kind = KeyEventKind::Release;
        assert_eq!(intent_for_key(key), None);
    }
}
