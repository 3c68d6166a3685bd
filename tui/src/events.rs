use folio_utils::dashboard::{ComparisonEvent, DashboardEvent};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub mod balances;
pub mod comparison;
pub mod input;

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),

    /// One second elapsed.
    Tick,

    Dashboard(DashboardEvent),
    Performance(ComparisonEvent),

    /// Non-fatal error for the footer line.
    Error(String),
}

impl AppEvent {
    pub fn is_input(&self) -> bool {
        matches!(self, AppEvent::Input(_))
    }

    pub fn is_char_pressed(&self, char: Option<char>) -> bool {
        if let Some(ch) = char {
            matches!(
                self,
                AppEvent::Input(KeyEvent {
                    kind: KeyEventKind::Press,
                    code: KeyCode::Char(c),
                    modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                    ..
                }) if *c == ch
            )
        } else {
            matches!(
                self,
                AppEvent::Input(KeyEvent {
                    kind: KeyEventKind::Press,
                    ..
                })
            )
        }
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        matches!(
            self,
            AppEvent::Input(KeyEvent {
                kind: KeyEventKind::Press,
                code,
                modifiers: KeyModifiers::NONE,
                ..
            }) if *code == key
        )
    }

    pub fn is_ctrl_pressed(&self, ch: char) -> bool {
        matches!(
            self,
            AppEvent::Input(KeyEvent {
                kind: KeyEventKind::Press,
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) if *c == ch
        )
    }

    /// `q`, `Esc` or `Ctrl+C`.
    pub fn is_quit(&self) -> bool {
        self.is_char_pressed(Some('q'))
            || self.is_key_pressed(KeyCode::Esc)
            || self.is_ctrl_pressed('c')
    }
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::{KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> AppEvent {
        AppEvent::Input(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn quit_keys() {
        assert!(press(KeyCode::Char('q'), KeyModifiers::NONE).is_quit());
        assert!(press(KeyCode::Esc, KeyModifiers::NONE).is_quit());
        assert!(press(KeyCode::Char('c'), KeyModifiers::CONTROL).is_quit());

        assert!(!press(KeyCode::Char('c'), KeyModifiers::NONE).is_quit());
        assert!(!AppEvent::Tick.is_quit());
    }

    #[test]
    fn release_is_not_a_press() {
        let event = AppEvent::Input(KeyEvent {
            code: KeyCode::Char('r'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(!event.is_char_pressed(Some('r')));
        assert!(event.is_input());
    }
}
