//! Single-line text fields for keyboard entry.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

/// An editable line of text, optionally masked for passwords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    masked: bool,
}

impl TextField {
    /// An empty, visible field.
    pub fn plain() -> Self {
        Self::default()
    }

    /// An empty field rendered as `*`.
    pub fn masked() -> Self {
        Self {
            value: String::new(),
            masked: true,
        }
    }

    /// Raw contents.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Applies an editing key. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.value.push(c);
                true
            }
            KeyCode::Backspace => {
                self.value.pop();
                true
            }
            _ => false,
        }
    }

    /// Text as it should appear on screen.
    pub fn display_text(&self) -> String {
        if self.masked {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Bordered widget, highlighted when focused.
    pub fn widget<'a>(&self, title: &'a str, focused: bool) -> Paragraph<'a> {
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let mut text = self.display_text();
        if focused {
            text.push('_');
        }
        Paragraph::new(text)
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut field = TextField::plain();
        for c in "421".chars() {
            assert!(field.handle_key(key(KeyCode::Char(c))));
        }
        assert!(field.handle_key(key(KeyCode::Backspace)));
        assert_eq!(field.value(), "42");
        assert!(!field.handle_key(key(KeyCode::Enter)));
    }

    #[test]
    fn test_masked_field_hides_contents() {
        let mut field = TextField::masked();
        for c in "pässword".chars() {
            field.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(field.value(), "pässword");
        assert_eq!(field.display_text(), "********");
    }

    #[test]
    fn test_control_chords_are_not_typed() {
        let mut field = TextField::plain();
        let chord = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!field.handle_key(chord));
        assert_eq!(field.value(), "");
    }
}
