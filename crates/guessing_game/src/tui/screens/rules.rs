//! Rules screen - explains the game before mode selection.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::instrument;

use crate::tui::view::{View, feedback_box, help, title};
use crate::{Action, FlowSnapshot};

const RULES: &str = "\
1. Guess the correct number within the range.
2. Practice Mode: Unlimited attempts.
3. Game Mode: Limited attempts.
4. Feedback after each guess:
   - Too high or too low.
5. Range adjusts dynamically in Game Mode.
6. Have fun!";

/// Static rules text with a Next prompt.
#[derive(Debug, Default)]
pub struct RulesView;

impl View for RulesView {
    #[instrument(skip(self, frame, snapshot))]
    fn render(&self, frame: &mut Frame, snapshot: &FlowSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(9),
                Constraint::Length(3),
            ])
            .split(frame.area());

        frame.render_widget(title("Rules of the Game"), chunks[0]);
        frame.render_widget(feedback_box(snapshot.feedback().as_ref()), chunks[1]);
        let rules = Paragraph::new(RULES)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(rules, chunks[2]);
        frame.render_widget(help("Enter: Next | Esc: Quit"), chunks[3]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => {
                Some(Action::ProceedToModeSelect)
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_next_and_quit_keys() {
        let mut view = RulesView;
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(view.handle_key(key(KeyCode::Enter)), Some(Action::ProceedToModeSelect));
        assert_eq!(view.handle_key(key(KeyCode::Char('n'))), Some(Action::ProceedToModeSelect));
        assert_eq!(view.handle_key(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(view.handle_key(key(KeyCode::Char('x'))), None);
    }
}
