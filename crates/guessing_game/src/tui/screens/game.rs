//! Game screen - guess entry with feedback and remaining attempts.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
};
use tracing::{debug, instrument};

use crate::tui::input::TextField;
use crate::tui::view::{View, feedback_box, help, title};
use crate::{Action, FlowError, FlowSnapshot};

/// Guess input field.
#[derive(Debug)]
pub struct GameView {
    guess: TextField,
}

impl GameView {
    /// Creates the view with an empty guess field.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing GameView");
        Self {
            guess: TextField::plain(),
        }
    }
}

impl Default for GameView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for GameView {
    #[instrument(skip(self, frame, snapshot))]
    fn render(&self, frame: &mut Frame, snapshot: &FlowSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(frame.area());

        frame.render_widget(title("Guess the Number"), chunks[0]);

        let (instructions, remaining) = match snapshot.game() {
            Some(game) => (game.instructions(), game.remaining_label()),
            None => (String::new(), None),
        };
        frame.render_widget(
            Paragraph::new(instructions).alignment(Alignment::Center),
            chunks[1],
        );
        frame.render_widget(self.guess.widget("Your guess", true), chunks[2]);
        frame.render_widget(feedback_box(snapshot.feedback().as_ref()), chunks[3]);
        frame.render_widget(
            Paragraph::new(remaining.unwrap_or_default())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center),
            chunks[4],
        );
        frame.render_widget(help("Enter: Submit Guess | Esc: Quit"), chunks[5]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter => Some(Action::SubmitGuess(self.guess.value().to_string())),
            KeyCode::Esc => Some(Action::Quit),
            _ => {
                self.guess.handle_key(key);
                None
            }
        }
    }

    fn on_result(&mut self, _action: &Action, result: &Result<(), FlowError>) {
        if result.is_ok() {
            self.guess.clear();
        }
    }
}
