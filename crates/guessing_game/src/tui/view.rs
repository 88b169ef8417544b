//! View trait and shared widgets for the screen state machine.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{Action, Feedback, FlowError, FlowSnapshot, Tone};

/// Trait implemented by the widgets of each screen.
///
/// A view owns only presentation state such as raw field contents and
/// selection. Everything else comes from the [`FlowSnapshot`] it renders.
pub trait View {
    /// Renders the view into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, snapshot: &FlowSnapshot);

    /// Handles a key event, returning the action to dispatch if any.
    fn handle_key(&mut self, key: KeyEvent) -> Option<Action>;

    /// Receives the result of an action this view produced.
    fn on_result(&mut self, _action: &Action, _result: &Result<(), FlowError>) {}
}

/// Screen title bar.
pub fn title(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

/// Feedback box colored by tone; empty when there is nothing to say.
pub fn feedback_box(feedback: Option<&Feedback>) -> Paragraph<'static> {
    let Some(feedback) = feedback else {
        return Paragraph::new("").block(Block::default().borders(Borders::ALL));
    };
    let color = match feedback.tone() {
        Tone::Info => Color::Blue,
        Tone::Success => Color::Green,
        Tone::Error => Color::Red,
    };
    Paragraph::new(feedback.message().clone())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(feedback.title().clone()),
        )
}

/// Key help footer.
pub fn help(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}
