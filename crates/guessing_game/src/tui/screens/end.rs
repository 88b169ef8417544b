//! End screen - result of the finished game with restart and quit.

use crossterm::event::{KeyCode, KeyEvent};
use guessing_engine::GameEnd;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{info, instrument};

use crate::tui::view::{View, feedback_box, help, title};
use crate::{Action, FlowSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EndOption {
    Restart,
    Quit,
}

impl EndOption {
    const ALL: [EndOption; 2] = [Self::Restart, Self::Quit];

    fn label(self) -> &'static str {
        match self {
            Self::Restart => "Restart Game",
            Self::Quit => "Quit",
        }
    }

    fn action(self) -> Action {
        match self {
            Self::Restart => Action::Restart,
            Self::Quit => Action::Quit,
        }
    }
}

/// Final message plus a Restart / Quit menu.
#[derive(Debug)]
pub struct EndView {
    list_state: ListState,
}

impl EndView {
    /// Creates the view with Restart highlighted.
    #[instrument]
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }

    fn selected(&self) -> EndOption {
        let idx = self.list_state.selected().unwrap_or(0);
        EndOption::ALL[idx.min(EndOption::ALL.len() - 1)]
    }
}

impl Default for EndView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for EndView {
    #[instrument(skip(self, frame, snapshot))]
    fn render(&self, frame: &mut Frame, snapshot: &FlowSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(2),
                Constraint::Min(4),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let heading = match snapshot.game().as_ref().and_then(|g| g.end()) {
            Some(GameEnd::Won) => "You Won!",
            Some(GameEnd::Exhausted) => "Out of Attempts",
            None => "Game Over",
        };
        frame.render_widget(title(heading), chunks[0]);
        frame.render_widget(feedback_box(snapshot.feedback().as_ref()), chunks[1]);

        let summary = snapshot
            .game()
            .as_ref()
            .map(|g| format!("{} | guesses: {}", g.mode(), g.guess_count()))
            .unwrap_or_default();
        frame.render_widget(
            Paragraph::new(summary)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center),
            chunks[2],
        );

        let items: Vec<ListItem> = EndOption::ALL
            .iter()
            .map(|opt| ListItem::new(opt.label()))
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, chunks[3], &mut list_state);

        frame.render_widget(help("↑↓: Select | Enter: Confirm | r: Restart | q: Quit"), chunks[4]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Up | KeyCode::Down => {
                let next = (self.list_state.selected().unwrap_or(0) + 1) % EndOption::ALL.len();
                self.list_state.select(Some(next));
                None
            }
            KeyCode::Enter => {
                let option = self.selected();
                info!(option = ?option, "End option selected");
                Some(option.action())
            }
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            _ => None,
        }
    }
}
