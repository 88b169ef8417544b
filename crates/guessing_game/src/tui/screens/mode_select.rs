//! Mode selection screen - Practice or Game mode.

use crossterm::event::{KeyCode, KeyEvent};
use guessing_engine::GameMode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use crate::tui::view::{View, help, title};
use crate::{Action, FlowSnapshot};

/// List of modes with the highlighted one chosen on Enter.
#[derive(Debug)]
pub struct ModeSelectView {
    modes: Vec<GameMode>,
    list_state: ListState,
}

impl ModeSelectView {
    /// Creates the view with the first mode highlighted.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing ModeSelectView");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            modes: GameMode::iter().collect(),
            list_state,
        }
    }

    fn select_previous(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => self.modes.len() - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.modes.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_mode(&self) -> Option<GameMode> {
        self.list_state
            .selected()
            .and_then(|i| self.modes.get(i))
            .copied()
    }
}

impl Default for ModeSelectView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ModeSelectView {
    #[instrument(skip(self, frame, snapshot))]
    fn render(&self, frame: &mut Frame, snapshot: &FlowSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(3),
            ])
            .split(frame.area());

        frame.render_widget(title("Choose Your Mode"), chunks[0]);

        let user = snapshot
            .session()
            .as_ref()
            .map(|s| s.username().as_str())
            .unwrap_or("Player");
        let items: Vec<ListItem> = self
            .modes
            .iter()
            .map(|mode| {
                let detail = match mode {
                    GameMode::Practice => "unlimited attempts",
                    GameMode::Game => "limited attempts",
                };
                ListItem::new(format!("{mode} ({detail})"))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Modes for {user}")),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(list, chunks[1], &mut list_state);
        frame.render_widget(help("↑↓: Select | Enter: Start | Esc: Quit"), chunks[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                None
            }
            KeyCode::Down => {
                self.select_next();
                None
            }
            KeyCode::Enter => {
                let mode = self.selected_mode()?;
                info!(mode = %mode, "Mode selected");
                Some(Action::ChooseMode(mode))
            }
            KeyCode::Char('p') | KeyCode::Char('P') => Some(Action::ChooseMode(GameMode::Practice)),
            KeyCode::Char('g') | KeyCode::Char('G') => Some(Action::ChooseMode(GameMode::Game)),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            _ => None,
        }
    }
}
