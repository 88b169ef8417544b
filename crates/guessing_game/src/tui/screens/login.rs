//! Login screen - log in or create an account.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use tracing::{debug, instrument};

use crate::tui::input::TextField;
use crate::tui::view::{View, feedback_box, help, title};
use crate::{Action, FlowError, FlowSnapshot};

/// Focusable elements, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Username,
    Password,
    LoginButton,
    SignUpButton,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::LoginButton,
            Self::LoginButton => Self::SignUpButton,
            Self::SignUpButton => Self::Username,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Username => Self::SignUpButton,
            Self::Password => Self::Username,
            Self::LoginButton => Self::Password,
            Self::SignUpButton => Self::LoginButton,
        }
    }
}

/// Username and password fields with Login and Sign Up buttons.
#[derive(Debug)]
pub struct LoginView {
    username: TextField,
    password: TextField,
    focus: Focus,
}

impl LoginView {
    /// Creates an empty login form focused on the username.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing LoginView");
        Self {
            username: TextField::plain(),
            password: TextField::masked(),
            focus: Focus::Username,
        }
    }

    fn login_action(&self) -> Action {
        Action::Login {
            username: self.username.value().to_string(),
            password: self.password.value().to_string(),
        }
    }

    fn sign_up_action(&self) -> Action {
        Action::SignUp {
            username: self.username.value().to_string(),
            password: self.password.value().to_string(),
        }
    }

    fn button<'a>(label: &'a str, focused: bool) -> Paragraph<'a> {
        let style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::LightBlue)
        };
        Paragraph::new(label).style(style).alignment(Alignment::Center)
    }
}

impl Default for LoginView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for LoginView {
    #[instrument(skip(self, frame, snapshot))]
    fn render(&self, frame: &mut Frame, snapshot: &FlowSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        frame.render_widget(title("Login or Sign Up"), chunks[0]);
        frame.render_widget(
            self.username.widget("Username", self.focus == Focus::Username),
            chunks[1],
        );
        frame.render_widget(
            self.password.widget("Password", self.focus == Focus::Password),
            chunks[2],
        );
        frame.render_widget(
            Self::button("[ Login ]", self.focus == Focus::LoginButton),
            chunks[3],
        );
        frame.render_widget(
            Self::button("[ Sign Up ]", self.focus == Focus::SignUpButton),
            chunks[4],
        );
        frame.render_widget(feedback_box(snapshot.feedback().as_ref()), chunks[5]);
        frame.render_widget(
            help("Tab/↑↓: Move | Enter: Login / press button | F2: Sign Up | Esc: Quit"),
            chunks[6],
        );
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                None
            }
            KeyCode::F(2) => Some(self.sign_up_action()),
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Enter => match self.focus {
                Focus::Username => {
                    self.focus = Focus::Password;
                    None
                }
                Focus::Password | Focus::LoginButton => Some(self.login_action()),
                Focus::SignUpButton => Some(self.sign_up_action()),
            },
            _ => {
                match self.focus {
                    Focus::Username => self.username.handle_key(key),
                    Focus::Password => self.password.handle_key(key),
                    Focus::LoginButton | Focus::SignUpButton => false,
                };
                None
            }
        }
    }

    fn on_result(&mut self, action: &Action, result: &Result<(), FlowError>) {
        if matches!(action, Action::SignUp { .. }) && result.is_ok() {
            debug!("Sign-up succeeded, clearing form");
            self.username.clear();
            self.password.clear();
            self.focus = Focus::Username;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(view: &mut LoginView, code: KeyCode) -> Option<Action> {
        view.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(view: &mut LoginView, text: &str) {
        for c in text.chars() {
            assert_eq!(press(view, KeyCode::Char(c)), None);
        }
    }

    #[test]
    fn test_enter_on_password_logs_in() {
        let mut view = LoginView::new();
        type_text(&mut view, "ada");
        assert_eq!(press(&mut view, KeyCode::Enter), None);
        type_text(&mut view, "secret");
        assert_eq!(
            press(&mut view, KeyCode::Enter),
            Some(Action::Login {
                username: "ada".to_string(),
                password: "secret".to_string()
            })
        );
    }

    #[test]
    fn test_successful_sign_up_clears_fields() {
        let mut view = LoginView::new();
        type_text(&mut view, "ada");
        press(&mut view, KeyCode::Tab);
        type_text(&mut view, "pw");
        let action = press(&mut view, KeyCode::F(2)).expect("Sign-up action");
        assert!(matches!(action, Action::SignUp { .. }));

        view.on_result(&action, &Ok(()));
        assert_eq!(view.username.value(), "");
        assert_eq!(view.password.value(), "");
        assert_eq!(view.focus, Focus::Username);
    }
}
