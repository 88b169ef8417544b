//! Terminal front end: one view per [`Screen`], driven by [`FlowController`].
//!
//! The loop renders the latest [`FlowSnapshot`] published to a subscriber,
//! forwards key presses to the active view, and dispatches whatever action
//! the view returns.

mod input;
mod screens;
mod view;

use std::cell::RefCell;
use std::io::{self, Stdout};
use std::rc::Rc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument, warn};

use crate::{Action, CredentialStore, FlowController, FlowSnapshot, Screen};

pub use input::TextField;
pub use screens::{EndView, GameView, LoginView, ModeSelectView, RulesView};
pub use view::View;

/// The view currently on screen.
#[derive(Debug)]
pub enum ActiveView {
    /// Login form.
    Login(LoginView),
    /// Rules text.
    Rules(RulesView),
    /// Mode list.
    ModeSelect(ModeSelectView),
    /// Guess entry.
    Game(GameView),
    /// Result with restart and quit.
    End(EndView),
}

impl ActiveView {
    /// Fresh view for `screen`.
    pub fn for_screen(screen: Screen) -> Self {
        match screen {
            Screen::Login => Self::Login(LoginView::new()),
            Screen::Rules => Self::Rules(RulesView),
            Screen::ModeSelect => Self::ModeSelect(ModeSelectView::new()),
            Screen::Game => Self::Game(GameView::new()),
            Screen::End => Self::End(EndView::new()),
        }
    }

    fn view(&self) -> &dyn View {
        match self {
            Self::Login(v) => v,
            Self::Rules(v) => v,
            Self::ModeSelect(v) => v,
            Self::Game(v) => v,
            Self::End(v) => v,
        }
    }

    fn view_mut(&mut self) -> &mut dyn View {
        match self {
            Self::Login(v) => v,
            Self::Rules(v) => v,
            Self::ModeSelect(v) => v,
            Self::Game(v) => v,
            Self::End(v) => v,
        }
    }
}

/// Takes over the terminal, runs the flow until the user quits, and
/// restores the terminal even when the loop fails.
#[instrument(skip(controller))]
pub fn run<S, R>(controller: &mut FlowController<S, R>) -> anyhow::Result<()>
where
    S: CredentialStore,
    R: Rng,
{
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, controller);
    let restored = restore_terminal(&mut terminal);

    if let Err(err) = &res {
        error!(error = ?err, "Terminal UI loop failed");
    }
    if let Err(err) = &restored {
        error!(error = %err, "Failed to restore terminal");
    }
    res?;
    restored?;
    Ok(())
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step runs even if an earlier one fails; the first error is returned.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    first_error([raw, screen, cursor])
}

fn first_error<const N: usize>(steps: [io::Result<()>; N]) -> io::Result<()> {
    steps.into_iter().collect()
}

/// Event loop over any ratatui backend.
#[instrument(skip(terminal, controller))]
pub fn run_loop<B, S, R>(
    terminal: &mut Terminal<B>,
    controller: &mut FlowController<S, R>,
) -> anyhow::Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    S: CredentialStore,
    R: Rng,
{
    let latest = Rc::new(RefCell::new(controller.snapshot()));
    {
        let latest = Rc::clone(&latest);
        controller.subscribe(move |snapshot| {
            *latest.borrow_mut() = snapshot.clone();
        });
    }

    let mut screen = controller.screen();
    let mut active = ActiveView::for_screen(screen);

    loop {
        {
            let snapshot = latest.borrow();
            terminal.draw(|f| active.view().render(f, &snapshot))?;
        }

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            if key.kind == KeyEventKind::Release {
                continue;
            }

            let Some(action) = key_to_action(&mut active, key) else {
                continue;
            };

            debug!(action = action.name(), screen = %screen, "Dispatching");
            let result = controller.dispatch(action.clone());
            if let Err(e) = &result {
                warn!(error = %e, action = action.name(), "Action rejected");
            }
            active.view_mut().on_result(&action, &result);

            if controller.is_terminated() {
                info!("Quit requested, leaving terminal UI");
                break;
            }

            let next = latest.borrow().screen;
            if next != screen {
                debug!(from = %screen, to = %next, "Screen changed");
                screen = next;
                active = ActiveView::for_screen(next);
            }
        }
    }

    Ok(())
}

fn key_to_action(active: &mut ActiveView, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    active.view_mut().handle_key(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_screen_has_a_view() {
        use strum::IntoEnumIterator;
        for screen in Screen::iter() {
            let active = ActiveView::for_screen(screen);
            let matches = matches!(
                (screen, &active),
                (Screen::Login, ActiveView::Login(_))
                    | (Screen::Rules, ActiveView::Rules(_))
                    | (Screen::ModeSelect, ActiveView::ModeSelect(_))
                    | (Screen::Game, ActiveView::Game(_))
                    | (Screen::End, ActiveView::End(_))
            );
            assert!(matches, "{screen} mapped to {active:?}");
        }
    }

    #[test]
    fn test_ctrl_c_quits_from_any_view() {
        let mut active = ActiveView::for_screen(Screen::Game);
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(&mut active, key), Some(Action::Quit));
    }

    #[test]
    fn test_restore_reports_first_failure() {
        assert!(first_error([Ok(()), Ok(()), Ok(())]).is_ok());

        let err = first_error([
            Ok(()),
            Err(io::Error::other("alternate screen")),
            Err(io::Error::other("cursor")),
        ])
        .expect_err("A step failed");
        assert_eq!(err.to_string(), "alternate screen");
    }
}
