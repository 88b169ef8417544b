//! Flow controller - the linear state machine behind the screens.

use derive_more::{Display, Error};
use guessing_engine::{GameMode, GameRules, GameState, GuessError, GuessingEngine, RulesError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, trace, warn};

use crate::flow::{Action, Feedback, FlowSnapshot, Screen, Tone};
use crate::{AuthController, AuthError, CredentialStore, Session};

/// Why a dispatched action was refused.
///
/// Every variant is recoverable; the screen stays where it was.
#[derive(Debug, Clone, Display, Error)]
pub enum FlowError {
    /// Login or sign-up failed.
    #[display("{_0}")]
    Auth(AuthError),
    /// The guess was rejected.
    #[display("{_0}")]
    Guess(GuessError),
    /// The game could not be started with the configured rules.
    #[display("{_0}")]
    Rules(RulesError),
    /// The action does not belong to the current screen.
    #[display("{action} is not available on the {screen} screen")]
    UnavailableAction {
        /// Screen shown when the action arrived.
        screen: Screen,
        /// Name of the refused action.
        action: &'static str,
    },
    /// The application has already quit.
    #[display("The game has been quit")]
    Terminated,
}

impl From<AuthError> for FlowError {
    fn from(err: AuthError) -> Self {
        Self::Auth(err)
    }
}

impl From<GuessError> for FlowError {
    fn from(err: GuessError) -> Self {
        Self::Guess(err)
    }
}

impl From<RulesError> for FlowError {
    fn from(err: RulesError) -> Self {
        Self::Rules(err)
    }
}

type Listener = Box<dyn FnMut(&FlowSnapshot)>;

/// Drives Login → Rules → ModeSelect → Game → End, with End → Game on restart.
///
/// Presentation code dispatches [`Action`]s and renders [`FlowSnapshot`]s,
/// either by polling [`FlowController::snapshot`] or via
/// [`FlowController::subscribe`].
pub struct FlowController<S, R = StdRng> {
    auth: AuthController<S>,
    rules: GameRules,
    screen: Screen,
    session: Option<Session>,
    // Handed to the engine when a mode is chosen.
    rng: Option<R>,
    engine: Option<GuessingEngine<R>>,
    feedback: Option<Feedback>,
    terminated: bool,
    listeners: Vec<Listener>,
}

impl<S, R> std::fmt::Debug for FlowController<S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowController")
            .field("screen", &self.screen)
            .field("session", &self.session)
            .field("feedback", &self.feedback)
            .field("terminated", &self.terminated)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<S: CredentialStore> FlowController<S, StdRng> {
    /// Creates a controller whose targets are seeded from operating system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] if the rules are invalid.
    #[instrument(skip(auth))]
    pub fn with_entropy(auth: AuthController<S>, rules: GameRules) -> Result<Self, RulesError> {
        Self::new(auth, rules, StdRng::from_entropy())
    }
}

impl<S: CredentialStore, R: Rng> FlowController<S, R> {
    /// Creates a controller on the login screen.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] if the rules are invalid.
    #[instrument(skip(auth, rng))]
    pub fn new(auth: AuthController<S>, rules: GameRules, rng: R) -> Result<Self, RulesError> {
        rules.validate()?;
        info!("Creating FlowController");
        Ok(Self {
            auth,
            rules,
            screen: Screen::Login,
            session: None,
            rng: Some(rng),
            engine: None,
            feedback: None,
            terminated: false,
            listeners: Vec::new(),
        })
    }

    /// Registers a listener called with a fresh snapshot after every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&FlowSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Applies an action to the current screen.
    ///
    /// Refused actions leave the screen unchanged and, except for
    /// [`FlowError::UnavailableAction`] and [`FlowError::Terminated`], are
    /// recorded as error feedback.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError`] describing why the action was refused.
    #[instrument(skip(self, action), fields(action = action.name(), screen = %self.screen))]
    pub fn dispatch(&mut self, action: Action) -> Result<(), FlowError> {
        if self.terminated {
            debug!("Action after quit ignored");
            return Err(FlowError::Terminated);
        }
        if !action.available_on(self.screen) {
            warn!("Action not available on this screen");
            return Err(FlowError::UnavailableAction {
                screen: self.screen,
                action: action.name(),
            });
        }

        let result = match action {
            Action::Login { username, password } => self.login(&username, &password),
            Action::SignUp { username, password } => self.sign_up(&username, &password),
            Action::ProceedToModeSelect => {
                self.go_to(Screen::ModeSelect, None);
                Ok(())
            }
            Action::ChooseMode(mode) => self.start_game(mode),
            Action::SubmitGuess(text) => self.submit_guess(&text),
            Action::Restart => self.restart(),
            Action::Quit => {
                info!("Quitting");
                self.terminated = true;
                Ok(())
            }
        };

        if let Err(ref e) = result {
            debug!(error = %e, "Action refused");
            self.feedback = Some(Feedback::from_error(e));
        }
        self.notify();
        result
    }

    fn login(&mut self, username: &str, password: &str) -> Result<(), FlowError> {
        let session = self.auth.login(username, password)?;
        let welcome = Feedback::new(
            Tone::Success,
            "Login Success".to_string(),
            format!("Welcome back, {}!", session.username()),
        );
        self.session = Some(session);
        self.go_to(Screen::Rules, Some(welcome));
        Ok(())
    }

    fn sign_up(&mut self, username: &str, password: &str) -> Result<(), FlowError> {
        self.auth.sign_up(username, password)?;
        self.feedback = Some(Feedback::new(
            Tone::Success,
            "Sign Up Success".to_string(),
            "Your account has been created. Please log in.".to_string(),
        ));
        Ok(())
    }

    fn start_game(&mut self, mode: GameMode) -> Result<(), FlowError> {
        // The flow never returns to ModeSelect, so the generator is still here.
        let Some(rng) = self.rng.take() else {
            return Err(FlowError::UnavailableAction {
                screen: self.screen,
                action: "ChooseMode",
            });
        };
        let engine = GuessingEngine::new(self.rules, mode, rng)?;
        self.engine = Some(engine);
        self.go_to(Screen::Game, None);
        Ok(())
    }

    fn submit_guess(&mut self, text: &str) -> Result<(), FlowError> {
        let Some(engine) = self.engine.as_mut() else {
            return Err(FlowError::UnavailableAction {
                screen: self.screen,
                action: "SubmitGuess",
            });
        };
        let outcome = engine.submit_guess(text)?;
        let feedback = Feedback::from_outcome(&outcome);
        if outcome.ends_game() {
            self.go_to(Screen::End, Some(feedback));
        } else {
            self.feedback = Some(feedback);
        }
        Ok(())
    }

    fn restart(&mut self) -> Result<(), FlowError> {
        let Some(engine) = self.engine.as_mut() else {
            return Err(FlowError::UnavailableAction {
                screen: self.screen,
                action: "Restart",
            });
        };
        engine.restart();
        self.go_to(Screen::Game, None);
        Ok(())
    }

    fn go_to(&mut self, next: Screen, feedback: Option<Feedback>) {
        info!(from = %self.screen, to = %next, "Screen transition");
        self.screen = next;
        self.feedback = feedback;
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        match serde_json::to_string(&snapshot) {
            Ok(json) => trace!(snapshot = %json, "Notifying listeners"),
            Err(e) => warn!(error = %e, "Snapshot not serializable"),
        }
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }

    /// Current view of the flow.
    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            screen: self.screen,
            session: self.session.clone(),
            game: self.game_state().cloned(),
            feedback: self.feedback.clone(),
            terminated: self.terminated,
        }
    }

    /// The screen currently shown.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The logged-in session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The current game, once a mode has been chosen.
    pub fn game_state(&self) -> Option<&GameState> {
        self.engine.as_ref().map(GuessingEngine::state)
    }

    /// Feedback from the last action.
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Returns true once [`Action::Quit`] has been dispatched.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// The rules every game is played by.
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// The auth controller and, through it, the credential store.
    pub fn auth_mut(&mut self) -> &mut AuthController<S> {
        &mut self.auth
    }
}
