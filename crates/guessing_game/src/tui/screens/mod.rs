//! View implementations, one per screen.

mod end;
mod game;
mod login;
mod mode_select;
mod rules;

pub use end::EndView;
pub use game::GameView;
pub use login::LoginView;
pub use mode_select::ModeSelectView;
pub use rules::RulesView;
