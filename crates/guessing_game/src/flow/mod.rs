//! Screen flow: actions in, snapshots out.

mod action;
mod controller;
mod snapshot;

pub use action::{Action, Screen};
pub use controller::{FlowController, FlowError};
pub use snapshot::{Feedback, FlowSnapshot, Tone};
