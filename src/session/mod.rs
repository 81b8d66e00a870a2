//! Session interaction loop: submission guard, dispatch, outcome routing,
//! and the widget lifecycle around it.

mod controller;
mod outcome;
mod widget;

pub use controller::{SessionController, SubmitTrigger};
pub use outcome::{FailureKind, RequestOutcome};
pub use widget::{HostSurface, TerminalWidget, WidgetEvent, WidgetHandle};
