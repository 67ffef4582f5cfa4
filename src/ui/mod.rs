//! Interactive launcher session: state machine, filtering, viewport,
//! animations, and modal dialogs.

mod animation;
mod app;
mod dialogs;
mod filter;
mod render;
mod runtime;
mod viewport;

pub use animation::{Transition, transition};
pub use app::{Action, App, DialogKind, Mode, UiSettings};
pub use dialogs::{DialogSignal, FilterDialog};
pub use filter::filter;
pub use runtime::run;
pub use viewport::ViewState;
