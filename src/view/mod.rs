mod controller;
mod events;
mod panel;

pub use controller::ViewController;
pub use events::{Effect, FieldEdit, UiEvent};
pub use panel::Panel;
