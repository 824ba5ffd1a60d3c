//! Terminal UI: the name entry form, the board view, and the event loop
//! tying mouse and keyboard input to the rules engine.

mod app;
mod game_view;
mod name_entry;

pub use app::App;
