//! Application module containing the command-line front end
//!
//! The window, GPU upload and UI live outside this crate; these commands drive
//! the same `Session` headlessly.

mod game;

pub use game::run_game;
