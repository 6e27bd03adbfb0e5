pub mod card;
pub mod controls;
pub mod terminal;
pub mod utils;

pub use terminal::TerminalGuard;
