pub mod components;
pub mod flows;
pub mod screens;
pub mod styles;

pub use components::TerminalGuard;
pub use flows::run_wizard;
