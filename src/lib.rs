pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod ui;
pub mod wizard;

pub use error::{AppError, Result};
