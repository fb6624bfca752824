pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod ui;

pub use error::{Error, Result};
