pub mod config;
pub mod error;
pub mod handler;
pub mod inference;
pub mod server;

pub use error::{Error, Result};
