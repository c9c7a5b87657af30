mod client;
mod models;
mod types;

pub use client::*;
pub use models::*;
pub use types::*;
