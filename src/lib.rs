pub mod config;
pub mod engine;
pub mod error;
pub mod preview;
pub mod session;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::{Error, Result};
