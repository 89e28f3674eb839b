#![no_std]

extern crate alloc;

pub use config::*;
pub use error::*;
pub use game::*;
pub use loader::*;
pub use rng::*;
pub use sanitize::*;
pub use source::*;
pub use types::*;

mod config;
mod error;
mod game;
mod loader;
mod rng;
mod sanitize;
mod source;
mod types;

#[cfg(test)]
mod testing;
