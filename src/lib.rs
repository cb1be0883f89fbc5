pub mod classify;
pub mod convert;
pub mod download;
pub mod error;
pub mod extract;
pub mod input;
pub mod models;
pub mod output;
pub mod unpack;

pub use error::{Error, Result};
pub use models::*;
