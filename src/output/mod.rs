pub mod markdown;

pub use markdown::{RenderOptions, render};
