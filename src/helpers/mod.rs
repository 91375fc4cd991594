//! Helper functions for the page renderer

mod appear;
mod date;
mod html;
mod url;

pub use appear::*;
pub use date::*;
pub use html::*;
pub use url::*;
