//! HTML rendering of the review page.

pub mod client;
mod render;

pub use render::{render_page, PageConfig, DEFAULT_SUBTITLE, DEFAULT_TITLE};
