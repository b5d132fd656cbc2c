//! Terminal presentation
//!
//! Materializes display nodes as styled lines and prints them.

pub mod markdown;
pub mod printer;
pub mod theme;

pub use markdown::render_lines;
pub use theme::Theme;
