//! Leozin core library
//!
//! Message rendering, widget state, local replies, and the chat backend
//! client shared by the Leozin front ends.

pub mod client;
pub mod config;
pub mod render;
pub mod responder;
pub mod surface;
pub mod widget;

pub use client::{ChatClient, ChatError};
pub use config::{BackendConfig, Config};
pub use render::{render, DisplayNode, EmphasisKind, LabelTable, RenderCache, TextRenderer};
pub use surface::{materialize, Surface};
pub use widget::{ChatMessage, Sender, WidgetState};
