#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod drawable;
pub mod error;
pub mod export;
pub mod history;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod render;
pub mod sketchpad;
pub mod tools;
pub mod util;

pub use app::{APP_NAME, SketchApp};
pub use config::SketchConfig;
pub use drawable::{Drawable, Mark, Sticker, Stroke};
pub use error::{ConfigError, ExportError};
pub use history::History;
pub use id_generator::DrawableId;
pub use input::{InputAdapter, InputEvent};
pub use render::{DrawOp, Frame, RenderLoop, Surface};
pub use sketchpad::Sketchpad;
pub use tools::{Preview, Tool, ToolKind, ToolSettings};
