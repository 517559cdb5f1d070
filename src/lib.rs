#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod history;
pub mod input;
pub mod renderer;
pub mod state;
pub mod tools;

pub use app::PaintApp;
pub use canvas::{Canvas, Snapshot};
pub use config::PaintConfig;
pub use error::CanvasError;
pub use geometry::{PixelPos, PixelRect, ShapeStyle};
pub use history::History;
pub use input::{Action, Flow, InputEvent, InputHandler, route_event};
pub use renderer::Renderer;
pub use state::{EditorContext, EditorState};
pub use tools::{PendingShape, ShapeCommit, Tool, ToolState};
