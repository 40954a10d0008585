// src/render/mod.rs
// The path rendering pipeline: transform context, eye composition and
// path playback behind one render entry point.

pub mod eye_composer;
pub mod path_player;
pub mod renderer;
pub mod transform;

pub use path_player::PathPlayer;
pub use renderer::Renderer;
pub use transform::TransformContext;
