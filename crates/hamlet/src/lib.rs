//! # Hamlet - a walk through a procedurally placed village
//!
//! Headless host around `hamlet-core`: layered configuration, a tick driver,
//! scripted scenarios and a renderer that logs instead of drawing.

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod driver;
pub mod renderer;
pub mod scenario;

// Re-export core modules for convenience
pub use hamlet_core::animation;
pub use hamlet_core::entity;
pub use hamlet_core::render;
pub use hamlet_core::world;

pub use renderer::LogRenderer;
