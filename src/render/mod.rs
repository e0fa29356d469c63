//! Terminal rendering with ratatui

pub mod renderer;

pub use renderer::Renderer;
