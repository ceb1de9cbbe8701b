//! # legacy-color-core
//!
//! Step-by-step model of the legacy browser rule that turns any string into
//! a hex color (the reason `bgcolor="chucknorris"` renders red).
//!
//! This crate provides platform-agnostic logic for:
//! - Running the six-stage normalization pipeline on any input
//! - Recording what every stage did, or that it was skipped
//! - Building a presentation model for terminals and web pages
//! - Tracking live input for front ends that redraw as the user types
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Load [`ViewConfig`] from TOML
//! - `web` - Enable web/WASM DOM rendering support
//! - `cli` - Build the `legacy-color` terminal front end
//!
//! ## Example
//!
//! ```rust
//! use legacy_color_core::{normalize, Stage};
//!
//! let result = normalize("chucknorris");
//! assert_eq!(result.stage(Stage::Sanitize).unwrap().value, "c00c0000000");
//! assert_eq!(result.stage(Stage::Split).unwrap().value, "c00c,0000,0000");
//! assert_eq!(result.css_color(), "#c00000");
//! ```

mod color;
mod config;
mod normalize;
pub mod render;
mod stage;
mod visualizer;

pub use color::Components;
pub use config::{ConfigError, ViewConfig};
pub use normalize::normalize;
pub use render::{RenderResult, StepBlock};
pub use stage::{Normalization, Stage, StageRecord};
pub use visualizer::Visualizer;

#[cfg(feature = "web")]
pub use render::web::{mount, render_to_document};
