//! Geometry, configuration and animation calculations for the halo
//! circular progress spinner.
//!
//! Everything in this crate is pure and DOM-free; the `halo-leptos-ui`
//! crate supplies the rendering and style-injection layer on top of it.

pub mod config;
pub mod geometry;
pub mod keyframes;
pub mod probe;

pub use config::{
    ConfigError, SpinnerConfig, SpinnerMode, BASE_SIZE, BASE_STROKE_WIDTH, DEFAULT_COLOR,
    DEFAULT_VALUE,
};
