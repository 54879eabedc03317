//! sparkline-rs: word-sized statistical glyphs.
//!
//! A short numeric series and a [`StyleConfig`] become an ordered list of
//! abstract draw ops ([`render::RenderFrame`]) for one of seven chart types.
//! Rasterization is left to a [`render::Renderer`]; the optional
//! `cairo-backend` feature provides one that also encodes PNG.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartType, Dispatcher, StyleConfig, StyleOptions, plot_frame};
pub use error::{SparklineError, SparklineResult};

#[cfg(feature = "cairo-backend")]
pub use api::{plot, plot_to_file, plot_to_image};
