//! Style configuration, chart dispatch and the plot entry points.

mod batch;
pub mod builders;
mod chart_type;
mod dispatcher;
mod label_layout;
mod options;
mod plot;
mod style_config;

pub use batch::PlotRequest;
pub use builders::{ChartBuilder, ErrorFallback};
pub use chart_type::ChartType;
pub use dispatcher::{Dispatcher, builder_for};
pub use label_layout::{LabelLayout, LabelPlacement, format_sample};
pub use options::{OptionValue, StyleOptions};
pub use plot::{DEFAULT_OUTPUT_FILE, plot_frame, plot_with};
pub use style_config::{DEFAULT_BULLET_WIDTH, DEFAULT_POINT_SIZE, LABEL_MARGIN, StyleConfig};

#[cfg(feature = "cairo-backend")]
pub use plot::{plot, plot_to_file, plot_to_image};
