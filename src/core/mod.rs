pub mod normalize;
pub mod stats;
pub mod types;

pub use normalize::{
    DEGENERATE_MIDPOINT, NORMALIZED_MAX, NormalizedSeries, SampleRange, ValueScale,
    VerticalMapping,
};
pub use stats::{
    Welford, index_of_max, index_of_min, mean, min_max, standard_deviation, variance,
};
pub use types::{CanvasSize, Point};
