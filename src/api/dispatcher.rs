use tracing::{debug, warn};

use crate::core::NormalizedSeries;
use crate::error::SparklineResult;
use crate::render::{EstimatedTextMetrics, RenderFrame, TextMetrics};

use super::builders::{
    AreaChart, BarChart, BulletChart, ChartBuilder, DiscreteChart, ErrorFallback, PieChart,
    SmoothChart, WhiskerChart,
};
use super::{ChartType, LabelLayout, StyleConfig};

/// Builder registered for `chart_type`.
#[must_use]
pub fn builder_for(chart_type: ChartType) -> &'static dyn ChartBuilder {
    match chart_type {
        ChartType::Area => &AreaChart,
        ChartType::Bar => &BarChart,
        ChartType::Bullet => &BulletChart,
        ChartType::Discrete => &DiscreteChart,
        ChartType::Pie => &PieChart,
        ChartType::Smooth => &SmoothChart,
        ChartType::Whisker => &WhiskerChart,
    }
}

/// Selects the builder for a style and assembles the final frame.
///
/// Holds the text-metrics collaborator used for label layout; otherwise
/// stateless, so one dispatcher may serve any number of plots.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher<M: TextMetrics = EstimatedTextMetrics> {
    metrics: M,
}

impl<M: TextMetrics> Dispatcher<M> {
    #[must_use]
    pub fn new(metrics: M) -> Self {
        Self { metrics }
    }

    #[must_use]
    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// Builds the frame for `data` under `config`.
    ///
    /// An unrecognized chart type yields the error glyph without looking at
    /// `data`; every other failure is returned as an error.
    pub fn build(&self, data: &[f64], config: &StyleConfig) -> SparklineResult<RenderFrame> {
        let Some(chart_type) = config.resolved_chart_type() else {
            warn!(
                chart_type = config.chart_type.as_str(),
                "unrecognized chart type, rendering error glyph"
            );
            return Ok(ErrorFallback.frame());
        };

        config.validate()?;
        let series = NormalizedSeries::new(data, chart_type.value_scale())?;
        let mut frame = builder_for(chart_type).build(&series, config)?;
        // A zero-width chart area stays invalid even when a label would widen it.
        frame.validate()?;

        if let Some(label) = config.label.as_deref().filter(|label| !label.is_empty()) {
            LabelLayout::new(&self.metrics).apply(
                &mut frame,
                label,
                series.last_raw(),
                config,
            )?;
            frame.validate()?;
        }

        debug!(
            chart_type = chart_type.name(),
            samples = series.len(),
            width = frame.width,
            height = frame.height,
            ops = frame.op_count(),
            "built sparkline frame"
        );
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_chart_type_has_a_builder() {
        for chart_type in ChartType::ALL {
            assert_eq!(builder_for(chart_type).chart_type(), chart_type);
        }
    }
}
