use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "parallel-batch")]
use rayon::prelude::*;

use crate::error::SparklineResult;
use crate::render::{RenderFrame, TextMetrics};

use super::{Dispatcher, StyleConfig};

/// One independent plot: samples plus style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub data: Vec<f64>,
    #[serde(default)]
    pub options: StyleConfig,
}

impl PlotRequest {
    #[must_use]
    pub fn new(data: Vec<f64>, options: StyleConfig) -> Self {
        Self {
            id: None,
            data,
            options,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl<M: TextMetrics + Sync> Dispatcher<M> {
    /// Builds one frame per request, preserving request order.
    ///
    /// Requests share no state, so with `parallel-batch` they are built on the
    /// rayon pool; a failing request does not affect the others.
    pub fn build_batch(&self, requests: &[PlotRequest]) -> Vec<SparklineResult<RenderFrame>> {
        debug!(count = requests.len(), "building sparkline batch");

        #[cfg(feature = "parallel-batch")]
        {
            requests
                .par_iter()
                .map(|request| self.build(&request.data, &request.options))
                .collect()
        }

        #[cfg(not(feature = "parallel-batch"))]
        {
            requests
                .iter()
                .map(|request| self.build(&request.data, &request.options))
                .collect()
        }
    }
}
