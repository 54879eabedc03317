use indexmap::IndexMap;

use crate::error::SparklineResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless callers.
///
/// It still validates frame content so invalid geometry is caught without a
/// rasterizer, and records how many ops of each kind the last frame held.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_op_count: usize,
    pub last_op_kinds: IndexMap<&'static str, usize>,
    pub frames_rendered: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn count_of(&self, kind: &str) -> usize {
        self.last_op_kinds.get(kind).copied().unwrap_or(0)
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> SparklineResult<()> {
        frame.validate()?;
        self.last_op_count = frame.ops.len();
        self.last_op_kinds.clear();
        for op in &frame.ops {
            *self.last_op_kinds.entry(op.kind()).or_insert(0) += 1;
        }
        self.frames_rendered += 1;
        Ok(())
    }
}
