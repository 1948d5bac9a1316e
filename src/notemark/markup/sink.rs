use super::style::StyleAttributes;
use serde::Serialize;
use std::ops::Range;

/// Consumer of resolved styles, typically a text widget or terminal printer.
///
/// Ranges are char offsets into the text the annotations were built from.
pub trait RenderSink {
    /// Called once before any [`apply`](RenderSink::apply) with the text length.
    fn reset(&mut self, len: usize);

    fn apply(&mut self, range: Range<usize>, style: &StyleAttributes);
}

/// Keeps every call it receives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordingSink {
    pub len: usize,
    pub calls: Vec<(Range<usize>, StyleAttributes)>,
}

impl RenderSink for RecordingSink {
    fn reset(&mut self, len: usize) {
        self.len = len;
        self.calls.clear();
    }

    fn apply(&mut self, range: Range<usize>, style: &StyleAttributes) {
        self.calls.push((range, style.clone()));
    }
}
