//! Style assignment for one buffer.
//!
//! The store keeps the whole buffer as a list of coalesced runs. Rebuilding
//! writes every [`MatchSpan`] into per-char attribute slots in scan order, so
//! later rules overwrite the attribute keys they share with earlier ones and
//! leave other keys intact. The slots are then collapsed into runs once.

use super::rules::RuleTable;
use super::scanner::{MatchSpan, Scanner};
use super::sink::RenderSink;
use super::style::{Attribute, StyleAttributes};
use serde::Serialize;
use std::ops::Range;

/// A maximal range of chars sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledRun {
    pub range: Range<usize>,
    pub style: StyleAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationStore {
    len: usize,
    runs: Vec<StyledRun>,
    spans: Vec<MatchSpan>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rebuild(&mut self, text: &str, rules: &RuleTable) {
        self.rebuild_with(&Scanner::default(), text, rules);
    }

    /// Drop every assignment and recompute them from `text`.
    pub fn rebuild_with(&mut self, scanner: &Scanner, text: &str, rules: &RuleTable) {
        self.len = text.chars().count();

        let spans = scanner.scan(text, rules);
        let mut slots: Vec<Slots> = vec![[None; KEY_COUNT]; self.len];
        for span in &spans {
            let end = span.end.min(self.len);
            let start = span.start.min(end);
            for attr in span.style.iter() {
                let key = attr.key() as usize;
                for slot in &mut slots[start..end] {
                    slot[key] = Some(*attr);
                }
            }
        }
        self.runs = collapse(&slots);
        self.spans = spans;

        tracing::debug!(
            chars = self.len,
            spans = self.spans.len(),
            runs = self.runs.len(),
            "annotations rebuilt"
        );
    }

    /// Length in chars of the text the store was built from.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// Spans from the last scan, in the order they were applied.
    pub fn spans(&self) -> &[MatchSpan] {
        &self.spans
    }

    /// Effective style of the char at `offset`; `None` past the end.
    pub fn style_at(&self, offset: usize) -> Option<&StyleAttributes> {
        if offset >= self.len {
            return None;
        }
        let idx = self.runs.partition_point(|run| run.range.end <= offset);
        self.runs.get(idx).map(|run| &run.style)
    }

    /// Push every styled run to `sink`, in text order.
    pub fn apply_to<R: RenderSink + ?Sized>(&self, sink: &mut R) {
        sink.reset(self.len);
        for run in self.runs.iter().filter(|run| !run.style.is_empty()) {
            sink.apply(run.range.clone(), &run.style);
        }
    }
}

/// One optional attribute per [`AttributeKey`](super::style::AttributeKey), for a single char.
type Slots = [Option<Attribute>; KEY_COUNT];

const KEY_COUNT: usize = 3;

/// Merge neighbouring chars with identical slots into runs.
fn collapse(slots: &[Slots]) -> Vec<StyledRun> {
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..=slots.len() {
        if i == slots.len() || slots[i] != slots[start] {
            let style = slots[start]
                .iter()
                .flatten()
                .fold(StyleAttributes::new(), |style, attr| style.with(*attr));
            runs.push(StyledRun {
                range: start..i,
                style,
            });
            start = i;
        }
    }
    runs
}
