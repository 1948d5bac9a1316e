use super::rules::RuleTable;
use super::style::StyleAttributes;
use serde::Serialize;
use std::ops::Range;

/// A styled range produced by one rule, in char offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub style: StyleAttributes,
    /// Position of the producing rule in its table.
    pub rule: usize,
}

impl MatchSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// What to do with a match that runs up to the end of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Drop any match whose full extent, delimiters included, reaches the
    /// last character of the buffer.
    #[default]
    DiscardAtEnd,
    /// Keep every match.
    Inclusive,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner {
    boundary: BoundaryPolicy,
}

impl Scanner {
    pub fn new(boundary: BoundaryPolicy) -> Self {
        Self { boundary }
    }

    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// Run every rule over `text` and collect the spans, rule by rule.
    ///
    /// Rules whose pattern does not compile are skipped for this pass.
    pub fn scan(&self, text: &str, rules: &RuleTable) -> Vec<MatchSpan> {
        let mut spans = Vec::new();
        if text.is_empty() {
            return spans;
        }

        let offsets = CharOffsets::new(text);
        let text_len = offsets.char_len();

        for (index, rule) in rules.iter().enumerate() {
            let regex = match rule.regex() {
                Ok(regex) => regex,
                Err(e) => {
                    tracing::warn!(rule = rule.name(), error = %e, "skipping rule with invalid pattern");
                    continue;
                }
            };

            for caps in regex.captures_iter(text) {
                let Some(whole) = caps.get(0) else {
                    continue;
                };
                if self.boundary == BoundaryPolicy::DiscardAtEnd
                    && offsets.to_char(whole.end()) >= text_len
                {
                    continue;
                }

                let styled = (1..caps.len()).find_map(|i| caps.get(i)).unwrap_or(whole);
                if styled.is_empty() {
                    continue;
                }
                spans.push(MatchSpan {
                    start: offsets.to_char(styled.start()),
                    end: offsets.to_char(styled.end()),
                    style: rule.style().clone(),
                    rule: index,
                });
            }
        }

        spans
    }
}

/// Scan with the default boundary policy.
pub fn scan(text: &str, rules: &RuleTable) -> Vec<MatchSpan> {
    Scanner::default().scan(text, rules)
}

/// Byte-to-char offset conversion for one text.
struct CharOffsets {
    starts: Vec<usize>,
    byte_len: usize,
}

impl CharOffsets {
    fn new(text: &str) -> Self {
        Self {
            starts: text.char_indices().map(|(b, _)| b).collect(),
            byte_len: text.len(),
        }
    }

    fn char_len(&self) -> usize {
        self.starts.len()
    }

    /// `byte` must sit on a char boundary, which regex match bounds always do.
    fn to_char(&self, byte: usize) -> usize {
        if byte >= self.byte_len {
            return self.starts.len();
        }
        match self.starts.binary_search(&byte) {
            Ok(i) | Err(i) => i,
        }
    }
}
