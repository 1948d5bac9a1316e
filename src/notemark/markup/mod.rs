//! # Markup Annotation Engine
//!
//! Turns inline markers in a plain-text note (`#bbold#b`, `#iitalic#i`,
//! `#uunderline#u`, `#sstrike#s`) into style assignments over char ranges.
//!
//! ```text
//! RuleTable ──► Scanner::scan ──► Vec<MatchSpan> ──► AnnotationStore ──► RenderSink
//! ```
//!
//! - [`rules`]: ordered `(pattern, style)` pairs; position is priority.
//! - [`scanner`]: runs each rule over the text and yields [`MatchSpan`]s.
//! - [`annotations`]: layers spans into coalesced [`StyledRun`]s.
//! - [`sink`]: the interface a renderer implements to receive the runs.
//!
//! Everything here is synchronous and owned by one editing session; there is
//! no shared state between buffers.

pub mod annotations;
pub mod rules;
pub mod scanner;
pub mod sink;
pub mod style;

pub use annotations::{AnnotationStore, StyledRun};
pub use rules::{Rule, RuleTable};
pub use scanner::{scan, BoundaryPolicy, MatchSpan, Scanner};
pub use sink::{RecordingSink, RenderSink};
pub use style::{Attribute, AttributeKey, Font, StyleAttributes, StyleName};
