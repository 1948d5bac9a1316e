use super::style::StyleAttributes;
use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;
use std::fmt;

/// Words separated by single whitespace characters.
const WORD_RUN: &str = r"\w+(?:\s\w+)*";

/// One markup convention: a pattern and the style its matches receive.
///
/// When the pattern has capture groups, the first group that took part in the
/// match is the styled range and the rest of the match stays unstyled.
pub struct Rule {
    name: String,
    pattern: String,
    style: StyleAttributes,
    compiled: OnceCell<Result<Regex, regex::Error>>,
}

impl Rule {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>, style: StyleAttributes) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            style,
            compiled: OnceCell::new(),
        }
    }

    /// A run of words wrapped in a pair of identical markers, e.g. `#bword#b`.
    pub fn delimited(name: impl Into<String>, marker: &str, style: StyleAttributes) -> Self {
        let marker = regex::escape(marker);
        Self::new(name, format!("{marker}({WORD_RUN}){marker}"), style)
    }

    /// Plain words. A `#` only blocks a word when it opens a marker, so
    /// `#bword` stays unstyled while `#42` is body text.
    pub fn body() -> Self {
        Self::new(
            "body",
            format!(r"(?:^|[^#\w])({WORD_RUN})|#([^\Wsubi]\w*(?:\s\w+)*)"),
            StyleAttributes::body(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn style(&self) -> &StyleAttributes {
        &self.style
    }

    /// The compiled pattern. Compilation runs once; a failure is kept and
    /// handed back on every call.
    pub fn regex(&self) -> Result<&Regex, &regex::Error> {
        self.compiled
            .get_or_init(|| Regex::new(&self.pattern))
            .as_ref()
    }
}

impl Clone for Rule {
    fn clone(&self) -> Self {
        Self::new(self.name.clone(), self.pattern.clone(), self.style.clone())
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .field("style", &self.style)
            .finish()
    }
}

/// Ordered rules. A rule's position is its priority: later rules are applied
/// after earlier ones and win on the attribute keys they share.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

static STANDARD: Lazy<RuleTable> = Lazy::new(|| {
    RuleTable::new(vec![
        Rule::body(),
        Rule::delimited("strike", "#s", StyleAttributes::strikethrough()),
        Rule::delimited("underline", "#u", StyleAttributes::underline()),
        Rule::delimited("bold", "#b", StyleAttributes::bold()),
        Rule::delimited("italic", "#i", StyleAttributes::italic()),
    ])
});

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// body, strike, underline, bold, italic.
    pub fn standard() -> &'static RuleTable {
        &STANDARD
    }

    /// A copy of this table with `extra` appended, so the extra rules win.
    pub fn extended(&self, extra: impl IntoIterator<Item = Rule>) -> RuleTable {
        let mut rules = self.rules.clone();
        rules.extend(extra);
        RuleTable { rules }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_order() {
        let names: Vec<_> = RuleTable::standard().iter().map(|r| r.name()).collect();
        assert_eq!(names, ["body", "strike", "underline", "bold", "italic"]);
    }

    #[test]
    fn delimited_pattern_captures_inner_run() {
        let rule = Rule::delimited("bold", "#b", StyleAttributes::bold());
        let re = rule.regex().unwrap();
        let caps = re.captures("x #bsome words#b y").unwrap();
        assert_eq!(&caps[1], "some words");
        assert_eq!(&caps[0], "#bsome words#b");
    }

    #[test]
    fn markers_are_escaped() {
        let rule = Rule::delimited("stars", "**", StyleAttributes::bold());
        let re = rule.regex().unwrap();
        assert_eq!(&re.captures("a **b** c").unwrap()[1], "b");
    }

    #[test]
    fn compile_failure_is_cached() {
        let rule = Rule::new("broken", "(unclosed", StyleAttributes::bold());
        assert!(rule.regex().is_err());
        assert!(rule.regex().is_err());
    }

    #[test]
    fn extended_appends_after_standard_rules() {
        let table = RuleTable::standard().extended([Rule::delimited(
            "under2",
            "__",
            StyleAttributes::underline(),
        )]);
        assert_eq!(table.len(), 6);
        assert_eq!(table.get(5).unwrap().name(), "under2");
    }
}
