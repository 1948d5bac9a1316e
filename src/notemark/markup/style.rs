use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The independent slots a style can occupy.
///
/// Two rules only override each other when they write the same key, so a
/// run can be underlined and bold at once but never bold and italic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKey {
    Font,
    Strikethrough,
    Underline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    Body,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Font(Font),
    Strikethrough,
    Underline,
}

impl Attribute {
    pub fn key(&self) -> AttributeKey {
        match self {
            Attribute::Font(_) => AttributeKey::Font,
            Attribute::Strikethrough => AttributeKey::Strikethrough,
            Attribute::Underline => AttributeKey::Underline,
        }
    }
}

/// A set of attributes, at most one per [`AttributeKey`].
///
/// An empty set is the default body style. Sets compare by equality only;
/// layering one over another with [`StyleAttributes::overlay`] replaces the
/// keys the upper set carries and leaves the rest alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleAttributes {
    attrs: BTreeMap<AttributeKey, Attribute>,
}

impl StyleAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body() -> Self {
        Self::new().with(Attribute::Font(Font::Body))
    }

    pub fn bold() -> Self {
        Self::new().with(Attribute::Font(Font::Bold))
    }

    pub fn italic() -> Self {
        Self::new().with(Attribute::Font(Font::Italic))
    }

    pub fn underline() -> Self {
        Self::new().with(Attribute::Underline)
    }

    pub fn strikethrough() -> Self {
        Self::new().with(Attribute::Strikethrough)
    }

    pub fn with(mut self, attr: Attribute) -> Self {
        self.attrs.insert(attr.key(), attr);
        self
    }

    pub fn get(&self, key: AttributeKey) -> Option<&Attribute> {
        self.attrs.get(&key)
    }

    pub fn font(&self) -> Option<Font> {
        match self.attrs.get(&AttributeKey::Font) {
            Some(Attribute::Font(font)) => Some(*font),
            _ => None,
        }
    }

    pub fn has(&self, key: AttributeKey) -> bool {
        self.attrs.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.values()
    }

    /// Write every attribute of `upper` over `self`, key by key.
    pub fn overlay(&mut self, upper: &StyleAttributes) {
        for (key, attr) in &upper.attrs {
            self.attrs.insert(*key, *attr);
        }
    }
}

/// Named styles accepted in configuration (`style = "bold"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleName {
    Body,
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

impl StyleName {
    pub fn attributes(self) -> StyleAttributes {
        match self {
            StyleName::Body => StyleAttributes::body(),
            StyleName::Bold => StyleAttributes::bold(),
            StyleName::Italic => StyleAttributes::italic(),
            StyleName::Underline => StyleAttributes::underline(),
            StyleName::Strikethrough => StyleAttributes::strikethrough(),
        }
    }
}

impl FromStr for StyleName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "body" => Ok(StyleName::Body),
            "bold" => Ok(StyleName::Bold),
            "italic" => Ok(StyleName::Italic),
            "underline" => Ok(StyleName::Underline),
            "strikethrough" | "strike" => Ok(StyleName::Strikethrough),
            other => Err(format!("Unknown style: {}", other)),
        }
    }
}

impl fmt::Display for StyleAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.attrs.is_empty() {
            return write!(f, "default");
        }
        let names: Vec<&str> = self
            .attrs
            .values()
            .map(|attr| match attr {
                Attribute::Font(Font::Body) => "body",
                Attribute::Font(Font::Bold) => "bold",
                Attribute::Font(Font::Italic) => "italic",
                Attribute::Strikethrough => "strikethrough",
                Attribute::Underline => "underline",
            })
            .collect();
        write!(f, "{}", names.join("+"))
    }
}
