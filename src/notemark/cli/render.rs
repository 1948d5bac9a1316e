//! # Rendering Module
//!
//! Terminal output for the CLI. [`AnsiSink`] is the terminal's
//! [`RenderSink`]: it receives styled runs from an annotation store and turns
//! them into ANSI escapes via `console`. The rest of the module formats note
//! lists and command messages.
//!
//! Layout calculations (width, truncation, padding) use `unicode-width` so
//! titles with wide characters still line up.

use super::styles;
use chrono::{DateTime, Utc};
use console::Style;
use notemark::api::{CmdMessage, ListedNote, MessageLevel, Section};
use notemark::commands::helpers::short_id;
use notemark::markup::{Attribute, Font, RenderSink, StyleAttributes};
use notemark::model::NoteRecord;
use std::ops::Range;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
const ID_WIDTH: usize = 10;
const PREVIEW_CHARS: usize = 50;

/// Collects styled runs for one text and prints it with ANSI attributes.
///
/// Markers stay in the output; only the ranges the annotations cover are
/// styled.
pub struct AnsiSink {
    chars: Vec<char>,
    runs: Vec<(Range<usize>, StyleAttributes)>,
    color: bool,
}

impl AnsiSink {
    pub fn new(text: &str, color: bool) -> Self {
        Self {
            chars: text.chars().collect(),
            runs: Vec::new(),
            color,
        }
    }

    pub fn finish(&self) -> String {
        let len = self.chars.len();
        let mut out = String::new();
        let mut cursor = 0;

        for (range, style) in &self.runs {
            let start = range.start.min(len);
            let end = range.end.min(len);
            if start < cursor || start >= end {
                continue;
            }
            out.extend(&self.chars[cursor..start]);
            let segment: String = self.chars[start..end].iter().collect();
            let styled = terminal_style(style)
                .force_styling(self.color)
                .apply_to(segment);
            out.push_str(&styled.to_string());
            cursor = end;
        }
        out.extend(&self.chars[cursor..]);
        out
    }
}

impl RenderSink for AnsiSink {
    fn reset(&mut self, _len: usize) {
        self.runs.clear();
    }

    fn apply(&mut self, range: Range<usize>, style: &StyleAttributes) {
        self.runs.push((range, style.clone()));
    }
}

fn terminal_style(style: &StyleAttributes) -> Style {
    style.iter().fold(Style::new(), |s, attr| match attr {
        Attribute::Font(Font::Body) => s,
        Attribute::Font(Font::Bold) => s.bold(),
        Attribute::Font(Font::Italic) => s.italic(),
        Attribute::Strikethrough => s.strikethrough(),
        Attribute::Underline => s.underlined(),
    })
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", styles::INFO.apply_to(&message.content)),
            MessageLevel::Success => println!("{}", styles::SUCCESS.apply_to(&message.content)),
            MessageLevel::Warning => println!("{}", styles::WARNING.apply_to(&message.content)),
            MessageLevel::Error => eprintln!("{}", styles::ERROR.apply_to(&message.content)),
        }
    }
}

/// The notes list: pinned notes under a "Pinned" header, then the rest.
pub fn render_note_list(notes: &[ListedNote]) -> String {
    if notes.is_empty() {
        return "No notes found.\n".to_string();
    }

    let has_pinned = notes.iter().any(|n| n.section == Section::Pinned);
    let mut out = String::new();
    let mut current = None;

    for listed in notes {
        if has_pinned && current != Some(listed.section) {
            if current.is_some() {
                out.push('\n');
            }
            let header = match listed.section {
                Section::Pinned => "Pinned",
                Section::Notes => "Notes",
            };
            out.push_str(&format!("{}\n", styles::SECTION_HEADER.apply_to(header)));
            current = Some(listed.section);
        }
        out.push_str(&render_note_line(&listed.note));
        out.push('\n');
    }
    out
}

fn render_note_line(note: &NoteRecord) -> String {
    let id = format!("{:<width$}", short_id(&note.id), width = ID_WIDTH);

    let preview: String = note
        .text
        .chars()
        .take(PREVIEW_CHARS)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    let title_content = if preview.is_empty() {
        note.title.clone()
    } else {
        format!("{} {}", note.title, preview)
    };

    let available = LINE_WIDTH.saturating_sub(2 + ID_WIDTH + TIME_WIDTH);
    let title_display = truncate_to_width(&title_content, available);
    let padding = available.saturating_sub(title_display.width());

    format!(
        "  {}{}{}{}",
        styles::SHORT_ID.apply_to(id),
        title_display,
        " ".repeat(padding),
        styles::TIME.apply_to(format_time_ago(note.edited_at))
    )
}

/// A single note: bold title, separator, then the already-rendered body.
pub fn render_full_note(note: &NoteRecord, body: &str) -> String {
    format!(
        "{} {}\n--------------------------------\n{}\n",
        styles::SHORT_ID.apply_to(short_id(&note.id)),
        styles::TITLE.apply_to(&note.title),
        body
    )
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
