//! Query term highlighting for poem text.
//!
//! # Responsibility
//! - Split poem text into lines and mark query occurrences as spans.
//!
//! # Invariants
//! - Output has exactly one [`PoemLine`] per `\n`-separated input line.
//! - The query is escaped before the pattern is built; it always matches
//!   literally and never fails on pattern metacharacters.
//! - Concatenating the spans of a text line yields the original line.

use log::warn;
use regex::{Regex, RegexBuilder};

/// Run of text inside one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub emphasized: bool,
}

impl TextSpan {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: false,
        }
    }

    fn emphasized(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: true,
        }
    }
}

/// One line of poem text prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoemLine {
    /// Whitespace-only source line. Rendered as spacing, never as text.
    Blank,
    Text(Vec<TextSpan>),
}

impl PoemLine {
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Returns the line text with emphasis dropped.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Blank => String::new(),
            Self::Text(spans) => spans.iter().map(|span| span.text.as_str()).collect(),
        }
    }

    pub fn has_emphasis(&self) -> bool {
        match self {
            Self::Blank => false,
            Self::Text(spans) => spans.iter().any(|span| span.emphasized),
        }
    }
}

/// Case-insensitive literal matcher for one query.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Builds a matcher; an empty query produces a pass-through highlighter.
    pub fn new(query: &str) -> Self {
        if query.is_empty() {
            return Self { pattern: None };
        }

        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build();
        match pattern {
            Ok(pattern) => Self {
                pattern: Some(pattern),
            },
            Err(err) => {
                // Only reachable through regex size limits on huge input.
                warn!(
                    "event=highlight_build module=search status=error query_len={} error={}",
                    query.chars().count(),
                    err
                );
                Self { pattern: None }
            }
        }
    }

    /// Splits `text` into display lines with query occurrences emphasized.
    pub fn highlight(&self, text: &str) -> Vec<PoemLine> {
        text.split('\n').map(|line| self.highlight_line(line)).collect()
    }

    fn highlight_line(&self, line: &str) -> PoemLine {
        if line.trim().is_empty() {
            return PoemLine::Blank;
        }

        let Some(pattern) = &self.pattern else {
            return PoemLine::Text(vec![TextSpan::plain(line)]);
        };

        let mut spans = Vec::new();
        let mut cursor = 0;
        for found in pattern.find_iter(line) {
            if found.start() > cursor {
                spans.push(TextSpan::plain(&line[cursor..found.start()]));
            }
            spans.push(TextSpan::emphasized(found.as_str()));
            cursor = found.end();
        }
        if cursor < line.len() {
            spans.push(TextSpan::plain(&line[cursor..]));
        }
        PoemLine::Text(spans)
    }
}

/// Convenience wrapper around [`Highlighter::highlight`] for one-off calls.
pub fn highlight(text: &str, query: &str) -> Vec<PoemLine> {
    Highlighter::new(query).highlight(text)
}
