//! HTML presentation of list/detail view models.
//!
//! # Invariants
//! - All record text is HTML-escaped before it reaches markup.
//! - List view drops blank lines; detail view renders them as `<br>`.

use super::labels::{
    BACK_LABEL, POEM_OF_THE_DAY_BADGE, POET_PREFIX, READ_MORE_LABEL, THEMES_LABEL, YEAR_LABEL,
};
use super::view::{ListView, PoemCard, PoemDetailView};
use super::Presenter;
use crate::search::highlight::PoemLine;
use crate::service::theme_service::Theme;
use std::fmt::Write as _;

/// Renders view models into the page's content-region markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPresenter;

impl Presenter for HtmlPresenter {
    fn list(&self, view: &ListView) -> String {
        match view {
            ListView::Empty { message } => notice(message, false),
            ListView::Cards(cards) => cards.iter().map(card).collect(),
        }
    }

    fn detail(&self, view: &PoemDetailView) -> String {
        let mut out = String::new();
        out.push_str("<div class=\"poem-full\">");
        let _ = write!(out, "<h1>{}</h1>", escape_html(&view.title));
        let _ = write!(out, "<h2>{POET_PREFIX} {}</h2>", escape_html(&view.poet));
        out.push_str("<hr><div class=\"full-poem-text\">");
        for line in &view.lines {
            match line {
                PoemLine::Blank => out.push_str("<br>"),
                PoemLine::Text(_) => push_paragraph(&mut out, line),
            }
        }
        out.push_str("</div>");
        let _ = write!(
            out,
            "<p><strong>{YEAR_LABEL}</strong> {}</p>",
            escape_html(&view.year)
        );
        let _ = write!(
            out,
            "<p><strong>{THEMES_LABEL}</strong> {}</p>",
            escape_html(&view.themes)
        );
        let _ = write!(
            out,
            "<a href=\"{}\" class=\"back-link\">{BACK_LABEL}</a>",
            escape_html(view.back_link)
        );
        out.push_str("</div>");
        out
    }

    fn notice(&self, message: &str) -> String {
        notice(message, true)
    }

    fn page(&self, theme: Theme, content: &str) -> String {
        let body = match theme.body_class() {
            Some(class) => format!("<body class=\"{class}\">"),
            None => "<body>".to_string(),
        };
        format!(
            "{body}<button id=\"darkModeToggle\">{}</button><main id=\"poemsContainer\">{content}</main></body>",
            theme.toggle_label()
        )
    }
}

fn notice(message: &str, is_error: bool) -> String {
    let class = if is_error {
        "text-center load-error"
    } else {
        "text-center"
    };
    format!("<p class=\"{class}\">{}</p>", escape_html(message))
}

fn card(card: &PoemCard) -> String {
    let mut out = String::new();
    if card.featured {
        let _ = write!(
            out,
            "<article class=\"poem-card poem-of-the-day\" data-id=\"{}\">",
            card.id
        );
        let _ = write!(out, "<div class=\"poem-badge\">{POEM_OF_THE_DAY_BADGE}</div>");
    } else {
        let _ = write!(out, "<article class=\"poem-card\" data-id=\"{}\">", card.id);
    }
    let _ = write!(out, "<h3>{}</h3>", escape_html(&card.title));
    out.push_str("<div class=\"poem-content\"><div class=\"poem-text\">");
    for line in card.lines.iter().filter(|line| !line.is_blank()) {
        push_paragraph(&mut out, line);
    }
    out.push_str("</div><div class=\"poem-meta\">");
    let _ = write!(
        out,
        "<strong>{}</strong><br><em>{}</em>",
        escape_html(&card.poet),
        escape_html(&card.year)
    );
    out.push_str("</div></div>");
    let _ = write!(
        out,
        "<a href=\"{}\" class=\"read-more-btn\">{READ_MORE_LABEL}</a>",
        escape_html(&card.link)
    );
    out.push_str("</article>");
    out
}

fn push_paragraph(out: &mut String, line: &PoemLine) {
    let PoemLine::Text(spans) = line else {
        return;
    };
    out.push_str("<p>");
    for span in spans {
        if span.emphasized {
            let _ = write!(out, "<mark>{}</mark>", escape_html(&span.text));
        } else {
            out.push_str(&escape_html(&span.text));
        }
    }
    out.push_str("</p>");
}

/// Escapes text for use in element content and quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
