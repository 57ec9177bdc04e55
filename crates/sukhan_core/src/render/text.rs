//! Plain-text presentation for terminal hosts.
//!
//! Emphasized spans are bracketed (`[term]`), the same marker style the
//! search snippets use elsewhere in terminal output.

use super::labels::{
    BACK_LABEL, POEM_OF_THE_DAY_BADGE, POET_PREFIX, READ_MORE_LABEL, THEMES_LABEL, YEAR_LABEL,
};
use super::view::{ListView, PoemCard, PoemDetailView};
use super::Presenter;
use crate::search::highlight::PoemLine;
use crate::service::theme_service::Theme;

const CARD_RULE: &str = "----------------------------------------\n";

#[derive(Debug, Clone, Copy, Default)]
pub struct TextPresenter;

impl Presenter for TextPresenter {
    fn list(&self, view: &ListView) -> String {
        match view {
            ListView::Empty { message } => format!("{message}\n"),
            ListView::Cards(cards) => cards
                .iter()
                .map(card)
                .collect::<Vec<_>>()
                .join(CARD_RULE),
        }
    }

    fn detail(&self, view: &PoemDetailView) -> String {
        let mut out = format!("{}\n{POET_PREFIX} {}\n\n", view.title, view.poet);
        for line in &view.lines {
            out.push_str(&line_text(line));
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&format!("{YEAR_LABEL} {}\n", view.year));
        out.push_str(&format!("{THEMES_LABEL} {}\n", view.themes));
        out.push_str(&format!("{BACK_LABEL} ({})\n", view.back_link));
        out
    }

    fn notice(&self, message: &str) -> String {
        format!("{message}\n")
    }

    fn page(&self, theme: Theme, content: &str) -> String {
        format!(
            "theme={} toggle={}\n\n{content}",
            theme.name(),
            theme.toggle_label()
        )
    }
}

fn card(card: &PoemCard) -> String {
    let mut out = String::new();
    if card.featured {
        out.push_str(&format!("* {POEM_OF_THE_DAY_BADGE}\n"));
    }
    out.push_str(&format!("{}\n", card.title));
    for line in card.lines.iter().filter(|line| !line.is_blank()) {
        out.push_str(&format!("  {}\n", line_text(line)));
    }
    out.push_str(&format!("{} ({})\n", card.poet, card.year));
    out.push_str(&format!("{READ_MORE_LABEL} {}\n", card.link));
    out
}

fn line_text(line: &PoemLine) -> String {
    match line {
        PoemLine::Blank => String::new(),
        PoemLine::Text(spans) => spans
            .iter()
            .map(|span| {
                if span.emphasized {
                    format!("[{}]", span.text)
                } else {
                    span.text.clone()
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::TextPresenter;
    use crate::model::poem::{PoemRecord, PoemYear};
    use crate::render::view::render_list;
    use crate::render::Presenter;
    use crate::service::theme_service::Theme;

    #[test]
    fn emphasis_is_bracketed() {
        let poem = PoemRecord {
            id: 1,
            slug: "sitaron".to_string(),
            title: "Sitaron Se Aage".to_string(),
            poet: "Iqbal".to_string(),
            year: PoemYear::Text("1935".to_string()),
            poem: "sitaron se aage jahan aur bhi hain".to_string(),
            theme: Vec::new(),
        };
        let text = TextPresenter.list(&render_list([&poem], Some("Jahan")));
        assert!(text.contains("sitaron se aage [jahan] aur bhi hain"));
        assert!(text.contains("Iqbal (1935)"));
    }

    #[test]
    fn page_header_names_theme() {
        let text = TextPresenter.page(Theme::Dark, "body\n");
        assert_eq!(text, "theme=dark toggle=☀️\n\nbody\n");
    }
}
