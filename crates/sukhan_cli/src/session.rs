//! Interactive page session fed from a line-oriented event stream.
//!
//! # Invariants
//! - The display preference is read once before the first render.
//! - Each input line is one event, handled to completion before the next.
//! - Every handled event prints the full page again in the current theme.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use sukhan_core::{
    Calendar, PageController, PageEvent, PoemSource, PreferenceRepository, Presenter, Theme,
    ThemeService,
};

const THEME_COMMAND: &str = ":theme";
const QUIT_COMMAND: &str = ":quit";

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    Page(PageEvent),
    ToggleTheme,
    Quit,
}

/// Maps a raw input line onto a session input.
pub fn parse_line(line: &str) -> SessionInput {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.trim() {
        QUIT_COMMAND => SessionInput::Quit,
        THEME_COMMAND => SessionInput::ToggleTheme,
        trimmed if trimmed.starts_with('#') => {
            SessionInput::Page(PageEvent::HashChanged(trimmed.to_string()))
        }
        _ => SessionInput::Page(PageEvent::QueryChanged(line.to_string())),
    }
}

/// Runs the event loop until `:quit` or end of input.
pub fn run<S, C, R, In, Out>(
    page: &mut PageController<S, C>,
    presenter: &dyn Presenter,
    prefs: &ThemeService<R>,
    input: In,
    mut output: Out,
) -> Result<()>
where
    S: PoemSource,
    C: Calendar,
    R: PreferenceRepository,
    In: BufRead,
    Out: Write,
{
    let mut theme = prefs
        .load_theme()
        .context("failed to read theme preference")?;
    page.handle(PageEvent::Ready);
    print_page(&mut output, page, presenter, theme)?;

    for line in input.lines() {
        let line = line.context("failed to read session input")?;
        match parse_line(&line) {
            SessionInput::Quit => break,
            SessionInput::ToggleTheme => {
                theme = prefs
                    .toggle()
                    .context("failed to update theme preference")?;
            }
            SessionInput::Page(event) => {
                page.handle(event);
            }
        }
        print_page(&mut output, page, presenter, theme)?;
    }
    Ok(())
}

fn print_page<S, C, Out>(
    output: &mut Out,
    page: &PageController<S, C>,
    presenter: &dyn Presenter,
    theme: Theme,
) -> Result<()>
where
    S: PoemSource,
    C: Calendar,
    Out: Write,
{
    let content = page.content().present(presenter);
    writeln!(output, "{}", presenter.page(theme, &content))?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_line, run, SessionInput};
    use sukhan_core::db::open_db_in_memory;
    use sukhan_core::{
        FixedCalendar, HtmlPresenter, PageController, PageEvent, PreferenceRepository,
        SqlitePreferenceRepository, StaticPoemSource, TextPresenter, ThemeService,
        DARK_MODE_KEY,
    };

    const DATASET: &str = r#"[
        {"id": 1, "slug": "a", "title": "Spring", "poet": "Mir", "year": 1790,
         "poem": "the rose remembers", "theme": []},
        {"id": 2, "slug": "b", "title": "Night", "poet": "Ghalib", "year": 1850,
         "poem": "cold stars", "theme": []}
    ]"#;

    fn page() -> PageController<StaticPoemSource, FixedCalendar> {
        PageController::with_calendar(StaticPoemSource::new("inline", DATASET), FixedCalendar(2))
    }

    #[test]
    fn lines_map_to_page_events() {
        assert_eq!(parse_line(":quit"), SessionInput::Quit);
        assert_eq!(parse_line(" :theme "), SessionInput::ToggleTheme);
        assert_eq!(
            parse_line("#poem/a\r\n"),
            SessionInput::Page(PageEvent::HashChanged("#poem/a".to_string()))
        );
        assert_eq!(
            parse_line(" rose "),
            SessionInput::Page(PageEvent::QueryChanged(" rose ".to_string()))
        );
    }

    #[test]
    fn session_renders_each_event() {
        let conn = open_db_in_memory().unwrap();
        let prefs = ThemeService::new(SqlitePreferenceRepository::try_new(&conn).unwrap());
        let mut page = page();
        let mut output = Vec::new();
        let input = "rose\n#poem/b\n:theme\n:quit\nignored\n".as_bytes();

        run(&mut page, &TextPresenter, &prefs, input, &mut output).unwrap();

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.starts_with("theme=light toggle=🌙"));
        assert!(printed.contains("the [rose] remembers"));
        assert!(printed.contains("cold stars"));
        assert!(printed.contains("theme=dark toggle=☀️"));
        assert_eq!(printed.matches("theme=").count(), 4);
        assert_eq!(
            SqlitePreferenceRepository::try_new(&conn)
                .unwrap()
                .get(DARK_MODE_KEY)
                .unwrap()
                .as_deref(),
            Some("true")
        );
    }

    #[test]
    fn stored_dark_preference_applies_to_first_render() {
        let conn = open_db_in_memory().unwrap();
        let repo = SqlitePreferenceRepository::try_new(&conn).unwrap();
        repo.set(DARK_MODE_KEY, "true").unwrap();
        let prefs = ThemeService::new(repo);
        let mut page = page();
        let mut output = Vec::new();

        run(&mut page, &HtmlPresenter, &prefs, "".as_bytes(), &mut output).unwrap();

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.starts_with("<body class=\"dark-mode\">"));
        assert!(printed.contains("☀️"));
        assert!(printed.contains("poem-card"));
    }
}
