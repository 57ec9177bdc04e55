use sukhan_core::render::labels::{LOAD_FAILED_MESSAGE, NO_RESULTS_MESSAGE};
use sukhan_core::{
    FixedCalendar, HtmlPresenter, ListView, LoadError, PageContent, PageController, PageEvent,
    PoemSource, StaticPoemSource,
};

const DATASET: &str = r#"[
    {"id": 10, "slug": "a", "title": "Spring", "poet": "Mir", "year": 1790,
     "poem": "the garden wakes\n\nthe rose remembers", "theme": ["season"]},
    {"id": 11, "slug": "b", "title": "Night", "poet": "Ghalib", "year": 1850,
     "poem": "cold stars", "theme": ["loss", "sky"]},
    {"id": 12, "slug": "c", "title": "Lamp", "poet": "Iqbal", "year": "1924",
     "poem": "a flame in the garden", "theme": []}
]"#;

struct FailingSource;

impl PoemSource for FailingSource {
    fn describe(&self) -> String {
        "offline".to_string()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        Err(LoadError::Unreachable {
            source_name: self.describe(),
            message: "network is unreachable".to_string(),
        })
    }
}

fn controller(day: u32) -> PageController<StaticPoemSource, FixedCalendar> {
    PageController::with_calendar(StaticPoemSource::new("inline", DATASET), FixedCalendar(day))
}

fn list(content: &PageContent) -> &ListView {
    match content {
        PageContent::List(view) => view,
        other => panic!("expected list content, got {other:?}"),
    }
}

#[test]
fn nothing_is_rendered_before_activation() {
    let page = controller(1);
    assert_eq!(page.content(), &PageContent::Blank);
}

#[test]
fn activation_renders_all_cards_and_marks_poem_of_the_day() {
    let mut page = controller(16);
    let view = list(page.activate()).clone();

    assert_eq!(view.cards().len(), 3);
    // 16 % 3 == 1
    assert_eq!(view.featured_index(), Some(1));
    assert_eq!(page.poem_of_the_day().unwrap().slug, "b");
    assert_eq!(view.cards().iter().filter(|card| card.featured).count(), 1);
}

#[test]
fn search_filters_and_clearing_restores_full_list() {
    let mut page = controller(3);
    page.handle(PageEvent::Ready);

    let filtered = list(page.handle(PageEvent::QueryChanged("  GARDEN ".to_string()))).clone();
    let slugs: Vec<_> = filtered.cards().iter().map(|card| card.slug.clone()).collect();
    assert_eq!(slugs, vec!["a", "c"]);
    assert_eq!(page.query(), "GARDEN");
    assert_eq!(filtered.featured_index(), None);

    let restored = list(page.handle(PageEvent::QueryChanged(String::new()))).clone();
    assert_eq!(restored.cards().len(), 3);
    assert_eq!(restored.featured_index(), Some(0));
    assert_eq!(page.records().len(), 3);
}

#[test]
fn search_without_hits_shows_placeholder() {
    let mut page = controller(1);
    page.activate();

    let view = list(page.search("winter")).clone();
    assert_eq!(
        view,
        ListView::Empty {
            message: NO_RESULTS_MESSAGE
        }
    );
}

#[test]
fn navigation_to_known_slug_shows_single_view() {
    let mut page = controller(1);
    page.activate();

    match page.handle(PageEvent::HashChanged("#poem/b".to_string())) {
        PageContent::Single(detail) => {
            assert_eq!(detail.title, "Night");
            assert_eq!(detail.themes, "loss • sky");
        }
        other => panic!("expected single view, got {other:?}"),
    }
}

#[test]
fn navigation_to_unknown_slug_keeps_current_view() {
    let mut page = controller(1);
    page.activate();
    page.search("rose");
    let before = page.content().clone();

    page.navigate("#poem/zzz");
    assert_eq!(page.content(), &before);

    page.navigate("#about");
    assert_eq!(page.content(), &before);
}

#[test]
fn empty_fragment_returns_to_list_for_current_query() {
    let mut page = controller(1);
    page.activate();
    page.search("stars");
    page.navigate("poem/b");

    let view = list(page.navigate("#")).clone();
    let slugs: Vec<_> = view.cards().iter().map(|card| card.slug.as_str()).collect();
    assert_eq!(slugs, vec!["b"]);
}

#[test]
fn failed_load_shows_exactly_the_error_message() {
    let mut page = PageController::with_calendar(FailingSource, FixedCalendar(5));
    let content = page.handle(PageEvent::Ready).clone();

    assert_eq!(
        content,
        PageContent::LoadFailed {
            message: LOAD_FAILED_MESSAGE
        }
    );
    assert!(page.records().is_empty());
    assert!(page.poem_of_the_day().is_none());
    assert!(matches!(
        page.load_error(),
        Some(LoadError::Unreachable { .. })
    ));

    let html = content.present(&HtmlPresenter);
    assert!(html.contains(LOAD_FAILED_MESSAGE));
    assert!(!html.contains("poem-card"));
}

#[test]
fn clearing_query_after_failed_load_keeps_error() {
    let mut page = PageController::with_calendar(FailingSource, FixedCalendar(5));
    page.activate();

    assert!(matches!(page.search("x"), PageContent::List(ListView::Empty { .. })));
    assert!(matches!(page.search(""), PageContent::LoadFailed { .. }));
}

#[test]
fn empty_dataset_renders_placeholder_without_poem_of_the_day() {
    let mut page =
        PageController::with_calendar(StaticPoemSource::new("inline", "[]"), FixedCalendar(9));
    let view = list(page.activate()).clone();
    assert!(view.is_empty());
    assert!(page.poem_of_the_day_index().is_none());
}

#[test]
fn presenter_output_reflects_highlighting() {
    let mut page = controller(1);
    page.activate();
    let html = page.search("rose").present(&HtmlPresenter);
    assert!(html.contains("<mark>rose</mark>"));
    assert!(html.contains("href=\"#poem/a\""));
}
