use sukhan_core::{
    filter_poems, highlight, parse_poems, render_list, ListView, PoemLine, PoemRecord,
};

fn dataset() -> Vec<PoemRecord> {
    parse_poems(
        "inline",
        r#"[
        {"id": 1, "slug": "spring", "title": "Spring Song", "poet": "Mir",
         "year": 1790, "poem": "love in the garden\n\nthe rose remembers", "theme": ["Nature"]},
        {"id": 2, "slug": "winter", "title": "Winter Night", "poet": "Ghalib",
         "year": 1850, "poem": "cold stars\nno fire", "theme": ["Loss", "Longing"]},
        {"id": 3, "slug": "lamp", "title": "The Lamp", "poet": "Iqbal",
         "year": "1924", "poem": "a LOVE that burns (quietly)", "theme": []}
    ]"#,
    )
    .unwrap()
}

fn ids(records: &[&PoemRecord]) -> Vec<i64> {
    records.iter().map(|record| record.id).collect()
}

#[test]
fn empty_query_returns_everything() {
    let records = dataset();
    assert_eq!(ids(&filter_poems(&records, "")), vec![1, 2, 3]);
}

#[test]
fn result_is_ordered_subsequence_of_input() {
    let records = dataset();
    for query in ["o", "love", "Ghalib", "zzz", "(", "e"] {
        let hits = filter_poems(&records, query);
        let positions: Vec<usize> = hits
            .iter()
            .map(|hit| {
                records
                    .iter()
                    .position(|record| std::ptr::eq(record, *hit))
                    .expect("hit must come from the input")
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{query}");
    }
}

#[test]
fn text_fields_ignore_case() {
    let records = dataset();
    let lower = ids(&filter_poems(&records, "love"));
    let upper = ids(&filter_poems(&records, "LOVE"));
    assert_eq!(lower, upper);
    assert_eq!(lower, vec![1, 3]);
}

#[test]
fn theme_entries_match_case_sensitively() {
    let records = dataset();
    assert_eq!(ids(&filter_poems(&records, "Nature")), vec![1]);
    assert!(filter_poems(&records, "nature").is_empty());
    assert_eq!(ids(&filter_poems(&records, "Loss")), vec![2]);
}

#[test]
fn pattern_characters_are_literal() {
    let records = dataset();
    assert_eq!(ids(&filter_poems(&records, "(quietly)")), vec![3]);
    assert!(filter_poems(&records, "l.ve").is_empty());

    let lines = highlight("a LOVE that burns (quietly)", "(QUIETLY)");
    assert!(lines[0].has_emphasis());
}

#[test]
fn single_record_scenario() {
    let records = parse_poems(
        "inline",
        r#"[{"id": 1, "slug": "a", "title": "Spring", "poet": "p", "year": 1, "poem": "x"}]"#,
    )
    .unwrap();

    assert_eq!(ids(&filter_poems(&records, "spring")), vec![1]);

    let misses = filter_poems(&records, "winter");
    assert!(misses.is_empty());
    assert!(matches!(
        render_list(misses, Some("winter")),
        ListView::Empty { .. }
    ));
}

#[test]
fn empty_query_highlight_keeps_line_count_without_marks() {
    let text = "first\n\n  \nlast line\n";
    let lines = highlight(text, "");
    assert_eq!(lines.len(), text.split('\n').count());
    assert!(lines.iter().all(|line| !line.has_emphasis()));
    assert_eq!(lines[1], PoemLine::Blank);
}

#[test]
fn filtered_cards_highlight_query() {
    let records = dataset();
    let hits = filter_poems(&records, "rose");
    let view = render_list(hits, Some("rose"));
    let card = &view.cards()[0];
    assert_eq!(card.slug, "spring");
    assert_eq!(card.link, "#poem/spring");
    assert!(card.lines.iter().any(PoemLine::has_emphasis));
    assert!(!card.featured);
}
