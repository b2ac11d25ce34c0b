use std::path::Path;

use madlib_form_gui::config::load_config_from_file;
use madlib_form_gui::error::{FieldError, IdentifierError, ModalError};
use madlib_form_gui::fields::RowGroup;
use madlib_form_gui::modal::{Display, ModalState};
use madlib_form_gui::story::StoryDocument;
use madlib_form_gui::story_io::load_catalog;
use madlib_form_gui::types::story_data::{StoryRecord, WordLists};
use madlib_form_gui::{Category, FormModel, SelectorTable};

fn group_of(seed: &str) -> RowGroup {
    RowGroup::new("Fields", &[seed.to_string()], false, None).unwrap()
}

fn story(content: &str) -> StoryDocument {
    StoryDocument::from_record(&StoryRecord {
        id: 1,
        title: "Scenario".into(),
        content: content.into(),
        words: WordLists {
            adjectives: vec!["shiny".into()],
            nouns: vec!["dog".into(), "cat".into()],
            verbs: vec!["run".into()],
            miscellanies: vec!["umbrella".into()],
        },
    })
    .unwrap()
}

#[test]
fn add_increments_suffix_for_any_prefix() {
    for (seed, n) in [("field-", 0u64), ("row_", 41), ("x", 9), ("", 3)] {
        let mut g = group_of(&format!("{seed}{n}"));
        let before = g.len();
        let added = g.add_row().unwrap().clone();
        assert_eq!(added.id, format!("{seed}{}", n + 1));
        assert_eq!(added.name, added.id);
        assert_eq!(g.len(), before + 1);
    }
}

#[test]
fn two_adds_from_field_zero() {
    let mut g = group_of("field-0");
    g.add_row().unwrap();
    g.add_row().unwrap();
    let ids: Vec<(&str, &str)> = g.rows().iter().map(|r| (r.id.as_str(), r.name.as_str())).collect();
    assert_eq!(
        ids,
        [("field-0", "field-0"), ("field-1", "field-1"), ("field-2", "field-2")]
    );
}

#[test]
fn remove_drops_exactly_one_row() {
    let mut g = group_of("field-0");
    g.add_row().unwrap();
    g.add_row().unwrap();
    let removed = g.remove_row("field-1").unwrap();
    assert_eq!(removed.id, "field-1");
    assert_eq!(g.len(), 2);
    assert!(g.row("field-1").is_none());
    assert!(g.row("field-2").is_some());
}

#[test]
fn template_without_digits_is_flagged_instead_of_nan() {
    let err = RowGroup::new("Fields", &["field".to_string()], false, None).unwrap_err();
    assert_eq!(err, FieldError::Identifier(IdentifierError::NoTrailingDigits("field".into())));
}

#[test]
fn every_category_shows_only_its_pane() {
    let table = SelectorTable::standard();
    let mut form = FormModel::new(
        vec![],
        story("[adjective] [noun] [verb] [miscellany]"),
    );
    for (id, category) in [
        ("adjective-1", Category::Adjectives),
        ("noun-1", Category::Nouns),
        ("verb-1", Category::Verbs),
        ("miscellany-1", Category::Miscellanies),
    ] {
        form.click_placeholder(&table, id).unwrap();
        for pane in form.modal.panes() {
            let expected = if pane.category == category { Display::Visible } else { Display::Hidden };
            assert_eq!(pane.display, expected, "{id}: pane {}", pane.category);
        }
    }
}

#[test]
fn noun_three_scenario() {
    let table = SelectorTable::standard();
    let mut form = FormModel::new(vec![], story("My [noun-3] ate a [noun]."));

    form.click_placeholder(&table, "noun-3").unwrap();
    let nouns = form.modal.pane(Category::Nouns);
    assert_eq!(nouns.display, Display::Visible);
    assert_eq!(nouns.target.as_deref(), Some("noun-3"));
    for other in [Category::Adjectives, Category::Verbs, Category::Miscellanies] {
        assert_eq!(form.modal.pane(other).display, Display::Hidden);
    }

    assert_eq!(form.click_option(&table, Category::Nouns, "dog").unwrap(), "noun-3");
    assert_eq!(form.story.placeholder("noun-3"), Some("dog"));
    assert_eq!(form.modal.state(), &ModalState::Closed);
    assert_eq!(form.story.filled_text(), "My dog ate a (noun).");
}

#[test]
fn clicking_an_option_after_close_does_nothing() {
    let table = SelectorTable::standard();
    let mut form = FormModel::new(vec![], story("[verb]"));
    form.click_placeholder(&table, "verb-1").unwrap();
    form.modal.close();
    assert_eq!(form.click_option(&table, Category::Verbs, "run"), Err(ModalError::Closed));
    assert_eq!(form.story.placeholder("verb-1"), None);
}

#[test]
fn bundled_config_and_stories_load() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let config_path = root.join("config.toml");
    let config = load_config_from_file(config_path.to_str().unwrap()).unwrap();
    let catalog = load_catalog(&config.stories_path()).unwrap();
    let record = catalog.by_title("The Haunted Kitchen").unwrap();

    let form = FormModel::from_config(&config, record).unwrap();
    assert_eq!(form.groups.len(), 2);
    assert!(form.story.has_placeholder("noun-3"));
    assert!(form.story.has_placeholder("noun-1"));
    assert!(!form.story.has_placeholder("noun-2"));
}
