use tracing::{debug, info};

use crate::category::{Category, SelectorTable};
use crate::error::ModalError;
use crate::story::StoryDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Visible,
    Hidden,
}

/// One category pane inside the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    pub category: Category,
    pub display: Display,
    /// Placeholder the next selection in this pane is written to.
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open { category: Category, target: String },
}

/// Shared word-picker overlay.
///
/// Each pane has a single selection handler that reads the pane's current
/// target at click time, so reopening never stacks handlers.
#[derive(Debug, Clone)]
pub struct ModalSelector {
    state: ModalState,
    panes: [Pane; 4],
}

impl ModalSelector {
    pub fn new() -> Self {
        Self {
            state: ModalState::Closed,
            panes: Category::ALL.map(|category| Pane { category, display: Display::Hidden, target: None }),
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    pub fn pane(&self, category: Category) -> &Pane {
        &self.panes[category.index()]
    }

    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    pub fn visible_pane(&self) -> Option<&Pane> {
        self.panes.iter().find(|p| p.display == Display::Visible)
    }

    /// Opens the overlay on the placeholder's category, recording it as that pane's target.
    /// Opening again while already open simply retargets.
    pub fn open(&mut self, table: &SelectorTable, placeholder_id: &str) -> Result<Category, ModalError> {
        let category = Category::from_placeholder_id(placeholder_id)?;
        for pane in &mut self.panes {
            if pane.category == category {
                pane.display = Display::Visible;
                pane.target = Some(placeholder_id.to_string());
            } else {
                pane.display = Display::Hidden;
            }
        }
        info!(
            panel = table.get(category).panel_selector,
            placeholder = placeholder_id,
            "word picker opened"
        );
        self.state = ModalState::Open { category, target: placeholder_id.to_string() };
        Ok(category)
    }

    /// Handles a click on a word option in `category`'s options scope.
    ///
    /// Returns the placeholder id that received the word.
    pub fn select(
        &mut self,
        table: &SelectorTable,
        category: Category,
        doc: &mut StoryDocument,
        word: &str,
    ) -> Result<String, ModalError> {
        if !self.is_open() {
            return Err(ModalError::Closed);
        }
        // Only the visible pane takes clicks, and open() always gives it a target.
        let pane = self.pane(category);
        let target = match (pane.display, &pane.target) {
            (Display::Visible, Some(target)) => target.clone(),
            _ => return Err(ModalError::PaneHidden(category)),
        };

        doc.set_placeholder(&target, word)?;
        info!(
            options = table.get(category).options_selector,
            placeholder = %target,
            word,
            "word selected"
        );
        self.close();
        Ok(target)
    }

    /// Hides the overlay and every pane. Pane targets are left in place.
    pub fn close(&mut self) {
        if self.is_open() {
            debug!("word picker closed");
        }
        for pane in &mut self.panes {
            pane.display = Display::Hidden;
        }
        self.state = ModalState::Closed;
    }
}

impl Default for ModalSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoryError;
    use crate::types::story_data::{StoryRecord, WordLists};

    fn doc() -> StoryDocument {
        StoryDocument::from_record(&StoryRecord {
            id: 1,
            title: "T".into(),
            content: "[adjective-1] [noun-3] [noun-4] [verb-1] [miscellany-1]".into(),
            words: WordLists::default(),
        })
        .unwrap()
    }

    #[test]
    fn exactly_one_pane_visible_per_category() {
        let table = SelectorTable::standard();
        let mut modal = ModalSelector::new();
        for (c, id) in [
            (Category::Adjectives, "adjective-1"),
            (Category::Nouns, "noun-3"),
            (Category::Verbs, "verb-1"),
            (Category::Miscellanies, "miscellany-1"),
        ] {
            assert_eq!(modal.open(&table, id).unwrap(), c);
            let visible: Vec<Category> = modal
                .panes()
                .iter()
                .filter(|p| p.display == Display::Visible)
                .map(|p| p.category)
                .collect();
            assert_eq!(visible, [c]);
            assert_eq!(modal.pane(c).target.as_deref(), Some(id));
        }
    }

    #[test]
    fn open_then_select_fills_target_and_closes() {
        let table = SelectorTable::standard();
        let mut modal = ModalSelector::new();
        let mut doc = doc();

        modal.open(&table, "noun-3").unwrap();
        assert_eq!(modal.state(), &ModalState::Open { category: Category::Nouns, target: "noun-3".into() });

        assert_eq!(modal.select(&table, Category::Nouns, &mut doc, "dog").unwrap(), "noun-3");
        assert_eq!(doc.placeholder("noun-3"), Some("dog"));
        assert!(!modal.is_open());
        assert!(modal.visible_pane().is_none());
    }

    #[test]
    fn reopening_same_category_retargets_without_stacking() {
        let table = SelectorTable::standard();
        let mut modal = ModalSelector::new();
        let mut doc = doc();

        modal.open(&table, "noun-3").unwrap();
        modal.open(&table, "noun-4").unwrap();
        modal.select(&table, Category::Nouns, &mut doc, "cat").unwrap();

        assert_eq!(doc.placeholder("noun-4"), Some("cat"));
        assert_eq!(doc.placeholder("noun-3"), None);
    }

    #[test]
    fn selection_requires_open_visible_pane() {
        let table = SelectorTable::standard();
        let mut modal = ModalSelector::new();
        let mut doc = doc();

        assert_eq!(modal.select(&table, Category::Verbs, &mut doc, "run"), Err(ModalError::Closed));
        modal.open(&table, "noun-3").unwrap();
        assert_eq!(
            modal.select(&table, Category::Verbs, &mut doc, "run"),
            Err(ModalError::PaneHidden(Category::Verbs))
        );
        assert!(modal.is_open());
    }

    #[test]
    fn missing_target_placeholder_keeps_modal_open() {
        let table = SelectorTable::standard();
        let mut modal = ModalSelector::new();
        let mut doc = doc();

        modal.open(&table, "noun-99").unwrap();
        assert_eq!(
            modal.select(&table, Category::Nouns, &mut doc, "dog"),
            Err(ModalError::Story(StoryError::UnknownPlaceholder("noun-99".into())))
        );
        assert!(modal.is_open());
    }

    #[test]
    fn non_placeholder_ids_do_not_open() {
        let table = SelectorTable::standard();
        let mut modal = ModalSelector::new();
        assert!(matches!(modal.open(&table, "title"), Err(ModalError::UnknownCategory(_))));
        assert!(!modal.is_open());
    }

    #[test]
    fn close_hides_everything() {
        let table = SelectorTable::standard();
        let mut modal = ModalSelector::new();
        modal.open(&table, "verb-1").unwrap();
        modal.close();
        assert_eq!(modal.state(), &ModalState::Closed);
        assert!(modal.panes().iter().all(|p| p.display == Display::Hidden));
        assert_eq!(modal.pane(Category::Verbs).target.as_deref(), Some("verb-1"));
    }
}
