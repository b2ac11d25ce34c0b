use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ModalError;

/// Word categories a placeholder can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Adjectives,
    Nouns,
    Verbs,
    Miscellanies,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Adjectives,
        Category::Nouns,
        Category::Verbs,
        Category::Miscellanies,
    ];

    /// Singular tag used as the placeholder identifier prefix, e.g. `noun` in `noun-3`.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Adjectives => "adjective",
            Category::Nouns => "noun",
            Category::Verbs => "verb",
            Category::Miscellanies => "miscellany",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Adjectives => "adjectives",
            Category::Nouns => "nouns",
            Category::Verbs => "verbs",
            Category::Miscellanies => "miscellanies",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Category::Adjectives => 0,
            Category::Nouns => 1,
            Category::Verbs => 2,
            Category::Miscellanies => 3,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.tag() == tag)
    }

    /// Resolves the category of a placeholder identifier of the form `<tag>-<suffix>`.
    pub fn from_placeholder_id(id: &str) -> Result<Category, ModalError> {
        let (tag, suffix) = id
            .split_once('-')
            .ok_or_else(|| ModalError::UnknownCategory(id.to_string()))?;
        if suffix.is_empty() {
            return Err(ModalError::UnknownCategory(id.to_string()));
        }
        Category::from_tag(tag).ok_or_else(|| ModalError::UnknownCategory(id.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryConfig {
    pub panel_selector: &'static str,
    pub options_selector: &'static str,
}

/// Category to pane/options mapping. Built once at startup and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorTable {
    entries: [CategoryConfig; 4],
}

impl SelectorTable {
    pub fn standard() -> Self {
        Self {
            entries: [
                CategoryConfig { panel_selector: "#adjectives", options_selector: ".adjective-words" },
                CategoryConfig { panel_selector: "#nouns", options_selector: ".noun-words" },
                CategoryConfig { panel_selector: "#verbs", options_selector: ".verb-words" },
                CategoryConfig { panel_selector: "#miscellanies", options_selector: ".miscellany-words" },
            ],
        }
    }

    pub fn get(&self, category: Category) -> &CategoryConfig {
        &self.entries[category.index()]
    }
}

impl Default for SelectorTable {
    fn default() -> Self {
        Self::standard()
    }
}
