use serde::{Deserialize, Serialize};

use crate::category::Category;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WordLists {
    #[serde(default)]
    pub adjectives: Vec<String>,
    #[serde(default)]
    pub nouns: Vec<String>,
    #[serde(default)]
    pub verbs: Vec<String>,
    #[serde(default)]
    pub miscellanies: Vec<String>,
}

impl WordLists {
    pub fn for_category(&self, category: Category) -> &[String] {
        match category {
            Category::Adjectives => &self.adjectives,
            Category::Nouns => &self.nouns,
            Category::Verbs => &self.verbs,
            Category::Miscellanies => &self.miscellanies,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryRecord {
    pub id: u32,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub words: WordLists,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Placeholder { id: String, category: Category },
}
