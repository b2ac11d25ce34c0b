use std::collections::HashMap;
use tracing::debug;

use crate::category::Category;
use crate::error::StoryError;
use crate::parsing::parse_story_content;
use crate::types::story_data::{Segment, StoryRecord, WordLists};

/// A parsed story: literal text interleaved with clickable placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryDocument {
    pub title: String,
    segments: Vec<Segment>,
    words: WordLists,
    values: HashMap<String, String>,
}

impl StoryDocument {
    pub fn from_record(record: &StoryRecord) -> Result<Self, StoryError> {
        let segments = parse_story_content(&record.content)?;
        debug!(title = %record.title, segments = segments.len(), "story parsed");
        Ok(Self {
            title: record.title.clone(),
            segments,
            words: record.words.clone(),
            values: HashMap::new(),
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn words(&self, category: Category) -> &[String] {
        self.words.for_category(category)
    }

    pub fn has_placeholder(&self, id: &str) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Placeholder { id: pid, .. } if pid == id))
    }

    /// Chosen word for `id`, if one has been picked.
    pub fn placeholder(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Text currently shown for a placeholder: its word, or the generic label.
    pub fn display_text(&self, id: &str, category: Category) -> String {
        match self.placeholder(id) {
            Some(word) => word.to_string(),
            None => format!("({})", category.tag()),
        }
    }

    pub fn set_placeholder(&mut self, id: &str, word: impl Into<String>) -> Result<(), StoryError> {
        if !self.has_placeholder(id) {
            return Err(StoryError::UnknownPlaceholder(id.to_string()));
        }
        self.values.insert(id.to_string(), word.into());
        Ok(())
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    pub fn unfilled(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Placeholder { id, .. } if !self.values.contains_key(id) => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn filled_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder { id, category } => out.push_str(&self.display_text(id, *category)),
            }
        }
        out
    }
}

/// Read-only set of stories the form can be opened on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    stories: Vec<StoryRecord>,
}

impl Catalog {
    pub fn new(stories: Vec<StoryRecord>) -> Self {
        Self { stories }
    }

    pub fn stories(&self) -> &[StoryRecord] {
        &self.stories
    }

    pub fn by_id(&self, id: u32) -> Result<&StoryRecord, StoryError> {
        self.stories
            .iter()
            .find(|s| s.id == id)
            .ok_or(StoryError::NotFoundById(id))
    }

    pub fn by_title(&self, title: &str) -> Result<&StoryRecord, StoryError> {
        self.stories
            .iter()
            .find(|s| s.title == title)
            .ok_or_else(|| StoryError::NotFoundByTitle(title.to_string()))
    }

    pub fn first(&self) -> Result<&StoryRecord, StoryError> {
        self.stories.first().ok_or(StoryError::EmptyCatalog)
    }
}
