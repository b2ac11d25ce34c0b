use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

use crate::category::{Category, SelectorTable};
use crate::config::Config;
use crate::error::{FieldError, FormError, ModalError};
use crate::fields::{FieldRow, RowGroup};
use crate::modal::ModalSelector;
use crate::story::StoryDocument;
use crate::types::story_data::StoryRecord;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GroupSubmission {
    pub label: String,
    pub fields: BTreeMap<String, String>,
}

/// Snapshot of everything the user entered, shown as JSON on submit.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub groups: Vec<GroupSubmission>,
    pub story_title: String,
    pub story: String,
    pub words: BTreeMap<String, String>,
    pub missing: Vec<String>,
}

/// In-memory state of the whole page. The GUI only renders this.
#[derive(Debug, Clone)]
pub struct FormModel {
    pub groups: Vec<RowGroup>,
    pub story: StoryDocument,
    pub modal: ModalSelector,
}

impl FormModel {
    pub fn new(groups: Vec<RowGroup>, story: StoryDocument) -> Self {
        Self { groups, story, modal: ModalSelector::new() }
    }

    pub fn from_config(config: &Config, record: &StoryRecord) -> Result<Self, FormError> {
        let groups = config
            .groups
            .iter()
            .map(|g| RowGroup::new(g.label.clone(), &g.seeds, g.removable_seeds, config.max_rows))
            .collect::<Result<Vec<_>, FieldError>>()?;
        let story = StoryDocument::from_record(record)?;
        Ok(Self::new(groups, story))
    }

    fn group_mut(&mut self, group: usize) -> Result<&mut RowGroup, FieldError> {
        self.groups
            .get_mut(group)
            .ok_or(FieldError::UnknownGroup(group))
    }

    pub fn add_row(&mut self, group: usize) -> Result<FieldRow, FieldError> {
        self.group_mut(group)?.add_row().cloned()
    }

    pub fn remove_row(&mut self, group: usize, id: &str) -> Result<FieldRow, FieldError> {
        self.group_mut(group)?.remove_row(id)
    }

    pub fn set_value(&mut self, group: usize, id: &str, value: impl Into<String>) -> Result<(), FieldError> {
        self.group_mut(group)?.set_value(id, value)
    }

    pub fn click_placeholder(&mut self, table: &SelectorTable, id: &str) -> Result<Category, ModalError> {
        self.modal.open(table, id)
    }

    pub fn click_option(
        &mut self,
        table: &SelectorTable,
        category: Category,
        word: &str,
    ) -> Result<String, ModalError> {
        self.modal.select(table, category, &mut self.story, word)
    }

    pub fn missing_required(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|g| g.missing_required())
            .map(str::to_string)
            .collect()
    }

    pub fn submission(&self) -> FormSubmission {
        let missing = self.missing_required();
        if !missing.is_empty() {
            warn!(count = missing.len(), "submitting with blank required fields");
        }
        FormSubmission {
            groups: self
                .groups
                .iter()
                .map(|g| GroupSubmission {
                    label: g.label.clone(),
                    fields: g.rows().iter().map(|r| (r.name.clone(), r.value.clone())).collect(),
                })
                .collect(),
            story_title: self.story.title.clone(),
            story: self.story.filled_text(),
            words: self.story.values().iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            missing,
        }
    }

    pub fn submission_json(&self) -> Result<String, FormError> {
        Ok(serde_json::to_string_pretty(&self.submission())?)
    }
}
