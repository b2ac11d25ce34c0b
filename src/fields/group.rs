use serde::Serialize;
use tracing::{debug, info};

use super::identifier::FieldIdentifier;
use crate::error::FieldError;

/// One input row: separator, text input and (optionally) its remove control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRow {
    pub id: String,
    pub name: String,
    pub value: String,
    pub required: bool,
    /// Whether the row carries a remove control.
    pub removable: bool,
}

impl FieldRow {
    fn new(id: String, removable: bool) -> Self {
        Self { name: id.clone(), id, value: String::new(), required: true, removable }
    }

    pub fn is_missing(&self) -> bool {
        self.required && self.value.trim().is_empty()
    }
}

/// An ordered group of rows sharing an identifier prefix.
///
/// Rows are only ever appended or removed, never reordered, so the last row
/// always serves as the template for the next identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowGroup {
    pub label: String,
    rows: Vec<FieldRow>,
    max_rows: Option<usize>,
}

impl RowGroup {
    /// Builds a group from seed identifiers. Seeds must parse as field identifiers.
    pub fn new(
        label: impl Into<String>,
        seeds: &[String],
        removable_seeds: bool,
        max_rows: Option<usize>,
    ) -> Result<Self, FieldError> {
        let label = label.into();
        let mut rows: Vec<FieldRow> = Vec::with_capacity(seeds.len());
        for seed in seeds {
            FieldIdentifier::parse(seed)?;
            if rows.iter().any(|r| &r.id == seed) {
                return Err(FieldError::DuplicateIdentifier(seed.clone()));
            }
            rows.push(FieldRow::new(seed.clone(), removable_seeds));
        }
        if rows.is_empty() {
            return Err(FieldError::EmptyGroup(label));
        }
        Ok(Self { label, rows, max_rows })
    }

    pub fn rows(&self) -> &[FieldRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, id: &str) -> Option<&FieldRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn max_rows(&self) -> Option<usize> {
        self.max_rows
    }

    pub fn is_full(&self) -> bool {
        self.max_rows.is_some_and(|max| self.rows.len() >= max)
    }

    /// Appends a row whose identifier is the last row's identifier plus one.
    pub fn add_row(&mut self) -> Result<&FieldRow, FieldError> {
        let last = self
            .rows
            .last()
            .ok_or_else(|| FieldError::EmptyGroup(self.label.clone()))?;
        if let Some(max) = self.max_rows {
            if self.rows.len() >= max {
                return Err(FieldError::GroupFull { label: self.label.clone(), max });
            }
        }

        let next_id = FieldIdentifier::parse(&last.id)?.next()?.to_string();
        if self.row(&next_id).is_some() {
            return Err(FieldError::DuplicateIdentifier(next_id));
        }

        debug!(group = %self.label, template = %last.id, "minting row identifier");
        info!(group = %self.label, id = %next_id, "row added");
        self.rows.push(FieldRow::new(next_id, true));
        Ok(&self.rows[self.rows.len() - 1])
    }

    /// Removes exactly the row `id`; other rows keep their identifiers.
    pub fn remove_row(&mut self, id: &str) -> Result<FieldRow, FieldError> {
        let pos = self
            .rows
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| FieldError::RowNotFound(id.to_string()))?;
        if !self.rows[pos].removable {
            return Err(FieldError::NotRemovable(id.to_string()));
        }
        info!(group = %self.label, id, "row removed");
        Ok(self.rows.remove(pos))
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> Result<(), FieldError> {
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| FieldError::RowNotFound(id.to_string()))?;
        row.value = value.into();
        Ok(())
    }

    /// Identifiers of required rows that are still blank.
    pub fn missing_required(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|r| r.is_missing())
            .map(|r| r.id.as_str())
            .collect()
    }
}
