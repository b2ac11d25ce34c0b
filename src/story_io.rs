use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

use crate::error::StoryError;
use crate::story::Catalog;
use crate::types::story_data::StoryRecord;

// Layout of the stories file on disk.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CatalogFile {
    pub stories: Vec<StoryRecord>,
}

pub fn read_catalog<R: Read>(reader: R, source: &str) -> Result<Catalog, StoryError> {
    let file: CatalogFile = serde_json::from_reader(reader).map_err(|e| StoryError::Format {
        path: source.to_string(),
        message: e.to_string(),
    })?;
    Ok(Catalog::new(file.stories))
}

/// Loads the read-only story catalog from a JSON file.
pub fn load_catalog(file_path: &Path) -> Result<Catalog, StoryError> {
    let file = File::open(file_path).map_err(|e| StoryError::Io {
        path: file_path.display().to_string(),
        message: e.to_string(),
    })?;
    let catalog = read_catalog(BufReader::new(file), &file_path.display().to_string())?;
    info!(path = %file_path.display(), stories = catalog.stories().len(), "story catalog loaded");
    Ok(catalog)
}
