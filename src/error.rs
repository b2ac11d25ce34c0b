use thiserror::Error;

use crate::category::Category;

/// Failure to split a field identifier into `<prefix><number>`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("field identifier is empty")]
    Empty,

    #[error("field identifier '{0}' has no trailing digits")]
    NoTrailingDigits(String),

    #[error("field identifier '{0}' has digits that are not a single trailing run")]
    DigitsNotTrailing(String),

    #[error("numeric suffix of field identifier '{0}' is out of range")]
    Overflow(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("no row group at position {0}")]
    UnknownGroup(usize),

    #[error("row group '{0}' has no template row to copy")]
    EmptyGroup(String),

    #[error("row group '{label}' is full ({max} rows)")]
    GroupFull { label: String, max: usize },

    #[error("row '{0}' already exists in this group")]
    DuplicateIdentifier(String),

    #[error("no row '{0}' in this group")]
    RowNotFound(String),

    #[error("row '{0}' has no remove control")]
    NotRemovable(String),

    #[error(transparent)]
    Identifier(#[from] IdentifierError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoryError {
    #[error("no story with id {0}")]
    NotFoundById(u32),

    #[error("no story titled '{0}'")]
    NotFoundByTitle(String),

    #[error("story catalog is empty")]
    EmptyCatalog,

    #[error("placeholder '{0}' appears more than once")]
    DuplicatePlaceholder(String),

    #[error("no placeholder '{0}' in the story")]
    UnknownPlaceholder(String),

    #[error("failed to read stories file {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to parse stories file {path}: {message}")]
    Format { path: String, message: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModalError {
    #[error("'{0}' is not a placeholder of a known category")]
    UnknownCategory(String),

    #[error("word picker is closed")]
    Closed,

    #[error("the {0} pane is hidden")]
    PaneHidden(Category),

    #[error(transparent)]
    Story(#[from] StoryError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}. Please ensure it exists.")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("stories_file specified in {path} ('{stories_file}') is not a file")]
    MissingStories { path: String, stories_file: String },

    #[error("row group '{0}' has no seed rows")]
    NoSeeds(String),

    #[error("row group '{label}': {source}")]
    BadSeed {
        label: String,
        #[source]
        source: IdentifierError,
    },
}

/// Any failure surfaced by the form as a whole.
#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Story(#[from] StoryError),

    #[error(transparent)]
    Modal(#[from] ModalError),

    #[error("failed to serialize submission: {0}")]
    Serialize(#[from] serde_json::Error),
}
