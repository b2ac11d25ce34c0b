//*** START FILE: src/lib.rs ***//

// Declare all modules that are part of this library
pub mod category;
pub mod config;
pub mod error;
pub mod fields;
pub mod form;
pub mod modal;
pub mod parsing;
pub mod story;
pub mod story_io;
pub mod types {
    pub mod story_data;
}

pub use category::{Category, SelectorTable};
pub use form::FormModel;

//*** END FILE: src/lib.rs ***//
