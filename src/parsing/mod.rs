pub mod story_parser;

// Re-export the main parsing function for convenience
pub use story_parser::parse_story_content;
