use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::category::Category;
use crate::error::StoryError;
use crate::types::story_data::Segment;

fn placeholder_pattern() -> Regex {
    Regex::new(r"\[([a-z]+)(?:-([^\[\]]+))?\]").expect("static placeholder pattern")
}

/// Splits story content into literal text and placeholders.
///
/// `[noun-3]` keeps its explicit id; any suffix without brackets is accepted,
/// as for `Category::from_placeholder_id`. A bare `[noun]` is numbered per
/// category in order of appearance, skipping numbers taken by explicit ids.
/// Bracketed text whose tag is not a category is left as literal text.
pub fn parse_story_content(content: &str) -> Result<Vec<Segment>, StoryError> {
    let re = placeholder_pattern();

    let mut explicit: HashSet<String> = HashSet::new();
    for caps in re.captures_iter(content) {
        if Category::from_tag(&caps[1]).is_none() {
            continue;
        }
        if let Some(suffix) = caps.get(2) {
            let id = format!("{}-{}", &caps[1], suffix.as_str());
            if !explicit.insert(id.clone()) {
                return Err(StoryError::DuplicatePlaceholder(id));
            }
        }
    }

    let mut segments = Vec::new();
    let mut counters: HashMap<Category, u32> = HashMap::new();
    let mut cursor = 0;
    for caps in re.captures_iter(content) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > cursor {
            segments.push(Segment::Text(content[cursor..whole.start()].to_string()));
        }
        cursor = whole.end();

        let Some(category) = Category::from_tag(&caps[1]) else {
            segments.push(Segment::Text(whole.as_str().to_string()));
            continue;
        };
        let id = match caps.get(2) {
            Some(suffix) => format!("{}-{}", category.tag(), suffix.as_str()),
            None => {
                let counter = counters.entry(category).or_insert(0);
                loop {
                    *counter += 1;
                    let candidate = format!("{}-{}", category.tag(), counter);
                    if !explicit.contains(&candidate) {
                        break candidate;
                    }
                }
            }
        };
        segments.push(Segment::Placeholder { id, category });
    }
    if cursor < content.len() {
        segments.push(Segment::Text(content[cursor..].to_string()));
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder_ids(segments: &[Segment]) -> Vec<&str> {
        segments
            .iter()
            .filter_map(|s| match s {
                Segment::Placeholder { id, .. } => Some(id.as_str()),
                Segment::Text(_) => None,
            })
            .collect()
    }

    #[test]
    fn bare_tags_are_numbered_per_category() {
        let segs = parse_story_content("The [adjective] [noun] saw a [noun] and [verb].").unwrap();
        assert_eq!(placeholder_ids(&segs), ["adjective-1", "noun-1", "noun-2", "verb-1"]);
        assert_eq!(segs[0], Segment::Text("The ".into()));
        assert_eq!(segs.last(), Some(&Segment::Text(".".into())));
    }

    #[test]
    fn explicit_ids_are_kept_and_skipped_by_numbering() {
        let segs = parse_story_content("[noun] [noun-1] [miscellany-x]").unwrap();
        assert_eq!(placeholder_ids(&segs), ["noun-2", "noun-1", "miscellany-x"]);
    }

    #[test]
    fn unknown_tags_stay_literal() {
        let segs = parse_story_content("a [adverb] b").unwrap();
        assert_eq!(segs, vec![Segment::Text("a [adverb] b".into())]);
    }

    #[test]
    fn hyphenated_suffixes_are_placeholders() {
        let segs = parse_story_content("a [noun-big-dog] b").unwrap();
        assert_eq!(placeholder_ids(&segs), ["noun-big-dog"]);
        assert!(Category::from_placeholder_id("noun-big-dog").is_ok());
        assert_eq!(segs[0], Segment::Text("a ".into()));
    }

    #[test]
    fn unknown_tag_with_suffix_stays_literal_and_does_not_reserve_ids() {
        let segs = parse_story_content("[adverb-1] [noun] [adverb-1]").unwrap();
        assert_eq!(placeholder_ids(&segs), ["noun-1"]);
        assert_eq!(segs[0], Segment::Text("[adverb-1]".into()));
    }

    #[test]
    fn duplicate_explicit_ids_fail() {
        assert_eq!(
            parse_story_content("[verb-2] and [verb-2]"),
            Err(StoryError::DuplicatePlaceholder("verb-2".into()))
        );
    }
}
