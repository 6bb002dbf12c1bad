//! Search, facet and sort over the read-only record collections.
//!
//! Every function here borrows its input and returns a fresh ordered view; the
//! source slices are never reordered.

use std::cmp::Reverse;

use shared::domain::{CategoryFilter, Mentor, SortKey, Story, ALL_FACET};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentorQuery {
    pub text: String,
    /// Exact specialty tag; empty or "All" disables the facet.
    pub specialty: String,
    pub sort: SortKey,
}

impl MentorQuery {
    pub fn facet(&self) -> Option<&str> {
        if self.specialty.is_empty() || self.specialty == ALL_FACET {
            None
        } else {
            Some(&self.specialty)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryQuery {
    pub category: CategoryFilter,
    pub text: String,
}

pub fn filter_mentors<'a>(mentors: &'a [Mentor], query: &MentorQuery) -> Vec<&'a Mentor> {
    let needle = query.text.to_lowercase();
    let facet = query.facet();
    let mut matched: Vec<&Mentor> = mentors
        .iter()
        .filter(|mentor| mentor_matches_text(mentor, &needle))
        .filter(|mentor| facet.map_or(true, |tag| mentor.has_specialty(tag)))
        .collect();
    sort_mentors(&mut matched, query.sort);
    tracing::debug!(
        query = %query.text,
        facet = facet.unwrap_or(ALL_FACET),
        sort = ?query.sort,
        matched = matched.len(),
        "filtered mentors"
    );
    matched
}

/// Stable, descending by the chosen key.
pub fn sort_mentors(mentors: &mut [&Mentor], key: SortKey) {
    match key {
        SortKey::Rating => mentors.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Reviews => mentors.sort_by_key(|mentor| Reverse(mentor.reviews)),
        SortKey::Experience => mentors.sort_by_key(|mentor| Reverse(mentor.experience_years())),
    }
}

fn mentor_matches_text(mentor: &Mentor, needle: &str) -> bool {
    mentor.name.to_lowercase().contains(needle)
        || mentor
            .specialties
            .iter()
            .any(|specialty| specialty.to_lowercase().contains(needle))
}

/// Source order is preserved.
pub fn filter_stories<'a>(stories: &'a [Story], query: &StoryQuery) -> Vec<&'a Story> {
    let needle = query.text.to_lowercase();
    stories
        .iter()
        .filter(|story| query.category.admits(story.category))
        .filter(|story| story_matches_text(story, &needle))
        .collect()
}

fn story_matches_text(story: &Story, needle: &str) -> bool {
    story.title.to_lowercase().contains(needle)
        || story.content.to_lowercase().contains(needle)
        || story
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
