//! Display projections of records. Anything rendered or printed goes through
//! these so anonymous authors never leak.

use serde::Serialize;
use shared::domain::{Mentor, MentorId, Story, StoryCategory, StoryId};

pub const ANONYMOUS_AUTHOR: &str = "Anonymous";
const CARD_SPECIALTY_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryCard {
    pub id: StoryId,
    pub title: String,
    pub content: String,
    pub author_label: String,
    /// First letter of the author; absent for anonymous posts.
    pub avatar_initial: Option<char>,
    pub date: String,
    pub category: StoryCategory,
    pub likes: u32,
    pub comments: u32,
    pub tags: Vec<String>,
}

impl From<&Story> for StoryCard {
    fn from(story: &Story) -> Self {
        let (author_label, avatar_initial) = if story.is_anonymous {
            (ANONYMOUS_AUTHOR.to_string(), None)
        } else {
            (story.author.clone(), story.author.chars().next())
        };
        Self {
            id: story.id,
            title: story.title.clone(),
            content: story.content.clone(),
            author_label,
            avatar_initial,
            date: story.date.clone(),
            category: story.category,
            likes: story.likes,
            comments: story.comments,
            tags: story.tags.clone(),
        }
    }
}

impl StoryCard {
    pub fn hashtags(&self) -> Vec<String> {
        self.tags.iter().map(|tag| format!("#{tag}")).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentorCard {
    pub id: MentorId,
    pub name: String,
    pub title: String,
    pub rating: f64,
    pub reviews: u32,
    pub location: String,
    pub availability: String,
    pub experience: String,
    pub specialties: Vec<String>,
    /// Specialties beyond the card limit, shown as "+N more".
    pub more_specialties: usize,
    pub price: String,
    pub verified: bool,
}

impl From<&Mentor> for MentorCard {
    fn from(mentor: &Mentor) -> Self {
        Self {
            id: mentor.id,
            name: mentor.name.clone(),
            title: mentor.title.clone(),
            rating: mentor.rating,
            reviews: mentor.reviews,
            location: mentor.location.clone(),
            availability: mentor.availability.clone(),
            experience: format!("{} experience", mentor.experience),
            specialties: mentor
                .specialties
                .iter()
                .take(CARD_SPECIALTY_LIMIT)
                .cloned()
                .collect(),
            more_specialties: mentor.specialties.len().saturating_sub(CARD_SPECIALTY_LIMIT),
            price: mentor.price.clone(),
            verified: mentor.verified,
        }
    }
}

impl MentorCard {
    pub fn more_label(&self) -> Option<String> {
        (self.more_specialties > 0).then(|| format!("+{} more", self.more_specialties))
    }
}

pub fn mentor_results_summary(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} mentors")
}

pub fn star_row(stars: u8) -> String {
    "★".repeat(usize::from(stars.min(5)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::SeedStore;

    #[test]
    fn anonymous_story_hides_author_everywhere() {
        let store = SeedStore::builtin().expect("seed");
        let mut story = store.stories()[0].clone();
        story.author = "Jordan Secret".into();
        story.is_anonymous = true;

        let card = StoryCard::from(&story);
        assert_eq!(card.author_label, ANONYMOUS_AUTHOR);
        assert_eq!(card.avatar_initial, None);
        let json = serde_json::to_string(&card).expect("serialize");
        assert!(!json.contains("Jordan"));
    }

    #[test]
    fn named_story_shows_author_and_initial() {
        let store = SeedStore::builtin().expect("seed");
        let card = StoryCard::from(&store.stories()[0]);
        assert_eq!(card.author_label, "Sarah M.");
        assert_eq!(card.avatar_initial, Some('S'));
        assert_eq!(card.hashtags()[0], "#anxiety");
    }

    #[test]
    fn every_seed_projection_respects_anonymity() {
        let store = SeedStore::builtin().expect("seed");
        for story in store.stories().iter().filter(|s| s.is_anonymous) {
            assert_eq!(StoryCard::from(story).author_label, ANONYMOUS_AUTHOR);
        }
    }

    #[test]
    fn mentor_card_truncates_specialties() {
        let store = SeedStore::builtin().expect("seed");
        let card = MentorCard::from(&store.mentors()[0]);
        assert_eq!(card.specialties, vec!["Anxiety", "Depression", "Trauma"]);
        assert_eq!(card.more_label().as_deref(), Some("+1 more"));
        assert_eq!(card.experience, "12 years experience");

        let card = MentorCard::from(&store.mentors()[1]);
        assert_eq!(card.more_label(), None);
    }

    #[test]
    fn summary_and_stars_render() {
        assert_eq!(mentor_results_summary(2, 6), "Showing 2 of 6 mentors");
        assert_eq!(star_row(4), "★★★★");
        assert_eq!(star_row(9).chars().count(), 5);
    }
}
