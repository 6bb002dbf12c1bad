use std::{
    collections::HashSet,
    fs,
    path::Path,
    sync::Arc,
};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use shared::domain::{
    Mentor, MentorId, MentorReview, ProfileDetails, SessionKind, SessionOffer, Story, TimeSlot,
};

pub const MENTORS_FILE: &str = "mentors.json";
pub const STORIES_FILE: &str = "stories.json";

const BUILTIN_MENTORS: &str = include_str!("../seed/mentors.json");
const BUILTIN_STORIES: &str = include_str!("../seed/stories.json");

/// Read-only access to the mentor and story collections.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn list_mentors(&self) -> Result<Vec<Mentor>>;
    async fn list_stories(&self) -> Result<Vec<Story>>;
    async fn get_mentor(&self, mentor_id: MentorId) -> Result<Option<Mentor>>;
    async fn profile_details(&self, mentor_id: MentorId) -> Result<Option<ProfileDetails>>;
}

/// Process-lifetime seed collections. Cloning shares the same records.
#[derive(Clone, Debug)]
pub struct SeedStore {
    mentors: Arc<[Mentor]>,
    stories: Arc<[Story]>,
}

impl SeedStore {
    /// Fixture directory if given, otherwise the records compiled into the binary.
    pub fn open(seed_dir: Option<&Path>) -> Result<Self> {
        match seed_dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::builtin(),
        }
    }

    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_MENTORS, BUILTIN_STORIES).context("built-in seed data is invalid")
    }

    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mentors_path = dir.join(MENTORS_FILE);
        let stories_path = dir.join(STORIES_FILE);
        let mentors = read_seed_file(&mentors_path)?;
        let stories = read_seed_file(&stories_path)?;
        Self::from_json(&mentors, &stories)
            .with_context(|| format!("invalid seed directory '{}'", dir.display()))
    }

    pub fn from_json(mentors_json: &str, stories_json: &str) -> Result<Self> {
        let mentors: Vec<Mentor> =
            serde_json::from_str(mentors_json).context("failed to decode mentor records")?;
        let stories: Vec<Story> =
            serde_json::from_str(stories_json).context("failed to decode story records")?;
        Self::new(mentors, stories)
    }

    pub fn new(mentors: Vec<Mentor>, stories: Vec<Story>) -> Result<Self> {
        validate_mentors(&mentors)?;
        validate_stories(&stories)?;
        tracing::debug!(
            mentors = mentors.len(),
            stories = stories.len(),
            "seed store loaded"
        );
        Ok(Self {
            mentors: mentors.into(),
            stories: stories.into(),
        })
    }

    pub fn mentors(&self) -> &[Mentor] {
        &self.mentors
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }
}

#[async_trait]
impl RecordSource for SeedStore {
    async fn list_mentors(&self) -> Result<Vec<Mentor>> {
        Ok(self.mentors.to_vec())
    }

    async fn list_stories(&self) -> Result<Vec<Story>> {
        Ok(self.stories.to_vec())
    }

    async fn get_mentor(&self, mentor_id: MentorId) -> Result<Option<Mentor>> {
        Ok(self.mentors.iter().find(|m| m.id == mentor_id).cloned())
    }

    async fn profile_details(&self, mentor_id: MentorId) -> Result<Option<ProfileDetails>> {
        Ok(self
            .mentors
            .iter()
            .find(|m| m.id == mentor_id)
            .map(profile_details_for))
    }
}

fn read_seed_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file '{}'", path.display()))
}

fn validate_mentors(mentors: &[Mentor]) -> Result<()> {
    let mut seen = HashSet::new();
    for mentor in mentors {
        if !seen.insert(mentor.id) {
            bail!("duplicate mentor id {}", mentor.id);
        }
        if !(0.0..=5.0).contains(&mentor.rating) {
            bail!(
                "mentor {} has rating {} outside 0.0..=5.0",
                mentor.id,
                mentor.rating
            );
        }
        let mut tags = HashSet::new();
        if let Some(dup) = mentor.specialties.iter().find(|s| !tags.insert(s.as_str())) {
            bail!("mentor {} lists specialty '{dup}' twice", mentor.id);
        }
    }
    Ok(())
}

fn validate_stories(stories: &[Story]) -> Result<()> {
    let mut seen = HashSet::new();
    for story in stories {
        if !seen.insert(story.id) {
            bail!("duplicate story id {}", story.id);
        }
    }
    Ok(())
}

/// Session offers, reviews and slots shown on every profile. The video session
/// is billed at the mentor's own rate.
pub fn profile_details_for(mentor: &Mentor) -> ProfileDetails {
    let offer = |kind, duration: &str, price: &str| SessionOffer {
        kind,
        duration: duration.to_string(),
        price: price.to_string(),
    };
    let review = |id, reviewer: &str, stars, date: &str, comment: &str| MentorReview {
        id,
        reviewer: reviewer.to_string(),
        stars,
        date: date.to_string(),
        comment: comment.to_string(),
    };
    let slot = |day: &str, time: &str, available| TimeSlot {
        day: day.to_string(),
        time: time.to_string(),
        available,
    };

    ProfileDetails {
        mentor_id: mentor.id,
        sessions: vec![
            offer(SessionKind::Video, "50 min", &mentor.price),
            offer(SessionKind::Phone, "50 min", "$100"),
            offer(SessionKind::Chat, "60 min", "$80"),
        ],
        reviews: vec![
            review(
                1,
                "Anonymous",
                5,
                "2 weeks ago",
                "Dr. Johnson helped me through a very difficult time. Her approach is compassionate and professional. I highly recommend her services.",
            ),
            review(
                2,
                "M.K.",
                5,
                "1 month ago",
                "Excellent therapist! Very understanding and provides practical tools for managing anxiety. Sessions are always productive.",
            ),
            review(
                3,
                "Sarah T.",
                4,
                "2 months ago",
                "Great experience overall. Dr. Johnson is knowledgeable and creates a safe space for discussion. Would definitely continue sessions.",
            ),
        ],
        slots: vec![
            slot("Today", "2:00 PM", true),
            slot("Today", "4:00 PM", true),
            slot("Tomorrow", "10:00 AM", true),
            slot("Tomorrow", "2:00 PM", false),
            slot("Friday", "11:00 AM", true),
            slot("Friday", "3:00 PM", true),
        ],
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
