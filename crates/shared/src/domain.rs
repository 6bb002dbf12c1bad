use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(MentorId);
id_newtype!(StoryId);

/// Facet label that disables a filter.
pub const ALL_FACET: &str = "All";

/// Specialty facets offered by the mentor directory, in display order.
pub const DIRECTORY_SPECIALTY_FACETS: [&str; 8] = [
    ALL_FACET,
    "Anxiety",
    "Depression",
    "Trauma",
    "ADHD",
    "Stress Management",
    "Family Therapy",
    "Eating Disorders",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: MentorId,
    pub name: String,
    pub title: String,
    pub specialties: Vec<String>,
    pub rating: f64,
    pub reviews: u32,
    /// Free text such as "12 years"; see [`Mentor::experience_years`].
    pub experience: String,
    pub location: String,
    pub availability: String,
    pub image: String,
    pub price: String,
    pub verified: bool,
    pub languages: Vec<String>,
    pub bio: String,
}

impl Mentor {
    /// Leading integer of the experience label, 0 when there is none.
    pub fn experience_years(&self) -> u32 {
        leading_integer(&self.experience)
    }

    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialties.iter().any(|s| s == specialty)
    }
}

/// Reads an optionally signed run of ASCII digits after leading whitespace.
/// Negative values and text without digits read as 0; runs too large for a
/// `u32` saturate.
pub fn leading_integer(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if negative || digits_end == 0 {
        return 0;
    }
    rest[..digits_end].parse().unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StoryCategory {
    #[default]
    Recovery,
    Anxiety,
    Depression,
    #[serde(rename = "Success Stories")]
    SuccessStories,
    Support,
    #[serde(rename = "Therapy Journey")]
    TherapyJourney,
}

impl StoryCategory {
    pub const ALL: [StoryCategory; 6] = [
        StoryCategory::Recovery,
        StoryCategory::Anxiety,
        StoryCategory::Depression,
        StoryCategory::SuccessStories,
        StoryCategory::Support,
        StoryCategory::TherapyJourney,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StoryCategory::Recovery => "Recovery",
            StoryCategory::Anxiety => "Anxiety",
            StoryCategory::Depression => "Depression",
            StoryCategory::SuccessStories => "Success Stories",
            StoryCategory::Support => "Support",
            StoryCategory::TherapyJourney => "Therapy Journey",
        }
    }
}

impl fmt::Display for StoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value '{0}'")]
pub struct UnknownLabel(pub String);

impl FromStr for StoryCategory {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        StoryCategory::ALL
            .into_iter()
            .find(|category| {
                category.label().eq_ignore_ascii_case(wanted)
                    || category
                        .label()
                        .replace(' ', "-")
                        .eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownLabel(raw.to_string()))
    }
}

/// Category facet of the stories surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(StoryCategory),
}

impl CategoryFilter {
    /// "All" followed by every category, in display order.
    pub fn facets() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(StoryCategory::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_FACET,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn admits(self, category: StoryCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().is_empty() || raw.trim().eq_ignore_ascii_case(ALL_FACET) {
            return Ok(CategoryFilter::All);
        }
        raw.parse().map(CategoryFilter::Only)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub is_anonymous: bool,
    pub date: String,
    pub category: StoryCategory,
    pub likes: u32,
    pub comments: u32,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Rating,
    Reviews,
    Experience,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Rating, SortKey::Reviews, SortKey::Experience];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Rating => "Sort by Rating",
            SortKey::Reviews => "Sort by Reviews",
            SortKey::Experience => "Sort by Experience",
        }
    }
}

impl FromStr for SortKey {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "rating" => Ok(SortKey::Rating),
            "reviews" => Ok(SortKey::Reviews),
            "experience" => Ok(SortKey::Experience),
            _ => Err(UnknownLabel(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    #[default]
    Video,
    Phone,
    Chat,
}

impl SessionKind {
    pub const ALL: [SessionKind; 3] = [SessionKind::Video, SessionKind::Phone, SessionKind::Chat];

    pub fn label(self) -> &'static str {
        match self {
            SessionKind::Video => "Video Call",
            SessionKind::Phone => "Phone Call",
            SessionKind::Chat => "Chat Session",
        }
    }
}

impl FromStr for SessionKind {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "video" | "video call" => Ok(SessionKind::Video),
            "phone" | "phone call" => Ok(SessionKind::Phone),
            "chat" | "chat session" => Ok(SessionKind::Chat),
            _ => Err(UnknownLabel(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOffer {
    pub kind: SessionKind,
    pub duration: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: String,
    pub time: String,
    pub available: bool,
}

impl TimeSlot {
    pub fn label(&self) -> String {
        format!("{} {}", self.day, self.time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorReview {
    pub id: i64,
    pub reviewer: String,
    pub stars: u8,
    pub date: String,
    pub comment: String,
}

/// Static extras rendered on a mentor's profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetails {
    pub mentor_id: MentorId,
    pub sessions: Vec<SessionOffer>,
    pub reviews: Vec<MentorReview>,
    pub slots: Vec<TimeSlot>,
}

impl ProfileDetails {
    pub fn first_available_slot(&self) -> Option<&TimeSlot> {
        self.slots.iter().find(|slot| slot.available)
    }
}
