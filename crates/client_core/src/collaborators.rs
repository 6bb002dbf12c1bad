//! Boundaries to services that do not exist yet, with local stand-ins.

use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

use async_trait::async_trait;
use chrono::Utc;
use shared::{
    domain::{Story, StoryId},
    error::ServiceError,
    protocol::{BookingConfirmation, BookingRequest, Credentials, StoryDraft, UserIdentity},
};
use storage::RecordSource;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{forms::BOOKING_CONFIRMED_NOTICE, projection::ANONYMOUS_AUTHOR};

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<UserIdentity, ServiceError>;
}

#[async_trait]
pub trait BookingService: Send + Sync {
    async fn book(&self, request: &BookingRequest) -> Result<BookingConfirmation, ServiceError>;
}

#[async_trait]
pub trait StorySubmission: Send + Sync {
    async fn submit(&self, author: &UserIdentity, draft: &StoryDraft)
        -> Result<Story, ServiceError>;
}

/// Accepts any credential pair with both fields filled in.
pub struct MockAuthProvider;

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn authenticate(&self, credentials: &Credentials) -> Result<UserIdentity, ServiceError> {
        if !credentials.is_complete() {
            return Err(ServiceError::unauthorized("email and password are both required"));
        }
        Ok(UserIdentity::from_identifier(&credentials.identifier))
    }
}

/// Acknowledges bookings against the record source without keeping them.
pub struct MockBookingService {
    records: Arc<dyn RecordSource>,
}

impl MockBookingService {
    pub fn new(records: Arc<dyn RecordSource>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl BookingService for MockBookingService {
    async fn book(&self, request: &BookingRequest) -> Result<BookingConfirmation, ServiceError> {
        let details = self
            .records
            .profile_details(request.mentor_id)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found(format!("mentor {} does not exist", request.mentor_id))
            })?;

        let offered = details
            .slots
            .iter()
            .find(|slot| slot.day == request.slot.day && slot.time == request.slot.time);
        match offered {
            Some(slot) if slot.available => {}
            Some(_) => {
                warn!(
                    mentor_id = %request.mentor_id,
                    slot = %request.slot.label(),
                    "slot already booked"
                );
                return Err(ServiceError::validation(format!(
                    "{} is already booked",
                    request.slot.label()
                )));
            }
            None => {
                return Err(ServiceError::validation(format!(
                    "{} is not offered by this mentor",
                    request.slot.label()
                )));
            }
        }

        let confirmation = BookingConfirmation {
            reference: Uuid::new_v4(),
            mentor_id: request.mentor_id,
            session: request.session,
            slot: request.slot.clone(),
            confirmed_at: Utc::now(),
            notice: BOOKING_CONFIRMED_NOTICE.to_string(),
        };
        info!(
            mentor_id = %request.mentor_id,
            session = request.session.label(),
            reference = %confirmation.reference,
            "booking acknowledged"
        );
        Ok(confirmation)
    }
}

/// Validates drafts and echoes them back as stories. Nothing is stored, so the
/// returned story never shows up in later listings.
pub struct MockStorySubmission {
    records: Arc<dyn RecordSource>,
    submitted: AtomicI64,
}

impl MockStorySubmission {
    pub fn new(records: Arc<dyn RecordSource>) -> Self {
        Self {
            records,
            submitted: AtomicI64::new(0),
        }
    }

    /// Ids continue after the highest listed story.
    async fn next_id(&self) -> Result<StoryId, ServiceError> {
        let highest = self
            .records
            .list_stories()
            .await?
            .iter()
            .map(|story| story.id.0)
            .max()
            .unwrap_or(0);
        let offset = self.submitted.fetch_add(1, Ordering::Relaxed);
        Ok(StoryId(highest + 1 + offset))
    }
}

#[async_trait]
impl StorySubmission for MockStorySubmission {
    async fn submit(
        &self,
        author: &UserIdentity,
        draft: &StoryDraft,
    ) -> Result<Story, ServiceError> {
        if draft.title.trim().is_empty() {
            return Err(ServiceError::validation("story title is missing"));
        }
        if draft.content.trim().is_empty() {
            return Err(ServiceError::validation("story content is missing"));
        }

        let author = if draft.is_anonymous {
            ANONYMOUS_AUTHOR.to_string()
        } else {
            author.display_name.clone()
        };
        let story = Story {
            id: self.next_id().await?,
            title: draft.title.trim().to_string(),
            content: draft.content.trim().to_string(),
            author,
            is_anonymous: draft.is_anonymous,
            date: "Just now".to_string(),
            category: draft.category,
            likes: 0,
            comments: 0,
            tags: draft.tags.clone(),
        };
        info!(story_id = %story.id, category = %story.category, "story submission acknowledged");
        Ok(story)
    }
}

#[cfg(test)]
#[path = "tests/collaborators_tests.rs"]
mod tests;
