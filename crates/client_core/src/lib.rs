use std::sync::Arc;

use shared::{
    domain::{Mentor, MentorId, ProfileDetails, Story},
    error::{ErrorCode, ServiceError},
    protocol::{BookingConfirmation, BookingRequest, Credentials, StoryDraft, UserIdentity},
};
use storage::RecordSource;
use tracing::{info, warn};

pub mod collaborators;
pub mod forms;
pub mod pipeline;
pub mod projection;
pub mod session;

pub use collaborators::{
    AuthProvider, BookingService, MockAuthProvider, MockBookingService, MockStorySubmission,
    StorySubmission,
};
pub use forms::{BookingForm, StoryComposer, BOOKING_CONFIRMED_NOTICE, STORY_SHARED_NOTICE};
pub use pipeline::{filter_mentors, filter_stories, sort_mentors, MentorQuery, StoryQuery};
pub use projection::{MentorCard, StoryCard, ANONYMOUS_AUTHOR};
pub use session::{ActiveSession, Intent, Page, SessionState};

/// Both collections as read at one point in time.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub mentors: Vec<Mentor>,
    pub stories: Vec<Story>,
}

/// Front door for every surface: records plus the external collaborators.
pub struct MentorHubClient {
    records: Arc<dyn RecordSource>,
    auth: Arc<dyn AuthProvider>,
    booking: Arc<dyn BookingService>,
    submissions: Arc<dyn StorySubmission>,
}

impl MentorHubClient {
    /// Wires the local stand-in collaborators around `records`.
    pub fn new(records: Arc<dyn RecordSource>) -> Arc<Self> {
        Self::new_with_dependencies(
            records.clone(),
            Arc::new(MockAuthProvider),
            Arc::new(MockBookingService::new(records.clone())),
            Arc::new(MockStorySubmission::new(records)),
        )
    }

    pub fn new_with_dependencies(
        records: Arc<dyn RecordSource>,
        auth: Arc<dyn AuthProvider>,
        booking: Arc<dyn BookingService>,
        submissions: Arc<dyn StorySubmission>,
    ) -> Arc<Self> {
        Arc::new(Self {
            records,
            auth,
            booking,
            submissions,
        })
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<UserIdentity, ServiceError> {
        match self.auth.authenticate(credentials).await {
            Ok(identity) => {
                info!(user = %identity.display_name, "login accepted");
                Ok(identity)
            }
            Err(err) => {
                warn!(code = ?err.code, "login rejected: {}", err.message);
                Err(err)
            }
        }
    }

    pub async fn load_catalog(&self) -> Result<Catalog, ServiceError> {
        let mentors = self.records.list_mentors().await.map_err(unavailable)?;
        let stories = self.records.list_stories().await.map_err(unavailable)?;
        tracing::debug!(
            mentors = mentors.len(),
            stories = stories.len(),
            "catalog loaded"
        );
        Ok(Catalog { mentors, stories })
    }

    pub async fn mentor(&self, mentor_id: MentorId) -> Result<Mentor, ServiceError> {
        self.records
            .get_mentor(mentor_id)
            .await
            .map_err(unavailable)?
            .ok_or_else(|| ServiceError::not_found(format!("mentor {mentor_id} does not exist")))
    }

    pub async fn profile_details(
        &self,
        mentor_id: MentorId,
    ) -> Result<ProfileDetails, ServiceError> {
        self.records
            .profile_details(mentor_id)
            .await
            .map_err(unavailable)?
            .ok_or_else(|| ServiceError::not_found(format!("mentor {mentor_id} does not exist")))
    }

    pub async fn book(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, ServiceError> {
        self.booking.book(request).await
    }

    pub async fn share_story(
        &self,
        author: &UserIdentity,
        draft: &StoryDraft,
    ) -> Result<Story, ServiceError> {
        self.submissions.submit(author, draft).await
    }
}

fn unavailable(err: anyhow::Error) -> ServiceError {
    ServiceError::new(ErrorCode::Unavailable, format!("{err:#}"))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
