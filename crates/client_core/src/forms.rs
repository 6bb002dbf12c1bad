//! Modal form state for booking a session and sharing a story.
//!
//! Both forms are owned by the surface that shows them. Submitting closes the
//! modal, resets the draft and leaves the form waiting for its answer; nothing
//! else can be submitted until that answer arrives. The record collections are
//! never touched.

use shared::{
    domain::{MentorId, ProfileDetails, SessionKind, StoryCategory},
    error::ServiceError,
    protocol::{BookingRequest, StoryDraft},
};

pub const BOOKING_CONFIRMED_NOTICE: &str =
    "Booking confirmed! You will receive a confirmation email shortly.";
pub const STORY_SHARED_NOTICE: &str =
    "Your story has been shared! Thank you for contributing to our community.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    open: bool,
    session: SessionKind,
    slot_index: Option<usize>,
    /// Mentor of the request still waiting for confirmation.
    pending: Option<MentorId>,
}

impl BookingForm {
    /// Opens with a video session on the first free slot.
    pub fn open(&mut self, details: &ProfileDetails) {
        *self = Self {
            open: true,
            session: SessionKind::default(),
            slot_index: details.slots.iter().position(|slot| slot.available),
            pending: self.pending,
        };
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn session(&self) -> SessionKind {
        self.session
    }

    pub fn slot_index(&self) -> Option<usize> {
        self.slot_index
    }

    pub fn select_session(&mut self, session: SessionKind) {
        self.session = session;
    }

    /// Booked or unknown slots are refused and leave the selection unchanged.
    pub fn select_slot(&mut self, details: &ProfileDetails, index: usize) -> bool {
        match details.slots.get(index) {
            Some(slot) if slot.available => {
                self.slot_index = Some(index);
                true
            }
            _ => false,
        }
    }

    pub fn request(
        &self,
        mentor_id: MentorId,
        details: &ProfileDetails,
    ) -> Result<BookingRequest, ServiceError> {
        let slot = self
            .slot_index
            .and_then(|index| details.slots.get(index))
            .filter(|slot| slot.available)
            .ok_or_else(|| ServiceError::validation("no available time slot selected"))?;
        Ok(BookingRequest {
            mentor_id,
            session: self.session,
            slot: slot.clone(),
        })
    }

    /// Builds the request, then closes and resets the form until the booking
    /// collaborator answers.
    pub fn submit(
        &mut self,
        mentor_id: MentorId,
        details: &ProfileDetails,
    ) -> Result<BookingRequest, ServiceError> {
        if !self.open {
            return Err(ServiceError::validation("booking form is not open"));
        }
        if self.pending.is_some() {
            return Err(ServiceError::validation(
                "a booking is already waiting for confirmation",
            ));
        }
        let request = self.request(mentor_id, details)?;
        *self = Self {
            pending: Some(mentor_id),
            ..Self::default()
        };
        Ok(request)
    }

    /// Closes without sending. A request already in flight stays pending.
    pub fn cancel(&mut self) {
        *self = Self {
            pending: self.pending,
            ..Self::default()
        };
    }

    /// Whether the confirmation answers the request this form sent. Answers
    /// for any other mentor leave the form alone.
    pub fn complete(&mut self, mentor_id: MentorId) -> bool {
        if self.pending != Some(mentor_id) {
            return false;
        }
        self.pending = None;
        true
    }

    /// The booking collaborator refused or never got the request.
    pub fn fail(&mut self) {
        self.pending = None;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryComposer {
    open: bool,
    pub title: String,
    pub content: String,
    pub category: StoryCategory,
    pub is_anonymous: bool,
    /// Comma separated, parsed on submit.
    pub tags: String,
    pending: bool,
}

impl StoryComposer {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Closes the modal and discards the draft.
    pub fn cancel(&mut self) {
        *self = Self {
            pending: self.pending,
            ..Self::default()
        };
    }

    pub fn draft(&self) -> StoryDraft {
        StoryDraft {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            category: self.category,
            is_anonymous: self.is_anonymous,
            tags: parse_tags(&self.tags),
        }
    }

    /// Hands out the draft and closes the composer until the submission is
    /// answered.
    pub fn submit(&mut self) -> Result<StoryDraft, ServiceError> {
        if !self.open {
            return Err(ServiceError::validation("story composer is not open"));
        }
        if self.pending {
            return Err(ServiceError::validation(
                "a story is already waiting to be shared",
            ));
        }
        let draft = self.draft();
        if draft.title.is_empty() {
            return Err(ServiceError::validation("story title is missing"));
        }
        if draft.content.is_empty() {
            return Err(ServiceError::validation("story content is missing"));
        }
        *self = Self {
            pending: true,
            ..Self::default()
        };
        Ok(draft)
    }

    /// Returns the notice when a submission was actually waiting.
    pub fn complete(&mut self) -> Option<&'static str> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(STORY_SHARED_NOTICE)
    }

    pub fn fail(&mut self) {
        self.pending = false;
    }
}

/// Splits on commas, strips `#` prefixes, drops blanks and repeats.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',') {
        let tag = tag.trim().trim_start_matches('#').trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}
