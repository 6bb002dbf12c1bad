//! Backend commands queued from UI to backend worker.

use shared::{
    domain::MentorId,
    protocol::{BookingRequest, Credentials, StoryDraft, UserIdentity},
};

#[derive(Debug, Clone)]
pub enum BackendCommand {
    Login {
        credentials: Credentials,
    },
    LoadCatalog,
    LoadProfileDetails {
        mentor_id: MentorId,
    },
    BookSession {
        request: BookingRequest,
    },
    ShareStory {
        author: UserIdentity,
        draft: StoryDraft,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Login { .. } => "login",
            BackendCommand::LoadCatalog => "load_catalog",
            BackendCommand::LoadProfileDetails { .. } => "load_profile_details",
            BackendCommand::BookSession { .. } => "book_session",
            BackendCommand::ShareStory { .. } => "share_story",
        }
    }
}
