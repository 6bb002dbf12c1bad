//! Session gate and view router as one pure reducer.
//!
//! The UI owns a [`SessionState`] value and replaces it with the result of
//! [`SessionState::reduce`] for every user intent. While logged out, only a
//! completed login is accepted.

use serde::{Deserialize, Serialize};
use shared::{domain::Mentor, protocol::UserIdentity};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Mentors,
    MentorProfile,
    Stories,
}

impl Page {
    /// Pages reachable from the header navigation.
    pub const NAVIGATION: [Page; 3] = [Page::Home, Page::Mentors, Page::Stories];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Mentors => "Find Mentors",
            Page::MentorProfile => "Mentor Profile",
            Page::Stories => "Community Stories",
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Mentors => "mentors",
            Page::MentorProfile => "mentor-profile",
            Page::Stories => "stories",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSession {
    user: UserIdentity,
    page: Page,
    selected_mentor: Option<Mentor>,
}

impl ActiveSession {
    fn start(user: UserIdentity) -> Self {
        Self {
            user,
            page: Page::Home,
            selected_mentor: None,
        }
    }

    pub fn user(&self) -> &UserIdentity {
        &self.user
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn selected_mentor(&self) -> Option<&Mentor> {
        self.selected_mentor.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn(ActiveSession),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// The auth collaborator accepted a credential pair.
    LoginSucceeded(UserIdentity),
    Logout,
    Navigate(Page),
    /// Directory card clicked. `None` models a click that lost its record.
    OpenProfile(Option<Mentor>),
    BackToDirectory,
}

impl SessionState {
    pub fn reduce(self, intent: Intent) -> SessionState {
        match (self, intent) {
            (_, Intent::LoginSucceeded(user)) => {
                info!(user = %user.identifier, "session started");
                SessionState::LoggedIn(ActiveSession::start(user))
            }
            (SessionState::LoggedOut, intent) => {
                debug!(?intent, "ignoring intent while logged out");
                SessionState::LoggedOut
            }
            (SessionState::LoggedIn(session), Intent::Logout) => {
                info!(user = %session.user.identifier, "session ended");
                SessionState::LoggedOut
            }
            (SessionState::LoggedIn(session), intent) => {
                SessionState::LoggedIn(route(session, intent))
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::LoggedIn(_))
    }

    pub fn active(&self) -> Option<&ActiveSession> {
        match self {
            SessionState::LoggedIn(session) => Some(session),
            SessionState::LoggedOut => None,
        }
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.active().map(ActiveSession::user)
    }

    pub fn page(&self) -> Option<Page> {
        self.active().map(ActiveSession::page)
    }

    /// The mentor the profile page renders; `None` unless that page is active.
    pub fn profile_mentor(&self) -> Option<&Mentor> {
        self.active()
            .filter(|session| session.page == Page::MentorProfile)
            .and_then(ActiveSession::selected_mentor)
    }
}

fn route(mut session: ActiveSession, intent: Intent) -> ActiveSession {
    let from = session.page;
    match intent {
        Intent::Navigate(Page::MentorProfile) | Intent::OpenProfile(None) => {
            debug!("profile requested without a mentor; staying on the directory");
            session.page = Page::Mentors;
        }
        Intent::Navigate(page) => session.page = page,
        Intent::OpenProfile(Some(mentor)) => {
            debug!(mentor_id = %mentor.id, "opening mentor profile");
            session.selected_mentor = Some(mentor);
            session.page = Page::MentorProfile;
        }
        Intent::BackToDirectory => session.page = Page::Mentors,
        Intent::LoginSucceeded(_) | Intent::Logout => {}
    }
    if from != session.page {
        debug!(from = from.route(), to = session.page.route(), "navigated");
    }
    session
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
