//! UI layer for desktop GUI: app shell, surfaces, and theme.

pub mod app;
pub mod directory;
pub mod home;
pub mod login;
pub mod profile;
pub mod stories;
pub mod theme;

pub use app::{MentorHubApp, StartupConfig};

use client_core::Page;
use shared::domain::Mentor;

/// What a surface asks the app shell to do after a frame.
#[derive(Debug, Clone)]
pub enum UiAction {
    SubmitLogin,
    Logout,
    Navigate(Page),
    OpenProfile(Mentor),
    BackToDirectory,
    /// Submit the open booking form.
    ConfirmBooking,
    /// Submit the open story composer.
    SubmitStory,
    DismissBanner,
    DismissNotice,
}
