//! UI/backend events and error modeling for desktop GUI controller.

use client_core::Catalog;
use shared::{
    domain::{ProfileDetails, Story},
    error::{ErrorCode, ServiceError},
    protocol::{BookingConfirmation, UserIdentity},
};

pub enum UiEvent {
    Info(String),
    LoginOk(UserIdentity),
    CatalogLoaded(Catalog),
    ProfileDetailsLoaded(ProfileDetails),
    BookingConfirmed(BookingConfirmation),
    StoryShared(Story),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Auth,
    NotFound,
    Validation,
    Unavailable,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Login,
    Catalog,
    Profile,
    Booking,
    ShareStory,
    General,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_service(context: UiErrorContext, err: ServiceError) -> Self {
        let category = match err.code {
            ErrorCode::Unauthorized => UiErrorCategory::Auth,
            ErrorCode::NotFound => UiErrorCategory::NotFound,
            ErrorCode::Validation => UiErrorCategory::Validation,
            ErrorCode::Unavailable => UiErrorCategory::Unavailable,
            ErrorCode::Internal => UiErrorCategory::Unknown,
        };
        Self {
            category,
            context,
            message: err.message,
        }
    }

    /// For failures that never crossed a collaborator boundary.
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_ascii_lowercase();
        let category = if lower.contains("disconnected")
            || lower.contains("queue is full")
            || lower.contains("startup failure")
        {
            UiErrorCategory::Unavailable
        } else if lower.contains("required") || lower.contains("missing") {
            UiErrorCategory::Validation
        } else {
            UiErrorCategory::Unknown
        };
        Self {
            category,
            context,
            message,
        }
    }

    pub fn requires_reauth(&self) -> bool {
        self.category == UiErrorCategory::Auth
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Auth => "Authentication",
        UiErrorCategory::NotFound => "Not found",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unavailable => "Unavailable",
        UiErrorCategory::Unknown => "Unexpected",
    }
}
