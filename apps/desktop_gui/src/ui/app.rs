//! App shell: session gate, header navigation, event intake, and banners.

use std::path::PathBuf;

use client_core::{Catalog, Intent, Page, SessionState};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::SortKey;

use super::{
    directory::DirectoryView, home, login::LoginView, profile::ProfileView,
    stories::StoriesView, theme, UiAction,
};
use crate::backend_bridge::commands::BackendCommand;
use crate::config::Settings;
use crate::controller::events::{err_label, UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub window_title: String,
    pub default_identifier: String,
    pub seed_dir: Option<PathBuf>,
    pub default_sort: SortKey,
}

impl StartupConfig {
    /// Command-line values win over settings.
    pub fn from_settings(
        settings: Settings,
        identifier: Option<String>,
        seed_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            window_title: settings.window_title,
            default_identifier: identifier.unwrap_or(settings.default_identifier),
            seed_dir: seed_dir.or(settings.seed_dir),
            default_sort: settings.default_sort,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub title: &'static str,
    pub message: String,
}

pub struct MentorHubApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    default_sort: SortKey,

    session: SessionState,
    catalog: Option<Catalog>,
    login: LoginView,
    directory: DirectoryView,
    profile: ProfileView,
    stories: StoriesView,

    status: String,
    status_banner: Option<StatusBanner>,
    notice: Option<String>,
    signing_in: bool,
    theme_applied: bool,
}

impl MentorHubApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: &StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            default_sort: startup.default_sort,
            session: SessionState::default(),
            catalog: None,
            login: LoginView::new(&startup.default_identifier),
            directory: DirectoryView::new(startup.default_sort),
            profile: ProfileView::default(),
            stories: StoriesView::default(),
            status: "Not logged in".to_string(),
            status_banner: None,
            notice: None,
            signing_in: false,
            theme_applied: false,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.apply_event(event);
        }
    }

    pub fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::LoginOk(identity) => {
                if !std::mem::take(&mut self.signing_in) {
                    tracing::debug!(user = %identity.display_name, "dropping unrequested sign-in");
                    return;
                }
                tracing::info!(user = %identity.display_name, "signed in");
                self.status = format!("Signed in as {}", identity.display_name);
                self.status_banner = None;
                self.notice = None;
                self.login.clear_secret();
                self.directory = DirectoryView::new(self.default_sort);
                self.profile = ProfileView::default();
                self.stories = StoriesView::default();
                self.catalog = None;
                self.reduce(Intent::LoginSucceeded(identity));
                dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::LoadCatalog,
                    &mut self.status,
                );
            }
            UiEvent::CatalogLoaded(catalog) => {
                self.status = format!(
                    "Loaded {} mentors and {} stories",
                    catalog.mentors.len(),
                    catalog.stories.len()
                );
                self.catalog = Some(catalog);
            }
            UiEvent::ProfileDetailsLoaded(details) => {
                self.profile.details_loaded(details);
            }
            UiEvent::BookingConfirmed(confirmation) => {
                if !self.profile.booking.complete(confirmation.mentor_id) {
                    tracing::debug!(
                        mentor_id = %confirmation.mentor_id,
                        "dropping confirmation for a booking no form is waiting on"
                    );
                    return;
                }
                tracing::info!(reference = %confirmation.reference, "booking confirmed");
                self.notice = Some(confirmation.notice);
            }
            UiEvent::StoryShared(story) => match self.stories.composer.complete() {
                Some(notice) => {
                    tracing::info!(story_id = %story.id, "story shared");
                    self.notice = Some(notice.to_string());
                }
                None => tracing::debug!(story_id = %story.id, "dropping unrequested story reply"),
            },
            UiEvent::Error(err) => {
                match err.context() {
                    UiErrorContext::Login => self.signing_in = false,
                    UiErrorContext::Booking => self.profile.booking.fail(),
                    UiErrorContext::ShareStory => self.stories.composer.fail(),
                    _ => {}
                }
                self.show_error(err);
            }
        }
    }

    fn show_error(&mut self, err: UiError) {
        tracing::warn!(
            category = ?err.category(),
            context = ?err.context(),
            "{}",
            err.message()
        );
        if err.requires_reauth() && self.session.is_logged_in() {
            self.session = std::mem::take(&mut self.session).reduce(Intent::Logout);
            self.catalog = None;
        }
        self.status = format!("{}: {}", err_label(err.category()), err.message());
        self.status_banner = Some(StatusBanner {
            title: err_label(err.category()),
            message: err.message().to_string(),
        });
    }

    pub fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::SubmitLogin => self.try_login(),
            UiAction::Logout => self.sign_out(),
            UiAction::Navigate(page) => self.reduce(Intent::Navigate(page)),
            UiAction::OpenProfile(mentor) => {
                let mentor_id = mentor.id;
                self.reduce(Intent::OpenProfile(Some(mentor)));
                if self.profile.select(mentor_id) {
                    dispatch_backend_command(
                        &self.cmd_tx,
                        BackendCommand::LoadProfileDetails { mentor_id },
                        &mut self.status,
                    );
                }
            }
            UiAction::BackToDirectory => self.reduce(Intent::BackToDirectory),
            UiAction::ConfirmBooking => self.submit_booking(),
            UiAction::SubmitStory => self.submit_story(),
            UiAction::DismissBanner => self.status_banner = None,
            UiAction::DismissNotice => self.notice = None,
        }
    }

    fn reduce(&mut self, intent: Intent) {
        self.session = std::mem::take(&mut self.session).reduce(intent);
    }

    /// A repeated submit for a form that already closed is ignored.
    fn submit_booking(&mut self) {
        if !self.profile.booking.is_open() {
            return;
        }
        match self.profile.submit_booking() {
            Ok(request) => {
                let queued = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::BookSession { request },
                    &mut self.status,
                );
                if !queued {
                    self.profile.booking.fail();
                }
            }
            Err(err) => self.show_error(UiError::from_service(UiErrorContext::Booking, err)),
        }
    }

    fn submit_story(&mut self) {
        if !self.stories.composer.is_open() {
            return;
        }
        let Some(author) = self.session.user().cloned() else {
            return;
        };
        match self.stories.composer.submit() {
            Ok(draft) => {
                let queued = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::ShareStory { author, draft },
                    &mut self.status,
                );
                if !queued {
                    self.stories.composer.fail();
                }
            }
            Err(err) => self.show_error(UiError::from_service(UiErrorContext::ShareStory, err)),
        }
    }

    fn try_login(&mut self) {
        if self.signing_in {
            return;
        }
        match self.login.credentials() {
            Ok(credentials) => {
                self.status_banner = None;
                self.status = "Signing in...".to_string();
                self.signing_in = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::Login { credentials },
                    &mut self.status,
                );
            }
            Err(hint) => {
                self.show_error(UiError::from_message(UiErrorContext::Login, hint));
            }
        }
    }

    fn sign_out(&mut self) {
        self.reduce(Intent::Logout);
        self.catalog = None;
        self.notice = None;
        self.status_banner = None;
        self.login.clear_secret();
        self.status = "Signed out".to_string();
    }

    fn show_status_banner(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        if let Some(banner) = &self.status_banner {
            egui::Frame::NONE
                .fill(theme::ERROR_FILL)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("{}: {}", banner.title, banner.message))
                                .color(theme::ERROR_TEXT),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("✕").clicked() {
                                actions.push(UiAction::DismissBanner);
                            }
                        });
                    });
                });
            ui.add_space(6.0);
        }
        if let Some(notice) = &self.notice {
            egui::Frame::NONE
                .fill(theme::NOTICE_FILL)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(notice).color(theme::CALM_GREEN));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("✕").clicked() {
                                actions.push(UiAction::DismissNotice);
                            }
                        });
                    });
                });
            ui.add_space(6.0);
        }
    }

    fn show_header(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let (Some(page), Some(user)) = (self.session.page(), self.session.user()) else {
            return;
        };
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("MindfulMentors")
                        .size(20.0)
                        .strong()
                        .color(theme::ACCENT),
                );
                ui.add_space(24.0);
                for target in Page::NAVIGATION {
                    let active = page == target
                        || (target == Page::Mentors && page == Page::MentorProfile);
                    if ui.selectable_label(active, target.label()).clicked() {
                        actions.push(UiAction::Navigate(target));
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Logout").clicked() {
                        actions.push(UiAction::Logout);
                    }
                    ui.label(egui::RichText::new(&user.display_name).strong());
                });
            });
            ui.add_space(6.0);
        });
    }

    fn show_main(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        self.show_header(ctx, actions);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui, actions);
            let Some(page) = self.session.page() else {
                return;
            };
            if page == Page::Home {
                let name = self
                    .session
                    .user()
                    .map(|u| u.display_name.clone())
                    .unwrap_or_default();
                home::show(ui, &name, actions);
                return;
            }
            let Some(catalog) = self.catalog.as_ref() else {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.spinner();
                    ui.weak("Loading records...");
                });
                return;
            };
            match page {
                Page::Mentors => self.directory.show(ui, &catalog.mentors, actions),
                Page::MentorProfile => match self.session.profile_mentor() {
                    Some(mentor) => self.profile.show(ui, mentor, actions),
                    None => actions.push(UiAction::Navigate(Page::Mentors)),
                },
                Page::Stories => self.stories.show(ui, &catalog.stories, actions),
                Page::Home => {}
            }
        });
    }

    fn show_login_screen(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui, actions);
            self.login.show(ui, &self.status, self.signing_in, actions);
        });
    }
}

impl eframe::App for MentorHubApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            ctx.set_visuals(theme::visuals());
            self.theme_applied = true;
        }
        self.process_ui_events();

        let mut actions = Vec::new();
        if self.session.is_logged_in() {
            self.show_main(ctx, &mut actions);
        } else {
            self.show_login_screen(ctx, &mut actions);
        }
        for action in actions {
            self.handle_action(action);
        }

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
