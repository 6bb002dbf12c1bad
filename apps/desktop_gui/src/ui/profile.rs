//! Mentor profile: header, tabs, and the booking modal.

use client_core::{projection::star_row, BookingForm};
use eframe::egui;
use shared::{
    domain::{Mentor, MentorId, ProfileDetails, SessionKind},
    error::ServiceError,
    protocol::BookingRequest,
};

use super::{theme, UiAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    About,
    Reviews,
    Availability,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [
        ProfileTab::About,
        ProfileTab::Reviews,
        ProfileTab::Availability,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::About => "About",
            ProfileTab::Reviews => "Reviews",
            ProfileTab::Availability => "Availability",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileView {
    mentor_id: Option<MentorId>,
    pub tab: ProfileTab,
    details: Option<ProfileDetails>,
    pub booking: BookingForm,
}

impl ProfileView {
    /// Switching to another mentor resets the tab, closes the booking form and
    /// drops stale details. Returns whether details need to be fetched.
    pub fn select(&mut self, mentor_id: MentorId) -> bool {
        if self.mentor_id != Some(mentor_id) {
            self.booking.cancel();
            *self = Self {
                mentor_id: Some(mentor_id),
                booking: std::mem::take(&mut self.booking),
                ..Self::default()
            };
        }
        self.details.is_none()
    }

    /// Submits the open booking form for the mentor on screen.
    pub fn submit_booking(&mut self) -> Result<BookingRequest, ServiceError> {
        match (self.mentor_id, self.details.as_ref()) {
            (Some(mentor_id), Some(details)) => self.booking.submit(mentor_id, details),
            _ => Err(ServiceError::validation("profile details are still loading")),
        }
    }

    /// Late answers for a mentor no longer shown are dropped.
    pub fn details_loaded(&mut self, details: ProfileDetails) {
        if self.mentor_id == Some(details.mentor_id) {
            self.details = Some(details);
        }
    }

    pub fn details(&self) -> Option<&ProfileDetails> {
        self.details.as_ref()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, mentor: &Mentor, actions: &mut Vec<UiAction>) {
        if ui.button("← Back to Mentors").clicked() {
            actions.push(UiAction::BackToDirectory);
        }
        ui.add_space(6.0);

        egui::ScrollArea::vertical()
            .id_salt("profile_scroll")
            .show(ui, |ui| {
                self.show_header(ui, mentor);
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    for tab in ProfileTab::ALL {
                        ui.selectable_value(&mut self.tab, tab, tab.label());
                    }
                });
                ui.separator();

                let Some(details) = self.details.as_ref() else {
                    ui.spinner();
                    return;
                };
                match self.tab {
                    ProfileTab::About => about_tab(ui, mentor, details),
                    ProfileTab::Reviews => reviews_tab(ui, mentor, details),
                    ProfileTab::Availability => availability_tab(ui, details),
                }
            });

        self.show_booking_modal(ui.ctx(), mentor, actions);
    }

    fn show_header(&mut self, ui: &mut egui::Ui, mentor: &Mentor) {
        theme::card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&mentor.name).size(26.0).strong());
                if mentor.verified {
                    ui.label(
                        egui::RichText::new("✔ Verified Professional").color(theme::CALM_GREEN),
                    );
                }
            });
            ui.label(egui::RichText::new(&mentor.title).color(theme::ACCENT));
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(format!("★ {:.1}", mentor.rating)).color(theme::STAR));
                ui.weak(format!("({} reviews)", mentor.reviews));
                ui.weak(format!("· {} · {}", mentor.location, mentor.availability));
            });
            ui.add_space(4.0);
            ui.label(egui::RichText::new("Specialties").strong());
            ui.horizontal_wrapped(|ui| {
                for specialty in &mentor.specialties {
                    theme::pill(ui, specialty);
                }
            });
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&mentor.price).size(18.0).strong());
                let can_book = self
                    .details
                    .as_ref()
                    .is_some_and(|d| d.first_available_slot().is_some());
                if ui
                    .add_enabled(can_book, theme::primary_button("Book Session"))
                    .clicked()
                {
                    if let Some(details) = &self.details {
                        self.booking.open(details);
                    }
                }
            });
        });
    }

    fn show_booking_modal(
        &mut self,
        ctx: &egui::Context,
        mentor: &Mentor,
        actions: &mut Vec<UiAction>,
    ) {
        if !self.booking.is_open() {
            return;
        }
        let Some(details) = self.details.as_ref() else {
            return;
        };

        let mut submit = false;
        let mut cancel = false;
        egui::Window::new("Book a Session")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(format!("with {}", mentor.name)).weak());
                ui.add_space(6.0);
                ui.label(egui::RichText::new("Session Type").strong());
                let mut session = self.booking.session();
                egui::ComboBox::from_id_salt("booking_session")
                    .selected_text(session.label())
                    .show_ui(ui, |ui| {
                        for kind in SessionKind::ALL {
                            ui.selectable_value(&mut session, kind, kind.label());
                        }
                    });
                self.booking.select_session(session);

                ui.add_space(6.0);
                ui.label(egui::RichText::new("Time Slot").strong());
                for (index, slot) in details.slots.iter().enumerate() {
                    let selected = self.booking.slot_index() == Some(index);
                    let text = if slot.available {
                        slot.label()
                    } else {
                        format!("{} (Booked)", slot.label())
                    };
                    let response =
                        ui.add_enabled(slot.available, egui::RadioButton::new(selected, text));
                    if response.clicked() {
                        self.booking.select_slot(details, index);
                    }
                }

                ui.add_space(8.0);
                let waiting = self.booking.is_pending();
                if waiting {
                    ui.weak("Waiting for your previous booking to be confirmed...");
                }
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                    if ui
                        .add_enabled(!waiting, theme::primary_button("Confirm Booking"))
                        .clicked()
                    {
                        submit = true;
                    }
                });
            });

        if cancel {
            self.booking.cancel();
        } else if submit {
            actions.push(UiAction::ConfirmBooking);
        }
    }
}

fn about_tab(ui: &mut egui::Ui, mentor: &Mentor, details: &ProfileDetails) {
    ui.label(egui::RichText::new("About Me").size(18.0).strong());
    ui.label(&mentor.bio);
    ui.add_space(10.0);

    ui.label(egui::RichText::new("Session Types").size(18.0).strong());
    egui::Grid::new("profile_sessions")
        .num_columns(3)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            for offer in &details.sessions {
                ui.label(offer.kind.label());
                ui.weak(&offer.duration);
                ui.label(egui::RichText::new(&offer.price).strong());
                ui.end_row();
            }
        });
    ui.add_space(10.0);

    egui::Grid::new("profile_facts")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            ui.weak("Experience");
            ui.label(&mentor.experience);
            ui.end_row();
            ui.weak("Languages");
            ui.label(mentor.languages.join(", "));
            ui.end_row();
            ui.weak("Location");
            ui.label(&mentor.location);
            ui.end_row();
            ui.weak("Availability");
            ui.label(&mentor.availability);
            ui.end_row();
        });
}

fn reviews_tab(ui: &mut egui::Ui, mentor: &Mentor, details: &ProfileDetails) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Client Reviews").size(18.0).strong());
        ui.label(egui::RichText::new(format!("★ {:.1}", mentor.rating)).color(theme::STAR));
        ui.weak(format!("({} reviews)", mentor.reviews));
    });
    ui.add_space(6.0);
    for review in &details.reviews {
        theme::card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&review.reviewer).strong());
                ui.label(egui::RichText::new(star_row(review.stars)).color(theme::STAR));
                ui.weak(&review.date);
            });
            ui.label(&review.comment);
        });
        ui.add_space(6.0);
    }
}

fn availability_tab(ui: &mut egui::Ui, details: &ProfileDetails) {
    ui.label(egui::RichText::new("Available Time Slots").size(18.0).strong());
    ui.add_space(6.0);
    egui::Grid::new("profile_slots")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            for slot in &details.slots {
                if slot.available {
                    ui.label(slot.label());
                    ui.label(egui::RichText::new("Available").color(theme::CALM_GREEN));
                } else {
                    ui.weak(slot.label());
                    ui.weak("Booked");
                }
                ui.end_row();
            }
        });
}
