//! Mentor directory: search, specialty facet, sort, and result cards.

use client_core::{
    filter_mentors, projection::mentor_results_summary, MentorCard, MentorQuery,
};
use eframe::egui;
use shared::domain::{Mentor, SortKey, DIRECTORY_SPECIALTY_FACETS};

use super::{theme, UiAction};

/// Survives trips to a profile and back; reset on logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryView {
    pub query: MentorQuery,
}

impl DirectoryView {
    pub fn new(default_sort: SortKey) -> Self {
        Self {
            query: MentorQuery {
                text: String::new(),
                specialty: DIRECTORY_SPECIALTY_FACETS[0].to_string(),
                sort: default_sort,
            },
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, mentors: &[Mentor], actions: &mut Vec<UiAction>) {
        ui.heading("Find Your Perfect Mentor");
        ui.weak("Connect with qualified mental health professionals who understand your journey");
        ui.add_space(8.0);

        theme::card().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.query.text)
                        .hint_text("Search by name or specialty...")
                        .desired_width(280.0),
                );
                egui::ComboBox::from_id_salt("directory_specialty")
                    .selected_text(self.query.specialty.clone())
                    .show_ui(ui, |ui| {
                        for facet in DIRECTORY_SPECIALTY_FACETS {
                            ui.selectable_value(
                                &mut self.query.specialty,
                                facet.to_string(),
                                facet,
                            );
                        }
                    });
                egui::ComboBox::from_id_salt("directory_sort")
                    .selected_text(self.query.sort.label())
                    .show_ui(ui, |ui| {
                        for sort in SortKey::ALL {
                            ui.selectable_value(&mut self.query.sort, sort, sort.label());
                        }
                    });
            });
        });

        let shown = filter_mentors(mentors, &self.query);
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(mentor_results_summary(shown.len(), mentors.len()))
                .color(theme::MUTED),
        );
        ui.add_space(6.0);

        if shown.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(egui::RichText::new("No mentors found").size(20.0).strong());
                ui.weak("Try adjusting your search criteria or filters");
            });
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("directory_results")
            .show(ui, |ui| {
                for mentor in shown {
                    mentor_card(ui, mentor, actions);
                    ui.add_space(8.0);
                }
            });
    }
}

fn mentor_card(ui: &mut egui::Ui, mentor: &Mentor, actions: &mut Vec<UiAction>) {
    let card = MentorCard::from(mentor);
    theme::card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&card.name).size(18.0).strong());
            if card.verified {
                ui.label(egui::RichText::new("✔ Verified").small().color(theme::CALM_GREEN));
            }
        });
        ui.label(egui::RichText::new(&card.title).color(theme::ACCENT));
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("★ {:.1}", card.rating)).color(theme::STAR));
            ui.weak(format!("({} reviews)", card.reviews));
        });
        ui.horizontal_wrapped(|ui| {
            for specialty in &card.specialties {
                theme::pill(ui, specialty);
            }
            if let Some(more) = card.more_label() {
                ui.weak(more);
            }
        });
        ui.weak(format!(
            "{} · {} · {}",
            card.location, card.experience, card.availability
        ));
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&card.price).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(theme::primary_button("View Profile")).clicked() {
                    actions.push(UiAction::OpenProfile(mentor.clone()));
                }
            });
        });
    });
}
