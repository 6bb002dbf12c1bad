//! Landing surface after sign-in.

use client_core::Page;
use eframe::egui;

use super::{theme, UiAction};

pub const PLATFORM_STATS: [(&str, &str); 4] = [
    ("500+", "Qualified Mentors"),
    ("10K+", "Success Stories"),
    ("50K+", "Community Members"),
    ("98%", "Satisfaction Rate"),
];

pub const FEATURES: [(&str, &str); 4] = [
    (
        "Qualified Mentors",
        "Connect with certified mental health professionals and experienced mentors",
    ),
    (
        "Safe Environment",
        "A secure, judgment-free space for sharing and healing",
    ),
    (
        "Community Stories",
        "Share your journey and find inspiration in others' experiences",
    ),
    (
        "24/7 Support",
        "Access resources and community support whenever you need it",
    ),
];

pub fn show(ui: &mut egui::Ui, display_name: &str, actions: &mut Vec<UiAction>) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(egui::RichText::new(format!("Welcome, {display_name}")).color(theme::MUTED));
            ui.label(egui::RichText::new("Your Mental Health").size(34.0).strong());
            ui.label(
                egui::RichText::new("Journey Starts Here")
                    .size(34.0)
                    .strong()
                    .color(theme::ACCENT),
            );
            ui.add_space(8.0);
            ui.label(
                "Connect with qualified mentors, share your story, and find support in a caring \
                 community dedicated to mental wellness and personal growth.",
            );
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                let width = ui.available_width();
                ui.add_space((width - 300.0).max(0.0) / 2.0);
                if ui.add(theme::primary_button("Find Your Mentor")).clicked() {
                    actions.push(UiAction::Navigate(Page::Mentors));
                }
                if ui
                    .add(egui::Button::new("Read Stories").min_size(egui::vec2(120.0, 32.0)))
                    .clicked()
                {
                    actions.push(UiAction::Navigate(Page::Stories));
                }
            });
        });

        ui.add_space(28.0);
        ui.columns(PLATFORM_STATS.len(), |columns| {
            for (column, (number, label)) in columns.iter_mut().zip(PLATFORM_STATS) {
                column.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(number)
                            .size(28.0)
                            .strong()
                            .color(theme::CALM_GREEN),
                    );
                    ui.label(egui::RichText::new(label).color(theme::MUTED));
                });
            }
        });

        ui.add_space(28.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Why Choose MindfulMentors?").size(24.0).strong());
        });
        ui.add_space(10.0);
        ui.columns(FEATURES.len(), |columns| {
            for (column, (title, blurb)) in columns.iter_mut().zip(FEATURES) {
                theme::card().show(column, |ui| {
                    ui.label(egui::RichText::new(title).strong());
                    ui.label(egui::RichText::new(blurb).color(theme::MUTED));
                });
            }
        });

        ui.add_space(28.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Ready to Start Your Journey?").size(22.0).strong());
            if ui.add(theme::primary_button("Get Started Today")).clicked() {
                actions.push(UiAction::Navigate(Page::Mentors));
            }
        });
        ui.add_space(24.0);
    });
}
