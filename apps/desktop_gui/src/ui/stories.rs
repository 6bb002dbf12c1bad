//! Community stories feed and the share-your-story composer.

use client_core::{filter_stories, StoryCard, StoryComposer, StoryQuery};
use eframe::egui;
use shared::domain::{CategoryFilter, Story, StoryCategory};

use super::{theme, UiAction};

#[derive(Debug, Clone, Default)]
pub struct StoriesView {
    pub query: StoryQuery,
    pub composer: StoryComposer,
}

impl StoriesView {
    pub fn show(&mut self, ui: &mut egui::Ui, stories: &[Story], actions: &mut Vec<UiAction>) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading("Community Stories");
                ui.weak("Real experiences from people on their mental health journey");
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(theme::primary_button("Share Your Story")).clicked() {
                    self.composer.open();
                }
            });
        });
        ui.add_space(8.0);

        theme::card().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.query.text)
                        .hint_text("Search stories, tags, or topics...")
                        .desired_width(280.0),
                );
                egui::ComboBox::from_id_salt("stories_category")
                    .selected_text(self.query.category.label())
                    .show_ui(ui, |ui| {
                        for facet in CategoryFilter::facets() {
                            ui.selectable_value(&mut self.query.category, facet, facet.label());
                        }
                    });
            });
        });
        ui.add_space(8.0);

        let shown = filter_stories(stories, &self.query);
        if shown.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(egui::RichText::new("No stories found").size(20.0).strong());
                ui.weak("Try adjusting your search or category filter");
            });
        } else {
            egui::ScrollArea::vertical()
                .id_salt("stories_feed")
                .show(ui, |ui| {
                    for story in shown {
                        story_card(ui, &StoryCard::from(story));
                        ui.add_space(8.0);
                    }
                });
        }

        self.show_composer(ui.ctx(), actions);
    }

    fn show_composer(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        if !self.composer.is_open() {
            return;
        }
        let mut submit = false;
        let mut cancel = false;
        egui::Window::new("Share Your Story")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let composer = &mut self.composer;
                ui.label("Story Title");
                ui.add(
                    egui::TextEdit::singleline(&mut composer.title)
                        .hint_text("Give your story a meaningful title...")
                        .desired_width(420.0),
                );
                ui.label("Category");
                egui::ComboBox::from_id_salt("composer_category")
                    .selected_text(composer.category.label())
                    .show_ui(ui, |ui| {
                        for category in StoryCategory::ALL {
                            ui.selectable_value(&mut composer.category, category, category.label());
                        }
                    });
                ui.label("Your Story");
                ui.add(
                    egui::TextEdit::multiline(&mut composer.content)
                        .hint_text(
                            "Share your experience, what you've learned, or advice for others...",
                        )
                        .desired_rows(8)
                        .desired_width(420.0),
                );
                ui.label("Tags");
                ui.add(
                    egui::TextEdit::singleline(&mut composer.tags)
                        .hint_text("hope, anxiety, recovery")
                        .desired_width(420.0),
                );
                ui.checkbox(&mut composer.is_anonymous, "Share anonymously");

                ui.add_space(8.0);
                if composer.is_pending() {
                    ui.weak("Your previous story is still being shared...");
                }
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                    let ready = !composer.is_pending()
                        && !composer.title.trim().is_empty()
                        && !composer.content.trim().is_empty();
                    if ui
                        .add_enabled(ready, theme::primary_button("Share Story"))
                        .clicked()
                    {
                        submit = true;
                    }
                });
            });

        if cancel {
            self.composer.cancel();
        } else if submit {
            actions.push(UiAction::SubmitStory);
        }
    }
}

fn story_card(ui: &mut egui::Ui, card: &StoryCard) {
    theme::card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            let avatar = card
                .avatar_initial
                .map(|c| c.to_string())
                .unwrap_or_else(|| "?".to_string());
            ui.label(egui::RichText::new(avatar).strong().color(theme::ACCENT));
            ui.label(egui::RichText::new(&card.author_label).strong());
            ui.weak(&card.date);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                theme::pill(ui, card.category.label());
            });
        });
        ui.label(egui::RichText::new(&card.title).size(18.0).strong());
        ui.label(&card.content);
        ui.horizontal_wrapped(|ui| {
            for tag in card.hashtags() {
                ui.label(egui::RichText::new(tag).small().color(theme::ACCENT));
            }
        });
        ui.horizontal(|ui| {
            ui.weak(format!("♥ {}", card.likes));
            ui.weak(format!("💬 {}", card.comments));
        });
    });
}
