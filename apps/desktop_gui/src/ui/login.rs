//! Sign-in surface. Any non-empty identifier and password pair is accepted.

use eframe::egui;
use shared::protocol::Credentials;

use super::{theme, UiAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginFocusField {
    Identifier,
    Secret,
}

#[derive(Debug, Clone)]
pub struct LoginView {
    pub identifier: String,
    pub secret: String,
    focus: Option<LoginFocusField>,
}

impl LoginView {
    pub fn new(default_identifier: &str) -> Self {
        let focus = if default_identifier.is_empty() {
            LoginFocusField::Identifier
        } else {
            LoginFocusField::Secret
        };
        Self {
            identifier: default_identifier.to_string(),
            secret: String::new(),
            focus: Some(focus),
        }
    }

    /// Returns the missing-field hint, or the credentials to submit.
    pub fn credentials(&mut self) -> Result<Credentials, &'static str> {
        if self.identifier.trim().is_empty() {
            self.focus = Some(LoginFocusField::Identifier);
            return Err("Email is required.");
        }
        if self.secret.trim().is_empty() {
            self.focus = Some(LoginFocusField::Secret);
            return Err("Password is required.");
        }
        Ok(Credentials::new(self.identifier.trim(), self.secret.clone()))
    }

    /// Keeps the identifier for the next sign-in.
    pub fn clear_secret(&mut self) {
        self.secret.clear();
        self.focus = Some(LoginFocusField::Secret);
    }

    /// `busy` disables submitting while a sign-in is in flight.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        status: &str,
        busy: bool,
        actions: &mut Vec<UiAction>,
    ) {
        let avail = ui.available_size();
        let card_width = avail.x.clamp(380.0, 460.0);
        ui.add_space((avail.y * 0.14).clamp(18.0, 110.0));

        ui.vertical_centered(|ui| {
            ui.set_width(card_width);
            theme::card().show(ui, |ui| {
                ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);
                ui.vertical_centered(|ui| {
                    ui.heading(egui::RichText::new("MindfulMentors").color(theme::ACCENT));
                    ui.weak("Sign in to continue your journey.");
                });
                ui.add_space(6.0);

                let focus = self.focus.take();
                ui.label("Email");
                let id_resp = ui.add(
                    egui::TextEdit::singleline(&mut self.identifier)
                        .hint_text("you@example.org")
                        .desired_width(f32::INFINITY),
                );
                if focus == Some(LoginFocusField::Identifier) {
                    id_resp.request_focus();
                }

                ui.label("Password");
                let secret_resp = ui.add(
                    egui::TextEdit::singleline(&mut self.secret)
                        .password(true)
                        .desired_width(f32::INFINITY),
                );
                if focus == Some(LoginFocusField::Secret) {
                    secret_resp.request_focus();
                }

                let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
                let fields_focused = id_resp.has_focus()
                    || secret_resp.has_focus()
                    || id_resp.lost_focus()
                    || secret_resp.lost_focus();
                if enter_pressed && fields_focused && !busy {
                    actions.push(UiAction::SubmitLogin);
                }

                ui.add_space(4.0);
                let label = if busy { "Signing in..." } else { "Sign in" };
                let button =
                    theme::primary_button(label).min_size(egui::vec2(ui.available_width(), 38.0));
                if ui.add_enabled(!busy, button).clicked() {
                    actions.push(UiAction::SubmitLogin);
                }

                ui.separator();
                ui.horizontal_wrapped(|ui| {
                    ui.small("Status:");
                    ui.small(egui::RichText::new(status).weak());
                });
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_reported_before_dispatch() {
        let mut view = LoginView::new("");
        assert_eq!(view.credentials().expect_err("id"), "Email is required.");
        view.identifier = "  lee@example.org ".into();
        view.secret = "   ".into();
        assert_eq!(view.credentials().expect_err("secret"), "Password is required.");
    }

    #[test]
    fn complete_fields_become_trimmed_credentials() {
        let mut view = LoginView::new("lee@example.org");
        view.secret = "pw".into();
        let credentials = view.credentials().expect("credentials");
        assert_eq!(credentials.identifier, "lee@example.org");
        assert!(credentials.is_complete());

        view.clear_secret();
        assert!(view.secret.is_empty());
        assert_eq!(view.identifier, "lee@example.org");
    }
}
