//! Calm light palette shared by every surface.

use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const ACCENT_SOFT: egui::Color32 = egui::Color32::from_rgb(219, 234, 254);
pub const CALM_GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
pub const STAR: egui::Color32 = egui::Color32::from_rgb(234, 179, 8);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);
pub const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(254, 226, 226);
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(153, 27, 27);
pub const NOTICE_FILL: egui::Color32 = egui::Color32::from_rgb(220, 252, 231);

const CARD_ROUNDING: u8 = 12;

pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round() as u8
    };
    egui::Color32::from_rgb(mix(c.r()), mix(c.g()), mix(c.b()))
}

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.hyperlink_color = ACCENT;
    visuals.panel_fill = egui::Color32::from_rgb(248, 250, 252);
    visuals.window_fill = egui::Color32::WHITE;
    visuals.faint_bg_color = lighten_color(ACCENT_SOFT, 0.5);
    visuals.window_corner_radius = egui::CornerRadius::same(CARD_ROUNDING);
    visuals.menu_corner_radius = egui::CornerRadius::same(CARD_ROUNDING / 2);
    visuals.selection.bg_fill = ACCENT;
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.hovered.bg_fill = lighten_color(ACCENT, 0.75);
    visuals
}

/// White rounded card with a hairline border.
pub fn card() -> egui::Frame {
    egui::Frame::NONE
        .fill(egui::Color32::WHITE)
        .corner_radius(CARD_ROUNDING as f32)
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(229, 231, 235)))
        .inner_margin(egui::Margin::symmetric(16, 14))
}

pub fn pill(ui: &mut egui::Ui, text: &str) {
    egui::Frame::NONE
        .fill(ACCENT_SOFT)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().color(ACCENT));
        });
}

pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.to_string())
            .strong()
            .color(egui::Color32::WHITE),
    )
    .fill(ACCENT)
    .min_size(egui::vec2(120.0, 32.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_moves_toward_white() {
        let c = lighten_color(egui::Color32::from_rgb(0, 100, 200), 0.5);
        assert_eq!((c.r(), c.g(), c.b()), (128, 178, 228));
        assert_eq!(lighten_color(ACCENT, 1.0), egui::Color32::WHITE);
        assert_eq!(lighten_color(ACCENT, -3.0), ACCENT);
    }
}
