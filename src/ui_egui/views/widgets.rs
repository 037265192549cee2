//! Small shared widgets used across the dashboards: cards, badges,
//! star ratings, avatar placeholders and empty states.

use egui::{Color32, RichText, Ui};

use crate::ui_egui::theme::AppTheme;

/// Standard card frame used for dashboard panels
pub(crate) fn card_frame(theme: &AppTheme) -> egui::Frame {
    egui::Frame::none()
        .fill(theme.card_background)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(16.0))
}

/// Slightly inset frame for nested sections inside a card
pub(crate) fn inset_frame(theme: &AppTheme) -> egui::Frame {
    egui::Frame::none()
        .fill(theme.inset_background)
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(10.0))
}

/// Small pill-shaped status/tag badge
pub(crate) fn badge(ui: &mut Ui, text: &str, text_color: Color32, fill: Color32) {
    egui::Frame::none()
        .fill(fill)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(11.0).color(text_color));
        });
}

/// Row of five stars, filled up to `rating`
pub(crate) fn star_row(ui: &mut Ui, rating: u8, size: f32, theme: &AppTheme) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 1.0;
        for i in 0..5 {
            let color = if i < rating {
                theme.star
            } else {
                theme.border
            };
            ui.label(RichText::new("★").size(size).color(color));
        }
    });
}

/// Row of five dots for the 1-5 time-management score
pub(crate) fn dot_scale(ui: &mut Ui, score: u8, theme: &AppTheme) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 3.0;
        for i in 0..5 {
            let color = if i < score { theme.accent } else { theme.border };
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), 4.0, color);
        }
        ui.label(
            RichText::new(format!("{score}/5"))
                .size(12.0)
                .color(theme.text_secondary),
        );
    });
}

/// Circular avatar placeholder showing the person's initials
pub(crate) fn avatar_circle(ui: &mut Ui, initials: &str, diameter: f32, theme: &AppTheme) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), diameter / 2.0, theme.accent_soft);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(diameter * 0.38),
        theme.accent,
    );
}

/// Centered placeholder for lists with nothing to show
pub(crate) fn empty_state(ui: &mut Ui, icon: &str, title: &str, subtitle: &str, theme: &AppTheme) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(icon).size(32.0).color(theme.border));
        ui.add_space(4.0);
        ui.label(RichText::new(title).strong().color(theme.text_primary));
        ui.label(RichText::new(subtitle).color(theme.text_secondary));
    });
    ui.add_space(24.0);
}

/// Dashboard stat card: big value over a caption, with a leading icon
pub(crate) fn stat_card(
    ui: &mut Ui,
    width: f32,
    icon: &str,
    icon_color: Color32,
    value: &str,
    caption: &str,
    theme: &AppTheme,
) {
    card_frame(theme).show(ui, |ui| {
        ui.set_width(width);
        ui.label(RichText::new(icon).size(20.0).color(icon_color));
        ui.add_space(6.0);
        ui.label(
            RichText::new(value)
                .size(24.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.label(RichText::new(caption).size(12.0).color(theme.text_secondary));
    });
}

/// Section heading inside a card
pub(crate) fn section_heading(ui: &mut Ui, text: &str, theme: &AppTheme) {
    ui.label(
        RichText::new(text)
            .size(17.0)
            .strong()
            .color(theme.text_primary),
    );
    ui.add_space(8.0);
}
