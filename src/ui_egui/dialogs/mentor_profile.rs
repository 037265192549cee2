//! Mentor profile modal opened from the discovery grid.

use egui::{Context, RichText, Vec2};

use crate::models::mentor::Mentor;
use crate::ui_egui::theme::AppTheme;
use crate::ui_egui::views::widgets::{avatar_circle, badge, star_row};

/// What the user chose on the profile modal this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    None,
    Close,
    Book,
}

pub fn render_mentor_profile(ctx: &Context, mentor: &Mentor, theme: &AppTheme) -> ProfileAction {
    let mut action = ProfileAction::None;
    let mut open = true;

    egui::Window::new(RichText::new(&mentor.name).strong())
        .id(egui::Id::new("mentor_profile_modal"))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
        .default_width(380.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                avatar_circle(ui, &mentor.initials(), 52.0, theme);
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        star_row(ui, mentor.rating.round() as u8, 14.0, theme);
                        ui.label(
                            RichText::new(format!(
                                "{:.1} ({} reviews)",
                                mentor.rating, mentor.total_reviews
                            ))
                            .size(12.0)
                            .color(theme.text_secondary),
                        );
                    });
                    ui.label(
                        RichText::new(format!("{} of experience", mentor.experience))
                            .size(12.0)
                            .color(theme.text_secondary),
                    );
                    if let Some(rate) = mentor.hourly_rate {
                        ui.label(
                            RichText::new(format!("${rate}/hour"))
                                .size(12.0)
                                .color(theme.text_primary),
                        );
                    }
                });
            });

            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                for skill in &mentor.expertise {
                    badge(ui, skill, theme.accent, theme.accent_soft);
                }
            });

            ui.add_space(8.0);
            ui.label(RichText::new(&mentor.bio).color(theme.text_primary));

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Close").clicked() {
                    action = ProfileAction::Close;
                }
                let book = egui::Button::new(
                    RichText::new("Book Session").color(egui::Color32::WHITE),
                )
                .fill(theme.accent);
                if ui.add(book).clicked() {
                    action = ProfileAction::Book;
                }
            });
        });

    if !open {
        action = ProfileAction::Close;
    }
    action
}
