//! Shared rendering for feedback entries: the card used on the mentor's
//! Feedback tab and the timeline entries on both history screens.

use egui::{RichText, Ui};

use crate::models::feedback::Feedback;
use crate::ui_egui::theme::AppTheme;
use crate::ui_egui::views::widgets::{avatar_circle, badge, dot_scale, inset_frame, star_row};
use crate::utils::date;

/// One feedback entry. `show_mentor` controls whether the mentor's name and
/// avatar lead the card (student history) or are omitted (mentor views).
pub fn feedback_entry(ui: &mut Ui, feedback: &Feedback, show_mentor: bool, theme: &AppTheme) {
    inset_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            if show_mentor {
                let initials: String = feedback
                    .mentor_name
                    .split_whitespace()
                    .filter_map(|word| word.chars().next())
                    .take(2)
                    .collect();
                avatar_circle(ui, &initials, 32.0, theme);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&feedback.mentor_name)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.label(
                        RichText::new(date::long_date(feedback.date))
                            .size(11.0)
                            .color(theme.text_secondary),
                    );
                });
            } else {
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new("Session Completed")
                                .strong()
                                .color(theme.text_primary),
                        );
                        star_row(ui, feedback.rating, 13.0, theme);
                    });
                    ui.label(
                        RichText::new(date::long_date(feedback.date))
                            .size(11.0)
                            .color(theme.text_secondary),
                    );
                });
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if feedback.would_book_again {
                    badge(ui, "Would book again", theme.success, theme.success_soft);
                }
            });
        });

        if show_mentor {
            star_row(ui, feedback.rating, 14.0, theme);
        }
        ui.add_space(6.0);

        ui.label(
            RichText::new("What worked well:")
                .size(12.0)
                .color(theme.text_secondary),
        );
        ui.label(RichText::new(&feedback.what_worked_well).color(theme.text_primary));

        if !feedback.areas_for_improvement.is_empty() {
            ui.add_space(4.0);
            ui.label(
                RichText::new("Areas for improvement:")
                    .size(12.0)
                    .color(theme.text_secondary),
            );
            ui.label(RichText::new(&feedback.areas_for_improvement).color(theme.text_primary));
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Time Management:")
                    .size(12.0)
                    .color(theme.text_secondary),
            );
            dot_scale(ui, feedback.time_management, theme);
        });
    });
    ui.add_space(8.0);
}
