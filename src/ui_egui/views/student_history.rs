//! Student session history: stats, past feedback, and the entry point for
//! leaving feedback on completed sessions that don't have any yet.

use egui::{RichText, Ui};

use crate::models::booking::BookingStatus;
use crate::services::feedback;
use crate::services::store::DataStore;
use crate::ui_egui::dialogs::feedback_form::FeedbackFormState;
use crate::ui_egui::theme::AppTheme;
use crate::ui_egui::views::feedback_cards::feedback_entry;
use crate::ui_egui::views::student_dashboard::{StudentScreen, StudentState};
use crate::ui_egui::views::widgets::{card_frame, empty_state, section_heading, stat_card};

pub fn render_student_history(
    ui: &mut Ui,
    state: &mut StudentState,
    store: &DataStore,
    theme: &AppTheme,
) {
    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new("Session History")
                        .size(20.0)
                        .strong()
                        .color(theme.text_primary),
                );
                ui.label(
                    RichText::new("Review your past sessions and feedback")
                        .color(theme.text_secondary),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Back to Dashboard").clicked() {
                    state.screen = StudentScreen::Dashboard;
                }
            });
        });
    });
    ui.add_space(12.0);

    let student_id = store.current_student().id.clone();
    let stats = feedback::stats_for_student(store, &student_id);
    let card_width = ((ui.available_width() - 2.0 * 12.0) / 3.0).max(180.0);
    ui.horizontal(|ui| {
        stat_card(
            ui,
            card_width,
            "📅",
            theme.accent,
            &stats.total_sessions.to_string(),
            "Sessions Completed",
            theme,
        );
        stat_card(
            ui,
            card_width,
            "⭐",
            theme.warning,
            &format!("{} ⭐", stats.average_label()),
            "Avg. Rating Given",
            theme,
        );
        stat_card(
            ui,
            card_width,
            "💬",
            theme.success,
            &stats.would_book_again.to_string(),
            "Would Book Again",
            theme,
        );
    });
    ui.add_space(12.0);

    render_pending_feedback(ui, state, store, theme);

    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        section_heading(ui, "Your Feedback", theme);

        let entries: Vec<_> = store
            .feedback_for_student(&student_id)
            .into_iter()
            .cloned()
            .collect();
        if entries.is_empty() {
            empty_state(
                ui,
                "⭐",
                "No Feedback Yet",
                "Complete a session to leave feedback",
                theme,
            );
            return;
        }
        for entry in &entries {
            feedback_entry(ui, entry, true, theme);
        }
    });
}

/// Completed sessions that still await feedback get a call-to-action
fn render_pending_feedback(
    ui: &mut Ui,
    state: &mut StudentState,
    store: &DataStore,
    theme: &AppTheme,
) {
    let student_id = store.current_student().id.clone();
    let reviewed: Vec<String> = store
        .feedback_for_student(&student_id)
        .into_iter()
        .map(|f| f.booking_id.clone())
        .collect();
    let awaiting: Vec<_> = store
        .bookings_for_student(&student_id)
        .into_iter()
        .filter(|b| b.status == BookingStatus::Completed && !reviewed.contains(&b.id))
        .cloned()
        .collect();
    if awaiting.is_empty() {
        return;
    }

    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        section_heading(ui, "Awaiting Your Feedback", theme);
        for booking in &awaiting {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{} — {} {}",
                        booking.mentor_name,
                        crate::utils::date::short_date(booking.date),
                        booking.start_time
                    ))
                    .color(theme.text_primary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let leave = egui::Button::new(
                        RichText::new("Leave Feedback").color(egui::Color32::WHITE),
                    )
                    .fill(theme.accent);
                    if ui.add(leave).clicked() {
                        state.feedback_form = Some(FeedbackFormState::new(
                            booking.id.clone(),
                            booking.mentor_id.clone(),
                            booking.mentor_name.clone(),
                        ));
                    }
                });
            });
        }
    });
    ui.add_space(12.0);
}
