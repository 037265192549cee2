//! Session feedback modal.

use chrono::Local;
use egui::{Context, RichText, Ui, Vec2};

use crate::services::feedback::FeedbackService;
use crate::services::store::DataStore;
use crate::ui_egui::theme::AppTheme;

/// Form state for the feedback modal
pub struct FeedbackFormState {
    pub booking_id: String,
    pub mentor_id: String,
    pub mentor_name: String,
    rating: u8,
    what_worked_well: String,
    areas_for_improvement: String,
    time_management: u8,
    would_book_again: bool,
}

impl FeedbackFormState {
    pub fn new(
        booking_id: impl Into<String>,
        mentor_id: impl Into<String>,
        mentor_name: impl Into<String>,
    ) -> Self {
        Self {
            booking_id: booking_id.into(),
            mentor_id: mentor_id.into(),
            mentor_name: mentor_name.into(),
            rating: 0,
            what_worked_well: String::new(),
            areas_for_improvement: String::new(),
            time_management: 3,
            would_book_again: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackAction {
    None,
    Close,
    Submitted,
}

pub fn render_feedback_form(
    ctx: &Context,
    state: &mut FeedbackFormState,
    store: &mut DataStore,
    theme: &AppTheme,
) -> FeedbackAction {
    let mut action = FeedbackAction::None;
    let mut open = true;

    egui::Window::new("Session Feedback")
        .id(egui::Id::new("feedback_modal"))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
        .default_width(420.0)
        .show(ctx, |ui| {
            ui.label(
                RichText::new(format!("How was your session with {}?", state.mentor_name))
                    .color(theme.text_secondary),
            );
            ui.add_space(10.0);

            ui.label(RichText::new("Overall Rating").strong().color(theme.text_primary));
            star_picker(ui, &mut state.rating, theme);
            ui.add_space(8.0);

            ui.label(
                RichText::new("What worked well?")
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add(
                egui::TextEdit::multiline(&mut state.what_worked_well)
                    .hint_text("Share what you found most helpful...")
                    .desired_rows(2)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.label(
                RichText::new("Areas for improvement")
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add(
                egui::TextEdit::multiline(&mut state.areas_for_improvement)
                    .hint_text("Anything the mentor could do better? (optional)")
                    .desired_rows(2)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Time Management")
                        .strong()
                        .color(theme.text_primary),
                );
                ui.add(egui::Slider::new(&mut state.time_management, 1..=5).show_value(true));
            });
            ui.checkbox(&mut state.would_book_again, "I would book this mentor again");

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    action = FeedbackAction::Close;
                }
                let ready = state.rating >= 1 && !state.what_worked_well.trim().is_empty();
                let submit = egui::Button::new(
                    RichText::new("Submit Feedback").color(egui::Color32::WHITE),
                )
                .fill(theme.accent);
                if ui.add_enabled(ready, submit).clicked() {
                    let result = FeedbackService::new(store).submit(
                        &state.booking_id,
                        &state.mentor_id,
                        &state.mentor_name,
                        state.rating,
                        state.what_worked_well.trim().to_string(),
                        state.areas_for_improvement.trim().to_string(),
                        state.time_management,
                        state.would_book_again,
                        Local::now().date_naive(),
                    );
                    match result {
                        Ok(_) => action = FeedbackAction::Submitted,
                        Err(err) => log::error!("Failed to submit feedback: {err}"),
                    }
                }
            });
        });

    if !open && action == FeedbackAction::None {
        action = FeedbackAction::Close;
    }
    action
}

/// Row of five clickable stars
fn star_picker(ui: &mut Ui, rating: &mut u8, theme: &AppTheme) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        for i in 1..=5u8 {
            let filled = i <= *rating;
            let color = if filled { theme.star } else { theme.border };
            let star = egui::Button::new(RichText::new("★").size(22.0).color(color))
                .frame(false);
            if ui.add(star).clicked() {
                *rating = i;
            }
        }
        if *rating == 0 {
            ui.label(
                RichText::new("Tap a star to rate")
                    .size(11.0)
                    .color(theme.text_secondary),
            );
        }
    });
}
