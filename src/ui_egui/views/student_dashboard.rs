//! Student portal: header, quick actions, upcoming sessions and the
//! mentor discovery grid with its profile/booking/feedback modals.

use egui::{Context, RichText, Ui, Vec2};

use crate::models::booking::BookingStatus;
use crate::models::mentor::Mentor;
use crate::services::store::DataStore;
use crate::ui_egui::dialogs::booking_flow::{
    render_booking_flow, BookingFlowAction, BookingFlowState,
};
use crate::ui_egui::dialogs::feedback_form::{
    render_feedback_form, FeedbackAction, FeedbackFormState,
};
use crate::ui_egui::dialogs::mentor_profile::{render_mentor_profile, ProfileAction};
use crate::ui_egui::theme::AppTheme;
use crate::ui_egui::views::widgets::{
    avatar_circle, badge, card_frame, empty_state, section_heading,
};
use crate::ui_egui::ToastManager;
use crate::utils::date;

/// Which full-window screen the student portal shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentScreen {
    #[default]
    Dashboard,
    History,
}

/// UI state for the student portal
#[derive(Default)]
pub struct StudentState {
    pub screen: StudentScreen,
    pub search_query: String,
    pub profile_mentor: Option<String>,
    pub booking_flow: Option<BookingFlowState>,
    pub feedback_form: Option<FeedbackFormState>,
}

pub fn render_student_dashboard(
    ctx: &Context,
    ui: &mut Ui,
    state: &mut StudentState,
    store: &mut DataStore,
    toasts: &mut ToastManager,
    theme: &AppTheme,
) {
    render_header(ui, store, theme);
    ui.add_space(12.0);

    let student = store.current_student().clone();
    ui.label(
        RichText::new(format!("Welcome back, {}! 👋", student.first_name()))
            .size(24.0)
            .strong()
            .color(theme.text_primary),
    );
    ui.label(
        RichText::new("Ready to learn something new today?").color(theme.text_secondary),
    );
    ui.add_space(12.0);

    render_quick_actions(ui, state, store, theme);
    ui.add_space(16.0);
    render_upcoming_sessions(ui, store, toasts, theme);
    ui.add_space(16.0);
    render_discovery(ui, state, store, theme);

    render_modals(ctx, state, store, toasts, theme);
}

fn render_header(ui: &mut Ui, store: &DataStore, theme: &AppTheme) {
    let student = store.current_student();
    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new("📖").size(22.0));
            ui.vertical(|ui| {
                ui.label(
                    RichText::new("MentorConnect")
                        .size(16.0)
                        .strong()
                        .color(theme.text_primary),
                );
                ui.label(
                    RichText::new("Student Portal")
                        .size(11.0)
                        .color(theme.text_secondary),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                avatar_circle(ui, &student.initials(), 30.0, theme);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&student.name)
                            .size(12.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.label(RichText::new("Student").size(11.0).color(theme.text_secondary));
                });
            });
        });
    });
}

fn render_quick_actions(
    ui: &mut Ui,
    state: &mut StudentState,
    store: &DataStore,
    theme: &AppTheme,
) {
    let completed = store
        .feedback_for_student(&store.current_student().id)
        .len();
    let card_width = ((ui.available_width() - 3.0 * 12.0) / 4.0).max(160.0);

    ui.horizontal(|ui| {
        card_frame(theme).show(ui, |ui| {
            ui.set_width(card_width);
            ui.horizontal(|ui| {
                ui.label(RichText::new("📅").size(20.0).color(theme.accent));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    badge(ui, "Primary", theme.accent, theme.accent_soft);
                });
            });
            ui.add_space(6.0);
            ui.label(
                RichText::new("Book Mentor Session")
                    .strong()
                    .color(theme.text_primary),
            );
            ui.label(
                RichText::new("Find and schedule time with expert mentors")
                    .size(12.0)
                    .color(theme.text_secondary),
            );
        });

        let history = card_frame(theme)
            .show(ui, |ui| {
                ui.set_width(card_width);
                ui.label(RichText::new("⭐").size(20.0).color(theme.warning));
                ui.add_space(6.0);
                ui.label(
                    RichText::new("Feedback History")
                        .strong()
                        .color(theme.text_primary),
                );
                ui.label(
                    RichText::new(format!("{completed} sessions completed"))
                        .size(12.0)
                        .color(theme.text_secondary),
                );
            })
            .response;
        if history.interact(egui::Sense::click()).clicked() {
            state.screen = StudentScreen::History;
        }

        card_frame(theme).show(ui, |ui| {
            ui.set_width(card_width);
            ui.label(RichText::new("📗").size(20.0).color(theme.success));
            ui.add_space(6.0);
            ui.label(RichText::new("Session Notes").strong().color(theme.text_primary));
            ui.label(
                RichText::new("Review your learning materials")
                    .size(12.0)
                    .color(theme.text_secondary),
            );
        });

        card_frame(theme).show(ui, |ui| {
            ui.set_width(card_width);
            ui.label(RichText::new("📈").size(20.0).color(theme.accent));
            ui.add_space(6.0);
            ui.label(RichText::new("Progress").strong().color(theme.text_primary));
            ui.label(
                RichText::new("Track your learning journey")
                    .size(12.0)
                    .color(theme.text_secondary),
            );
        });
    });
}

fn render_upcoming_sessions(
    ui: &mut Ui,
    store: &DataStore,
    toasts: &mut ToastManager,
    theme: &AppTheme,
) {
    let student_id = store.current_student().id.clone();
    let upcoming: Vec<_> = store
        .bookings_for_student(&student_id)
        .into_iter()
        .filter(|b| b.is_upcoming())
        .cloned()
        .collect();
    if upcoming.is_empty() {
        return;
    }

    section_heading(ui, "Upcoming Sessions", theme);
    for booking in upcoming {
        card_frame(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let initials: String = booking
                    .mentor_name
                    .split_whitespace()
                    .filter_map(|word| word.chars().next())
                    .take(2)
                    .collect();
                avatar_circle(ui, &initials, 36.0, theme);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&booking.mentor_name)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.label(
                        RichText::new(format!(
                            "📅 {}   🕐 {} - {}",
                            date::short_date(booking.date),
                            booking.start_time,
                            booking.end_time
                        ))
                        .size(12.0)
                        .color(theme.text_secondary),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Join Meeting").clicked() {
                        toasts.info("Meeting links arrive once the session is confirmed");
                    }
                    match booking.status {
                        BookingStatus::Confirmed => {
                            badge(ui, "✓ Confirmed", theme.success, theme.success_soft)
                        }
                        BookingStatus::Rescheduled => {
                            badge(ui, "↻ New time suggested", theme.warning, theme.warning_soft)
                        }
                        _ => badge(ui, "⏳ Pending", theme.warning, theme.warning_soft),
                    }
                });
            });
        });
        ui.add_space(8.0);
    }
}

fn render_discovery(ui: &mut Ui, state: &mut StudentState, store: &DataStore, theme: &AppTheme) {
    section_heading(ui, "Discover Mentors", theme);

    ui.add(
        egui::TextEdit::singleline(&mut state.search_query)
            .hint_text("🔍 Search by name, subject, or expertise...")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(10.0);

    let matches: Vec<Mentor> = store
        .mentors()
        .iter()
        .filter(|m| m.matches_query(&state.search_query))
        .cloned()
        .collect();

    if matches.is_empty() {
        empty_state(
            ui,
            "🔍",
            "No mentors found",
            "Try a different search term",
            theme,
        );
        return;
    }

    let card_width = ((ui.available_width() - 2.0 * 12.0) / 3.0).max(220.0);
    ui.horizontal_wrapped(|ui| {
        for mentor in &matches {
            render_mentor_card(ui, mentor, card_width, state, theme);
        }
    });
}

fn render_mentor_card(
    ui: &mut Ui,
    mentor: &Mentor,
    width: f32,
    state: &mut StudentState,
    theme: &AppTheme,
) {
    card_frame(theme).show(ui, |ui| {
        ui.set_width(width);
        ui.horizontal(|ui| {
            avatar_circle(ui, &mentor.initials(), 44.0, theme);
            ui.vertical(|ui| {
                ui.label(RichText::new(&mentor.name).strong().color(theme.text_primary));
                ui.label(
                    RichText::new(format!("★ {} ({})", mentor.rating, mentor.total_reviews))
                        .size(12.0)
                        .color(theme.text_secondary),
                );
            });
        });
        ui.add_space(6.0);

        ui.horizontal_wrapped(|ui| {
            for skill in mentor.expertise.iter().take(3) {
                badge(ui, skill, theme.accent, theme.accent_soft);
            }
        });
        ui.add_space(6.0);

        ui.label(
            RichText::new(&mentor.bio)
                .size(12.0)
                .color(theme.text_secondary),
        );
        ui.add_space(6.0);
        ui.label(
            RichText::new("● Available this week")
                .size(11.0)
                .color(theme.success),
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui
                .add(egui::Button::new("View Profile").min_size(Vec2::new(width / 2.0 - 8.0, 26.0)))
                .clicked()
            {
                state.profile_mentor = Some(mentor.id.clone());
            }
            let book = egui::Button::new(
                RichText::new("Book Session").color(egui::Color32::WHITE),
            )
            .fill(theme.accent)
            .min_size(Vec2::new(width / 2.0 - 8.0, 26.0));
            if ui.add(book).clicked() {
                state.booking_flow = Some(BookingFlowState::new(mentor.id.clone()));
            }
        });
    });
}

/// Layer the profile/booking/feedback modals over the dashboard
pub fn render_modals(
    ctx: &Context,
    state: &mut StudentState,
    store: &mut DataStore,
    toasts: &mut ToastManager,
    theme: &AppTheme,
) {
    if let Some(mentor_id) = state.profile_mentor.clone() {
        if let Some(mentor) = store.mentor(&mentor_id).cloned() {
            match render_mentor_profile(ctx, &mentor, theme) {
                ProfileAction::Close => state.profile_mentor = None,
                ProfileAction::Book => {
                    state.profile_mentor = None;
                    state.booking_flow = Some(BookingFlowState::new(mentor_id));
                }
                ProfileAction::None => {}
            }
        } else {
            state.profile_mentor = None;
        }
    }

    if let Some(flow) = state.booking_flow.as_mut() {
        match render_booking_flow(ctx, flow, store, theme) {
            BookingFlowAction::Close => state.booking_flow = None,
            BookingFlowAction::Submitted(_) => {
                toasts.success("Booking request submitted!");
            }
            BookingFlowAction::None => {}
        }
    }

    if let Some(form) = state.feedback_form.as_mut() {
        match render_feedback_form(ctx, form, store, theme) {
            FeedbackAction::Close => state.feedback_form = None,
            FeedbackAction::Submitted => {
                state.feedback_form = None;
                toasts.success("Thanks for your feedback!");
            }
            FeedbackAction::None => {}
        }
    }
}
