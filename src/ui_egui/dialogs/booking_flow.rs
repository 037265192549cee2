//! Three-step booking wizard: pick a slot, confirm, done.
//!
//! Slots are offered only where the mentor has declared availability for
//! that weekday and no confirmed booking already covers the hour. The
//! success step auto-closes a few seconds after submission.

use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use egui::{Context, RichText, Ui, Vec2};

use crate::services::booking::{self, BookingService};
use crate::services::store::DataStore;
use crate::ui_egui::theme::AppTheme;
use crate::ui_egui::views::widgets::{avatar_circle, badge, inset_frame};
use crate::models::mentor::Mentor;
use crate::utils::date;

/// Hours offered by the wizard (one-hour sessions, 9 AM - 6 PM starts)
const BOOKING_HOURS: [u8; 10] = [9, 10, 11, 12, 13, 14, 15, 16, 17, 18];
/// Session notes are capped at this many characters
const NOTES_LIMIT: usize = 200;
const SUCCESS_AUTO_CLOSE: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BookingStep {
    Select,
    Confirm,
    Success,
}

/// Wizard state, alive while the modal is open
pub struct BookingFlowState {
    pub mentor_id: String,
    step: BookingStep,
    selected_date: Option<NaiveDate>,
    selected_hour: Option<u8>,
    session_notes: String,
    submitted_at: Option<Instant>,
}

impl BookingFlowState {
    pub fn new(mentor_id: impl Into<String>) -> Self {
        Self {
            mentor_id: mentor_id.into(),
            step: BookingStep::Select,
            selected_date: None,
            selected_hour: None,
            session_notes: String::new(),
            submitted_at: None,
        }
    }
}

/// What the wizard did this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingFlowAction {
    None,
    Close,
    /// A request was submitted; carries the new booking id
    Submitted(String),
}

pub fn render_booking_flow(
    ctx: &Context,
    state: &mut BookingFlowState,
    store: &mut DataStore,
    theme: &AppTheme,
) -> BookingFlowAction {
    let Some(mentor) = store.mentor(&state.mentor_id).cloned() else {
        return BookingFlowAction::Close;
    };
    let mut action = BookingFlowAction::None;
    let mut open = true;

    egui::Window::new("Book a Session")
        .id(egui::Id::new("booking_flow_modal"))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
        .default_width(520.0)
        .show(ctx, |ui| {
            ui.label(
                RichText::new(format!("Schedule time with {}", mentor.name))
                    .color(theme.text_secondary),
            );
            ui.add_space(6.0);
            render_progress(ui, state.step, theme);
            ui.separator();
            ui.add_space(8.0);

            match state.step {
                BookingStep::Select => {
                    render_select_step(ui, state, store, &mentor, theme);

                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            action = BookingFlowAction::Close;
                        }
                        let ready =
                            state.selected_date.is_some() && state.selected_hour.is_some();
                        let continue_button = egui::Button::new(
                            RichText::new("Continue").color(egui::Color32::WHITE),
                        )
                        .fill(theme.accent);
                        if ui.add_enabled(ready, continue_button).clicked() {
                            state.step = BookingStep::Confirm;
                        }
                    });
                }
                BookingStep::Confirm => {
                    render_confirm_step(ui, state, &mentor, theme);

                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        if ui.button("Back").clicked() {
                            state.step = BookingStep::Select;
                        }
                        let confirm = egui::Button::new(
                            RichText::new("Confirm Booking").color(egui::Color32::WHITE),
                        )
                        .fill(theme.accent);
                        if ui.add(confirm).clicked() {
                            if let (Some(chosen_date), Some(hour)) =
                                (state.selected_date, state.selected_hour)
                            {
                                let notes = if state.session_notes.trim().is_empty() {
                                    None
                                } else {
                                    Some(state.session_notes.trim().to_string())
                                };
                                let subject = mentor.expertise.first().cloned();
                                match BookingService::new(store).submit_request(
                                    &state.mentor_id,
                                    chosen_date,
                                    hour,
                                    notes,
                                    subject,
                                ) {
                                    Ok(id) => {
                                        state.step = BookingStep::Success;
                                        state.submitted_at = Some(Instant::now());
                                        action = BookingFlowAction::Submitted(id);
                                    }
                                    Err(err) => {
                                        log::error!("Failed to submit booking: {err}");
                                        action = BookingFlowAction::Close;
                                    }
                                }
                            }
                        }
                    });
                }
                BookingStep::Success => {
                    render_success_step(ui, &mentor.name, theme);
                    // Keep ticking so the auto-close fires without input
                    ctx.request_repaint_after(Duration::from_millis(250));
                    if state
                        .submitted_at
                        .is_some_and(|at| at.elapsed() >= SUCCESS_AUTO_CLOSE)
                    {
                        action = BookingFlowAction::Close;
                    }
                }
            }
        });

    if !open && action == BookingFlowAction::None {
        action = BookingFlowAction::Close;
    }
    action
}

fn render_progress(ui: &mut Ui, step: BookingStep, theme: &AppTheme) {
    let stages = [
        ("Select Time", step == BookingStep::Select),
        ("Confirm", step == BookingStep::Confirm),
        ("Done", step == BookingStep::Success),
    ];
    ui.horizontal(|ui| {
        for (index, (label, active)) in stages.iter().enumerate() {
            let color = if *active {
                theme.accent
            } else {
                theme.text_secondary
            };
            ui.label(
                RichText::new(format!("{} {label}", index + 1))
                    .size(12.0)
                    .color(color),
            );
            if index < stages.len() - 1 {
                ui.label(RichText::new("—").color(theme.border));
            }
        }
    });
}

fn render_select_step(
    ui: &mut Ui,
    state: &mut BookingFlowState,
    store: &DataStore,
    mentor: &Mentor,
    theme: &AppTheme,
) {
    inset_frame(theme).show(ui, |ui| {
        ui.horizontal(|ui| {
            avatar_circle(ui, &mentor.initials(), 36.0, theme);
            ui.vertical(|ui| {
                ui.label(RichText::new(&mentor.name).strong().color(theme.text_primary));
                ui.label(
                    RichText::new(mentor.expertise.join(", "))
                        .size(12.0)
                        .color(theme.text_secondary),
                );
            });
        });
    });
    ui.add_space(10.0);

    ui.label(RichText::new("Select Date").strong().color(theme.text_primary));
    ui.add_space(4.0);
    let today = Local::now().date_naive();
    ui.horizontal(|ui| {
        for day in date::next_seven_days(today) {
            let selected = state.selected_date == Some(day);
            let weekday = date::DAY_NAMES_SHORT[date::weekday_index(day) as usize];
            let label = format!("{weekday}\n{}", day.format("%-d"));
            let button = egui::Button::new(RichText::new(label).size(12.0))
                .min_size(Vec2::new(56.0, 44.0))
                .selected(selected);
            if ui.add(button).clicked() {
                state.selected_date = Some(day);
                state.selected_hour = None;
            }
        }
    });

    if let Some(chosen_date) = state.selected_date {
        ui.add_space(10.0);
        ui.label(
            RichText::new("Select Time (1 hour session)")
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(4.0);

        let open_slots = booking::open_slots(store, &state.mentor_id, chosen_date, &BOOKING_HOURS);
        ui.horizontal_wrapped(|ui| {
            for hour in BOOKING_HOURS {
                let available = open_slots.contains(&hour);
                let selected = state.selected_hour == Some(hour);
                let button = egui::Button::new(format!("{hour:02}:00"))
                    .min_size(Vec2::new(64.0, 28.0))
                    .selected(selected);
                if ui.add_enabled(available, button).clicked() {
                    state.selected_hour = Some(hour);
                }
            }
        });
        if open_slots.is_empty() {
            ui.label(
                RichText::new("No open slots on this day — try another date")
                    .size(12.0)
                    .color(theme.text_secondary),
            );
        }
    }

    if state.selected_hour.is_some() {
        ui.add_space(10.0);
        ui.label(
            RichText::new("Session Notes (Optional)")
                .strong()
                .color(theme.text_primary),
        );
        let edit = egui::TextEdit::multiline(&mut state.session_notes)
            .hint_text("What would you like to discuss in this session?")
            .desired_rows(3)
            .desired_width(f32::INFINITY);
        if ui.add(edit).changed() && state.session_notes.chars().count() > NOTES_LIMIT {
            state.session_notes = state.session_notes.chars().take(NOTES_LIMIT).collect();
        }
        ui.label(
            RichText::new(format!(
                "{}/{NOTES_LIMIT}",
                state.session_notes.chars().count()
            ))
            .size(11.0)
            .color(theme.text_secondary),
        );
    }
}

fn render_confirm_step(
    ui: &mut Ui,
    state: &BookingFlowState,
    mentor: &Mentor,
    theme: &AppTheme,
) {
    inset_frame(theme).show(ui, |ui| {
        ui.label(
            RichText::new("Review Your Booking")
                .strong()
                .color(theme.text_primary),
        );
        ui.label(
            RichText::new("Please confirm the details below before submitting.")
                .size(12.0)
                .color(theme.text_secondary),
        );
    });
    ui.add_space(8.0);

    ui.label(RichText::new("Mentor").size(12.0).color(theme.text_secondary));
    ui.horizontal(|ui| {
        avatar_circle(ui, &mentor.initials(), 30.0, theme);
        ui.vertical(|ui| {
            ui.label(RichText::new(&mentor.name).strong().color(theme.text_primary));
            if let Some(primary) = mentor.expertise.first() {
                ui.label(RichText::new(primary).size(12.0).color(theme.text_secondary));
            }
        });
    });

    ui.add_space(8.0);
    ui.label(
        RichText::new("Date & Time")
            .size(12.0)
            .color(theme.text_secondary),
    );
    if let (Some(chosen_date), Some(hour)) = (state.selected_date, state.selected_hour) {
        ui.label(
            RichText::new(format!("📅 {}", date::long_date(chosen_date)))
                .color(theme.text_primary),
        );
        ui.label(
            RichText::new(format!("🕐 {hour:02}:00 - {:02}:00 (1 hour)", hour + 1))
                .color(theme.text_primary),
        );
    }

    if !state.session_notes.trim().is_empty() {
        ui.add_space(8.0);
        ui.label(
            RichText::new("Session Notes")
                .size(12.0)
                .color(theme.text_secondary),
        );
        ui.label(RichText::new(state.session_notes.trim()).color(theme.text_primary));
    }

    ui.add_space(8.0);
    egui::Frame::none()
        .fill(theme.warning_soft)
        .rounding(6.0)
        .inner_margin(egui::Margin::same(8.0))
        .show(ui, |ui| {
            ui.label(
                RichText::new(
                    "Note: you'll receive a confirmation with a meeting link once the \
                     mentor accepts your booking request.",
                )
                .size(11.0)
                .color(theme.text_primary),
            );
        });
}

fn render_success_step(ui: &mut Ui, mentor_name: &str, theme: &AppTheme) {
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.label(RichText::new("✅").size(40.0));
        ui.label(
            RichText::new("Booking Submitted!")
                .size(20.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.label(
            RichText::new(format!(
                "Your booking request has been sent to {mentor_name}. \
                 You'll be notified once they accept."
            ))
            .color(theme.text_secondary),
        );
        ui.add_space(8.0);
        badge(ui, "⏳ Pending Confirmation", theme.warning, theme.warning_soft);
        ui.add_space(16.0);
    });
}
