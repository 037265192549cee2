//! Bookings tab of the mentor dashboard: pending requests with
//! accept/suggest/decline actions, and the confirmed sessions list.

use egui::{RichText, Ui, Vec2};

use crate::models::booking::{Booking, BookingStatus};
use crate::services::booking::BookingService;
use crate::services::store::DataStore;
use crate::ui_egui::theme::AppTheme;
use crate::ui_egui::views::widgets::{
    avatar_circle, badge, card_frame, empty_state, inset_frame, section_heading,
};
use crate::ui_egui::ToastManager;
use crate::utils::date;

/// Which pending request has the "suggest new time" editor open
#[derive(Default)]
pub struct BookingPanelState {
    pub responding_to: Option<String>,
    pub response_message: String,
}

enum RequestAction {
    Accept(String),
    Decline(String),
    Suggest(String, String),
}

pub fn render_booking_management(
    ui: &mut Ui,
    state: &mut BookingPanelState,
    store: &mut DataStore,
    toasts: &mut ToastManager,
    theme: &AppTheme,
) {
    let mentor_id = store.current_mentor().id.clone();
    let pending: Vec<Booking> = store
        .bookings_for_mentor(&mentor_id)
        .into_iter()
        .filter(|b| b.status == BookingStatus::Pending)
        .cloned()
        .collect();
    let confirmed: Vec<Booking> = store
        .confirmed_bookings_for_mentor(&mentor_id)
        .into_iter()
        .cloned()
        .collect();

    let mut action: Option<RequestAction> = None;

    if !pending.is_empty() {
        card_frame(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            section_heading(
                ui,
                &format!("🕐 Pending Requests ({})", pending.len()),
                theme,
            );
            for booking in &pending {
                render_pending_request(ui, booking, state, &mut action, theme);
                ui.add_space(8.0);
            }
        });
        ui.add_space(12.0);
    } else {
        card_frame(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            empty_state(
                ui,
                "🕐",
                "No Pending Requests",
                "You're all caught up! New booking requests will appear here.",
                theme,
            );
        });
        ui.add_space(12.0);
    }

    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        section_heading(
            ui,
            &format!("✅ Confirmed Sessions ({})", confirmed.len()),
            theme,
        );
        if confirmed.is_empty() {
            empty_state(
                ui,
                "📅",
                "No confirmed sessions yet",
                "Accepted requests show up here",
                theme,
            );
            return;
        }
        for booking in &confirmed {
            render_confirmed_session(ui, booking, theme);
            ui.add_space(8.0);
        }
    });

    if let Some(action) = action {
        let mut service = BookingService::new(store);
        match action {
            RequestAction::Accept(id) => match service.accept(&id) {
                Ok(()) => toasts.success("Booking accepted! Student will be notified."),
                Err(err) => toasts.error(err.to_string()),
            },
            RequestAction::Decline(id) => match service.decline(&id) {
                Ok(()) => toasts.error("Booking declined"),
                Err(err) => toasts.error(err.to_string()),
            },
            RequestAction::Suggest(id, message) => match service.suggest_new_time(&id, &message) {
                Ok(()) => {
                    toasts.success("Alternative times sent to student");
                    state.responding_to = None;
                    state.response_message.clear();
                }
                Err(_) => toasts.error("Please provide alternative times"),
            },
        }
    }
}

fn render_pending_request(
    ui: &mut Ui,
    booking: &Booking,
    state: &mut BookingPanelState,
    action: &mut Option<RequestAction>,
    theme: &AppTheme,
) {
    inset_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            let initials: String = booking
                .student_name
                .split_whitespace()
                .filter_map(|word| word.chars().next())
                .take(2)
                .collect();
            avatar_circle(ui, &initials, 36.0, theme);
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(&booking.student_name)
                        .strong()
                        .color(theme.text_primary),
                );
                ui.label(
                    RichText::new(format!(
                        "📅 {}   🕐 {} - {}",
                        date::long_date(booking.date),
                        booking.start_time,
                        booking.end_time
                    ))
                    .size(12.0)
                    .color(theme.text_secondary),
                );
                if let Some(subject) = &booking.subject {
                    badge(ui, subject, theme.text_secondary, theme.inset_background);
                }
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                badge(ui, "Pending", theme.warning, theme.warning_soft);
            });
        });

        if let Some(notes) = &booking.session_notes {
            ui.add_space(4.0);
            ui.label(
                RichText::new("Session Notes:")
                    .size(12.0)
                    .color(theme.text_secondary),
            );
            ui.label(RichText::new(notes).size(12.0).color(theme.text_primary));
        }
        ui.add_space(6.0);

        if state.responding_to.as_deref() == Some(booking.id.as_str()) {
            ui.label(
                RichText::new("Suggest Alternative Times")
                    .size(12.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add(
                egui::TextEdit::multiline(&mut state.response_message)
                    .hint_text(
                        "E.g., I'm available on Wednesday at 2 PM or Thursday at 10 AM...",
                    )
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    state.responding_to = None;
                    state.response_message.clear();
                }
                let send = egui::Button::new(
                    RichText::new("Send Suggestion").color(egui::Color32::WHITE),
                )
                .fill(theme.accent);
                if ui.add(send).clicked() {
                    *action = Some(RequestAction::Suggest(
                        booking.id.clone(),
                        state.response_message.clone(),
                    ));
                }
            });
        } else {
            ui.horizontal(|ui| {
                let accept = egui::Button::new(
                    RichText::new("✓ Accept").color(egui::Color32::WHITE),
                )
                .fill(theme.success)
                .min_size(Vec2::new(90.0, 26.0));
                if ui.add(accept).clicked() {
                    *action = Some(RequestAction::Accept(booking.id.clone()));
                }
                if ui.button("↻ Suggest New Time").clicked() {
                    state.responding_to = Some(booking.id.clone());
                    state.response_message.clear();
                }
                if ui
                    .button(RichText::new("✗ Decline").color(theme.danger))
                    .clicked()
                {
                    *action = Some(RequestAction::Decline(booking.id.clone()));
                }
            });
        }
    });
}

fn render_confirmed_session(ui: &mut Ui, booking: &Booking, theme: &AppTheme) {
    inset_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            let initials: String = booking
                .student_name
                .split_whitespace()
                .filter_map(|word| word.chars().next())
                .take(2)
                .collect();
            avatar_circle(ui, &initials, 36.0, theme);
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(&booking.student_name)
                        .strong()
                        .color(theme.text_primary),
                );
                ui.label(
                    RichText::new(format!(
                        "📅 {}   🕐 {} - {}",
                        date::long_date(booking.date),
                        booking.start_time,
                        booking.end_time
                    ))
                    .size(12.0)
                    .color(theme.text_secondary),
                );
                if let Some(subject) = &booking.subject {
                    badge(ui, subject, theme.text_secondary, theme.inset_background);
                }
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                badge(ui, "Confirmed", theme.success, theme.success_soft);
            });
        });
    });
}
