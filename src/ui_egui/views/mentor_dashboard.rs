//! Mentor portal: header, stat cards and the four dashboard tabs
//! (availability grid, booking management, session history, feedback).

use egui::{RichText, Ui};

use crate::models::booking::BookingStatus;
use crate::services::feedback;
use crate::services::store::DataStore;
use crate::ui_egui::grid::AvailabilityGrid;
use crate::ui_egui::theme::AppTheme;
use crate::ui_egui::views::availability_grid::render_availability_tab;
use crate::ui_egui::views::booking_management::{render_booking_management, BookingPanelState};
use crate::ui_egui::views::feedback_cards::feedback_entry;
use crate::ui_egui::views::session_history::render_session_history;
use crate::ui_egui::views::widgets::{
    avatar_circle, card_frame, empty_state, section_heading, stat_card,
};
use crate::ui_egui::ToastManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MentorTab {
    #[default]
    Availability,
    Bookings,
    History,
    Feedback,
}

/// UI state for the mentor portal
pub struct MentorState {
    pub active_tab: MentorTab,
    pub grid: AvailabilityGrid,
    pub booking_panel: BookingPanelState,
}

impl MentorState {
    /// Build the portal state for the signed-in mentor, loading their
    /// saved availability into the grid editor.
    pub fn new(store: &DataStore) -> Self {
        let mentor_id = store.current_mentor().id.clone();
        let blocks = store.availability_for_mentor(&mentor_id);
        Self {
            active_tab: MentorTab::default(),
            grid: AvailabilityGrid::new(mentor_id, blocks),
            booking_panel: BookingPanelState::default(),
        }
    }
}

pub fn render_mentor_dashboard(
    ui: &mut Ui,
    state: &mut MentorState,
    store: &mut DataStore,
    toasts: &mut ToastManager,
    theme: &AppTheme,
) {
    render_header(ui, store, theme);
    ui.add_space(12.0);

    let mentor = store.current_mentor().clone();
    ui.label(
        RichText::new(format!("Welcome back, {}! 👋", mentor.last_name()))
            .size(24.0)
            .strong()
            .color(theme.text_primary),
    );
    ui.label(
        RichText::new("Manage your availability and upcoming sessions")
            .color(theme.text_secondary),
    );
    ui.add_space(12.0);

    let bookings = store.bookings_for_mentor(&mentor.id);
    let upcoming = bookings
        .iter()
        .filter(|b| {
            matches!(
                b.status,
                BookingStatus::Confirmed | BookingStatus::Pending
            )
        })
        .count();
    let pending = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Pending)
        .count();
    let stats = feedback::stats_for_mentor(store, &mentor.id);

    let card_width = ((ui.available_width() - 2.0 * 12.0) / 3.0).max(180.0);
    ui.horizontal(|ui| {
        stat_card(
            ui,
            card_width,
            "📅",
            theme.accent,
            &upcoming.to_string(),
            "Upcoming Sessions",
            theme,
        );
        stat_card(
            ui,
            card_width,
            "👥",
            theme.warning,
            &pending.to_string(),
            "Pending Requests",
            theme,
        );
        stat_card(
            ui,
            card_width,
            "⭐",
            theme.success,
            &format!("{} ⭐", stats.average_label()),
            "Average Rating",
            theme,
        );
    });
    ui.add_space(12.0);

    render_tab_bar(ui, state, pending, theme);
    ui.add_space(12.0);

    match state.active_tab {
        MentorTab::Availability => {
            render_availability_tab(ui, store, &mut state.grid, toasts, theme)
        }
        MentorTab::Bookings => {
            render_booking_management(ui, &mut state.booking_panel, store, toasts, theme)
        }
        MentorTab::History => render_session_history(ui, store, theme),
        MentorTab::Feedback => render_feedback_tab(ui, store, theme),
    }
}

fn render_header(ui: &mut Ui, store: &DataStore, theme: &AppTheme) {
    let mentor = store.current_mentor();
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
                    RichText::new("Mentor Portal")
                        .size(11.0)
                        .color(theme.text_secondary),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                avatar_circle(ui, &mentor.initials(), 30.0, theme);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&mentor.name)
                            .size(12.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.label(RichText::new("Mentor").size(11.0).color(theme.text_secondary));
                });
            });
        });
    });
}

fn render_tab_bar(ui: &mut Ui, state: &mut MentorState, pending: usize, theme: &AppTheme) {
    card_frame(theme).show(ui, |ui| {
        ui.horizontal(|ui| {
            let tab =
                |ui: &mut Ui, label: String, value: MentorTab, state: &mut MentorState| {
                    let selected = state.active_tab == value;
                    if ui.selectable_label(selected, label).clicked() {
                        state.active_tab = value;
                    }
                };
            tab(ui, "📅 Availability".to_string(), MentorTab::Availability, state);
            let bookings_label = if pending > 0 {
                format!("👥 Bookings ({pending})")
            } else {
                "👥 Bookings".to_string()
            };
            tab(ui, bookings_label, MentorTab::Bookings, state);
            tab(ui, "🕐 History".to_string(), MentorTab::History, state);
            tab(ui, "⭐ Feedback".to_string(), MentorTab::Feedback, state);
        });
    });
}

fn render_feedback_tab(ui: &mut Ui, store: &DataStore, theme: &AppTheme) {
    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        section_heading(ui, "Student Feedback", theme);

        let mentor_id = store.current_mentor().id.clone();
        let entries: Vec<_> = store
            .feedback_for_mentor(&mentor_id)
            .into_iter()
            .cloned()
            .collect();
        if entries.is_empty() {
            empty_state(ui, "⭐", "No feedback yet", "", theme);
            return;
        }
        for entry in &entries {
            feedback_entry(ui, entry, false, theme);
        }
    });
}
