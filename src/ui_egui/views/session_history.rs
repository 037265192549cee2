//! History tab of the mentor dashboard: aggregate stats over completed
//! sessions and the feedback timeline.

use egui::Ui;

use crate::services::feedback;
use crate::services::store::DataStore;
use crate::ui_egui::theme::AppTheme;
use crate::ui_egui::views::feedback_cards::feedback_entry;
use crate::ui_egui::views::widgets::{card_frame, empty_state, section_heading, stat_card};

pub fn render_session_history(ui: &mut Ui, store: &DataStore, theme: &AppTheme) {
    let mentor_id = store.current_mentor().id.clone();
    let stats = feedback::stats_for_mentor(store, &mentor_id);

    let card_width = ((ui.available_width() - 2.0 * 12.0) / 3.0).max(180.0);
    ui.horizontal(|ui| {
        stat_card(
            ui,
            card_width,
            "📗",
            theme.accent,
            &stats.total_sessions.to_string(),
            "Total Sessions",
            theme,
        );
        stat_card(
            ui,
            card_width,
            "⭐",
            theme.warning,
            &format!("{} ⭐", stats.average_label()),
            "Average Rating",
            theme,
        );
        stat_card(
            ui,
            card_width,
            "📈",
            theme.success,
            &format!("{}%", stats.repeat_rate_percent),
            "Would Book Again",
            theme,
        );
    });
    ui.add_space(12.0);

    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        section_heading(ui, "Session History", theme);

        let entries: Vec<_> = store
            .feedback_for_mentor(&mentor_id)
            .into_iter()
            .cloned()
            .collect();
        if entries.is_empty() {
            empty_state(
                ui,
                "📗",
                "No Sessions Yet",
                "Completed sessions will appear here",
                theme,
            );
            return;
        }
        for entry in &entries {
            feedback_entry(ui, entry, false, theme);
        }
    });
}
